// Terminal frontend: draws the page and chart registry every frame.

use std::future::Future;
use std::io::{Stdout, stdout};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::{Stream, StreamExt};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, BarChart, Block, Chart, Dataset, GraphType, List, ListItem, Paragraph};

use crate::chart::{ChartInstance, ChartRegistry};
use crate::controller::DashboardController;
use crate::scheduler::RefreshScheduler;
use crate::snapshot_repo::SnapshotSource;
use crate::version::{NAME, VERSION};
use crate::view::{Mount, Page};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the dashboard in the terminal until `q`/`Esc`/`Ctrl-C`.
pub async fn run<S: SnapshotSource>(
    controller: &mut DashboardController<S, Page, ChartRegistry>,
    mut scheduler: RefreshScheduler,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;

    let res = event_loop(&mut terminal, controller, &mut scheduler).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

async fn event_loop<S: SnapshotSource>(
    terminal: &mut Term,
    controller: &mut DashboardController<S, Page, ChartRegistry>,
    scheduler: &mut RefreshScheduler,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    scheduler.start();
    loop {
        terminal.draw(|f| draw(f, controller.target(), controller.charts().backend()))?;

        tokio::select! {
            _ = scheduler.tick() => {
                if !finish_cycle(controller.run_cycle(), &mut events).await? {
                    break;
                }
            }
            event = events.next() => match key_action_of(event)? {
                KeyAction::Quit => break,
                KeyAction::Refresh => scheduler.request_now(),
                KeyAction::Ignore => {}
            }
        }
    }
    scheduler.stop();
    Ok(())
}

/// Drive an in-flight cycle while still reading keys, so a backend that never
/// answers cannot lock the user in. Returns `false` if the user quit first.
async fn finish_cycle<F, E>(cycle: F, events: &mut E) -> anyhow::Result<bool>
where
    F: Future,
    E: Stream<Item = std::io::Result<Event>> + Unpin,
{
    tokio::pin!(cycle);
    loop {
        tokio::select! {
            _ = &mut cycle => return Ok(true),
            event = events.next() => {
                // A refresh request while one is running is dropped.
                if key_action_of(event)? == KeyAction::Quit {
                    return Ok(false);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Quit,
    Refresh,
    Ignore,
}

fn key_action_of(event: Option<std::io::Result<Event>>) -> anyhow::Result<KeyAction> {
    match event {
        Some(Ok(Event::Key(key))) => Ok(key_action(&key)),
        Some(Ok(_)) => Ok(KeyAction::Ignore),
        Some(Err(e)) => Err(e.into()),
        None => Ok(KeyAction::Quit),
    }
}

fn key_action(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('r') => KeyAction::Refresh,
        _ => KeyAction::Ignore,
    }
}

/// Lay out the whole dashboard from retained state.
pub fn draw(f: &mut Frame, page: &Page, charts: &ChartRegistry) {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(12),
        Constraint::Length(3),
    ])
    .split(f.area());

    draw_header(f, rows[0], page);
    draw_stats(f, rows[1], page);

    let grids = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[2]);
    draw_grid(f, grids[0], " Cameras ", page, Mount::CameraGrid);
    draw_grid(f, grids[1], " Zones ", page, Mount::ZoneGrid);

    let chart_cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[3]);
    draw_bar_chart(f, chart_cols[0], charts.live_on(Mount::HourlyChart).first().copied());
    draw_line_chart(f, chart_cols[1], charts.live_on(Mount::RealtimeChart).first().copied());

    draw_footer(f, rows[4], page);
}

fn draw_header(f: &mut Frame, area: Rect, page: &Page) {
    let online = page
        .attr(Mount::ConnectionIndicator, "class")
        .is_some_and(|c| c.ends_with("online"));
    let status = page.text(Mount::ConnectionText).filter(|s| !s.is_empty()).unwrap_or("Connecting");
    let color = if online { Color::Green } else { Color::Red };
    let line = Line::from(vec![
        Span::styled(format!("{} v{}", NAME, VERSION), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("●", Style::default().fg(color)),
        Span::raw(format!(" {}", status)),
    ]);
    f.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}

fn draw_stats(f: &mut Frame, area: Rect, page: &Page) {
    let tiles = [
        ("Occupancy", Mount::CurrentOccupancy),
        ("Today", Mount::TodayFootfall),
        ("Peak", Mount::PeakCount),
        ("Peak at", Mount::PeakTime),
        ("Cameras", Mount::ActiveCameras),
    ];
    let cols = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);
    for ((title, mount), col) in tiles.iter().zip(cols.iter()) {
        let value = page.text(*mount).filter(|s| !s.is_empty()).unwrap_or("-");
        let p = Paragraph::new(Span::styled(value.to_string(), Style::default().fg(Color::Cyan)))
            .block(Block::bordered().title(format!(" {} ", title)));
        f.render_widget(p, *col);
    }
}

fn draw_grid(f: &mut Frame, area: Rect, title: &str, page: &Page, mount: Mount) {
    let items: Vec<ListItem> = page
        .children(mount)
        .iter()
        .map(|card| {
            let mut lines = vec![Line::from(Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(image) = &card.image {
                lines.push(Line::from(Span::styled(
                    format!("  {}", image),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.extend(card.lines.iter().map(|l| Line::from(format!("  {}", l))));
            ListItem::new(lines)
        })
        .collect();
    f.render_widget(List::new(items).block(Block::bordered().title(title.to_string())), area);
}

fn draw_bar_chart(f: &mut Frame, area: Rect, chart: Option<&ChartInstance>) {
    let block = Block::bordered().title(" Hourly footfall ");
    let Some(chart) = chart else {
        f.render_widget(Paragraph::new("no data").block(block), area);
        return;
    };
    let data: Vec<(&str, u64)> = chart
        .labels
        .iter()
        .zip(chart.values.iter())
        .map(|(l, v)| (l.as_str(), v.max(0.0).round() as u64))
        .collect();
    let bars = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));
    f.render_widget(bars, area);
}

fn draw_line_chart(f: &mut Frame, area: Rect, chart: Option<&ChartInstance>) {
    let block = Block::bordered().title(" Occupancy (live) ");
    let Some(chart) = chart.filter(|c| !c.values.is_empty()) else {
        f.render_widget(Paragraph::new("waiting for data").block(block), area);
        return;
    };
    let points: Vec<(f64, f64)> = chart
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();
    let y_max = chart.values.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
    let first = chart.labels.first().cloned().unwrap_or_default();
    let last = chart.labels.last().cloned().unwrap_or_default();

    let dataset = Dataset::default()
        .name(chart.series.clone())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Yellow))
        .data(&points);
    let widget = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(vec![Span::from(first), Span::from(last)]),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::from("0"),
                    Span::from(format!("{:.0}", y_max / 2.0)),
                    Span::from(format!("{:.0}", y_max)),
                ]),
        );
    f.render_widget(widget, area);
}

fn draw_footer(f: &mut Frame, area: Rect, page: &Page) {
    let heatmap = page.attr(Mount::Heatmap, "src").unwrap_or("-");
    let updated = page.text(Mount::LastUpdated).unwrap_or("");
    let line = Line::from(vec![
        Span::raw(format!("Heatmap: {}  ", heatmap)),
        Span::styled(updated.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled("   [r] refresh  [q] quit", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}
