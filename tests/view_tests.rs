// Presenters: entity grids, stat tiles, connection indicator, heatmap reference

mod common;

use footfall::error::RenderError;
use footfall::models::{ConnectionState, Zone};
use footfall::view::{self, Card, ConnectionStatusMonitor, HeatmapRef, Mount, Page, RenderTarget};

fn zone(name: &str, count: u64) -> Zone {
    Zone {
        name: name.into(),
        count,
        dwell_time: 30.0,
    }
}

#[test]
fn test_grid_renders_one_card_per_item_in_order() {
    let mut page = Page::new();
    let zones = vec![zone("z1", 1), zone("z2", 2), zone("z3", 3)];
    view::grid::render(&mut page, Mount::ZoneGrid, &zones, view::grid::zone_card).unwrap();

    let cards = page.children(Mount::ZoneGrid);
    assert_eq!(cards.len(), 3);
    for (card, z) in cards.iter().zip(&zones) {
        assert_eq!(card, &view::grid::zone_card(z));
    }
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["z1", "z2", "z3"]);
}

#[test]
fn test_grid_with_no_items_is_empty() {
    let mut page = Page::new();
    view::grid::render(&mut page, Mount::ZoneGrid, &[zone("old", 9)], view::grid::zone_card).unwrap();
    view::grid::render(&mut page, Mount::ZoneGrid, &Vec::<Zone>::new(), view::grid::zone_card).unwrap();
    assert!(page.children(Mount::ZoneGrid).is_empty());
}

#[test]
fn test_grid_fully_replaces_previous_children() {
    let mut page = Page::new();
    let tpl = |s: &&str| Card {
        title: s.to_string(),
        ..Card::default()
    };
    view::grid::render(&mut page, Mount::CameraGrid, &["a", "b", "c"], tpl).unwrap();
    view::grid::render(&mut page, Mount::CameraGrid, &["d"], tpl).unwrap();
    let cards = page.children(Mount::CameraGrid);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "d");
}

#[test]
fn test_grid_on_missing_mount_is_render_error() {
    let mut page = Page::with_mounts([Mount::CameraGrid]);
    let err = view::grid::render(&mut page, Mount::ZoneGrid, &[zone("z", 1)], view::grid::zone_card)
        .unwrap_err();
    assert_eq!(err, RenderError::MissingMount(Mount::ZoneGrid));
}

#[test]
fn test_stats_render_writes_five_fields() {
    let snapshot = common::example_snapshot();
    let mut page = Page::new();
    view::stats::render(&mut page, &snapshot.stats).unwrap();
    assert_eq!(page.text(Mount::CurrentOccupancy), Some("12"));
    assert_eq!(page.text(Mount::TodayFootfall), Some("340"));
    assert_eq!(page.text(Mount::PeakCount), Some("50"));
    assert_eq!(page.text(Mount::PeakTime), Some("14:00"));
    assert_eq!(page.text(Mount::ActiveCameras), Some("3"));
}

#[test]
fn test_status_is_idempotent() {
    let mut page = Page::new();
    let mut monitor = ConnectionStatusMonitor::new();
    assert_eq!(monitor.state(), None);

    monitor.set_status(&mut page, true).unwrap();
    let once = page.clone();
    monitor.set_status(&mut page, true).unwrap();
    assert_eq!(page, once);
    assert_eq!(page.text(Mount::ConnectionText), Some("Online"));
    assert_eq!(page.attr(Mount::ConnectionIndicator, "class"), Some("status-dot online"));

    monitor.set_status(&mut page, false).unwrap();
    assert_eq!(monitor.state(), Some(ConnectionState::Offline));
    assert_eq!(page.text(Mount::ConnectionText), Some("Offline"));
    assert_eq!(page.attr(Mount::ConnectionIndicator, "class"), Some("status-dot offline"));
}

#[test]
fn test_status_writes_nothing_when_a_mount_is_missing() {
    let mut page = Page::with_mounts([Mount::ConnectionIndicator]);
    let mut monitor = ConnectionStatusMonitor::new();
    let before = page.clone();
    let err = monitor.set_status(&mut page, true).unwrap_err();
    assert_eq!(err, RenderError::MissingMount(Mount::ConnectionText));
    assert_eq!(page, before);
    assert_eq!(monitor.state(), None);
}

#[test]
fn test_heatmap_updates_resolve_to_distinct_urls() {
    let mut page = Page::new();
    let mut heatmap = HeatmapRef::default();
    let first = heatmap.update(&mut page, "/heatmap.png").unwrap().to_string();
    let second = heatmap.update(&mut page, "/heatmap.png").unwrap().to_string();

    assert_ne!(first, second);
    assert!(first.starts_with("/heatmap.png?t="));
    assert!(second.starts_with("/heatmap.png?t="));
    assert_eq!(page.attr(Mount::Heatmap, "src"), Some(second.as_str()));
}

#[test]
fn test_page_reports_missing_mounts() {
    let mut page = Page::with_mounts([Mount::LastUpdated]);
    assert!(page.has_mount(Mount::LastUpdated));
    assert!(!page.has_mount(Mount::Heatmap));
    assert_eq!(
        page.set_attr(Mount::Heatmap, "src", "/x.png"),
        Err(RenderError::MissingMount(Mount::Heatmap))
    );
}
