// Chart lifecycle: single live instance per mount, in-place realtime redraws

use footfall::chart::{ChartKind, ChartManager, ChartRegistry};
use footfall::error::RenderError;
use footfall::timeseries::TimeSeriesBuffer;
use footfall::view::Mount;

fn labels(ls: &[&str]) -> Vec<String> {
    ls.iter().map(|l| l.to_string()).collect()
}

#[test]
fn test_init_or_replace_twice_leaves_one_instance_bound_to_second_call() {
    let mut charts = ChartManager::new(ChartRegistry::new());
    charts
        .init_or_replace(&labels(&["08:00", "09:00"]), &[5.0, 8.0])
        .unwrap();
    charts
        .init_or_replace(&labels(&["09:00", "10:00", "11:00"]), &[8.0, 12.0, 3.0])
        .unwrap();

    let registry = charts.backend();
    let live = registry.live_on(Mount::HourlyChart);
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].kind, ChartKind::Bar);
    assert_eq!(live[0].labels, labels(&["09:00", "10:00", "11:00"]));
    assert_eq!(live[0].values, vec![8.0, 12.0, 3.0]);
    assert_eq!(registry.created_total(), 2);
    assert_eq!(registry.disposed_total(), 1);
}

#[test]
fn test_same_categories_update_in_place() {
    let mut charts = ChartManager::new(ChartRegistry::new());
    let ls = labels(&["09:00", "10:00"]);
    charts.init_or_replace(&ls, &[1.0, 2.0]).unwrap();
    let first = charts.hourly_handle();
    charts.init_or_replace(&ls, &[3.0, 4.0]).unwrap();

    assert_eq!(charts.hourly_handle(), first);
    let registry = charts.backend();
    assert_eq!(registry.created_total(), 1);
    let chart = registry.get(first.unwrap()).unwrap();
    assert_eq!(chart.values, vec![3.0, 4.0]);
    assert_eq!(chart.revision, 1);
}

#[test]
fn test_many_cycles_never_accumulate_instances() {
    let mut charts = ChartManager::new(ChartRegistry::new());
    for hour in 0..30 {
        let ls = vec![format!("{hour:02}:00"), format!("{:02}:00", hour + 1)];
        charts.init_or_replace(&ls, &[1.0, 2.0]).unwrap();
        assert_eq!(charts.backend().live_on(Mount::HourlyChart).len(), 1);
    }
}

#[test]
fn test_realtime_chart_is_created_once_and_redrawn_in_place() {
    let mut buf = TimeSeriesBuffer::new(20);
    let mut charts = ChartManager::new(ChartRegistry::new());
    charts.init_realtime(&buf).unwrap();
    charts.init_realtime(&buf).unwrap();
    let handle = charts.realtime_handle().unwrap();

    for i in 0..25 {
        buf.append(format!("t{i}"), i as f64);
        charts.redraw_realtime(&buf).unwrap();
    }

    let registry = charts.backend();
    assert_eq!(registry.created_total(), 1);
    assert_eq!(charts.realtime_handle(), Some(handle));
    let chart = registry.get(handle).unwrap();
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.revision, 25);
    assert_eq!(chart.values.len(), 20);
    assert_eq!(chart.labels.first().map(String::as_str), Some("t5"));
}

#[test]
fn test_missing_hourly_mount_disables_only_that_chart() {
    let buf = TimeSeriesBuffer::new(20);
    let mut charts = ChartManager::new(ChartRegistry::with_mounts([Mount::RealtimeChart]));
    charts.init_realtime(&buf).unwrap();

    let err = charts
        .init_or_replace(&labels(&["09:00"]), &[1.0])
        .unwrap_err();
    assert_eq!(err, RenderError::MissingMount(Mount::HourlyChart));
    // Later cycles are quiet no-ops.
    charts.init_or_replace(&labels(&["10:00"]), &[2.0]).unwrap();
    assert!(charts.hourly_handle().is_none());

    assert!(charts.realtime_handle().is_some());
    assert_eq!(charts.backend().live_count(), 1);
}

#[test]
fn test_missing_realtime_mount_makes_redraw_a_no_op() {
    let mut buf = TimeSeriesBuffer::new(20);
    let mut charts = ChartManager::new(ChartRegistry::with_mounts([Mount::HourlyChart]));
    assert!(charts.init_realtime(&buf).is_err());
    buf.append("t0", 1.0);
    charts.redraw_realtime(&buf).unwrap();
    charts.init_or_replace(&labels(&["09:00"]), &[1.0]).unwrap();
    assert_eq!(charts.backend().live_count(), 1);
}
