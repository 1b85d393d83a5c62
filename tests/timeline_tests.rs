// Host-side tests for the deferred action timeline.

use valentine_web::core::Timeline;

#[test]
fn pops_in_time_order() {
    let mut tl: Timeline<&str> = Timeline::new();
    tl.schedule(300.0, "c");
    tl.schedule(100.0, "a");
    tl.schedule(200.0, "b");

    let mut out = Vec::new();
    while let Some((_, a)) = tl.pop_due(1_000.0) {
        out.push(a);
    }
    assert_eq!(out, vec!["a", "b", "c"]);
    assert!(tl.is_empty());
}

#[test]
fn equal_times_keep_insertion_order() {
    let mut tl: Timeline<u32> = Timeline::new();
    for i in 0..10u32 {
        tl.schedule(50.0, i);
    }
    let order: Vec<u32> = std::iter::from_fn(|| tl.pop_due(50.0).map(|(_, a)| a)).collect();
    assert_eq!(order, (0..10).collect::<Vec<_>>());
}

#[test]
fn nothing_pops_before_due() {
    let mut tl: Timeline<u32> = Timeline::new();
    tl.schedule_after(1_000.0, 150.0, 7u32);
    assert_eq!(tl.next_due(), Some(1_150.0));
    assert!(tl.pop_due(1_149.9).is_none());
    assert_eq!(tl.len(), 1);
    assert_eq!(tl.pop_due(1_150.0), Some((1_150.0, 7)));
}

#[test]
fn reports_scheduled_time_not_poll_time() {
    let mut tl: Timeline<u32> = Timeline::new();
    tl.schedule(120.0, 1u32);
    let (at, _) = tl.pop_due(5_000.0).unwrap();
    assert_eq!(at, 120.0);
}
