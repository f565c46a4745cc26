use crate::{MockScrollView, TotalsLog};
use scrollometer::{ContentSize, Offset, ScrollSource, TrackOptions, TravelTracker};

fn expected_totals(offsets: &[Offset]) -> (f32, f32) {
    let mut previous = Offset::ZERO;
    let mut totals = (0.0f32, 0.0f32);
    for &offset in offsets {
        totals.0 += (offset.x - previous.x).abs();
        totals.1 += (offset.y - previous.y).abs();
        previous = offset;
    }
    totals
}

#[test]
fn test_totals_match_sum_of_absolute_deltas() {
    let tracker = TravelTracker::new();
    let view = MockScrollView::new(ContentSize::new(400.0, 400.0));
    let log = TotalsLog::new();
    tracker.start_tracking(view.clone(), TrackOptions::default(), log.callback());

    let path = [
        Offset::new(12.5, 0.0),
        Offset::new(12.5, 30.0),
        Offset::new(0.0, 30.0),
        Offset::new(400.0, 400.0),
        Offset::new(200.0, 100.0),
        Offset::new(200.0, 100.0),
    ];
    view.scroll_through(&path);

    assert_eq!(log.len(), path.len());
    assert_eq!(log.last(), Some(expected_totals(&path)));
}

#[test]
fn test_one_tracker_tracks_sources_independently() {
    let tracker = TravelTracker::new();
    let left = MockScrollView::new(ContentSize::new(100.0, 100.0));
    let right = MockScrollView::new(ContentSize::new(100.0, 100.0));
    let left_log = TotalsLog::new();
    let right_log = TotalsLog::new();
    tracker.start_tracking(
        left.clone(),
        TrackOptions::default(),
        left_log.callback(),
    );
    tracker.start_tracking(
        right.clone(),
        TrackOptions::default(),
        right_log.callback(),
    );

    left.set_offset(Offset::new(10.0, 0.0));
    right.set_offset(Offset::new(0.0, 25.0));
    left.set_offset(Offset::new(30.0, 0.0));

    assert_eq!(left_log.entries(), vec![(10.0, 0.0), (30.0, 0.0)]);
    assert_eq!(right_log.entries(), vec![(0.0, 25.0)]);
}

#[test]
fn test_out_of_range_readings_leave_log_untouched() {
    let tracker = TravelTracker::new();
    let view = MockScrollView::new(ContentSize::new(50.0, 50.0));
    let log = TotalsLog::new();
    tracker.start_tracking(view.clone(), TrackOptions::default(), log.callback());

    for offset in [
        Offset::new(60.0, 0.0),
        Offset::new(0.0, 60.0),
        Offset::new(-1.0, 10.0),
        Offset::new(10.0, -1.0),
    ] {
        view.set_offset(offset);
    }

    assert!(log.is_empty());
}

#[test]
fn test_no_reports_after_tracker_drop() {
    let view = MockScrollView::new(ContentSize::new(100.0, 100.0));
    let log = TotalsLog::new();
    {
        let tracker = TravelTracker::new();
        tracker.start_tracking(view.clone(), TrackOptions::default(), log.callback());
        view.set_offset(Offset::new(10.0, 10.0));
        assert_eq!(view.subscriber_count(), 1);
    }

    assert_eq!(view.subscriber_count(), 0);
    view.set_offset(Offset::new(90.0, 90.0));
    assert_eq!(log.entries(), vec![(10.0, 10.0)]);
}

#[test]
fn test_restart_after_stop_resets_totals() {
    let tracker = TravelTracker::new();
    let view = MockScrollView::new(ContentSize::new(100.0, 100.0));
    let first = TotalsLog::new();
    tracker.start_tracking(view.clone(), TrackOptions::default(), first.callback());
    view.set_offset(Offset::new(40.0, 0.0));
    assert_eq!(first.last(), Some((40.0, 0.0)));

    assert!(tracker.stop_tracking(view.source_id()));
    assert_eq!(view.subscriber_count(), 0);

    let second = TotalsLog::new();
    tracker.start_tracking(
        view.clone(),
        TrackOptions::default(),
        second.callback(),
    );
    view.set_offset(Offset::new(50.0, 0.0));

    // Fresh accumulation state: previous is back at the origin.
    assert_eq!(second.entries(), vec![(50.0, 0.0)]);
    assert_eq!(first.entries(), vec![(40.0, 0.0)]);
}

#[test]
fn test_shrinking_content_rejects_stale_offsets() {
    let tracker = TravelTracker::new();
    let view = MockScrollView::new(ContentSize::new(200.0, 200.0));
    let log = TotalsLog::new();
    tracker.start_tracking(view.clone(), TrackOptions::default(), log.callback());

    view.set_offset(Offset::new(150.0, 0.0));
    view.set_content_size(ContentSize::new(100.0, 100.0));
    view.set_offset(Offset::new(150.0, 0.0));

    assert_eq!(log.entries(), vec![(150.0, 0.0)]);
}

#[test]
fn test_repeated_offset_reports_zero_delta() {
    let tracker = TravelTracker::new();
    let view = MockScrollView::new(ContentSize::new(100.0, 100.0));
    let log = TotalsLog::new();
    tracker.start_tracking(view.clone(), TrackOptions::default(), log.callback());

    view.set_offset(Offset::new(10.0, 10.0));
    view.set_offset(Offset::new(10.0, 10.0));

    // A repeated in-bounds offset is still an accepted reading; the totals
    // do not move but the callback fires.
    assert_eq!(log.entries(), vec![(10.0, 10.0), (10.0, 10.0)]);
}
