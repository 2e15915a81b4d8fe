use wgsl_dump::occurrence::fixture_extension;
use wgsl_dump::OccurrenceTracker;

#[test]
fn counts_start_at_zero_and_increase() {
    let mut tracker = OccurrenceTracker::new();
    let name = "webgpu:shader,execution,expression:call,builtin:abs:f32";
    assert_eq!(tracker.current(name), 0);
    let mut last = 0;
    for _ in 0..5 {
        let next = tracker.bump(name);
        assert!(next > last);
        assert_eq!(tracker.current(name), next);
        last = next;
    }
    assert_eq!(last, 5);
}

#[test]
fn names_are_counted_independently() {
    let mut tracker = OccurrenceTracker::new();
    tracker.bump("a");
    tracker.bump("a");
    tracker.bump("b");
    assert_eq!(tracker.current("a"), 2);
    assert_eq!(tracker.current("b"), 1);
    assert_eq!(tracker.current("c"), 0);
}

#[test]
fn extension_suffix_follows_occurrence() {
    assert_eq!(fixture_extension(0), ".in.json");
    assert_eq!(fixture_extension(1), ".in.json");
    assert_eq!(fixture_extension(2), ".in2.json");
    assert_eq!(fixture_extension(13), ".in13.json");

    let mut tracker = OccurrenceTracker::new();
    tracker.bump("t");
    assert_eq!(tracker.fixture_extension("t"), ".in.json");
    tracker.bump("t");
    assert_eq!(tracker.fixture_extension("t"), ".in2.json");
}
