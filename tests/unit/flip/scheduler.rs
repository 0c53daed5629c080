use super::*;

fn drain(s: &mut TimerScheduler, now: u64) -> Vec<TimerKind> {
    let mut out = Vec::new();
    while let Some(t) = s.pop_due(now) {
        out.push(t.kind);
    }
    out
}

#[test]
fn fires_in_deadline_order() {
    let mut s = TimerScheduler::new();
    s.schedule(900, TimerKind::Complete);
    s.schedule(420, TimerKind::FaceSwap);
    assert_eq!(s.next_due(), Some(420));
    assert!(s.pop_due(419).is_none());
    assert_eq!(drain(&mut s, 420), vec![TimerKind::FaceSwap]);
    assert_eq!(drain(&mut s, 10_000), vec![TimerKind::Complete]);
    assert!(s.is_empty());
}

#[test]
fn equal_deadlines_keep_registration_order() {
    let mut s = TimerScheduler::new();
    s.schedule(5, TimerKind::FaceSwap);
    s.schedule(5, TimerKind::Complete);
    assert_eq!(
        drain(&mut s, 5),
        vec![TimerKind::FaceSwap, TimerKind::Complete]
    );
}

#[test]
fn cancelled_timer_never_fires() {
    let mut s = TimerScheduler::new();
    let swap = s.schedule(10, TimerKind::FaceSwap);
    s.schedule(20, TimerKind::Complete);
    s.cancel(swap);
    assert_eq!(s.pending(), 1);
    assert_eq!(s.next_due(), Some(20));
    assert_eq!(drain(&mut s, 100), vec![TimerKind::Complete]);
}

#[test]
fn cancel_after_fire_is_noop() {
    let mut s = TimerScheduler::new();
    let id = s.schedule(1, TimerKind::FaceSwap);
    assert!(s.pop_due(1).is_some());
    s.cancel(id);
    assert_eq!(s.pending(), 0);
}

#[test]
fn cancel_all_clears_queue() {
    let mut s = TimerScheduler::new();
    s.schedule(1, TimerKind::FaceSwap);
    s.schedule(2, TimerKind::Complete);
    s.cancel_all();
    assert!(s.is_empty());
    assert_eq!(s.next_due(), None);
    assert!(s.pop_due(u64::MAX).is_none());
}
