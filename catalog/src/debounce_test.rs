use super::*;

#[test]
fn idle_debounce_never_fires() {
    let mut d = Debounce::default();
    assert_eq!(d.delay_ms(), 300);
    assert!(!d.is_pending());
    assert!(!d.fire(10_000));
}

#[test]
fn fires_once_after_delay() {
    let mut d = Debounce::default();
    d.touch(1_000);
    assert!(d.is_pending());
    assert!(!d.fire(1_299));
    assert!(d.fire(1_300));
    assert!(!d.is_pending());
    assert!(!d.fire(1_400));
}

#[test]
fn burst_of_changes_fires_after_the_last() {
    let mut d = Debounce::new(300);
    d.touch(0);
    d.touch(200);
    d.touch(450);
    assert!(!d.fire(600));
    assert_eq!(d.due_ms(), Some(750));
    assert!(d.fire(750));
}

#[test]
fn cancel_drops_pending_deadline() {
    let mut d = Debounce::default();
    d.touch(0);
    d.cancel();
    assert!(!d.is_pending());
    assert!(!d.fire(1_000));
}
