use super::*;

#[test]
fn new_value_is_settled() {
    let d = Debounced::new(5);
    assert_eq!(*d.live(), 5);
    assert_eq!(*d.settled(), 5);
}

#[test]
fn set_updates_live_only() {
    let mut d = Debounced::new(String::new());
    d.set("gra".to_owned());
    assert_eq!(d.live(), "gra");
    assert_eq!(d.settled(), "");
}

#[test]
fn only_latest_generation_settles() {
    let mut d = Debounced::new(String::new());
    let first = d.set("g".to_owned());
    let second = d.set("gr".to_owned());
    assert!(!d.settle(first));
    assert_eq!(d.settled(), "");
    assert!(d.settle(second));
    assert_eq!(d.settled(), "gr");
}

#[test]
fn settle_with_maps_value() {
    let mut d = Debounced::new(String::new());
    let generation = d.set("  granite ".to_owned());
    assert!(d.settle_with(generation, |s| s.trim().to_owned()));
    assert_eq!(d.settled(), "granite");
    assert_eq!(d.live(), "  granite ");
}

#[test]
fn settle_reports_no_change_for_equal_value() {
    let mut d = Debounced::new(1);
    let generation = d.set(1);
    assert!(!d.settle(generation));
}

#[test]
fn reset_invalidates_pending_settle() {
    let mut d = Debounced::new(None::<u8>);
    let generation = d.set(Some(3));
    d.reset(None);
    assert!(!d.settle(generation));
    assert_eq!(*d.live(), None);
    assert_eq!(*d.settled(), None);
}
