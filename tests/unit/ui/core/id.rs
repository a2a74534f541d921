use super::*;

#[test]
fn next_ids_are_unique_and_increasing() {
    let a = WidgetId::next();
    let b = WidgetId::next();
    assert_ne!(a, b);
    assert!(b.get() > a.get());
}

#[test]
fn raw_round_trips() {
    assert_eq!(WidgetId::raw(42).get(), 42);
}
