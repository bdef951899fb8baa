use std::cell::Cell;

use trial_rail::LazyValue;

const VALUE: i32 = 13;

#[test]
fn static_supplier_caches_and_refresh_reports_unchanged() {
    let mut lazy = LazyValue::new(|| VALUE);
    assert!(lazy.is_not_evaluated());

    assert_eq!(*lazy.get(), VALUE);
    assert!(lazy.is_evaluated());
    assert_eq!(*lazy.get(), VALUE);

    assert!(!lazy.refresh());
    assert_eq!(*lazy.get(), VALUE);
}

#[test]
fn dynamic_supplier_runs_once_until_refreshed() {
    let count = Cell::new(0);
    let mut lazy = LazyValue::new(|| {
        count.set(count.get() + 1);
        count.get()
    });

    assert!(lazy.is_not_evaluated());
    assert_eq!(*lazy.get(), 1);
    assert!(lazy.is_evaluated());
    assert_eq!(*lazy.get(), 1);
    assert_eq!(count.get(), 1);

    assert!(lazy.refresh());
    assert_eq!(*lazy.get(), 2);
    assert_eq!(count.get(), 2);
}

#[test]
fn update_resets_evaluation_state() {
    let count = Cell::new(0);
    let mut lazy = LazyValue::new(|| VALUE);

    assert_eq!(*lazy.get(), VALUE);
    assert!(lazy.is_evaluated());

    lazy.update(|| {
        count.set(count.get() + 1);
        count.get()
    });
    assert!(lazy.is_not_evaluated());
    assert_eq!(lazy.cached(), None);

    assert_eq!(*lazy.get(), 1);
    assert!(lazy.is_evaluated());
    assert_eq!(*lazy.get(), 1);

    assert!(lazy.refresh());
    assert_eq!(*lazy.get(), 2);
}

#[test]
fn absent_results_are_cached_too() {
    let calls = Cell::new(0);
    let mut lazy = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        None::<String>
    });

    assert_eq!(lazy.get(), &None);
    assert_eq!(lazy.get(), &None);
    assert!(lazy.is_evaluated());
    assert_eq!(calls.get(), 1);
}

#[test]
fn refresh_before_first_read_counts_as_changed() {
    let mut lazy = LazyValue::of("fixed");
    assert!(lazy.refresh());
    assert!(lazy.is_evaluated());
    assert!(!lazy.refresh());
}

#[test]
fn cached_peeks_without_evaluating() {
    let calls = Cell::new(0);
    let mut lazy = LazyValue::new(|| {
        calls.set(calls.get() + 1);
        "value".to_string()
    });

    assert_eq!(lazy.cached(), None);
    assert_eq!(calls.get(), 0);

    lazy.get();
    assert_eq!(lazy.cached().map(String::as_str), Some("value"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn into_value_evaluates_only_when_needed() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        calls.get()
    };

    assert_eq!(LazyValue::new(supplier).into_value(), 1);

    let mut evaluated = LazyValue::new(supplier);
    evaluated.get();
    assert_eq!(evaluated.into_value(), 2);
    assert_eq!(calls.get(), 2);
}

#[test]
fn debug_shows_cache_state() {
    let mut lazy = LazyValue::of(7);
    assert_eq!(format!("{lazy:?}"), "LazyValue(<not evaluated>)");
    lazy.get();
    assert_eq!(format!("{lazy:?}"), "LazyValue(7)");
}
