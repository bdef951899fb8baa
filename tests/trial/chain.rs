use std::cell::{Cell, RefCell};

use trial_rail::trial::{fail_trial, NoArgTrial, TrialFailed};

#[test]
fn first_success_short_circuits_later_attempts() {
    let log = RefCell::new(Vec::new());

    let chain: NoArgTrial<'_, &str, TrialFailed> = NoArgTrial::first_try_with(
        || {
            log.borrow_mut().push("attempt 0");
            Ok("zero")
        },
        |_| log.borrow_mut().push("handler 0"),
    )
    .or_else_try_with(
        || {
            log.borrow_mut().push("attempt 1");
            Ok("one")
        },
        |_| log.borrow_mut().push("handler 1"),
    );

    assert_eq!(chain.run(), Some("zero"));
    assert_eq!(log.borrow().as_slice(), ["attempt 0"]);
}

#[test]
fn attempts_and_handlers_run_in_registration_order() {
    let log = RefCell::new(Vec::new());

    let chain: NoArgTrial<'_, u8, TrialFailed> = NoArgTrial::first_try_with(
        || {
            log.borrow_mut().push("attempt 0".to_string());
            fail_trial("first")
        },
        |e: &TrialFailed| log.borrow_mut().push(format!("handler 0: {}", e.message())),
    )
    .or_else_try_with(
        || {
            log.borrow_mut().push("attempt 1".to_string());
            fail_trial("second")
        },
        |e: &TrialFailed| log.borrow_mut().push(format!("handler 1: {}", e.message())),
    )
    .or_else_try_with(
        || {
            log.borrow_mut().push("attempt 2".to_string());
            Ok(3)
        },
        |_| log.borrow_mut().push("handler 2".to_string()),
    );

    assert_eq!(chain.run(), Some(3));
    assert_eq!(
        log.borrow().as_slice(),
        [
            "attempt 0",
            "handler 0: first",
            "attempt 1",
            "handler 1: second",
            "attempt 2",
        ]
    );
}

#[test]
fn not_applicable_then_ok_invokes_only_first_handler() {
    let first_handled = Cell::new(0);
    let second_handled = Cell::new(0);

    let chain: NoArgTrial<'_, &str, TrialFailed> = NoArgTrial::first_try_with(
        || fail_trial("not applicable"),
        |e: &TrialFailed| {
            assert_eq!(e.message(), "not applicable");
            first_handled.set(first_handled.get() + 1);
        },
    )
    .or_else_try_with(|| Ok("ok"), |_| second_handled.set(second_handled.get() + 1));

    assert_eq!(chain.run(), Some("ok"));
    assert_eq!(first_handled.get(), 1);
    assert_eq!(second_handled.get(), 0);
}

#[test]
fn exhausted_chain_without_default_returns_none() {
    let chain: NoArgTrial<'_, i32, TrialFailed> =
        NoArgTrial::first_try(|| fail_trial("a")).or_else_try(|| fail_trial("b"));

    assert_eq!(chain.run(), None);
    assert!(!chain.has_default());
}

#[test]
fn default_supplier_is_evaluated_on_every_exhausted_run() {
    let supplied = Cell::new(0);

    let chain: NoArgTrial<'_, i32, TrialFailed> = NoArgTrial::first_try(|| fail_trial("a"))
        .if_all_else_fails_with(|| {
            supplied.set(supplied.get() + 1);
            supplied.get() * 10
        });

    assert_eq!(chain.run(), Some(10));
    assert_eq!(chain.run(), Some(20));
    assert_eq!(supplied.get(), 2);
}

#[test]
fn default_supplier_is_not_evaluated_on_success() {
    let supplied = Cell::new(false);

    let chain: NoArgTrial<'_, i32, TrialFailed> =
        NoArgTrial::first_try(|| Ok(1)).if_all_else_fails_with(|| {
            supplied.set(true);
            0
        });

    assert_eq!(chain.run(), Some(1));
    assert!(!supplied.get());
}

#[test]
fn last_default_wins() {
    let chain: NoArgTrial<'_, &str, TrialFailed> = NoArgTrial::first_try(|| fail_trial("a"))
        .if_all_else_fails("first")
        .if_all_else_fails_with(|| "second")
        .if_all_else_fails("third");

    assert_eq!(chain.run(), Some("third"));
}

#[test]
fn building_never_invokes_attempts() {
    let invoked = Cell::new(0);

    let chain: NoArgTrial<'_, i32, TrialFailed> = NoArgTrial::first_try(|| {
        invoked.set(invoked.get() + 1);
        fail_trial("a")
    })
    .or_else_try(|| {
        invoked.set(invoked.get() + 1);
        Ok(2)
    })
    .if_all_else_fails(0);

    assert_eq!(invoked.get(), 0);
    assert_eq!(chain.attempts(), 2);
    assert!(chain.has_default());

    assert_eq!(chain.run(), Some(2));
    assert_eq!(invoked.get(), 2);
}

#[test]
fn each_run_starts_over_from_the_first_attempt() {
    let calls = Cell::new(0);

    let chain: NoArgTrial<'_, i32, TrialFailed> = NoArgTrial::first_try(|| {
        calls.set(calls.get() + 1);
        if calls.get() % 2 == 0 {
            Ok(calls.get())
        } else {
            fail_trial("odd call")
        }
    })
    .or_else_try(|| Ok(-1));

    assert_eq!(chain.run(), Some(-1));
    assert_eq!(chain.run(), Some(2));
    assert_eq!(chain.run(), Some(-1));
    assert_eq!(calls.get(), 3);
}

#[test]
fn handler_panic_propagates_and_leaves_chain_usable() {
    let fail = Cell::new(true);

    let chain: NoArgTrial<'_, i32, TrialFailed> = NoArgTrial::first_try_with(
        || if fail.get() { fail_trial("boom") } else { Ok(1) },
        |e: &TrialFailed| panic!("handler gave up: {}", e.message()),
    )
    .if_all_else_fails(0);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| chain.run()));
    assert!(outcome.is_err());

    fail.set(false);
    assert_eq!(chain.run(), Some(1));
}

#[test]
fn boxed_dynamic_errors_accept_trial_failures() {
    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    let messages = RefCell::new(Vec::new());

    let chain: NoArgTrial<'_, i64, BoxError> = NoArgTrial::first_try_with(
        || Ok("x1".parse::<i64>()?),
        |e: &BoxError| messages.borrow_mut().push(e.to_string()),
    )
    .or_else_try_with(
        || fail_trial("no fallback source"),
        |e: &BoxError| messages.borrow_mut().push(e.to_string()),
    )
    .if_all_else_fails(-1);

    assert_eq!(chain.run(), Some(-1));
    let messages = messages.borrow();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "invalid digit found in string");
    assert_eq!(messages[1], "trial failed: no fallback source");
}

#[test]
fn debug_output_describes_shape() {
    let chain: NoArgTrial<'_, i32, TrialFailed> =
        NoArgTrial::first_try(|| Ok(1)).or_else_try(|| Ok(2));

    assert_eq!(format!("{chain:?}"), "TrialAndError { attempts: 2, has_default: false }");
}
