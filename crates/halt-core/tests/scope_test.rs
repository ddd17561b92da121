//! Tests for the thread-scoped current-cancellation registry.

use std::panic::{catch_unwind, AssertUnwindSafe};

use halt_core::{scope, Cancellation, ScopeError};

#[test]
fn current_fails_outside_any_scope() {
    let err = scope::current().unwrap_err();
    assert_eq!(err, ScopeError::NoCurrent);
    assert_eq!(
        err.to_string(),
        "No cancellation found in the current thread"
    );
    assert!(!scope::current_exists());
}

#[test]
fn using_installs_and_removes_the_cancellation() {
    let (cancellation, control) = Cancellation::signal();

    scope::using(cancellation, || {
        assert!(scope::current_exists());
        let current = scope::current().unwrap();
        assert!(!current.is_cancelled());

        control.cancel();
        // The installed value is a view over the same flag.
        assert!(scope::current().unwrap().is_cancelled());
    });

    assert!(!scope::current_exists());
    assert!(scope::current().is_err());
}

#[test]
fn nested_scopes_behave_as_a_stack() {
    let (outer, outer_control) = Cancellation::signal();
    let (inner, _inner_control) = Cancellation::signal();

    scope::using(outer, || {
        scope::using(inner, || {
            // Inner shadows outer: firing the outer control is not
            // visible through the installed inner cancellation.
            outer_control.cancel();
            assert!(!scope::current().unwrap().is_cancelled());
        });

        // Back in the outer scope the fired cancellation is current.
        assert!(scope::current().unwrap().is_cancelled());
    });

    assert!(!scope::current_exists());
}

#[test]
fn panicking_body_still_restores_the_previous_scope() {
    let (outer, _outer_control) = Cancellation::signal();
    let (inner, _inner_control) = Cancellation::signal();

    scope::using(outer, || {
        let result = catch_unwind(AssertUnwindSafe(|| {
            scope::using(inner, || {
                panic!("boom");
            })
        }));
        assert!(result.is_err());

        // The inner scope unwound; the outer value is back.
        assert!(scope::current_exists());
    });

    assert!(!scope::current_exists());
}

#[test]
fn scopes_are_thread_confined() {
    let (cancellation, _control) = Cancellation::signal();

    scope::using(cancellation, || {
        let handle = std::thread::spawn(|| scope::current_exists());
        // A fresh thread owns its own empty slot.
        assert!(!handle.join().unwrap());
        assert!(scope::current_exists());
    });
}

#[test]
fn using_returns_the_body_value() {
    let (cancellation, _control) = Cancellation::signal();
    let value = scope::using(cancellation, || 42);
    assert_eq!(value, 42);
}
