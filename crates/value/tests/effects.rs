use std::cell::Cell;

use value::Value;

#[test]
fn if_absent_runs_only_when_absent() {
    let mut ran = false;
    Value::<&str>::absent().if_absent(|| ran = true);
    assert!(ran);

    let mut ran = false;
    Value::present("HELLO").if_absent(|| ran = true);
    assert!(!ran);
}

#[test]
fn if_present_consumes_only_when_present() {
    let mut seen = None;
    Value::present("HELLO").if_present(|v| seen = Some(v));
    assert_eq!(seen, Some("HELLO"));

    let mut seen: Option<&str> = None;
    Value::absent().if_present(|v| seen = Some(v));
    assert_eq!(seen, None);
}

#[test]
fn if_present_or_else_runs_exactly_one_branch() {
    let outcome = Cell::new("");
    Value::present("HELLO").if_present_or_else(|_| outcome.set("consumed"), || outcome.set("ran"));
    assert_eq!(outcome.get(), "consumed");

    outcome.set("");
    Value::<&str>::absent().if_present_or_else(|_| outcome.set("consumed"), || outcome.set("ran"));
    assert_eq!(outcome.get(), "ran");
}

#[test]
fn if_present_or_fail_consumes_or_errors() {
    let mut seen = None;
    let ok = Value::present("hello").if_present_or_fail(|v| seen = Some(v), || "missing");
    assert_eq!(ok, Ok(()));
    assert_eq!(seen, Some("hello"));

    let failed = Value::<&str>::absent().if_present_or_fail(|_| (), || "missing");
    assert_eq!(failed, Err("missing"));
}

#[test]
fn fail_if_present_guards_occupancy() {
    assert_eq!(Value::present(1).fail_if_present(|| "occupied"), Err("occupied"));
    assert_eq!(Value::<i32>::absent().fail_if_present(|| "occupied"), Ok(()));
}

#[test]
fn fail_if_absent_guards_emptiness() {
    assert_eq!(Value::present(1).fail_if_absent(|| "empty"), Ok(()));
    assert_eq!(Value::<i32>::absent().fail_if_absent(|| "empty"), Err("empty"));
}

#[test]
fn get_or_else_is_lazy() {
    let calls = Cell::new(0);
    let supplied = Value::present("hello").get_or_else(|| {
        calls.set(calls.get() + 1);
        "world"
    });
    assert_eq!(supplied, "hello");
    assert_eq!(calls.get(), 0);

    let supplied = Value::absent().get_or_else(|| {
        calls.set(calls.get() + 1);
        "world"
    });
    assert_eq!(supplied, "world");
    assert_eq!(calls.get(), 1);
}

#[test]
fn get_or_fail_never_builds_the_error_when_present() {
    let calls = Cell::new(0);
    let got = Value::present(5).get_or_fail(|| {
        calls.set(calls.get() + 1);
        "boom"
    });
    assert_eq!(got, Ok(5));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_is_lazy() {
    let calls = Cell::new(0);
    let kept = Value::present(1).or_else(|| {
        calls.set(calls.get() + 1);
        Value::present(2)
    });
    assert_eq!(kept, Value::present(1));
    assert_eq!(calls.get(), 0);

    let supplied = Value::absent().or_else(|| {
        calls.set(calls.get() + 1);
        Value::present(5)
    });
    assert_eq!(supplied.get(), Ok(5));
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_never_runs_on_absent() {
    let calls = Cell::new(0);
    let mapped: Value<usize> = Value::<&str>::absent().map(|s| {
        calls.set(calls.get() + 1);
        s.len()
    });
    assert!(mapped.is_absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_never_runs_on_absent() {
    let calls = Cell::new(0);
    let chained: Value<usize> = Value::<&str>::absent().and_then(|s| {
        calls.set(calls.get() + 1);
        Value::present(s.len())
    });
    assert!(chained.is_absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn filter_never_tests_an_absent_value() {
    let calls = Cell::new(0);
    let filtered = Value::<&str>::absent().filter(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(filtered.is_absent());
    assert_eq!(calls.get(), 0);
}

#[test]
fn caller_panic_propagates_unmodified() {
    let unwound = std::panic::catch_unwind(|| {
        Value::present(1).map(|_| panic!("caller failure"));
    });
    let payload = unwound.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"caller failure"));
}
