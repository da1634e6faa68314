//! End-to-end routing through the reference fixture.

mod common;

use common::{call_str, fixture};
use manifold::testing::{CountingBody, RecordingBody};
use manifold::{Args, CallError, FnDef, Param, TypeKey, multidispatch};

#[test]
fn test_exact_match_routes_to_registered_impl() {
    let func = fixture();
    assert_eq!(
        call_str(&func, Args::new().pos(5_i64).pos("hello".to_string())),
        "int:5,str:hello"
    );
    assert_eq!(
        call_str(
            &func,
            Args::new()
                .pos("abc".to_string())
                .pos(vec!["x".to_string(), "y".to_string()])
        ),
        "str:abc,list:[\"x\", \"y\"]"
    );
}

#[test]
fn test_unmatched_call_falls_back_to_default() {
    let func = fixture();
    assert_eq!(call_str(&func, Args::new().pos(true).pos(1_u8)), "default");
}

#[test]
fn test_bound_default_value_participates_in_type_extraction() {
    // A one-argument call binds `b` to its declared default. The runtime
    // tuple is then (i64, Option<String>), which matches no registered
    // signature, so the default implementation runs -- not (i64, String).
    let func = fixture();
    assert_eq!(call_str(&func, Args::new().pos(10_i64)), "default");
}

#[test]
fn test_keyword_arguments_bind_to_slots() {
    let func = fixture();
    assert_eq!(
        call_str(&func, Args::new().kw("a", 10_i64).kw("b", "kw".to_string())),
        "int:10,str:kw"
    );
    assert_eq!(
        call_str(&func, Args::new().kw("b", "kw".to_string()).kw("a", 10_i64)),
        "int:10,str:kw"
    );
    assert_eq!(
        call_str(&func, Args::new().pos(10_i64).kw("b", "kw".to_string())),
        "int:10,str:kw"
    );
}

#[test]
fn test_binding_errors() {
    let func = fixture();
    assert!(matches!(
        func.call(Args::new().pos(1_i64).pos(2_i64).pos(3_i64)),
        Err(CallError::TooManyPositional { .. })
    ));
    assert!(matches!(
        func.call(Args::new().pos(1_i64).kw("z", 2_i64)),
        Err(CallError::UnknownKeyword { .. })
    ));
    assert!(matches!(
        func.call(Args::new().pos(1_i64).kw("a", 2_i64)),
        Err(CallError::DuplicateArgument { .. })
    ));
    assert!(matches!(
        func.call(Args::new().kw("b", "x".to_string())),
        Err(CallError::MissingArgument { .. })
    ));
}

#[test]
fn test_dispatch_lookup_without_invocation() {
    let func = fixture();

    let resolution = func.dispatch(&[TypeKey::of::<i64>(), TypeKey::of::<String>()]);
    assert!(!resolution.is_default());
    assert_eq!(resolution.signature().unwrap().arity(), 2);

    let resolution = func.dispatch(&[TypeKey::of::<bool>(), TypeKey::of::<u8>()]);
    assert!(resolution.is_default());
}

#[test]
fn test_registry_view_preserves_insertion_order() {
    let func = fixture();
    let first_params: Vec<TypeKey> = func
        .registry()
        .map(|(sig, _)| sig.specs()[0].members()[0])
        .collect();
    assert_eq!(
        first_params,
        vec![
            TypeKey::of::<i64>(),
            TypeKey::of::<String>(),
            TypeKey::of::<f64>()
        ]
    );
}

#[test]
fn test_routed_call_receives_bound_values() {
    let recorder = RecordingBody::new();
    let counter = CountingBody::new();

    let default = FnDef::new(recorder.body())
        .param(Param::new("a"))
        .param(Param::new("b"));
    let mut func = multidispatch(default);
    func.register(
        FnDef::new(counter.body())
            .param(Param::typed::<i64>("a"))
            .param(Param::typed::<i64>("b")),
    )
    .unwrap();

    func.call(Args::new().pos(1_i64).pos(2_i64)).unwrap();
    func.call(Args::new().pos(1_i64).pos("x".to_string())).unwrap();

    assert_eq!(counter.count(), 1, "only the (i64, i64) call is routed to the candidate");
    let calls = recorder.calls();
    assert_eq!(calls.len(), 1, "the unmatched call reaches the default");
    assert_eq!(calls[0].len(), 2, "the default receives both bound values");
}
