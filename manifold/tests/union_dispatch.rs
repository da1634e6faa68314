//! Union-typed parameter matching.

mod common;

use common::{call_str, fixture};
use manifold::testing::{tag_of, tagged};
use manifold::{Args, FnDef, Param, TypeSpecifier, multidispatch};

#[test]
fn test_union_member_match_routes() {
    let func = fixture();
    assert_eq!(
        call_str(&func, Args::new().pos(3.14_f64).pos("extra".to_string())),
        "float:3.14,union:extra"
    );
    assert_eq!(
        call_str(
            &func,
            Args::new()
                .pos(1.618_f64)
                .pos(vec!["a".to_string(), "b".to_string()])
        ),
        "float:1.618,union:[\"a\", \"b\"]"
    );
}

#[test]
fn test_non_member_does_not_match_union() {
    let func = fixture();
    assert_eq!(
        call_str(&func, Args::new().pos(3.14_f64).pos(7_i32)),
        "default"
    );
}

#[test]
fn test_single_parameter_union() {
    let mut func = multidispatch(FnDef::new(tagged("default")).param(Param::new("x")));
    func.register(
        FnDef::new(tagged("number"))
            .param(Param::with_spec("x", TypeSpecifier::of::<i64>().or::<f64>())),
    )
    .unwrap();

    assert_eq!(tag_of(func.call(Args::new().pos(10_i64)).unwrap()), "number");
    assert_eq!(
        tag_of(func.call(Args::new().pos(3.14_f64)).unwrap()),
        "number"
    );
    assert_eq!(
        tag_of(func.call(Args::new().pos("str".to_string())).unwrap()),
        "default"
    );
}
