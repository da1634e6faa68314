//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use manifold::{Args, Dispatcher, FnDef, Param, TypeSpecifier, Value, multidispatch};

/// Pull two owned arguments out of a bound argument list.
pub fn take2<A: std::any::Any, B: std::any::Any>(mut args: Vec<Value>) -> (A, B) {
    let b = args.pop().unwrap().take::<B>().unwrap();
    let a = args.pop().unwrap().take::<A>().unwrap();
    (a, b)
}

/// Downcast a routed call's output to `String`.
pub fn call_str(func: &Dispatcher, args: Args) -> String {
    *func.call(args).unwrap().downcast::<String>().unwrap()
}

/// The reference fixture: default `(a, b = None)` returning `"default"`,
/// plus implementations for `(i64, String)`, `(String, Vec<String>)` and
/// `(f64, String | Vec<String>)`.
pub fn fixture() -> Dispatcher {
    let default = FnDef::new(|_args| "default".to_string())
        .param(Param::new("a"))
        .param(Param::new("b").default_value(|| Value::of(Option::<String>::None)));
    let mut func = multidispatch(default);

    func.register(
        FnDef::new(|args| {
            let (a, b): (i64, String) = take2(args);
            format!("int:{a},str:{b}")
        })
        .param(Param::typed::<i64>("a"))
        .param(Param::typed::<String>("b")),
    )
    .unwrap();

    func.register(
        FnDef::new(|args| {
            let (a, b): (String, Vec<String>) = take2(args);
            format!("str:{a},list:{b:?}")
        })
        .param(Param::typed::<String>("a"))
        .param(Param::typed::<Vec<String>>("b")),
    )
    .unwrap();

    func.register(
        FnDef::new(|args: Vec<Value>| {
            let a = *args[0].downcast_ref::<f64>().unwrap();
            let b = match args[1].downcast_ref::<String>() {
                Some(s) => s.clone(),
                None => format!("{:?}", args[1].downcast_ref::<Vec<String>>().unwrap()),
            };
            format!("float:{a},union:{b}")
        })
        .param(Param::typed::<f64>("a"))
        .param(Param::with_spec(
            "b",
            TypeSpecifier::of::<String>().or::<Vec<String>>(),
        )),
    )
    .unwrap();

    func
}
