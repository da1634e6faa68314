//! Call arguments and binding against a formal parameter list.

use crate::candidate::Param;
use manifold_core::{CallError, Value};
use std::any::Any;
use std::fmt;

/// Arguments for one routed call: positional values followed by keyword
/// values, in the order supplied.
#[derive(Default)]
pub struct Args {
    positional: Vec<Value>,
    keyword: Vec<(String, Value)>,
}

impl Args {
    /// Start an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn pos<T: Any>(mut self, value: T) -> Self {
        self.positional.push(Value::of(value));
        self
    }

    /// Append a keyword argument.
    pub fn kw<T: Any>(mut self, name: impl Into<String>, value: T) -> Self {
        self.keyword.push((name.into(), Value::of(value)));
        self
    }

    /// Total number of supplied arguments.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("positional", &self.positional)
            .field("keyword", &self.keyword)
            .finish()
    }
}

/// Bind supplied arguments to the formal parameter list: positional first,
/// then keyword by name, then declared defaults for any slot still empty.
///
/// The returned vector is in declaration order with exactly one value per
/// formal parameter. Defaults are materialized here, so a defaulted slot
/// contributes its value's actual runtime type to dispatch.
pub(crate) fn bind(params: &[Param], args: Args) -> Result<Vec<Value>, CallError> {
    if args.positional.len() > params.len() {
        return Err(CallError::TooManyPositional {
            expected: params.len(),
            found: args.positional.len(),
        });
    }

    let mut slots: Vec<Option<Value>> = params.iter().map(|_| None).collect();
    for (i, value) in args.positional.into_iter().enumerate() {
        slots[i] = Some(value);
    }
    for (name, value) in args.keyword {
        let Some(index) = params.iter().position(|p| p.name() == name) else {
            return Err(CallError::UnknownKeyword { name });
        };
        if slots[index].is_some() {
            return Err(CallError::DuplicateArgument { name });
        }
        slots[index] = Some(value);
    }

    let mut bound = Vec::with_capacity(params.len());
    for (slot, param) in slots.into_iter().zip(params) {
        match slot {
            Some(value) => bound.push(value),
            None => match param.default_factory() {
                Some(factory) => bound.push(factory()),
                None => {
                    return Err(CallError::MissingArgument {
                        name: param.name().to_string(),
                    });
                }
            },
        }
    }
    Ok(bound)
}
