//! Per-parameter type constraints.

use crate::ty::TypeKey;
use std::any::Any;
use std::fmt;

/// A single parameter's declared constraint: one concrete type, or an
/// ordered union of concrete types.
///
/// A specifier is never empty. Construction starts from one member via
/// [`TypeSpecifier::of`] and [`TypeSpecifier::or`] only appends, so the
/// empty case is unrepresentable. Union member order is the declared order.
#[derive(Clone, PartialEq, Eq)]
pub struct TypeSpecifier {
    members: Vec<TypeKey>,
}

impl TypeSpecifier {
    /// A specifier accepting the single concrete type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            members: vec![TypeKey::of::<T>()],
        }
    }

    /// Append `T` as a further union member.
    pub fn or<T: Any>(mut self) -> Self {
        self.members.push(TypeKey::of::<T>());
        self
    }

    /// Whether this specifier has more than one member.
    pub fn is_union(&self) -> bool {
        self.members.len() > 1
    }

    /// The union members, in declared order. Never empty.
    pub fn members(&self) -> &[TypeKey] {
        &self.members
    }
}

impl fmt::Debug for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeSpecifier({self})")
    }
}

impl fmt::Display for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(member.name())?;
        }
        Ok(())
    }
}
