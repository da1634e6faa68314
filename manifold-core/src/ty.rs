//! Runtime type identity for dispatchable values.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a runtime type participating in dispatch.
///
/// Wraps a [`TypeId`] together with the type's name for diagnostics.
/// Equality and hashing consider the id only.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key for the concrete type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The type's name, for diagnostics only. Not part of the identity.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One call argument: a boxed payload tagged with the [`TypeKey`] captured
/// at the site that built it.
///
/// The tag is the runtime type used for dispatch; it is recorded once when
/// the value is constructed via [`Value::of`] and never changes.
pub struct Value {
    key: TypeKey,
    payload: Box<dyn Any>,
}

impl Value {
    /// Wrap a concrete value, capturing its type key.
    pub fn of<T: Any>(value: T) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            payload: Box::new(value),
        }
    }

    /// The runtime type this value was built from.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Borrow the payload as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Take the payload out as `T`, returning the value unchanged on a
    /// type mismatch.
    pub fn take<T: Any>(self) -> Result<T, Value> {
        match self.payload.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(payload) => Err(Value {
                key: self.key,
                payload,
            }),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.key.name)
    }
}
