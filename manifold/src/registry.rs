//! Insertion-ordered store of (signature, implementation) pairs.

use crate::candidate::Body;
use manifold_core::{Signature, Value};
use std::any::Any;
use std::fmt;

/// A callable registered for one [`Signature`].
#[derive(Clone)]
pub struct Implementation {
    signature: Signature,
    body: Body,
}

impl Implementation {
    pub(crate) fn new(signature: Signature, body: Body) -> Self {
        Self { signature, body }
    }

    /// The signature this implementation was registered under.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Parameter count.
    pub fn arity(&self) -> usize {
        self.signature.arity()
    }

    /// Invoke the body with already-bound arguments.
    pub fn invoke(&self, args: Vec<Value>) -> Box<dyn Any> {
        (self.body)(args)
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementation")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

struct Entry {
    implementation: Implementation,
    seq: u64,
}

/// Insertion-ordered mapping from [`Signature`] to [`Implementation`].
///
/// Registering an exactly equal signature replaces the earlier entry in
/// place, carrying a fresh sequence number so the resolver's tie-break
/// still treats it as the most recent registration. Entries are never
/// removed; the registry holds strong references for its whole lifetime.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an implementation, overwriting any entry with an equal
    /// signature.
    pub(crate) fn insert(&mut self, implementation: Implementation) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let entry = Entry {
            implementation,
            seq,
        };
        match self
            .entries
            .iter()
            .position(|e| e.implementation.signature() == entry.implementation.signature())
        {
            Some(pos) => self.entries[pos] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Lazy, restartable view of all entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Signature, &Implementation)> {
        self.entries
            .iter()
            .map(|e| (e.implementation.signature(), &e.implementation))
    }

    /// Entries together with their registration sequence numbers, for the
    /// resolver's recency tie-break.
    pub(crate) fn entries_seq(&self) -> impl Iterator<Item = (&Implementation, u64)> {
        self.entries.iter().map(|e| (&e.implementation, e.seq))
    }

    /// Number of registered implementations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
