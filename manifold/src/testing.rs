//! Testing utilities for Manifold.
//!
//! Implementation bodies with observable side effects, for verifying that
//! calls are routed where they should be:
//!
//! - [`tagged`]: a body returning a fixed string tag
//! - [`CountingBody`]: a body that counts invocations
//! - [`RecordingBody`]: a body that records its arguments' runtime types
//! - [`tag_of`]: downcast helper for outputs produced by [`tagged`]

use manifold_core::Value;
use std::any::Any;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A body that ignores its arguments and returns `tag` as a `String`.
///
/// Useful for asserting which implementation a call was routed to.
pub fn tagged(tag: &'static str) -> impl Fn(Vec<Value>) -> String + Send + Sync + 'static {
    move |_args| tag.to_string()
}

/// Downcast a routed call's output to the `String` produced by [`tagged`].
pub fn tag_of(output: Box<dyn Any>) -> String {
    *output.downcast::<String>().expect("output was not a String tag")
}

/// A body that counts invocations.
///
/// Clones share the counter, so the test keeps one handle while the
/// dispatcher owns the body.
#[derive(Clone, Default)]
pub struct CountingBody {
    count: Arc<AtomicUsize>,
}

impl CountingBody {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Produce a body closure backed by this counter. Returns the running
    /// count after the increment.
    pub fn body(&self) -> impl Fn(Vec<Value>) -> usize + Send + Sync + 'static {
        let count = self.count.clone();
        move |_args| count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// A body that records the runtime type names of its bound arguments,
/// one record per call.
#[derive(Clone, Default)]
pub struct RecordingBody {
    seen: Arc<Mutex<Vec<Vec<&'static str>>>>,
}

impl RecordingBody {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, each as a list of argument type names.
    pub fn calls(&self) -> Vec<Vec<&'static str>> {
        self.seen.lock().unwrap().clone()
    }

    /// Produce a body closure backed by this recorder.
    pub fn body(&self) -> impl Fn(Vec<Value>) + Send + Sync + 'static {
        let seen = self.seen.clone();
        move |args| {
            seen.lock()
                .unwrap()
                .push(args.iter().map(|v| v.key().name()).collect());
        }
    }
}
