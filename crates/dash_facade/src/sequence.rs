//! Deferred operation chains.
//!
//! A [`Sequence`] wraps a value and records operations without resolving
//! them. [`Sequence::result`] replays the queue in order against the facade,
//! feeding each result in as the next subject.

use dash_foundation::{Error, Result, Value};
use tracing::{debug, trace};

use crate::facade::{Dash, Dispatchable};

/// A queued operation: a name plus the arguments following the subject.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    /// The operation name as requested.
    pub name: String,
    /// Arguments after the subject.
    pub args: Vec<Value>,
}

/// A value with a queue of pending operations.
#[derive(Clone, Debug)]
pub struct Sequence<'d> {
    dash: &'d Dash,
    value: Value,
    queue: Vec<Operation>,
    failure: Option<Error>,
}

impl Sequence<'static> {
    /// Starts a chain on `value` using the global facade.
    #[allow(clippy::should_implement_trait)]
    pub fn from(value: impl Into<Value>) -> Self {
        Self::new(Dash::global(), value)
    }
}

impl<'d> Sequence<'d> {
    /// Starts a chain on `value` using `dash`.
    pub fn new(dash: &'d Dash, value: impl Into<Value>) -> Self {
        Self {
            dash,
            value: value.into(),
            queue: Vec::new(),
            failure: None,
        }
    }

    /// Queues `name` with the given trailing arguments.
    #[must_use]
    pub fn then<I>(mut self, name: &str, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push(name, args.into_iter().map(Into::into).collect());
        self
    }

    /// Queues `name` with no trailing arguments.
    #[must_use]
    pub fn op(mut self, name: &str) -> Self {
        self.push(name, Vec::new());
        self
    }

    /// Queues an operation in place.
    pub fn push(&mut self, name: impl Into<String>, args: Vec<Value>) {
        self.queue.push(Operation {
            name: name.into(),
            args,
        });
    }

    /// Returns the current value, before any pending operations.
    ///
    /// After a failed replay this is the value the replay started from.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the number of queued operations.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns the queued operations in order.
    #[must_use]
    pub fn queue(&self) -> &[Operation] {
        &self.queue
    }

    /// Returns the error a previous replay stopped on, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    /// Replays the queue and returns the final value.
    ///
    /// The queue is drained either way. A failed replay leaves the value
    /// where it started and the chain stays failed: every later call returns
    /// the same error and drops whatever was queued since.
    ///
    /// # Errors
    ///
    /// The first error raised by resolution or by a queued operation.
    pub fn result(&mut self) -> Result<Value> {
        let queue = std::mem::take(&mut self.queue);
        if let Some(err) = &self.failure {
            debug!(dropped = queue.len(), "sequence already failed");
            return Err(err.clone());
        }
        debug!(pending = queue.len(), "replaying sequence");

        let mut value = self.value.clone();
        for (step, Operation { name, args }) in queue.into_iter().enumerate() {
            trace!(step, name = name.as_str(), "sequence step");
            let mut call_args = Vec::with_capacity(args.len() + 1);
            call_args.push(value);
            call_args.extend(args);
            match self.dash.call(&name, &call_args) {
                Ok(next) => value = next,
                Err(err) => {
                    debug!(step, error = %err, "sequence failed");
                    self.failure = Some(err.clone());
                    return Err(err);
                }
            }
        }

        self.value = value;
        Ok(self.value.clone())
    }
}

impl Dispatchable for Sequence<'_> {
    type Output = ();

    fn invoke(&mut self, name: &str, args: Vec<Value>) {
        self.push(name, args);
    }
}
