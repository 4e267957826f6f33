//! The dispatch facade.
//!
//! [`Dash`] turns an operation name plus arguments into a call: the first
//! argument is the subject, its [`TypeHint`] narrows resolution, and the
//! bound function receives every argument unchanged.

use std::sync::{Arc, OnceLock};

use dash_foundation::{Error, Result, TypeHint, Value};
use tracing::trace;

use crate::config::ResolverConfig;
use crate::native::NativeTable;
use crate::registry::{ModuleSource, Registry};
use crate::resolver::{Resolved, Resolver};
use crate::sequence::Sequence;

/// Anything that accepts operations by name.
///
/// The facade performs them immediately; a [`Sequence`] queues them.
pub trait Dispatchable {
    /// What a single invocation produces.
    type Output;

    /// Performs or records the operation `name` with `args`.
    fn invoke(&mut self, name: &str, args: Vec<Value>) -> Self::Output;
}

/// Entry point for calling helper functions by name.
#[derive(Clone, Debug, Default)]
pub struct Dash {
    resolver: Resolver,
}

impl Dash {
    /// Creates a facade over the given modules, native table and configuration.
    pub fn new<S: ModuleSource + ?Sized>(
        source: &S,
        natives: Arc<NativeTable>,
        config: ResolverConfig,
    ) -> Self {
        Self::from_resolver(Resolver::new(
            Arc::new(Registry::from_source(source)),
            natives,
            config,
        ))
    }

    /// Creates a facade around an existing resolver.
    #[must_use]
    pub fn from_resolver(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Creates a facade over the builtin modules with a custom configuration.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self::from_resolver(Resolver::new(
            Registry::builtin(),
            NativeTable::builtin(),
            config,
        ))
    }

    /// Returns the process-wide facade over the builtin modules.
    pub fn global() -> &'static Dash {
        static GLOBAL: OnceLock<Dash> = OnceLock::new();
        GLOBAL.get_or_init(Dash::default)
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolves a name without calling it.
    #[must_use]
    pub fn resolve(&self, name: &str, hint: Option<TypeHint>) -> Option<Resolved> {
        self.resolver.resolve(name, hint)
    }

    /// Calls the operation `name`; `args[0]` is the subject.
    ///
    /// # Errors
    ///
    /// `EmptyInput` when `args` is empty, `UnresolvedOperation` when nothing
    /// provides `name`, and whatever the bound function returns otherwise.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let subject = args.first().ok_or_else(|| Error::empty_input(name))?;
        let hint = subject.type_hint();
        let resolved = self
            .resolver
            .resolve(name, Some(hint))
            .ok_or_else(|| Error::unresolved(name))?;
        trace!(name, origin = %resolved.origin, argc = args.len(), "dispatch");
        resolved.call(args)
    }

    /// Returns the function bound to `name` as a callable value.
    ///
    /// No subject is available, so resolution runs without a type hint.
    ///
    /// # Errors
    ///
    /// `UnresolvedOperation` when nothing provides `name`.
    pub fn function(&self, name: &str) -> Result<Value> {
        self.resolver
            .resolve(name, None)
            .map(|r| Value::Fn(r.callable()))
            .ok_or_else(|| Error::unresolved(name))
    }

    /// Starts a deferred chain on `value` bound to this facade.
    pub fn seq(&self, value: impl Into<Value>) -> Sequence<'_> {
        Sequence::new(self, value)
    }
}

impl Dispatchable for Dash {
    type Output = Result<Value>;

    fn invoke(&mut self, name: &str, args: Vec<Value>) -> Self::Output {
        self.call(name, &args)
    }
}

impl Dispatchable for &Dash {
    type Output = Result<Value>;

    fn invoke(&mut self, name: &str, args: Vec<Value>) -> Self::Output {
        self.call(name, &args)
    }
}
