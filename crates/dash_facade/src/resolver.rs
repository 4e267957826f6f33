//! Name resolution.
//!
//! A requested name is resolved by trying, in order:
//! 1. the helper module matching the subject's [`TypeHint`]
//! 2. every helper module in registration order
//! 3. the snake-cased name, first through the alias table and then, unless
//!    denied, through each native prefix in the [`NativeTable`]
//!
//! The first hit wins. Resolution has no side effects besides `tracing`
//! events.

use std::fmt;
use std::sync::Arc;

use dash_foundation::{Callable, NativeFn, Result, TypeHint, Value};
use dash_helpers::strings::snake_case;
use tracing::{debug, trace};

use crate::config::ResolverConfig;
use crate::native::NativeTable;
use crate::registry::Registry;

/// Where a resolved function was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The module matching the subject's type hint.
    TypedModule(&'static str),
    /// The first module exporting the name, in registration order.
    ModuleScan(&'static str),
    /// A helper module, reached through the alias table.
    Alias {
        /// The name as requested.
        from: String,
        /// The module that exported the alias target.
        module: &'static str,
    },
    /// The native table, under the given full name.
    Native(&'static str),
}

impl Origin {
    /// Returns the helper module name, if the function came from one.
    #[must_use]
    pub fn module(&self) -> Option<&'static str> {
        match self {
            Self::TypedModule(m) | Self::ModuleScan(m) | Self::Alias { module: m, .. } => Some(*m),
            Self::Native(_) => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypedModule(m) => write!(f, "typed module {m}"),
            Self::ModuleScan(m) => write!(f, "module {m}"),
            Self::Alias { from, module } => write!(f, "alias {from} in {module}"),
            Self::Native(name) => write!(f, "native {name}"),
        }
    }
}

/// A bound function and where it came from.
#[derive(Clone, Debug)]
pub struct Resolved {
    /// The name the function is registered under.
    pub name: &'static str,
    /// Where it was found.
    pub origin: Origin,
    /// The function itself.
    pub func: NativeFn,
}

impl Resolved {
    /// Invokes the function.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        self.func.call(args)
    }

    /// Returns the function as a callable value.
    #[must_use]
    pub fn callable(&self) -> Callable {
        Callable::Native(self.func)
    }
}

/// Resolves operation names to functions.
#[derive(Clone, Debug)]
pub struct Resolver {
    registry: Arc<Registry>,
    natives: Arc<NativeTable>,
    config: ResolverConfig,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Registry::builtin(), NativeTable::builtin(), ResolverConfig::default())
    }
}

impl Resolver {
    /// Creates a resolver over the given registry and native table.
    #[must_use]
    pub fn new(registry: Arc<Registry>, natives: Arc<NativeTable>, config: ResolverConfig) -> Self {
        Self {
            registry,
            natives,
            config,
        }
    }

    /// Returns the helper module registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the native table.
    #[must_use]
    pub fn natives(&self) -> &NativeTable {
        &self.natives
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves `name`, using `hint` to pick the module tried first.
    ///
    /// Returns `None` when nothing provides the name.
    #[must_use]
    pub fn resolve(&self, name: &str, hint: Option<TypeHint>) -> Option<Resolved> {
        if let Some(found) = self.lookup_modules(name, hint) {
            return Some(found);
        }

        let snake = snake_case(name);
        if let Some(found) = self.lookup_alias(name, &snake, hint) {
            return Some(found);
        }
        if let Some(found) = self.lookup_native(&snake) {
            return Some(found);
        }

        debug!(name, ?hint, "unresolved operation");
        None
    }

    fn lookup_modules(&self, name: &str, hint: Option<TypeHint>) -> Option<Resolved> {
        if let Some(hint) = hint.filter(|_| self.config.typed_lookup) {
            let module = hint.module_name();
            if let Some(func) = self.registry.module(module).and_then(|m| m.get(name)) {
                trace!(name, module, "resolved in typed module");
                return Some(Resolved {
                    name: func.name,
                    origin: Origin::TypedModule(module),
                    func,
                });
            }
        }

        let (module, func) = self.registry.find(name)?;
        trace!(name, module = module.name(), "resolved by module scan");
        Some(Resolved {
            name: func.name,
            origin: Origin::ModuleScan(module.name()),
            func,
        })
    }

    fn lookup_alias(&self, name: &str, snake: &str, hint: Option<TypeHint>) -> Option<Resolved> {
        let target = self
            .config
            .alias_for(snake)
            .or_else(|| self.config.alias_for(name))?;
        let found = self.lookup_modules(target, hint)?;
        let module = found.origin.module()?;
        trace!(name, target, module, "resolved through alias");
        Some(Resolved {
            origin: Origin::Alias {
                from: name.to_string(),
                module,
            },
            ..found
        })
    }

    fn lookup_native(&self, snake: &str) -> Option<Resolved> {
        if !self.config.native_lookup {
            return None;
        }
        if self.config.is_denied(snake) {
            debug!(name = snake, "native lookup denied");
            return None;
        }
        let func = self
            .config
            .native_prefixes
            .iter()
            .find_map(|prefix| self.natives.get(&format!("{prefix}{snake}")))?;
        trace!(name = snake, native = func.name, "resolved in native table");
        Some(Resolved {
            name: func.name,
            origin: Origin::Native(func.name),
            func,
        })
    }
}
