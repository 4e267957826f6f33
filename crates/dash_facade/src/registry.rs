//! Registry of helper modules.
//!
//! The registry is an ordered list of [`HelperModule`]s built once from a
//! [`ModuleSource`]. Registration order decides which module wins when more
//! than one exports the same name and no type hint applies.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use dash_foundation::NativeFn;
use dash_helpers::HelperModule;
use tracing::debug;

/// Anything that can list the helper modules to register.
pub trait ModuleSource {
    /// Returns the modules in registration order.
    fn list_helper_modules(&self) -> Vec<HelperModule>;
}

/// The compiled-in helper modules.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinModules;

impl ModuleSource for BuiltinModules {
    fn list_helper_modules(&self) -> Vec<HelperModule> {
        dash_helpers::builtin_modules()
    }
}

impl ModuleSource for Vec<HelperModule> {
    fn list_helper_modules(&self) -> Vec<HelperModule> {
        self.clone()
    }
}

impl ModuleSource for [HelperModule] {
    fn list_helper_modules(&self) -> Vec<HelperModule> {
        self.to_vec()
    }
}

/// Ordered, read-only collection of helper modules.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    modules: Vec<HelperModule>,
}

impl Registry {
    /// Builds a registry from a module source.
    ///
    /// If two modules share a name, the first one registered is kept.
    pub fn from_source<S: ModuleSource + ?Sized>(source: &S) -> Self {
        let mut seen = HashSet::new();
        let modules = source
            .list_helper_modules()
            .into_iter()
            .filter(|m| {
                let fresh = seen.insert(m.name());
                if !fresh {
                    debug!(module = m.name(), "duplicate helper module ignored");
                }
                fresh
            })
            .collect();
        Self { modules }
    }

    /// Returns the shared registry of builtin modules.
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<Registry>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(Self::from_source(&BuiltinModules)))
            .clone()
    }

    /// Looks up a module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&HelperModule> {
        self.modules.iter().find(|m| m.name() == name)
    }

    /// Returns the modules in registration order.
    #[must_use]
    pub fn modules(&self) -> &[HelperModule] {
        &self.modules
    }

    /// Returns the module names in registration order.
    #[must_use]
    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.iter().map(HelperModule::name).collect()
    }

    /// Finds the first module, in registration order, exporting `function`.
    #[must_use]
    pub fn find(&self, function: &str) -> Option<(&HelperModule, NativeFn)> {
        self.modules
            .iter()
            .find_map(|m| m.get(function).map(|f| (m, f)))
    }

    /// Returns the names of every module exporting `function`.
    #[must_use]
    pub fn exporters(&self, function: &str) -> Vec<&'static str> {
        self.modules
            .iter()
            .filter(|m| m.exports(function))
            .map(HelperModule::name)
            .collect()
    }

    /// Returns the number of modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if no modules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
