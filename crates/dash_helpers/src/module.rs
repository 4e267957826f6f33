//! Named collections of helper functions.

use std::collections::HashMap;

use dash_foundation::value::NativeFnPtr;
use dash_foundation::NativeFn;

/// A namespace of helper functions exported by name.
#[derive(Clone, Debug)]
pub struct HelperModule {
    name: &'static str,
    functions: HashMap<&'static str, NativeFn>,
}

impl HelperModule {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            functions: HashMap::new(),
        }
    }

    /// Builder method to export a function.
    #[must_use]
    pub fn with_function(mut self, name: &'static str, func: NativeFnPtr) -> Self {
        self.register(name, func);
        self
    }

    /// Exports a function, replacing any previous export with the same name.
    pub fn register(&mut self, name: &'static str, func: NativeFnPtr) {
        self.functions.insert(name, NativeFn::new(name, func));
    }

    /// The module's namespace name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up an exported function.
    #[must_use]
    pub fn get(&self, function: &str) -> Option<NativeFn> {
        self.functions.get(function).copied()
    }

    /// Checks if a function is exported.
    #[must_use]
    pub fn exports(&self, function: &str) -> bool {
        self.functions.contains_key(function)
    }

    /// Returns the exported function names, sorted.
    #[must_use]
    pub fn function_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of exported functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if the module exports nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
