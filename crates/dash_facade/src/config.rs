//! Resolver configuration.

use std::collections::{HashMap, HashSet};

/// Native namespaces tried, in order, after the helper modules.
pub const DEFAULT_NATIVE_PREFIXES: [&str; 2] = ["str_", "array_"];

/// Snake-cased names that never bind to a native function.
///
/// These are cursor-manipulating or scope-mutating functions that make no
/// sense applied to an immutable subject.
pub const DEFAULT_DENYLIST: [&str; 9] = [
    "reset",
    "prev",
    "next",
    "list",
    "compact",
    "extract",
    "end",
    "walk",
    "walk_recursive",
];

/// Native-style names redirected to helper functions.
pub const DEFAULT_ALIASES: [(&str, &str); 7] = [
    ("walk", "map"),
    ("array_walk", "map"),
    ("walk_recursive", "mapDeep"),
    ("array_walk_recursive", "mapDeep"),
    ("key_exists", "hasKey"),
    ("array_key_exists", "hasKey"),
    ("in_array", "hasValue"),
];

/// Configuration for name resolution.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Try the module matching the subject's type hint first.
    pub typed_lookup: bool,

    /// Consult the native table at all.
    pub native_lookup: bool,

    /// Prefixes joined to a snake-cased name to form native names.
    pub native_prefixes: Vec<String>,

    /// Snake-cased names excluded from native lookup.
    pub denylist: HashSet<String>,

    /// Name redirections applied before native lookup.
    pub aliases: HashMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            typed_lookup: true,
            native_lookup: true,
            native_prefixes: DEFAULT_NATIVE_PREFIXES.iter().map(ToString::to_string).collect(),
            denylist: DEFAULT_DENYLIST.iter().map(ToString::to_string).collect(),
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
        }
    }
}

impl ResolverConfig {
    /// Creates a configuration that only scans helper modules.
    #[must_use]
    pub fn modules_only() -> Self {
        Self {
            native_lookup: false,
            aliases: HashMap::new(),
            ..Self::default()
        }
    }

    /// Builder method to toggle type-hinted lookup.
    #[must_use]
    pub fn with_typed_lookup(mut self, enabled: bool) -> Self {
        self.typed_lookup = enabled;
        self
    }

    /// Builder method to toggle native lookup.
    #[must_use]
    pub fn with_native_lookup(mut self, enabled: bool) -> Self {
        self.native_lookup = enabled;
        self
    }

    /// Builder method to replace the native prefixes.
    #[must_use]
    pub fn with_native_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.native_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to deny a snake-cased name.
    #[must_use]
    pub fn deny(mut self, name: impl Into<String>) -> Self {
        self.denylist.insert(name.into());
        self
    }

    /// Builder method to remove a name from the denylist.
    #[must_use]
    pub fn allow(mut self, name: &str) -> Self {
        self.denylist.remove(name);
        self
    }

    /// Builder method to add an alias.
    #[must_use]
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.insert(from.into(), to.into());
        self
    }

    /// Checks whether a snake-cased name is denied.
    #[must_use]
    pub fn is_denied(&self, name: &str) -> bool {
        self.denylist.contains(name)
    }

    /// Returns the alias target for a name.
    #[must_use]
    pub fn alias_for(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }
}
