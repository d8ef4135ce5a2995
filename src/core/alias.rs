//! Alias registry: named severity labels mapped to numeric levels
//!
//! An alias is a user-facing severity name independent of the numeric level
//! it maps to. Multiple aliases may share a level. Each alias can carry a
//! message limit; messages past the limit are suppressed but still tallied.

use super::error::{Result, TierlogError};
use super::level::Level;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct AliasEntry {
    level: Level,
    limit: Option<usize>,
}

/// Built-in aliases seeded into every registry. All are re-levelable by the
/// caller; none carries a limit by default.
const BUILTIN_ALIASES: &[(&str, Level)] = &[
    // Standard level names
    ("fatal", Level::FATAL),
    ("critical", Level::FATAL),
    ("error", Level::ERROR),
    ("warn", Level::WARNING),
    ("warning", Level::WARNING),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("hidden", Level::HIDDEN),
    // Additional aliases defined for every logger
    ("normal", Level::INFO),
    ("ds_store", Level::WARNING),
    ("dot_", Level::WARNING),
    ("invisible", Level::WARNING),
    ("exception", Level::ERROR),
    ("header", Level::INFO),
];

/// Mapping of alias names to `(level, limit)` pairs.
///
/// Alias names are case-insensitive; they are normalized to lowercase on both
/// registration and lookup.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    aliases: HashMap<String, AliasEntry>,
    default_limit: Option<usize>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::with_default_limit(None)
    }

    /// Create a registry whose aliases fall back to `default_limit` when they
    /// carry no explicit limit of their own.
    pub fn with_default_limit(default_limit: Option<usize>) -> Self {
        let mut aliases = HashMap::new();
        for (name, level) in BUILTIN_ALIASES {
            aliases.insert(
                (*name).to_string(),
                AliasEntry {
                    level: *level,
                    limit: None,
                },
            );
        }
        Self {
            aliases,
            default_limit,
        }
    }

    /// Add or overwrite an alias.
    ///
    /// Overwriting an existing alias (built-in or user-registered) is
    /// intentional and silent: last write wins. Callers sharing one logger
    /// across tasks should coordinate their alias names.
    pub fn register(&mut self, name: impl Into<String>, level: Level, limit: Option<usize>) {
        let name = name.into().to_lowercase();
        self.aliases.insert(name, AliasEntry { level, limit });
    }

    /// Resolve an alias to its `(level, limit)` pair.
    ///
    /// The registry's default limit applies to aliases without an explicit
    /// limit. Fails with `UnknownAlias` if the name was never registered.
    pub fn resolve(&self, name: &str) -> Result<(Level, Option<usize>)> {
        let entry = self
            .aliases
            .get(&name.to_lowercase())
            .ok_or_else(|| TierlogError::unknown_alias(name))?;
        Ok((entry.level, entry.limit.or(self.default_limit)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.aliases.contains_key(&name.to_lowercase())
    }

    /// Update the limit of an already-registered alias, keeping its level.
    /// Unknown names are ignored.
    pub fn set_limit(&mut self, name: &str, limit: Option<usize>) {
        if let Some(entry) = self.aliases.get_mut(&name.to_lowercase()) {
            entry.limit = limit;
        }
    }

    /// Effective finite limits for every registered alias, used to seed the
    /// root tier's limit table.
    pub fn base_limits(&self) -> HashMap<String, Option<usize>> {
        self.aliases
            .iter()
            .filter_map(|(name, entry)| {
                entry
                    .limit
                    .or(self.default_limit)
                    .map(|limit| (name.clone(), Some(limit)))
            })
            .collect()
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_seeded() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve("normal").unwrap(), (Level::INFO, None));
        assert_eq!(registry.resolve("header").unwrap(), (Level::INFO, None));
        assert_eq!(registry.resolve("exception").unwrap(), (Level::ERROR, None));
        assert_eq!(registry.resolve("ds_store").unwrap(), (Level::WARNING, None));
        assert_eq!(registry.resolve("dot_").unwrap(), (Level::WARNING, None));
        assert_eq!(
            registry.resolve("invisible").unwrap(),
            (Level::WARNING, None)
        );
        assert_eq!(registry.resolve("hidden").unwrap(), (Level::HIDDEN, None));
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve("INFO").unwrap(), (Level::INFO, None));
        assert_eq!(registry.resolve("Warning").unwrap(), (Level::WARNING, None));
    }

    #[test]
    fn test_unknown_alias() {
        let registry = AliasRegistry::new();
        let err = registry.resolve("mystery").unwrap_err();
        assert!(matches!(err, TierlogError::UnknownAlias { .. }));
    }

    #[test]
    fn test_register_and_overwrite() {
        let mut registry = AliasRegistry::new();
        registry.register("task_done", Level::INFO, Some(100));
        assert_eq!(
            registry.resolve("task_done").unwrap(),
            (Level::INFO, Some(100))
        );

        // Silent overwrite, last write wins
        registry.register("task_done", Level::WARNING, None);
        assert_eq!(
            registry.resolve("task_done").unwrap(),
            (Level::WARNING, None)
        );

        // Built-ins can be re-leveled too
        registry.register("ds_store", Level::DEBUG, None);
        assert_eq!(registry.resolve("ds_store").unwrap(), (Level::DEBUG, None));
    }

    #[test]
    fn test_default_limit_fallback() {
        let registry = AliasRegistry::with_default_limit(Some(10));
        assert_eq!(registry.resolve("info").unwrap(), (Level::INFO, Some(10)));

        let mut registry = AliasRegistry::with_default_limit(Some(10));
        registry.register("verbose", Level::DEBUG, Some(3));
        assert_eq!(
            registry.resolve("verbose").unwrap(),
            (Level::DEBUG, Some(3))
        );
    }

    #[test]
    fn test_set_limit() {
        let mut registry = AliasRegistry::new();
        registry.set_limit("info", Some(5));
        assert_eq!(registry.resolve("info").unwrap(), (Level::INFO, Some(5)));

        // Unknown names are ignored
        registry.set_limit("mystery", Some(5));
        assert!(!registry.contains("mystery"));
    }

    #[test]
    fn test_base_limits() {
        let mut registry = AliasRegistry::new();
        registry.register("chatty", Level::DEBUG, Some(2));
        let limits = registry.base_limits();
        assert_eq!(limits.get("chatty"), Some(&Some(2)));
        assert!(!limits.contains_key("info"));
    }
}
