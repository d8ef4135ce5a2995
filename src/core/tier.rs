//! Tiers of the logging hierarchy and the tier stack
//!
//! A `Tier` is one scope of the open/close hierarchy: it owns its level
//! threshold, its effective limit table, its tally, and its start time.
//! `TierStack` keeps the live hierarchy; the root tier is pushed at logger
//! construction and is never popped. Pops are strictly LIFO, and a pop with
//! only the root present is an `UnbalancedContext` error rather than a
//! silent no-op, since it would corrupt tally attribution.

use super::error::{Result, TierlogError};
use super::level::Level;
use super::tally::Tally;
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// One tier of the hierarchy. Created by `open()`, consumed by `close()`;
/// the transition is one-way.
#[derive(Debug)]
pub struct Tier {
    title: String,
    threshold: Level,
    /// Effective limit per alias for this tier. Aliases absent here fall
    /// back to their registry limit.
    limits: HashMap<String, Option<usize>>,
    tally: Tally,
    start_time: DateTime<Local>,
    /// Ids of the appenders attached for this tier's lifetime only; they
    /// detach by identity at close, so appenders added to the logger while
    /// the tier is open are unaffected
    local_appenders: Vec<u64>,
}

impl Tier {
    /// The root tier, seeded with the registry's base limits.
    pub fn root(
        title: impl Into<String>,
        threshold: Level,
        limits: HashMap<String, Option<usize>>,
    ) -> Self {
        Self {
            title: title.into(),
            threshold,
            limits,
            tally: Tally::new(),
            start_time: Local::now(),
            local_appenders: Vec::new(),
        }
    }

    /// A child tier inheriting from this one.
    ///
    /// An unspecified threshold inherits the parent's. An inherited finite
    /// limit becomes the parent's remaining budget (limit minus messages
    /// already emitted in the parent, floored at zero); explicit overrides
    /// are taken verbatim and apply to this subtree.
    pub fn child(
        &self,
        title: impl Into<String>,
        threshold: Option<Level>,
        overrides: &HashMap<String, Option<usize>>,
        local_appenders: Vec<u64>,
    ) -> Self {
        let mut limits = self.limits.clone();
        for (name, limit) in &self.limits {
            if overrides.contains_key(name) {
                continue;
            }
            if let Some(limit) = limit {
                let remaining = limit.saturating_sub(self.tally.emitted(name) as usize);
                limits.insert(name.clone(), Some(remaining));
            }
        }
        for (name, limit) in overrides {
            limits.insert(name.to_lowercase(), *limit);
        }

        Self {
            title: title.into(),
            threshold: threshold.unwrap_or(self.threshold),
            limits,
            tally: Tally::new(),
            start_time: Local::now(),
            local_appenders,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: Level) {
        self.threshold = threshold;
    }

    /// Effective limit for an alias in this tier; `base` is the registry's
    /// answer and applies when the tier has no entry of its own.
    pub fn limit_for(&self, alias: &str, base: Option<usize>) -> Option<usize> {
        self.limits.get(alias).copied().unwrap_or(base)
    }

    pub fn set_limit(&mut self, alias: &str, limit: Option<usize>) {
        self.limits.insert(alias.to_lowercase(), limit);
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }

    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    pub fn local_appenders(&self) -> &[u64] {
        &self.local_appenders
    }
}

/// The live hierarchy: a stack of tiers, last element active.
///
/// Invariant: never empty after construction.
#[derive(Debug)]
pub struct TierStack {
    tiers: Vec<Tier>,
}

impl TierStack {
    pub fn new(root: Tier) -> Self {
        Self { tiers: vec![root] }
    }

    /// Nesting depth beyond the root (0 when only the root is present)
    pub fn depth(&self) -> usize {
        self.tiers.len() - 1
    }

    pub fn top(&self) -> &Tier {
        // Invariant: the stack always holds at least the root
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn top_mut(&mut self) -> &mut Tier {
        let last = self.tiers.len() - 1;
        &mut self.tiers[last]
    }

    pub fn push(&mut self, tier: Tier) {
        self.tiers.push(tier);
    }

    /// Pop the most recently opened tier. Popping the root is refused.
    pub fn pop(&mut self) -> Result<Tier> {
        if self.tiers.len() < 2 {
            return Err(TierlogError::UnbalancedContext);
        }
        self.tiers.pop().ok_or(TierlogError::UnbalancedContext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_tier() -> Tier {
        Tier::root("pds.test", Level::new(2), HashMap::new())
    }

    #[test]
    fn test_stack_never_pops_root() {
        let mut stack = TierStack::new(root_tier());
        assert_eq!(stack.depth(), 0);
        let err = stack.pop().unwrap_err();
        assert!(matches!(err, TierlogError::UnbalancedContext));
    }

    #[test]
    fn test_stack_lifo() {
        let mut stack = TierStack::new(root_tier());
        let child = stack.top().child("first", None, &HashMap::new(), Vec::new());
        stack.push(child);
        let child = stack.top().child("second", None, &HashMap::new(), Vec::new());
        stack.push(child);
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop().unwrap().title(), "second");
        assert_eq!(stack.pop().unwrap().title(), "first");
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_child_inherits_threshold() {
        let mut root = root_tier();
        root.set_threshold(Level::WARNING);
        let child = root.child("sub", None, &HashMap::new(), Vec::new());
        assert_eq!(child.threshold(), Level::WARNING);

        let child = root.child("sub", Some(Level::DEBUG), &HashMap::new(), Vec::new());
        assert_eq!(child.threshold(), Level::DEBUG);
    }

    #[test]
    fn test_child_inherits_remaining_budget() {
        let mut root = root_tier();
        root.set_limit("info", Some(5));
        root.tally_mut().record("info", Level::INFO, true);
        root.tally_mut().record("info", Level::INFO, true);

        let child = root.child("sub", None, &HashMap::new(), Vec::new());
        assert_eq!(child.limit_for("info", None), Some(3));
    }

    #[test]
    fn test_child_budget_floors_at_zero() {
        let mut root = root_tier();
        root.set_limit("info", Some(1));
        root.tally_mut().record("info", Level::INFO, true);
        root.tally_mut().record("info", Level::INFO, false);

        let child = root.child("sub", None, &HashMap::new(), Vec::new());
        assert_eq!(child.limit_for("info", None), Some(0));
    }

    #[test]
    fn test_child_explicit_override_taken_verbatim() {
        let mut root = root_tier();
        root.set_limit("info", Some(5));
        root.tally_mut().record("info", Level::INFO, true);

        let mut overrides = HashMap::new();
        overrides.insert("info".to_string(), Some(100));
        let child = root.child("sub", None, &overrides, Vec::new());
        assert_eq!(child.limit_for("info", None), Some(100));
    }

    #[test]
    fn test_limit_fallback_to_registry_base() {
        let tier = root_tier();
        assert_eq!(tier.limit_for("info", Some(7)), Some(7));
        assert_eq!(tier.limit_for("info", None), None);
    }
}
