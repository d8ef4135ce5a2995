//! Message tallies: emitted and suppressed counts per alias
//!
//! Each tier of the hierarchy owns one `Tally`. The emitter records every
//! attempt, admitted or not, so counts always reflect the true number of log
//! calls. On close, a child's tally is merged additively into its parent's.

use super::level::Level;
use std::collections::BTreeMap;

/// Counts for a single alias within one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasCounts {
    /// Level the alias resolved to at record time (last resolution wins)
    pub level: Level,
    pub emitted: u64,
    pub suppressed: u64,
}

impl AliasCounts {
    pub fn attempts(&self) -> u64 {
        self.emitted + self.suppressed
    }
}

/// Severity buckets for one tier, including suppressed attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub fatal: u64,
    pub errors: u64,
    pub warnings: u64,
    /// Total attempts at every level
    pub total: u64,
}

/// Accumulated message counts for one tier.
///
/// BTreeMaps keep iteration deterministic, which the summary output relies
/// on for golden-output testing.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    by_alias: BTreeMap<String, AliasCounts>,
    by_level: BTreeMap<Level, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attempt for `alias`. Infallible; never blocks.
    pub fn record(&mut self, alias: &str, level: Level, admitted: bool) {
        let counts = self
            .by_alias
            .entry(alias.to_string())
            .or_insert(AliasCounts {
                level,
                emitted: 0,
                suppressed: 0,
            });
        counts.level = level;
        if admitted {
            counts.emitted += 1;
        } else {
            counts.suppressed += 1;
        }
        *self.by_level.entry(level).or_insert(0) += 1;
    }

    pub fn emitted(&self, alias: &str) -> u64 {
        self.by_alias.get(alias).map_or(0, |c| c.emitted)
    }

    pub fn suppressed(&self, alias: &str) -> u64 {
        self.by_alias.get(alias).map_or(0, |c| c.suppressed)
    }

    pub fn counts(&self, alias: &str) -> Option<AliasCounts> {
        self.by_alias.get(alias).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }

    /// Element-wise addition of another tally into this one.
    ///
    /// Commutative and associative over the counts: merge order never
    /// affects final totals.
    pub fn merge(&mut self, other: &Tally) {
        for (alias, counts) in &other.by_alias {
            let entry = self.by_alias.entry(alias.clone()).or_insert(AliasCounts {
                level: counts.level,
                emitted: 0,
                suppressed: 0,
            });
            entry.emitted += counts.emitted;
            entry.suppressed += counts.suppressed;
        }
        for (level, count) in &other.by_level {
            *self.by_level.entry(*level).or_insert(0) += count;
        }
    }

    /// Human-readable summary, one `(level, line)` pair per alias with
    /// `emitted > 0`, in descending-severity order (ties broken by name).
    /// The level is the alias's, so callers can severity-filter the lines.
    ///
    /// A pure function of the counts: identical counts yield identical
    /// output.
    pub fn summary_entries(&self) -> Vec<(Level, String)> {
        let mut entries: Vec<(&String, &AliasCounts)> = self
            .by_alias
            .iter()
            .filter(|(_, counts)| counts.emitted > 0)
            .collect();
        entries.sort_by(|a, b| b.1.level.cmp(&a.1.level).then_with(|| a.0.cmp(b.0)));

        entries
            .iter()
            .map(|(name, counts)| {
                let plural = if counts.emitted == 1 { "" } else { "s" };
                let mut line = format!(
                    "{} {} message{}",
                    counts.emitted,
                    name.to_uppercase(),
                    plural
                );
                if counts.suppressed > 0 {
                    line.push_str(&format!(" ({} suppressed)", counts.suppressed));
                }
                (counts.level, line)
            })
            .collect()
    }

    /// The summary lines alone, without their levels.
    pub fn summary_lines(&self) -> Vec<String> {
        self.summary_entries()
            .into_iter()
            .map(|(_, line)| line)
            .collect()
    }

    /// Bucketed totals by standard severity, counting every attempt.
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for (level, count) in &self.by_level {
            if *level >= Level::FATAL {
                counts.fatal += count;
            } else if *level >= Level::ERROR {
                counts.errors += count;
            } else if *level >= Level::WARNING {
                counts.warnings += count;
            }
            counts.total += count;
        }
        counts
    }
}
