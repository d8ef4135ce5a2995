//! Main logger implementation
//!
//! The `Logger` ties the pieces together: alias resolution, the admission
//! gate (threshold, then limit), per-tier tallies, the open/close protocol,
//! and fan-out to appenders. All mutating operations serialize on one mutex,
//! so a single instance can be shared freely across threads.

use super::{
    alias::AliasRegistry,
    appender::Appender,
    error::{Result, TierlogError},
    level::Level,
    record::{format_elapsed, Record, RecordFormat},
    tally::{AliasCounts, SeverityCounts},
    tier::{Tier, TierStack},
};
use chrono::Local;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// Default maximum nesting depth, preventing runaway recursion
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Default prefix prepended to logger names
pub const DEFAULT_PREFIX: &str = "pds";

/// Default level threshold: just above HIDDEN, so everything but hidden
/// messages is admitted
const DEFAULT_THRESHOLD: Level = Level::new(Level::HIDDEN.value() + 1);

struct LoggerCore {
    registry: AliasRegistry,
    tiers: TierStack,
    /// Attached appenders, each tagged with a unique id so tier-local ones
    /// can be detached by identity at close
    appenders: Vec<(u64, Box<dyn Appender>)>,
    next_appender_id: u64,
    /// Path prefixes stripped from record details, longest first
    roots: Vec<String>,
}

/// A hierarchical logger with named severity aliases and per-alias message
/// limits.
///
/// Aliases are independent of the numeric levels they map to: the default
/// level of alias `normal` is the same as `info`, and multiple aliases may
/// share a level. An alias at `Level::HIDDEN` is always suppressed. Each
/// alias may carry a limit on the number of messages admitted per tier;
/// messages past the limit are suppressed but still tallied, so the final
/// counts reflect every attempt.
///
/// `open()` starts a new tier with its own limits and threshold and writes a
/// section header; `close()` writes a tally of the messages recorded at that
/// tier and below, merges the counts upward, and returns the summary.
pub struct Logger {
    name: String,
    format: RecordFormat,
    auto_print: bool,
    blanklines: bool,
    max_depth: usize,
    inner: Mutex<LoggerCore>,
}

impl Logger {
    /// Create a logger with default configuration.
    pub fn new(name: &str) -> Self {
        Self::builder(name).build()
    }

    /// Create a builder for a logger.
    ///
    /// # Example
    /// ```
    /// use tierlog::prelude::*;
    ///
    /// let logger = Logger::builder("volume-check")
    ///     .threshold(Level::INFO)
    ///     .limit("debug", Some(100))
    ///     .build();
    /// assert_eq!(logger.name(), "pds.volume-check");
    /// ```
    #[must_use]
    pub fn builder(name: &str) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current nesting depth beyond the root.
    pub fn depth(&self) -> usize {
        self.inner.lock().tiers.depth()
    }

    // ------------------------------------------------------------------
    // Registry and configuration
    // ------------------------------------------------------------------

    /// Add or overwrite an alias. Overwriting is silent; last write wins.
    pub fn register_alias(&self, name: &str, level: Level, limit: Option<usize>) {
        self.inner.lock().registry.register(name, level, limit);
    }

    /// Set the limit for an alias on the currently active tier.
    pub fn set_limit(&self, name: &str, limit: Option<usize>) {
        self.inner.lock().tiers.top_mut().set_limit(name, limit);
    }

    /// Set the level threshold of the currently active tier.
    pub fn set_threshold(&self, threshold: Level) {
        self.inner.lock().tiers.top_mut().set_threshold(threshold);
    }

    /// Attach an appender at the current position in the hierarchy; it stays
    /// attached for the lifetime of the logger, even when added while a tier
    /// with its own appenders is open.
    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        let mut core = self.inner.lock();
        let id = core.next_appender_id;
        core.next_appender_id += 1;
        core.appenders.push((id, appender));
    }

    /// Add one or more path prefixes to strip from record details.
    pub fn add_root(&self, root: impl AsRef<str>) {
        let mut core = self.inner.lock();
        let root = root.as_ref().trim_end_matches('/').to_string() + "/";
        if !core.roots.contains(&root) {
            core.roots.push(root);
        }
        // Longest prefixes strip first
        core.roots.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    }

    /// Replace the existing roots with a new one.
    pub fn replace_root(&self, root: impl AsRef<str>) {
        self.inner.lock().roots.clear();
        self.add_root(root);
    }

    /// Flush every attached appender.
    pub fn flush(&self) -> Result<()> {
        let mut core = self.inner.lock();
        for (_, appender) in core.appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------

    /// Log one message under an alias.
    ///
    /// Fails with `UnknownAlias` if the alias was never registered; that is
    /// a programming mistake and is surfaced rather than recovered.
    pub fn log(&self, alias: &str, message: impl AsRef<str>) -> Result<()> {
        self.dispatch(alias, message.as_ref(), None, false)
    }

    /// Log one message with a trailing file-path detail.
    pub fn log_path(
        &self,
        alias: &str,
        message: impl AsRef<str>,
        path: impl AsRef<str>,
    ) -> Result<()> {
        self.dispatch(alias, message.as_ref(), Some(path.as_ref()), false)
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log_builtin("debug", message.as_ref());
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log_builtin("info", message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log_builtin("warn", message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log_builtin("error", message.as_ref());
    }

    pub fn critical(&self, message: impl AsRef<str>) {
        self.log_builtin("critical", message.as_ref());
    }

    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log_builtin("fatal", message.as_ref());
    }

    /// Log a message with alias `normal`, used for any ordinary outcome.
    pub fn normal(&self, message: impl AsRef<str>) {
        self.log_builtin("normal", message.as_ref());
    }

    /// Log a message with alias `ds_store`, for a ".DS_Store" file.
    pub fn ds_store(&self, message: impl AsRef<str>) {
        self.log_builtin("ds_store", message.as_ref());
    }

    /// Log a message with alias `dot_`, for a file name beginning "._".
    pub fn dot_underscore(&self, message: impl AsRef<str>) {
        self.log_builtin("dot_", message.as_ref());
    }

    /// Log a message with alias `invisible`, for any other invisible file.
    pub fn invisible(&self, message: impl AsRef<str>) {
        self.log_builtin("invisible", message.as_ref());
    }

    /// Log a message with alias `hidden`: tallied but never displayed
    /// unless the alias is re-registered with a concrete level.
    pub fn hidden(&self, message: impl AsRef<str>) {
        self.log_builtin("hidden", message.as_ref());
    }

    // Path-detail variants of the convenience methods above

    pub fn debug_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("debug", message.as_ref(), path.as_ref());
    }

    pub fn info_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("info", message.as_ref(), path.as_ref());
    }

    pub fn warn_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("warn", message.as_ref(), path.as_ref());
    }

    pub fn error_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("error", message.as_ref(), path.as_ref());
    }

    pub fn critical_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("critical", message.as_ref(), path.as_ref());
    }

    pub fn fatal_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("fatal", message.as_ref(), path.as_ref());
    }

    pub fn normal_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("normal", message.as_ref(), path.as_ref());
    }

    pub fn ds_store_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("ds_store", message.as_ref(), path.as_ref());
    }

    pub fn dot_underscore_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("dot_", message.as_ref(), path.as_ref());
    }

    pub fn invisible_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("invisible", message.as_ref(), path.as_ref());
    }

    pub fn hidden_path(&self, message: impl AsRef<str>, path: impl AsRef<str>) {
        self.log_builtin_path("hidden", message.as_ref(), path.as_ref());
    }

    /// Log an error value under alias `exception`, forced past any limit.
    pub fn exception(&self, error: &dyn std::error::Error, path: Option<&str>) {
        let message = format!("**** {}", error);
        if let Err(err) = self.dispatch("exception", &message, path, true) {
            eprintln!("[TIERLOG ERROR] {}", err);
        }
    }

    // Built-in aliases are seeded at construction and can be re-leveled but
    // never removed, so dispatch cannot fail with UnknownAlias here.
    fn log_builtin(&self, alias: &str, message: &str) {
        if let Err(err) = self.dispatch(alias, message, None, false) {
            eprintln!("[TIERLOG ERROR] {}", err);
        }
    }

    fn log_builtin_path(&self, alias: &str, message: &str, path: &str) {
        if let Err(err) = self.dispatch(alias, message, Some(path), false) {
            eprintln!("[TIERLOG ERROR] {}", err);
        }
    }

    /// Message counts for an alias on the currently active tier.
    pub fn alias_counts(&self, alias: &str) -> Option<AliasCounts> {
        self.inner.lock().tiers.top().tally().counts(&alias.to_lowercase())
    }

    /// Severity buckets for the currently active tier, including suppressed
    /// attempts.
    pub fn summarize(&self) -> SeverityCounts {
        self.inner.lock().tiers.top().tally().severity_counts()
    }

    // ------------------------------------------------------------------
    // Hierarchy
    // ------------------------------------------------------------------

    /// Begin a new tier, inheriting the parent's threshold and limits.
    pub fn open(&self, title: &str) -> Result<()> {
        self.open_with(title, TierOptions::new())
    }

    /// Begin a new tier with explicit overrides.
    ///
    /// A header record is written at the current depth before the tier is
    /// pushed. Headers bypass limit accounting so hierarchy visibility can
    /// never itself be suppressed by a limit.
    pub fn open_with(&self, title: &str, options: TierOptions) -> Result<()> {
        let mut core = self.inner.lock();
        let core = &mut *core;

        if core.tiers.depth() >= self.max_depth {
            return Err(TierlogError::max_depth(self.max_depth));
        }

        let mut title = title.to_string();
        if let Some(path) = &options.path {
            let stripped = strip_roots(path, &core.roots);
            if !stripped.is_empty() {
                title.push_str(": ");
                title.push_str(&stripped);
            }
        }

        // Header at the current depth, uncounted
        let (header_level, _) = core.registry.resolve("header")?;
        let depth = core.tiers.depth();
        if header_level >= core.tiers.top().threshold() {
            let record = self.make_record(depth, "HEADER", header_level, &title, None);
            self.forward(&mut core.appenders, &record);
        }

        let mut local_ids = Vec::with_capacity(options.appenders.len());
        for _ in 0..options.appenders.len() {
            local_ids.push(core.next_appender_id);
            core.next_appender_id += 1;
        }
        let child = core.tiers.top().child(
            title,
            options.threshold,
            &options.limits,
            local_ids.clone(),
        );
        core.tiers.push(child);
        core.appenders
            .extend(local_ids.into_iter().zip(options.appenders));
        Ok(())
    }

    /// Begin a new tier that closes when the returned guard is dropped,
    /// including during unwinding.
    pub fn scope(&self, title: &str) -> Result<TierGuard<'_>> {
        self.scope_with(title, TierOptions::new())
    }

    pub fn scope_with(&self, title: &str, options: TierOptions) -> Result<TierGuard<'_>> {
        self.open_with(title, options)?;
        Ok(TierGuard {
            logger: self,
            closed: false,
        })
    }

    /// Close the most recently opened tier.
    ///
    /// Writes `SUMMARY` records at the parent depth ("Completed", elapsed
    /// time, then one line per alias with admitted messages), merges the
    /// tier's tally into its parent, detaches tier-local appenders, and
    /// returns the summary for programmatic inspection.
    ///
    /// Fails with `UnbalancedContext` when only the root is present.
    pub fn close(&self) -> Result<TierSummary> {
        let mut core = self.inner.lock();
        let core = &mut *core;

        let tier = core.tiers.pop()?;
        let elapsed = (Local::now() - tier.start_time())
            .to_std()
            .unwrap_or_default();
        let lines = tier.tally().summary_lines();
        let counts = tier.tally().severity_counts();

        // Merge counts upward; additive, identity preserved by the parent
        core.tiers.top_mut().tally_mut().merge(tier.tally());

        // Detach and flush this tier's local appenders, by identity
        let local_ids = tier.local_appenders();
        if !local_ids.is_empty() {
            for (id, mut appender) in std::mem::take(&mut core.appenders) {
                if !local_ids.contains(&id) {
                    core.appenders.push((id, appender));
                    continue;
                }
                if let Err(err) = appender.flush() {
                    eprintln!(
                        "[TIERLOG ERROR] Appender '{}' failed to flush: {}",
                        appender.name(),
                        err
                    );
                }
            }
        }

        // Summary records at the parent depth. Header-level lines are gated
        // on the parent threshold; each tally line carries the higher of its
        // alias's level and the header level, so severe tallies survive a
        // threshold that suppresses headers.
        let (header_level, _) = core.registry.resolve("header")?;
        let depth = core.tiers.depth();
        let threshold = core.tiers.top().threshold();
        let mut wrote_any = false;

        if header_level >= threshold {
            let completed = format!("Completed: {}", tier.title());
            let record = self.make_record(depth, "SUMMARY", header_level, &completed, None);
            self.forward(&mut core.appenders, &record);
            wrote_any = true;

            if self.format.timestamps {
                let text = format!("Elapsed time = {}", format_elapsed(elapsed));
                let record = self.make_record(depth, "SUMMARY", header_level, &text, None);
                self.forward(&mut core.appenders, &record);
            }
        }

        for (line_level, line) in tier.tally().summary_entries() {
            let level = line_level.max(header_level);
            if level >= threshold {
                let record = self.make_record(depth, "SUMMARY", level, &line, None);
                self.forward(&mut core.appenders, &record);
                wrote_any = true;
            }
        }

        if self.blanklines && wrote_any {
            let record = self.make_record(depth, "", header_level, "", None);
            self.forward(&mut core.appenders, &record);
        }

        Ok(TierSummary {
            title: tier.title().to_string(),
            elapsed,
            lines,
            counts,
        })
    }

    // ------------------------------------------------------------------
    // Admission and forwarding
    // ------------------------------------------------------------------

    fn dispatch(&self, alias: &str, message: &str, path: Option<&str>, force: bool) -> Result<()> {
        let mut core = self.inner.lock();
        let core = &mut *core;

        let alias_lc = alias.to_lowercase();
        let (level, base_limit) = core.registry.resolve(&alias_lc)?;
        let depth = core.tiers.depth();
        let tier = core.tiers.top_mut();
        let limit = tier.limit_for(&alias_lc, base_limit);

        if !force {
            // Severity gate: HIDDEN never passes, then the tier threshold
            if level == Level::HIDDEN || level < tier.threshold() {
                tier.tally_mut().record(&alias_lc, level, false);
                return Ok(());
            }

            // Limit gate: suppressed messages still count, so the tally
            // reflects true total attempts
            if let Some(limit) = limit {
                if tier.tally().emitted(&alias_lc) >= limit as u64 {
                    let first = tier.tally().suppressed(&alias_lc) == 0;
                    tier.tally_mut().record(&alias_lc, level, false);
                    if first && limit > 0 {
                        let note = format!(
                            "Additional {} messages suppressed",
                            alias_lc.to_uppercase()
                        );
                        let record = self.make_record(
                            depth,
                            alias_lc.to_uppercase(),
                            level,
                            &note,
                            None,
                        );
                        self.forward(&mut core.appenders, &record);
                    }
                    return Ok(());
                }
            }
        }

        tier.tally_mut().record(&alias_lc, level, true);
        let detail = path.map(|p| strip_roots(p, &core.roots)).filter(|p| !p.is_empty());
        let record = Record::new(
            self.name.clone(),
            depth,
            alias_lc.to_uppercase(),
            level,
            message,
        )
        .with_detail(detail);
        self.forward(&mut core.appenders, &record);
        Ok(())
    }

    fn make_record(
        &self,
        depth: usize,
        label: impl Into<String>,
        level: Level,
        text: &str,
        detail: Option<String>,
    ) -> Record {
        Record::new(self.name.clone(), depth, label, level, text).with_detail(detail)
    }

    /// Hand a record to every appender, isolating failures so a broken sink
    /// never aborts the caller's business logic. With no appenders attached
    /// and `auto_print` enabled, the rendered line goes to stdout.
    fn forward(&self, appenders: &mut [(u64, Box<dyn Appender>)], record: &Record) {
        let line = self.format.render(record);
        if appenders.is_empty() {
            if self.auto_print {
                println!("{}", line);
            }
            return;
        }
        for (_, appender) in appenders.iter_mut() {
            if let Err(err) = appender.append(record, &line) {
                eprintln!(
                    "[TIERLOG ERROR] Appender '{}' failed: {}",
                    appender.name(),
                    err
                );
            }
        }
    }
}

fn strip_roots(path: &str, roots: &[String]) -> String {
    for root in roots {
        if let Some(stripped) = path.strip_prefix(root.as_str()) {
            return stripped.to_string();
        }
    }
    path.to_string()
}

/// The result of closing a tier, for programmatic inspection.
#[derive(Debug, Clone)]
pub struct TierSummary {
    pub title: String,
    pub elapsed: Duration,
    /// The per-alias lines as written to the log
    pub lines: Vec<String>,
    pub counts: SeverityCounts,
}

/// Overrides for a new tier. Anything left unset inherits from the parent.
#[derive(Default)]
pub struct TierOptions {
    threshold: Option<Level>,
    limits: HashMap<String, Option<usize>>,
    appenders: Vec<Box<dyn Appender>>,
    path: Option<String>,
}

impl TierOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level threshold for the new tier and its descendants.
    #[must_use]
    pub fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Limit override for one alias, for this subtree only.
    #[must_use]
    pub fn limit(mut self, alias: &str, limit: Option<usize>) -> Self {
        self.limits.insert(alias.to_lowercase(), limit);
        self
    }

    /// Appender attached only until the tier closes.
    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// File path appended to the tier title.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// RAII guard for a tier: dropping it closes the tier, so the close-and-merge
/// step runs even when the scope body fails partway through.
///
/// # Example
///
/// ```
/// use tierlog::prelude::*;
///
/// let logger = Logger::builder("task").auto_print(false).build();
/// {
///     let _tier = logger.scope("Sub-task").unwrap();
///     logger.info("working");
/// }
/// // tier closed and merged here
/// assert_eq!(logger.depth(), 0);
/// ```
pub struct TierGuard<'a> {
    logger: &'a Logger,
    closed: bool,
}

impl TierGuard<'_> {
    /// Close the tier now and return its summary.
    pub fn close(mut self) -> Result<TierSummary> {
        self.closed = true;
        self.logger.close()
    }
}

impl Drop for TierGuard<'_> {
    fn drop(&mut self) {
        if !self.closed {
            if let Err(err) = self.logger.close() {
                eprintln!("[TIERLOG ERROR] Failed to close tier: {}", err);
            }
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use tierlog::prelude::*;
///
/// let logger = Logger::builder("validation")
///     .threshold(Level::DEBUG)
///     .limit("ds_store", Some(10))
///     .timestamps(false)
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    prefix: Option<String>,
    threshold: Level,
    default_limit: Option<usize>,
    aliases: Vec<(String, Level, Option<usize>)>,
    limits: Vec<(String, Option<usize>)>,
    appenders: Vec<Box<dyn Appender>>,
    format: RecordFormat,
    auto_print: bool,
    blanklines: bool,
    max_depth: usize,
    roots: Vec<String>,
}

impl LoggerBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            prefix: Some(DEFAULT_PREFIX.to_string()),
            threshold: DEFAULT_THRESHOLD,
            default_limit: None,
            aliases: Vec::new(),
            limits: Vec::new(),
            appenders: Vec::new(),
            format: RecordFormat::default(),
            auto_print: true,
            blanklines: true,
            max_depth: DEFAULT_MAX_DEPTH,
            roots: Vec::new(),
        }
    }

    /// Prefix prepended to the logger name when not already present.
    /// `None` disables prefixing.
    #[must_use]
    pub fn prefix(mut self, prefix: Option<&str>) -> Self {
        self.prefix = prefix.map(String::from);
        self
    }

    /// Minimum level for a record to enter the log.
    #[must_use]
    pub fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Limit applied to every alias without an explicit limit of its own.
    #[must_use]
    pub fn default_limit(mut self, limit: Option<usize>) -> Self {
        self.default_limit = limit;
        self
    }

    /// Register an additional alias at construction.
    #[must_use]
    pub fn alias(mut self, name: &str, level: Level, limit: Option<usize>) -> Self {
        self.aliases.push((name.to_string(), level, limit));
        self
    }

    /// Set the limit of an already-registered alias (built-ins included).
    #[must_use]
    pub fn limit(mut self, name: &str, limit: Option<usize>) -> Self {
        self.limits.push((name.to_string(), limit));
        self
    }

    /// Add an initial appender.
    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Include time tags in log records.
    #[must_use]
    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.format.timestamps = timestamps;
        self
    }

    /// Fractional digits in the seconds field of the time tag.
    #[must_use]
    pub fn digits(mut self, digits: usize) -> Self {
        self.format.digits = digits;
        self
    }

    /// Include the logger name in log records.
    #[must_use]
    pub fn lognames(mut self, lognames: bool) -> Self {
        self.format.lognames = lognames;
        self
    }

    /// Include this process's ID in log records.
    #[must_use]
    pub fn pid(mut self, pid: bool) -> Self {
        self.format.pid = pid.then(std::process::id);
        self
    }

    /// Include tier markers in log records.
    #[must_use]
    pub fn indent(mut self, indent: bool) -> Self {
        self.format.indent = indent;
        self
    }

    /// Print rendered lines to stdout when no appenders are attached.
    #[must_use]
    pub fn auto_print(mut self, auto_print: bool) -> Self {
        self.auto_print = auto_print;
        self
    }

    /// Write a blank line after each tier closes.
    #[must_use]
    pub fn blanklines(mut self, blanklines: bool) -> Self {
        self.blanklines = blanklines;
        self
    }

    /// Maximum nesting depth.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Path prefix stripped from record details.
    #[must_use]
    pub fn root(mut self, root: &str) -> Self {
        self.roots.push(root.to_string());
        self
    }

    pub fn build(self) -> Logger {
        // Exactly one trailing dot on the prefix
        let name = match &self.prefix {
            Some(prefix) if !prefix.is_empty() => {
                let prefix = prefix.trim_end_matches('.').to_string() + ".";
                if self.name.starts_with(&prefix) {
                    self.name.clone()
                } else {
                    prefix + &self.name
                }
            }
            _ => self.name.clone(),
        };

        let mut registry = AliasRegistry::with_default_limit(self.default_limit);
        for (alias, level, limit) in self.aliases {
            registry.register(alias, level, limit);
        }
        for (alias, limit) in self.limits {
            registry.set_limit(&alias, limit);
        }

        let appenders: Vec<(u64, Box<dyn Appender>)> = self
            .appenders
            .into_iter()
            .enumerate()
            .map(|(i, appender)| (i as u64, appender))
            .collect();
        let next_appender_id = appenders.len() as u64;

        let root = Tier::root(name.clone(), self.threshold, registry.base_limits());
        let logger = Logger {
            name,
            format: self.format,
            auto_print: self.auto_print,
            blanklines: self.blanklines,
            max_depth: self.max_depth,
            inner: Mutex::new(LoggerCore {
                registry,
                tiers: TierStack::new(root),
                appenders,
                next_appender_id,
                roots: Vec::new(),
            }),
        };
        for root in self.roots {
            logger.add_root(root);
        }
        logger
    }
}
