//! Hierarchy example
//!
//! Demonstrates nested tiers with headers, per-tier limits, and tally
//! summaries on close.
//!
//! Run with: cargo run --example hierarchy

use tierlog::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::builder("validation")
        .appender(ConsoleAppender::new())
        .root("/volumes")
        .build();

    logger.open("Validating volume v1")?;
    logger.info("Index file found");

    {
        let tier = logger.scope_with(
            "Checking file cleanliness",
            TierOptions::new().limit("ds_store", Some(2)),
        )?;
        for dir in ["a", "b", "c", "d"] {
            logger.log_path("ds_store", "Extraneous file", format!("/volumes/v1/{}", dir))?;
        }
        tier.close()?;
    }

    logger.open_with(
        "Verifying checksums",
        TierOptions::new().threshold(Level::WARNING),
    )?;
    logger.info("This is below the tier threshold and suppressed");
    logger.warn("Checksum file is outdated");
    logger.close()?;

    let summary = logger.close()?;
    println!("\nProgrammatic summary of '{}':", summary.title);
    for line in &summary.lines {
        println!("  {}", line);
    }
    println!("  warnings = {}", summary.counts.warnings);
    Ok(())
}
