//! Basic logger usage example
//!
//! Demonstrates aliases, limits, and the console appender.
//!
//! Run with: cargo run --example basic_usage

use tierlog::prelude::*;

fn main() -> Result<()> {
    println!("=== Tierlog - Basic Usage Example ===\n");

    let logger = Logger::builder("demo")
        .appender(ConsoleAppender::new())
        .limit("debug", Some(3))
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Domain aliases for file cleanliness checks:");
    logger.ds_store("Found .DS_Store file");
    logger.dot_underscore("Found ._manifest file");
    logger.invisible("Found other hidden file");
    logger.normal("An ordinary, expected outcome");

    println!("\n3. Limits in action (debug capped at 3):");
    for i in 0..6 {
        logger.debug(format!("Debug message {}", i));
    }

    println!("\n4. Custom alias:");
    logger.register_alias("checksum_bad", Level::ERROR, Some(2));
    logger.log("checksum_bad", "MD5 mismatch in data.dat")?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
