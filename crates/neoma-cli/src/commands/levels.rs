//! Levels command
//!
//! Usage: neoma levels

use neoma_core_types::LogLevel;

/// Execute levels command
pub fn execute() -> anyhow::Result<()> {
    for level in LogLevel::ALL {
        println!(
            "{:<8} {:>3}  {}",
            level.as_str(),
            level.severity(),
            level.backend_label()
        );
    }
    Ok(())
}
