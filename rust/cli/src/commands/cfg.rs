//! Configuration command handler.
//!
//! Implements the `cfg` command, which displays the resolved configuration
//! with the source of each value (default, configuration file, or
//! environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "hands": {
//!     "value": 5,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "hands": {
            "value": config.hands,
            "source": sources.hands,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });

    let rendered = serde_json::to_string_pretty(&display)
        .map_err(|e| CliError::Config(format!("cannot render configuration: {}", e)))?;
    writeln!(out, "{}", rendered)?;

    Ok(())
}
