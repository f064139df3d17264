#![forbid(unsafe_code)]

pub mod config;
pub mod output;
pub mod snapshot;

use ccpi_core::observe::TracingObserver;
use ccpi_core::{CompositeResult, EngineSettings};

pub use config::{ConfigError, EngineConfigFile, load_engine_config, parse_engine_config};
pub use output::{CompositeResultJson, render_result, render_result_json};
pub use snapshot::{SnapshotError, parse_snapshot_json};

/// Parse a JSON snapshot and evaluate it, logging each stage via `tracing`.
pub fn evaluate_snapshot_json(
    text: &str,
    settings: &EngineSettings,
) -> Result<CompositeResult, SnapshotError> {
    let raw = parse_snapshot_json(text)?;
    Ok(ccpi_core::evaluate_raw(&raw, settings, &mut TracingObserver))
}
