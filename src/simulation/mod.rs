pub mod rpc;
pub mod transformations;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::common::Config;
use crate::models::errors::{DocumentError, TransformError};
use crate::models::events::{NormalizedEvent, RawLogEntry};
use crate::simulation::rpc::{SimulationFetcher, SimulationSource};
use crate::simulation::transformations::events::{EventTransformer, list_shape_mismatches};
use crate::storage::write_events;

const LOGS_POINTER: &str = "/transaction/transaction_info/call_trace/logs";
const LOGS_PATH: &str = "transaction.transaction_info.call_trace.logs";

/// Pulls the emitted log entries out of a simulation response.
pub fn extract_logs(document: &Value) -> Result<Vec<RawLogEntry>, DocumentError> {
    let logs = document
        .pointer(LOGS_POINTER)
        .filter(|logs| !logs.is_null())
        .ok_or_else(|| DocumentError::MissingLogs {
            path: LOGS_PATH.to_string(),
        })?;

    Ok(Vec::<RawLogEntry>::deserialize(logs)?)
}

/// Transforms every entry and tags it with its position in the batch.
/// The first malformed entry fails the whole batch.
pub fn normalize_events(logs: &[RawLogEntry]) -> Result<Vec<NormalizedEvent>, TransformError> {
    logs.iter()
        .enumerate()
        .map(|(id, log)| Ok(NormalizedEvent::new(id, log.transform_event()?)))
        .collect()
}

pub fn process_simulation(document: &Value) -> Result<Vec<NormalizedEvent>> {
    let logs = extract_logs(document)?;
    info!("Simulation emitted {} log entries", logs.len());

    let events = normalize_events(&logs)?;
    for event in &events {
        for key in list_shape_mismatches(&event.fields) {
            warn!(
                "Event {} ({}): expected a list for {}, got {}",
                event.id,
                event.name().unwrap_or_default(),
                key,
                event.fields[key]
            );
        }
    }

    let recognized = events.iter().filter(|event| event.is_recognized()).count();
    info!("Recognized {} of {} events", recognized, events.len());

    Ok(events)
}

/// Fetch, transform and write. Nothing is written unless every earlier step
/// succeeded. Returns the path of the written file.
pub async fn run(config: &Config) -> Result<PathBuf> {
    let url = config.simulation_url()?;
    let fetcher = SimulationFetcher::new(url);
    let output_path = PathBuf::from(&config.output_path);

    fetch_and_write(&fetcher, &output_path).await?;
    Ok(output_path)
}

pub async fn fetch_and_write<S: SimulationSource>(
    source: &S,
    output_path: &Path,
) -> Result<Vec<NormalizedEvent>> {
    info!("========================== MAKING REQUEST ==========================");
    let document = source
        .fetch()
        .await
        .context("failed to fetch simulation")?;
    info!("=========================== REQUEST DONE ===========================");

    let events = process_simulation(&document).context("failed to process simulation")?;

    info!("========================== WRITING OUTPUT ==========================");
    write_events(output_path, &events)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!("Wrote {} events to {}", events.len(), output_path.display());

    Ok(events)
}
