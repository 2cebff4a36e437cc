// feed.rs - incident lists coming from outside the process
use super::{Incident, Priority};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;
use std::path::Path;

/// Wire shape of a feed record. `id` is optional here so that malformed
/// records can be reported and dropped instead of failing the whole feed.
#[derive(Debug, Deserialize)]
struct FeedRecord {
    id: Option<String>,
    #[serde(default)]
    title: String,
    category: String,
    priority: Priority,
    reported_at: DateTime<Utc>,
}

/// Parse a JSON array of incident records
///
/// Records without a usable `id` are dropped before they can reach
/// positioning. Input order of the surviving records is preserved.
pub fn parse_feed(json: &str) -> Result<Vec<Incident>> {
    let records: Vec<FeedRecord> =
        serde_json::from_str(json).context("Failed to parse incident feed")?;
    let total = records.len();

    let incidents: Vec<Incident> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match record.id {
            Some(id) if !id.trim().is_empty() => Some(Incident {
                id,
                title: record.title,
                category: record.category,
                priority: record.priority,
                reported_at: record.reported_at,
            }),
            _ => {
                warn!(
                    "Dropping feed record #{} ({}): missing id",
                    index, record.category
                );
                None
            }
        })
        .collect();

    debug!("Feed accepted {} of {} records", incidents.len(), total);
    Ok(incidents)
}

/// Read and parse an incident feed file
pub fn load_feed(path: impl AsRef<Path>) -> Result<Vec<Incident>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read incident feed at {}", path.display()))?;
    parse_feed(&raw).with_context(|| format!("Invalid incident feed at {}", path.display()))
}
