use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::clusterer::{cluster, Cluster};
use crate::config::{ConfigError, MapConfig};
use crate::filter::CategoryFilter;
use crate::incident::Incident;
use crate::position::{position_incidents, PositionError};

#[derive(Error, Debug, PartialEq)]
pub enum MapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Everything the home screen needs to draw the incident map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub filter: CategoryFilter,
    pub threshold: f64,
    /// Number of incidents that passed the filter
    pub visible: usize,
    pub clusters: Vec<Cluster>,
}

/// Filter, place and cluster incidents for one render
///
/// Pure: the same incidents in the same order with the same filter and
/// config always produce the same view.
pub fn build_map(
    incidents: &[Incident],
    filter: CategoryFilter,
    config: &MapConfig,
) -> Result<MapView, MapError> {
    config.validate()?;

    let visible = filter.apply(incidents);
    let points = position_incidents(visible.iter().copied(), &config.layout)?;
    let clusters = cluster(&points, config.threshold);

    debug!(
        "Map [{}]: {} of {} incidents visible, {} markers",
        filter,
        points.len(),
        incidents.len(),
        clusters.len()
    );

    Ok(MapView {
        filter,
        threshold: config.threshold,
        visible: points.len(),
        clusters,
    })
}
