mod error;
mod forced;
mod layout;


pub use error::PositionError;
pub use forced::is_forced;
pub use layout::Layout;

use crate::incident::{Incident, IncidentPoint};
use serde::Serialize;

/// A point on the map surface, in percent of the container size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

fn id_hash(id: &str) -> f64 {
    id.chars().map(|c| f64::from(u32::from(c))).sum()
}

/// Deterministic display position for an incident id
///
/// Ids listed in the forced-proximity table skip hashing entirely. Every
/// other id is hashed and folded into the layout's ranges.
pub fn assign_position(id: &str, layout: &Layout) -> Result<Position, PositionError> {
    if id.trim().is_empty() {
        return Err(PositionError::EmptyId);
    }

    let (top, left) = match forced::forced_position(id) {
        Some(pinned) => pinned,
        None => {
            let h = id_hash(id);
            (
                layout.top_min + (h * layout.top_multiplier).rem_euclid(layout.top_span),
                layout.left_min + (h * layout.left_multiplier).rem_euclid(layout.left_span),
            )
        }
    };

    if !top.is_finite() || !left.is_finite() {
        return Err(PositionError::NonFinite {
            id: id.to_string(),
            top,
            left,
        });
    }

    Ok(Position { top, left })
}

/// Place every incident, preserving input order
pub fn position_incidents<'a, I>(
    incidents: I,
    layout: &Layout,
) -> Result<Vec<IncidentPoint>, PositionError>
where
    I: IntoIterator<Item = &'a Incident>,
{
    incidents
        .into_iter()
        .map(|incident| {
            let Position { top, left } = assign_position(&incident.id, layout)?;
            Ok(IncidentPoint::from_incident(incident, top, left))
        })
        .collect()
}
