// forced.rs - demo ids pinned next to each other
//
// Guarantees the demo map always shows a cluster. Delete this table (and
// its lookup in `assign_position`) once reports carry real coordinates.

/// (id, top, left) overrides, all within a few percent of (45, 50)
const FORCED_PROXIMITY: &[(&str, f64, f64)] = &[
    ("D1", 45.0, 50.0),
    ("D2", 47.0, 52.0),
    ("D3", 44.0, 53.0),
];

pub fn forced_position(id: &str) -> Option<(f64, f64)> {
    FORCED_PROXIMITY
        .iter()
        .find(|(forced_id, _, _)| *forced_id == id)
        .map(|&(_, top, left)| (top, left))
}

pub fn is_forced(id: &str) -> bool {
    forced_position(id).is_some()
}
