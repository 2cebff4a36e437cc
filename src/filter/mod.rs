mod active;
mod group;


pub use active::{CategoryFilter, UnknownFilter};
pub use group::CategoryGroup;
