use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PositionError {
    #[error("Cannot place incident with an empty id")]
    EmptyId,

    #[error("Placement for incident {id} is not finite (top: {top}, left: {left})")]
    NonFinite { id: String, top: f64, left: f64 },
}
