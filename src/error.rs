use thiserror::Error;

/// Rejected arguments. Lookups that find nothing are not errors; they
/// return `None`/`false`.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("coordinate ({0}, {1}) has a NaN component")]
    NanCoordinate(f64, f64),
    #[error("query rectangle is empty")]
    EmptyRectangle,
}
