mod coordinate;
mod error;
pub mod from_wkt;
mod kdtree;
mod rectangle;

pub use coordinate::Coordinate;
pub use error::Error;
pub use kdtree::KdTreeMap;
pub use rectangle::{HasEnvelope, Rectangle};
