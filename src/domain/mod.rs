pub mod output;
pub mod polygon;
pub mod roi;

pub use output::{OutputRecord, ring_key, stem_key};
pub use polygon::{Polygon, Vertex};
pub use roi::RoiRecord;
