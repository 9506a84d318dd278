pub mod centroid;
pub mod ring;
pub mod rounding;
pub mod stem;

pub use centroid::centroid;
pub use ring::{RingBuilder, circle_polygon};
pub use rounding::round_coord;
pub use stem::StemBuilder;
