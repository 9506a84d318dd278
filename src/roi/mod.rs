pub mod parser;
pub mod reader;

pub use parser::{RoiOutcome, extract_centroid, normalize_coords, parse_rois};
pub use reader::read_roi_file;
