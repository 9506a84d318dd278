/// A well-formed ROI reduced to its vertex-mean center
#[derive(Debug, Clone, PartialEq)]
pub struct RoiRecord {
    pub id: String,
    pub center: (f64, f64),
}

impl RoiRecord {
    pub fn new(id: impl Into<String>, center: (f64, f64)) -> Self {
        Self {
            id: id.into(),
            center,
        }
    }
}
