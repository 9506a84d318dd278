use super::rounding::round_coord;
use crate::config::LayoutConfig;
use crate::domain::{Polygon, Vertex};

/// Builds the row of rectangular stem markers drawn below a ring.
///
/// Widths and heights are halved with floor division, so an odd width
/// loses one unit.
#[derive(Debug, Clone, Copy)]
pub struct StemBuilder {
    pub width: i64,
    pub height: i64,
    pub spacing: i64,
    pub offset_y: i64,
}

impl Default for StemBuilder {
    fn default() -> Self {
        Self::from_layout(&LayoutConfig::default())
    }
}

impl StemBuilder {
    pub fn from_layout(layout: &LayoutConfig) -> Self {
        Self {
            width: layout.stem_width,
            height: layout.stem_height,
            spacing: layout.stem_spacing,
            offset_y: layout.stem_offset_y,
        }
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: i64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Horizontal offset from the ring center of stem `stem_number` (1-based)
    /// in a row of `total_stems`, before rounding
    pub fn offset_x(&self, stem_number: usize, total_stems: usize) -> f64 {
        let spacing = self.spacing as f64;
        let start_offset = -(total_stems as f64 - 1.0) / 2.0 * spacing;
        start_offset + (stem_number as f64 - 1.0) * spacing
    }

    /// Closed rectangle: top-left, top-right, bottom-right, bottom-left, top-left
    pub fn build(&self, center: (f64, f64), stem_number: usize, total_stems: usize) -> Polygon {
        let (cx, cy) = center;
        let stem_x = round_coord(cx + self.offset_x(stem_number, total_stems));
        let stem_y = round_coord(cy + self.offset_y as f64);

        let half_width = self.width.div_euclid(2);
        let half_height = self.height.div_euclid(2);

        let left = stem_x - half_width;
        let right = stem_x + half_width;
        let top = stem_y - half_height;
        let bottom = stem_y + half_height;

        Polygon::new(vec![
            Vertex(left, top),
            Vertex(right, top),
            Vertex(right, bottom),
            Vertex(left, bottom),
            Vertex(left, top),
        ])
    }

    /// All `total_stems` stems for one ring, left to right
    pub fn build_row(&self, center: (f64, f64), total_stems: usize) -> Vec<Polygon> {
        (1..=total_stems)
            .map(|stem_number| self.build(center, stem_number, total_stems))
            .collect()
    }
}
