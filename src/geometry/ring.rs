use std::f64::consts::PI;

use super::rounding::round_coord;
use crate::config::LayoutConfig;
use crate::domain::{Polygon, Vertex};

/// Sample a closed circle approximation.
///
/// Produces `num_points + 1` vertices; the last sample is taken at angle 2π,
/// which lands on the same rounded vertex as the first one.
pub fn circle_polygon(center: (f64, f64), radius: f64, num_points: usize) -> Polygon {
    let (cx, cy) = center;
    let n = num_points as f64;

    (0..=num_points)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n;
            Vertex(
                round_coord(cx + radius * angle.cos()),
                round_coord(cy + radius * angle.sin()),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

/// Builds hollow ring polygons: an outer circle followed by the inner circle
/// in reverse, so the two boundaries have opposite winding and fill rules
/// leave the middle empty.
#[derive(Debug, Clone, Copy)]
pub struct RingBuilder {
    pub radius: i64,
    pub stroke_width: i64,
    pub num_points: usize,
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::from_layout(&LayoutConfig::default())
    }
}

impl RingBuilder {
    pub fn from_layout(layout: &LayoutConfig) -> Self {
        Self {
            radius: layout.radius,
            stroke_width: layout.stroke_width,
            num_points: layout.num_points,
        }
    }

    pub fn with_radius(mut self, radius: i64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: i64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    pub fn outer_radius(&self) -> i64 {
        self.radius + self.stroke_width.div_euclid(2)
    }

    pub fn inner_radius(&self) -> i64 {
        self.radius - self.stroke_width.div_euclid(2)
    }

    /// Number of vertices every ring from this builder has
    pub fn vertex_count(&self) -> usize {
        2 * (self.num_points + 1)
    }

    pub fn build(&self, center: (f64, f64)) -> Polygon {
        let outer = circle_polygon(center, self.outer_radius() as f64, self.num_points);
        let inner = circle_polygon(center, self.inner_radius() as f64, self.num_points);

        let mut vertices = outer.vertices;
        vertices.extend(inner.vertices.into_iter().rev());
        Polygon::new(vertices)
    }
}
