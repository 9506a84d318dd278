//! Sanity checks on generated polygons before they are written
//!
//! - Every polygon is closed (first vertex repeated at the end)
//! - Ring halves each close on their own
//! - Ring halves wind in opposite directions, so fill rules leave a hole
//!
//! Problems are reported, never fatal.

use geo::Winding;
use geo::winding_order::WindingOrder;

use crate::domain::Polygon;

/// Tally of issues found across a file's polygons
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Total number of polygons checked
    pub total: usize,
    /// Polygons whose last vertex differs from the first
    pub open: usize,
    /// Polygons with an unexpected vertex count
    pub bad_length: usize,
    /// Rings whose halves do not have opposite winding
    pub bad_winding: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn has_issues(&self) -> bool {
        self.open > 0 || self.bad_length > 0 || self.bad_winding > 0
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Polygons valid: {} checked, no issues", self.total)
        } else {
            format!(
                "Polygon issues: {} checked, {} open, {} bad length, {} bad winding",
                self.total, self.open, self.bad_length, self.bad_winding
            )
        }
    }
}

/// Check a ring built with `num_points` angular samples
pub fn validate_ring(
    result: &mut ValidationResult,
    key: &str,
    ring: &Polygon,
    num_points: usize,
) {
    result.total += 1;

    let half = num_points + 1;
    if ring.len() != 2 * half {
        result.bad_length += 1;
        result.warnings.push(format!(
            "{}: ring has {} vertices, expected {}",
            key,
            ring.len(),
            2 * half
        ));
        return;
    }

    let outer = Polygon::new(ring.vertices[..half].to_vec());
    let inner = Polygon::new(ring.vertices[half..].to_vec());

    if !outer.is_closed() || !inner.is_closed() {
        result.open += 1;
        result
            .warnings
            .push(format!("{}: ring boundary does not close", key));
        return;
    }

    let outer_order = outer.to_line_string().winding_order();
    let inner_order = inner.to_line_string().winding_order();
    if !opposite(outer_order, inner_order) {
        result.bad_winding += 1;
        result.warnings.push(format!(
            "{}: ring boundaries wind {:?} / {:?}",
            key, outer_order, inner_order
        ));
    }
}

/// Check a five-vertex stem rectangle
pub fn validate_stem(result: &mut ValidationResult, key: &str, stem: &Polygon) {
    result.total += 1;

    if stem.len() != 5 {
        result.bad_length += 1;
        result
            .warnings
            .push(format!("{}: stem has {} vertices, expected 5", key, stem.len()));
    }
    if !stem.is_closed() {
        result.open += 1;
        result.warnings.push(format!("{}: stem does not close", key));
    }
}

fn opposite(a: Option<WindingOrder>, b: Option<WindingOrder>) -> bool {
    matches!(
        (a, b),
        (
            Some(WindingOrder::CounterClockwise),
            Some(WindingOrder::Clockwise)
        ) | (
            Some(WindingOrder::Clockwise),
            Some(WindingOrder::CounterClockwise)
        )
    )
}
