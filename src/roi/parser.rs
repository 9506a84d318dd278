use serde_json::{Map, Value};

use crate::domain::RoiRecord;
use crate::error::RoiError;
use crate::geometry::centroid;

/// Result of normalizing one ROI entry
#[derive(Debug, Clone, PartialEq)]
pub enum RoiOutcome {
    Parsed(RoiRecord),
    Skipped { id: String, reason: RoiError },
}

impl RoiOutcome {
    pub fn id(&self) -> &str {
        match self {
            RoiOutcome::Parsed(record) => &record.id,
            RoiOutcome::Skipped { id, .. } => id,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, RoiOutcome::Parsed(_))
    }
}

/// Normalize raw ROI coordinates into a flat list of points.
///
/// Accepts either a flat polygon `[[x, y], ...]` or a polygon wrapped in one
/// extra list `[[[x, y], ...]]`. When the first coordinate's first element is
/// itself a list, the first inner polygon is used.
pub fn normalize_coords(raw: &Value) -> Result<Vec<(f64, f64)>, RoiError> {
    let mut coords = raw.as_array().ok_or(RoiError::NotAList)?;

    if is_wrapped(coords) {
        coords = coords[0].as_array().ok_or(RoiError::NotAList)?;
    }

    if coords.is_empty() {
        return Err(RoiError::Empty);
    }

    coords
        .iter()
        .enumerate()
        .map(|(index, coord)| parse_pair(index, coord))
        .collect()
}

/// Normalize and average the coordinates of one ROI
pub fn extract_centroid(raw: &Value) -> Result<(f64, f64), RoiError> {
    let points = normalize_coords(raw)?;
    centroid(&points).ok_or(RoiError::Empty)
}

/// Normalize and center every entry of an ROI mapping, keeping file order
pub fn parse_rois(rois: &Map<String, Value>) -> Vec<RoiOutcome> {
    rois.iter()
        .map(|(id, raw)| match extract_centroid(raw) {
            Ok(center) => RoiOutcome::Parsed(RoiRecord::new(id.clone(), center)),
            Err(reason) => RoiOutcome::Skipped {
                id: id.clone(),
                reason,
            },
        })
        .collect()
}

fn is_wrapped(coords: &[Value]) -> bool {
    coords
        .first()
        .and_then(Value::as_array)
        .and_then(|first| first.first())
        .is_some_and(Value::is_array)
}

fn parse_pair(index: usize, coord: &Value) -> Result<(f64, f64), RoiError> {
    let pair = match coord.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => return Err(RoiError::BadCoordinate { index }),
    };

    match (pair[0].as_f64(), pair[1].as_f64()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(RoiError::NonNumeric { index }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_polygon() {
        let raw = json!([[0, 0], [0, 20], [20, 20], [20, 0]]);
        let points = normalize_coords(&raw).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], (0.0, 20.0));
    }

    #[test]
    fn test_wrapped_polygon() {
        let raw = json!([[[0, 0], [0, 20], [20, 20], [20, 0]]]);
        let flat = json!([[0, 0], [0, 20], [20, 20], [20, 0]]);
        assert_eq!(normalize_coords(&raw), normalize_coords(&flat));
    }

    #[test]
    fn test_wrapped_uses_first_polygon() {
        let raw = json!([[[0, 0], [2, 2]], [[100, 100], [200, 200]]]);
        assert_eq!(normalize_coords(&raw).unwrap(), vec![(0.0, 0.0), (2.0, 2.0)]);
    }

    #[test]
    fn test_float_coordinates() {
        let raw = json!([[1.5, 2.25], [3, 4]]);
        assert_eq!(
            normalize_coords(&raw).unwrap(),
            vec![(1.5, 2.25), (3.0, 4.0)]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_coords(&json!([])), Err(RoiError::Empty));
        assert_eq!(
            normalize_coords(&json!([[]])),
            Err(RoiError::BadCoordinate { index: 0 })
        );
        assert_eq!(
            normalize_coords(&json!([[[]]])),
            Err(RoiError::BadCoordinate { index: 0 })
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(normalize_coords(&json!(null)), Err(RoiError::NotAList));
        assert_eq!(normalize_coords(&json!({"x": 1})), Err(RoiError::NotAList));
        assert_eq!(
            normalize_coords(&json!([[0, 0], [1, 2, 3]])),
            Err(RoiError::BadCoordinate { index: 1 })
        );
        assert_eq!(
            normalize_coords(&json!([[0, 0], 5])),
            Err(RoiError::BadCoordinate { index: 1 })
        );
        assert_eq!(
            normalize_coords(&json!([[0, 0], [1, "2"]])),
            Err(RoiError::NonNumeric { index: 1 })
        );
    }

    #[test]
    fn test_extract_centroid() {
        let raw = json!([[[0, 0], [0, 10], [10, 10], [10, 0]]]);
        assert_eq!(extract_centroid(&raw), Ok((5.0, 5.0)));
        assert_eq!(extract_centroid(&json!([])), Err(RoiError::Empty));
    }

    #[test]
    fn test_parse_rois_every_entry_has_an_outcome() {
        let rois: Map<String, Value> = serde_json::from_str(
            r#"{"a": [], "b": [[[]]], "c": [[[4, 0], [0, 4]]], "d": "x"}"#,
        )
        .unwrap();

        let outcomes = parse_rois(&rois);
        assert_eq!(outcomes.len(), 4);
        let parsed: Vec<&RoiOutcome> = outcomes.iter().filter(|o| o.is_parsed()).collect();
        assert_eq!(
            parsed,
            vec![&RoiOutcome::Parsed(RoiRecord::new("c", (2.0, 2.0)))]
        );
    }

    #[test]
    fn test_parse_rois_keeps_order_and_skips() {
        let rois: Map<String, Value> = serde_json::from_str(
            r#"{"zeta": [[0, 0]], "alpha": [], "mid": [[1, 1], [3, 3]]}"#,
        )
        .unwrap();

        let outcomes = parse_rois(&rois);
        let ids: Vec<&str> = outcomes.iter().map(RoiOutcome::id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);

        assert_eq!(
            outcomes[0],
            RoiOutcome::Parsed(RoiRecord::new("zeta", (0.0, 0.0)))
        );
        assert_eq!(
            outcomes[1],
            RoiOutcome::Skipped {
                id: "alpha".to_string(),
                reason: RoiError::Empty
            }
        );
        assert_eq!(
            outcomes[2],
            RoiOutcome::Parsed(RoiRecord::new("mid", (2.0, 2.0)))
        );
    }
}
