/// Unweighted mean of the vertex coordinates.
///
/// Returns `None` for an empty point list. This is the vertex average, not
/// the area-weighted centroid.
pub fn centroid(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    let n = points.len() as f64;

    Some((sum_x / n, sum_y / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_square() {
        let square = vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
        assert_eq!(centroid(&square), Some((5.0, 5.0)));
    }

    #[test]
    fn test_centroid_is_vertex_mean() {
        // Repeated vertex pulls the mean toward it
        let points = vec![(0.0, 0.0), (0.0, 0.0), (9.0, 0.0)];
        assert_eq!(centroid(&points), Some((3.0, 0.0)));
    }

    #[test]
    fn test_centroid_single_point() {
        assert_eq!(centroid(&[(7.5, -2.0)]), Some((7.5, -2.0)));
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(&[]), None);
    }
}
