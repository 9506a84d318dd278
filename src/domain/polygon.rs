use serde::Serialize;

/// A rounded polygon vertex, serialized as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vertex(pub i64, pub i64);

impl Vertex {
    pub fn x(&self) -> i64 {
        self.0
    }

    pub fn y(&self) -> i64 {
        self.1
    }
}

/// Ordered vertex sequence. Every polygon built by this crate repeats its
/// first vertex at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 2 && self.first() == self.last()
    }

    /// Convert to a `geo` line string for orientation queries
    pub fn to_line_string(&self) -> geo::LineString<f64> {
        self.vertices
            .iter()
            .map(|v| geo::coord! { x: v.0 as f64, y: v.1 as f64 })
            .collect()
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}
