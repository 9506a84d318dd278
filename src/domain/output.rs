use indexmap::IndexMap;
use serde::Serialize;

use super::Polygon;

/// Key of the ring polygon for the n-th processed ROI
pub fn ring_key(roi_number: usize) -> String {
    format!("ROI_{}", roi_number)
}

/// Key of stem `stem_number` belonging to the n-th processed ROI.
///
/// The two numbers are concatenated without a separator, so `stem_key(1, 1)`
/// and `ring_key(11)` are both `ROI_11`.
pub fn stem_key(roi_number: usize, stem_number: usize) -> String {
    format!("ROI_{}{}", roi_number, stem_number)
}

/// Insertion-ordered mapping from generated names to polygons.
///
/// Inserting an existing key replaces its polygon but keeps the position of
/// the first insertion.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct OutputRecord {
    entries: IndexMap<String, Polygon>,
}

impl OutputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous polygon under `key`, if any.
    pub fn insert(&mut self, key: String, polygon: Polygon) -> Option<Polygon> {
        self.entries.insert(key, polygon)
    }

    pub fn get(&self, key: &str) -> Option<&Polygon> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Polygon)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }
}
