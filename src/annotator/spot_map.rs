//! Ordered point → weld-spot table built from the `/MN` section.

/// One `/MN` pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotRef {
    pub point: String,
    pub spot: String,
}

/// Point index to weld-spot identifier, in insertion order.
///
/// Overwriting a point keeps its first-seen position, so `/POS` lookups try
/// points in the order they were first seen in `/MN`.
#[derive(Debug, Clone, Default)]
pub struct SpotMap {
    entries: Vec<SpotRef>,
}

impl SpotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous identifier for the point.
    pub fn insert(&mut self, point: String, spot: String) -> Option<String> {
        match self.entries.iter_mut().find(|entry| entry.point == point) {
            Some(entry) => Some(std::mem::replace(&mut entry.spot, spot)),
            None => {
                self.entries.push(SpotRef { point, spot });
                None
            }
        }
    }

    pub fn get(&self, point: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.point == point)
            .map(|entry| entry.spot.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpotRef> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
