use serde::Serialize;

use crate::marker::Coordinates;

/// One map marker: a representative position and the items shown under it.
#[derive(Debug, Serialize)]
pub struct MarkerGroup<'a, M> {
    pub markers: Vec<&'a M>,
    pub coordinates: Coordinates,
    #[serde(rename = "numberItems")]
    pub number_items: usize,
}

impl<'a, M> MarkerGroup<'a, M> {
    /// Empty group at `coordinates`
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            markers: Vec::new(),
            coordinates,
            number_items: 0,
        }
    }

    /// Append a member, keeping `number_items` in step with `markers`
    pub fn push(&mut self, marker: &'a M) {
        self.markers.push(marker);
        self.number_items += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Envelope served to map clients
#[derive(Debug, Serialize)]
pub struct MarkerResponse<'a, M> {
    pub groups: Vec<MarkerGroup<'a, M>>,
}

impl<'a, M> MarkerResponse<'a, M> {
    pub fn new(groups: Vec<MarkerGroup<'a, M>>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total memberships across all groups
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.number_items).sum()
    }
}
