//! Lane queue builder: flattens a lane's book list into one unit sequence.

use log::warn;

use crate::models::{Catalog, CatalogKind, CurriculumUnit, LaneBookRef, LaneName, Lanes};

/// A unit in a lane queue, tagged with the book it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedUnit<'a> {
    /// Index of the book within the lane's list
    pub book_index: usize,
    pub unit: &'a CurriculumUnit,
}

/// Builds the ordered unit queue for one lane.
///
/// Each book contributes its units in catalog order. Only the first book
/// honors `start_unit_code`; an unknown code falls back to the book's first
/// unit. Books whose material is missing from the catalog contribute nothing.
pub fn build_lane_queue<'a>(
    books: &[LaneBookRef],
    kind: CatalogKind,
    catalog: &'a Catalog,
) -> Vec<QueuedUnit<'a>> {
    let mut queue = Vec::new();
    for (book_index, book) in books.iter().enumerate() {
        let units = catalog.units(kind, &book.material_id);
        let from = match (&book.start_unit_code, book_index) {
            (Some(code), 0) => catalog
                .position(kind, &book.material_id, code)
                .unwrap_or_else(|| {
                    warn!(
                        "start unit {code:?} not found in material {:?}, reading from its first unit",
                        book.material_id
                    );
                    0
                }),
            _ => 0,
        };
        queue.extend(
            units
                .iter()
                .skip(from)
                .map(|unit| QueuedUnit { book_index, unit }),
        );
    }
    queue
}

/// Queues for all three lanes of a segment.
#[derive(Debug, Clone, Default)]
pub struct LaneQueues<'a> {
    queues: [Vec<QueuedUnit<'a>>; 3],
}

impl<'a> LaneQueues<'a> {
    /// Builds every lane's queue against its own catalog kind.
    pub fn build(lanes: &Lanes, catalog: &'a Catalog) -> Self {
        Self {
            queues: LaneName::ALL
                .map(|lane| build_lane_queue(lanes.get(lane), lane.catalog_kind(), catalog)),
        }
    }

    /// The full queue of `lane`.
    pub fn get(&self, lane: LaneName) -> &[QueuedUnit<'a>] {
        &self.queues[lane_slot(lane)]
    }

    /// The unit at `cursor` in `lane`, or `None` once the lane is exhausted.
    pub fn at(&self, lane: LaneName, cursor: usize) -> Option<QueuedUnit<'a>> {
        self.get(lane).get(cursor).copied()
    }
}

/// Array slot of a lane, in assignment order.
pub(crate) fn lane_slot(lane: LaneName) -> usize {
    match lane {
        LaneName::Main1 => 0,
        LaneName::Main2 => 1,
        LaneName::Vocab => 2,
    }
}
