//! Lane progress: how far each lane reads within a segment.

use serde::Serialize;

use crate::{
    assign::assign_days,
    calendar::build_calendar,
    models::{Catalog, LaneName, PlanSegment},
    params::CalendarEvents,
    queue::LaneQueues,
};

/// The last unit a lane read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachedUnit {
    /// Index of the book within the lane's list
    pub book_index: usize,
    pub material_id: String,
    pub unit_code: String,
}

/// Progress of one lane over a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneProgress {
    pub lane: LaneName,
    /// Units assigned within the segment
    pub consumed: usize,
    /// Units still queued after the segment ends
    pub remaining: usize,
    /// `None` when the lane read nothing
    pub last_unit: Option<ReachedUnit>,
}

/// Simulates `segment` and reports each lane's progress, in lane order.
pub fn segment_progress(
    segment: &PlanSegment,
    catalog: &Catalog,
    events: &CalendarEvents,
) -> Vec<LaneProgress> {
    let queues = LaneQueues::build(&segment.lanes, catalog);
    let calendar = build_calendar(segment.start_date, segment.end_date, segment.days, events);
    let assignment = assign_days(calendar, &queues, events);

    LaneName::ALL
        .into_iter()
        .map(|lane| {
            let queue = queues.get(lane);
            let consumed = assignment.cursors.get(lane);
            let last_unit = consumed
                .checked_sub(1)
                .and_then(|index| queue.get(index))
                .map(|queued| ReachedUnit {
                    book_index: queued.book_index,
                    material_id: queued.unit.material_id.clone(),
                    unit_code: queued.unit.unit_code.clone(),
                });
            LaneProgress {
                lane,
                consumed,
                remaining: queue.len().saturating_sub(consumed),
                last_unit,
            }
        })
        .collect()
}
