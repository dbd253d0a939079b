//! Collection wrapper types for displaying plans and segment lists.

use std::{fmt, ops::Index};

use crate::{
    models::{PlanItem, PlanSegment},
    progress::LaneProgress,
};

/// Newtype wrapper for displaying a plan, grouped under one heading per day.
///
/// Items are expected in plan order (as returned by the engine).
#[derive(Debug, Clone, Default)]
pub struct PlanItems(pub Vec<PlanItem>);

impl PlanItems {
    /// Check if the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the plan.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanItem> {
        self.0.iter()
    }
}

impl Index<usize> for PlanItems {
    type Output = PlanItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanItems {
    type Item = PlanItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PlanItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plan items.");
        }
        let mut current = None;
        for item in &self.0 {
            if current != Some(item.date) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## {} ({})", item.date, item.weekday)?;
                writeln!(f)?;
                current = Some(item.date);
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a segment list.
#[derive(Debug, Clone, Default)]
pub struct Segments(pub Vec<PlanSegment>);

impl Segments {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No segments.");
        }
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Lane progress of one segment, titled with the segment id.
#[derive(Debug, Clone)]
pub struct ProgressReport<'a> {
    pub segment: &'a PlanSegment,
    pub lanes: Vec<LaneProgress>,
}

impl fmt::Display for ProgressReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}: {} to {}",
            self.segment.id, self.segment.start_date, self.segment.end_date
        )?;
        writeln!(f)?;
        for lane in &self.lanes {
            write!(f, "{lane}")?;
        }
        Ok(())
    }
}
