//! Plan items: the dated rows produced by the assignment engine.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    date::{ClassDate, Weekday},
    lane::LaneName,
};

/// Title used for scheduled tests that carry none.
pub const DEFAULT_TEST_TITLE: &str = "Monthly Test";

/// A test scheduled on a fixed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScheduledTest {
    pub date: ClassDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Why a class day produces no lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Absence declared by the user, with its label
    UserSkip(String),
    /// Holiday from the supplied holiday list
    Holiday(String),
    /// Built-in fixed-date public holiday
    PublicHoliday(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UserSkip(label) | SkipReason::Holiday(label) => f.write_str(label),
            SkipReason::PublicHoliday(name) => write!(f, "Holiday: {name}"),
        }
    }
}

/// Origin of a plan item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSource {
    Test,
    Main,
    Vocab,
    Skip,
}

impl ItemSource {
    /// Rank used to order items sharing a date.
    ///
    /// Main and vocab share a rank so lane order is preserved.
    pub fn priority(self) -> u8 {
        match self {
            ItemSource::Test => 0,
            ItemSource::Main | ItemSource::Vocab => 1,
            ItemSource::Skip => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemSource::Test => "test",
            ItemSource::Main => "main",
            ItemSource::Vocab => "vocab",
            ItemSource::Skip => "skip",
        }
    }
}

impl fmt::Display for ItemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source-specific payload of a plan item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ItemEntry {
    Main {
        lane: LaneName,
        material_id: String,
        unit_code: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lecture_range: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pages: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        workbook: Option<String>,
    },
    Vocab {
        lane: LaneName,
        material_id: String,
        unit_code: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        vocab_range: Option<String>,
    },
    Test {
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    Skip {
        reason: String,
    },
}

/// One dated row of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanItem {
    pub date: ClassDate,
    pub weekday: Weekday,
    #[serde(flatten)]
    pub entry: ItemEntry,
}

impl PlanItem {
    pub fn source(&self) -> ItemSource {
        match self.entry {
            ItemEntry::Main { .. } => ItemSource::Main,
            ItemEntry::Vocab { .. } => ItemSource::Vocab,
            ItemEntry::Test { .. } => ItemSource::Test,
            ItemEntry::Skip { .. } => ItemSource::Skip,
        }
    }

    /// Lane that produced the item, for lesson rows.
    pub fn lane(&self) -> Option<LaneName> {
        match &self.entry {
            ItemEntry::Main { lane, .. } | ItemEntry::Vocab { lane, .. } => Some(*lane),
            ItemEntry::Test { .. } | ItemEntry::Skip { .. } => None,
        }
    }

    /// Material and unit of a lesson row.
    pub fn unit(&self) -> Option<(&str, &str)> {
        match &self.entry {
            ItemEntry::Main {
                material_id,
                unit_code,
                ..
            }
            | ItemEntry::Vocab {
                material_id,
                unit_code,
                ..
            } => Some((material_id.as_str(), unit_code.as_str())),
            ItemEntry::Test { .. } | ItemEntry::Skip { .. } => None,
        }
    }
}
