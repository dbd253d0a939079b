//! Lanes: the three parallel reading tracks of a plan segment.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::catalog::CatalogKind;

/// Name of one of the fixed lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneName {
    Main1,
    Main2,
    Vocab,
}

impl LaneName {
    /// Lanes in assignment order.
    pub const ALL: [LaneName; 3] = [LaneName::Main1, LaneName::Main2, LaneName::Vocab];

    /// Catalog the lane reads from.
    pub fn catalog_kind(self) -> CatalogKind {
        match self {
            LaneName::Main1 | LaneName::Main2 => CatalogKind::Main,
            LaneName::Vocab => CatalogKind::Vocab,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LaneName::Main1 => "main1",
            LaneName::Main2 => "main2",
            LaneName::Vocab => "vocab",
        }
    }
}

impl FromStr for LaneName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main1" => Ok(LaneName::Main1),
            "main2" => Ok(LaneName::Main2),
            "vocab" => Ok(LaneName::Vocab),
            _ => Err(format!("Invalid lane: {s}")),
        }
    }
}

impl fmt::Display for LaneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One book in a lane's reading list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LaneBookRef {
    /// Material to read
    pub material_id: String,

    /// Unit to resume from; honored only for the first book of a lane
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_unit_code: Option<String>,

    /// Last unit the editor intends to read; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_unit_code: Option<String>,
}

impl LaneBookRef {
    /// A book read from its first unit.
    pub fn new(material_id: impl Into<String>) -> Self {
        Self {
            material_id: material_id.into(),
            start_unit_code: None,
            end_unit_code: None,
        }
    }

    /// A book resumed from `unit_code`.
    pub fn starting_at(material_id: impl Into<String>, unit_code: impl Into<String>) -> Self {
        Self {
            start_unit_code: Some(unit_code.into()),
            ..Self::new(material_id)
        }
    }
}

/// Book lists for the three lanes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Lanes {
    #[serde(default)]
    pub main1: Vec<LaneBookRef>,
    #[serde(default)]
    pub main2: Vec<LaneBookRef>,
    #[serde(default)]
    pub vocab: Vec<LaneBookRef>,
}

impl Lanes {
    pub fn get(&self, lane: LaneName) -> &[LaneBookRef] {
        match lane {
            LaneName::Main1 => &self.main1,
            LaneName::Main2 => &self.main2,
            LaneName::Vocab => &self.vocab,
        }
    }

    pub fn get_mut(&mut self, lane: LaneName) -> &mut Vec<LaneBookRef> {
        match lane {
            LaneName::Main1 => &mut self.main1,
            LaneName::Main2 => &mut self.main2,
            LaneName::Vocab => &mut self.vocab,
        }
    }

    /// True when no lane has any book.
    pub fn is_empty(&self) -> bool {
        LaneName::ALL.iter().all(|lane| self.get(*lane).is_empty())
    }
}
