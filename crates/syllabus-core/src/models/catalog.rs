//! Curriculum units and the per-material catalog.

use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which catalog a material belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Textbooks read by the `main1` and `main2` lanes
    Main,
    /// Vocabulary books read by the `vocab` lane
    Vocab,
}

/// One lesson-sized unit of a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CurriculumUnit {
    /// Material (book) this unit belongs to
    pub material_id: String,

    /// Code unique within the material
    pub unit_code: String,

    /// Position of the unit within the material
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Lecture numbers covered, e.g. "3-4"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lecture_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    /// Workbook reference for homework
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workbook: Option<String>,

    /// Word range for vocabulary units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocab_range: Option<String>,
}

/// Serialized shape of a catalog: flat unit lists per kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CatalogDocument {
    #[serde(default)]
    pub main: Vec<CurriculumUnit>,
    #[serde(default)]
    pub vocab: Vec<CurriculumUnit>,
}

/// Units grouped by material and sorted by `order`.
///
/// Ties on `order` keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    main: BTreeMap<String, Vec<CurriculumUnit>>,
    vocab: BTreeMap<String, Vec<CurriculumUnit>>,
}

impl Catalog {
    /// Builds a catalog from unsorted main and vocabulary units.
    pub fn new(
        main: impl IntoIterator<Item = CurriculumUnit>,
        vocab: impl IntoIterator<Item = CurriculumUnit>,
    ) -> Self {
        Self {
            main: group_by_material(main),
            vocab: group_by_material(vocab),
        }
    }

    /// Units of a material in reading order; empty for unknown materials.
    pub fn units(&self, kind: CatalogKind, material_id: &str) -> &[CurriculumUnit] {
        let shelf = match kind {
            CatalogKind::Main => &self.main,
            CatalogKind::Vocab => &self.vocab,
        };
        shelf.get(material_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Position of `unit_code` within its material, if present.
    pub fn position(&self, kind: CatalogKind, material_id: &str, unit_code: &str) -> Option<usize> {
        self.units(kind, material_id)
            .iter()
            .position(|unit| unit.unit_code == unit_code)
    }

    /// The unit following `unit_code` in the same material.
    pub fn next_unit(
        &self,
        kind: CatalogKind,
        material_id: &str,
        unit_code: &str,
    ) -> Option<&CurriculumUnit> {
        let index = self.position(kind, material_id, unit_code)?;
        self.units(kind, material_id).get(index + 1)
    }

    /// Number of materials across both kinds.
    pub fn material_count(&self) -> usize {
        self.main.len() + self.vocab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.vocab.is_empty()
    }
}

impl From<CatalogDocument> for Catalog {
    fn from(doc: CatalogDocument) -> Self {
        Catalog::new(doc.main, doc.vocab)
    }
}

fn group_by_material(
    units: impl IntoIterator<Item = CurriculumUnit>,
) -> BTreeMap<String, Vec<CurriculumUnit>> {
    let mut grouped: BTreeMap<String, Vec<CurriculumUnit>> = BTreeMap::new();
    for unit in units {
        grouped.entry(unit.material_id.clone()).or_default().push(unit);
    }
    for units in grouped.values_mut() {
        units.sort_by_key(|unit| unit.order);
    }
    grouped
}
