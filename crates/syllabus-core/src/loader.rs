//! Loaders for catalog, holiday and request files.
//!
//! # Catalog formats
//!
//! JSON files hold a [`CatalogDocument`]:
//!
//! ```json
//! { "main": [{ "materialId": "grammar", "unitCode": "G1", "order": 1 }],
//!   "vocab": [{ "materialId": "words", "unitCode": "W1", "order": 1 }] }
//! ```
//!
//! Files ending in `.csv` hold one unit per row, as exported from the
//! curriculum spreadsheet:
//!
//! ```csv
//! kind,material_id,unit_code,order,title,lecture_range,pages,workbook,vocab_range
//! main,grammar,G1,1,Nouns,1-2,10-14,WB 1,
//! vocab,words,W1,1,,,,,1-40
//! ```
//!
//! Empty cells are absent optional fields.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::debug;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    error::{IoResultExt, Result, ScheduleError},
    models::{Catalog, CatalogDocument, CatalogKind, ClassDate, CurriculumUnit},
};

#[derive(Deserialize)]
struct UnitRecord {
    kind: CatalogKind,
    material_id: String,
    unit_code: String,
    order: i64,
    title: Option<String>,
    lecture_range: Option<String>,
    pages: Option<String>,
    workbook: Option<String>,
    vocab_range: Option<String>,
}

/// Loads a catalog from a JSON or CSV file, chosen by extension.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let catalog = if is_csv {
        let file = File::open(path).at_path(path)?;
        load_catalog_csv(file).map_err(|e| match e {
            ScheduleError::Parse(message) => {
                ScheduleError::Parse(format!("{}: {message}", path.display()))
            }
            other => other,
        })?
    } else {
        Catalog::from(load_json::<CatalogDocument>(path)?)
    };
    debug!(
        "loaded {} materials from {}",
        catalog.material_count(),
        path.display()
    );
    Ok(catalog)
}

/// Reads a CSV catalog from any `Read` source.
pub fn load_catalog_csv<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut main = Vec::new();
    let mut vocab = Vec::new();

    for result in csv_reader.deserialize::<UnitRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let shelf = match row.kind {
            CatalogKind::Main => &mut main,
            CatalogKind::Vocab => &mut vocab,
        };
        shelf.push(CurriculumUnit {
            material_id: row.material_id,
            unit_code: row.unit_code,
            order: row.order,
            title: row.title,
            lecture_range: row.lecture_range,
            pages: row.pages,
            workbook: row.workbook,
            vocab_range: row.vocab_range,
        });
    }

    Ok(Catalog::new(main, vocab))
}

/// Loads a JSON object mapping dates to labels (holidays or skips).
pub fn load_date_labels(path: &Path) -> Result<BTreeMap<ClassDate, String>> {
    load_json(path)
}

/// Deserializes any JSON document from a file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).at_path(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
