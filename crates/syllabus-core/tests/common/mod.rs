use syllabus_core::{Catalog, ClassDate, CurriculumUnit, WeekdaySet};

/// Parses an ISO date for fixtures
pub fn date(s: &str) -> ClassDate {
    s.parse().expect("Failed to parse date")
}

/// Monday, Wednesday and Friday classes
pub fn mwf() -> WeekdaySet {
    "MON,WED,FRI".parse().expect("Failed to parse weekdays")
}

/// Helper function to build `count` numbered units of one material
pub fn units(material: &str, prefix: &str, count: i64) -> Vec<CurriculumUnit> {
    (1..=count)
        .map(|i| CurriculumUnit {
            material_id: material.to_string(),
            unit_code: format!("{prefix}{i}"),
            order: i,
            title: Some(format!("{material} {i}")),
            lecture_range: Some(format!("{}-{}", 2 * i - 1, 2 * i)),
            pages: None,
            workbook: None,
            vocab_range: None,
        })
        .collect()
}

/// A catalog with a five-unit textbook, a twenty-unit grammar book and a
/// thirty-unit word list
pub fn create_test_catalog() -> Catalog {
    let mut main = units("reader", "U", 5);
    main.extend(units("grammar", "G", 20));
    let mut vocab = units("words", "W", 30);
    for unit in &mut vocab {
        unit.lecture_range = None;
        unit.vocab_range = Some(format!("{}-{}", unit.order * 20 - 19, unit.order * 20));
    }
    Catalog::new(main, vocab)
}
