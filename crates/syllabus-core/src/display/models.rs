//! Display implementations for domain models.

use std::fmt;

use crate::{
    models::{ItemEntry, LaneBookRef, LaneName, Lanes, PlanItem, PlanSegment},
    progress::LaneProgress,
};

/// Joins the present detail fields as "(a; b)".
fn details(parts: &[(&str, &Option<String>)]) -> String {
    let present: Vec<String> = parts
        .iter()
        .filter_map(|&(label, value)| value.as_ref().map(|v| format!("{label}{v}")))
        .collect();
    if present.is_empty() {
        String::new()
    } else {
        format!(" ({})", present.join("; "))
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry {
            ItemEntry::Main {
                lane,
                material_id,
                unit_code,
                title,
                lecture_range,
                pages,
                workbook,
            } => {
                write!(f, "- **{lane}** {material_id} / {unit_code}")?;
                if let Some(title) = title {
                    write!(f, ": {title}")?;
                }
                writeln!(
                    f,
                    "{}",
                    details(&[
                        ("lectures ", lecture_range),
                        ("pp. ", pages),
                        ("workbook ", workbook),
                    ])
                )
            }
            ItemEntry::Vocab {
                lane,
                material_id,
                unit_code,
                title,
                vocab_range,
            } => {
                write!(f, "- **{lane}** {material_id} / {unit_code}")?;
                if let Some(title) = title {
                    write!(f, ": {title}")?;
                }
                writeln!(f, "{}", details(&[("words ", vocab_range)]))
            }
            ItemEntry::Test { title, notes } => match notes {
                Some(notes) => writeln!(f, "- **test** {title}: {notes}"),
                None => writeln!(f, "- **test** {title}"),
            },
            ItemEntry::Skip { reason } => writeln!(f, "- **skip** {reason}"),
        }
    }
}

impl fmt::Display for LaneBookRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.material_id)?;
        if let Some(start) = &self.start_unit_code {
            write!(f, " from {start}")?;
        }
        if let Some(end) = &self.end_unit_code {
            write!(f, " to {end}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Lanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in LaneName::ALL {
            let books = self.get(lane);
            if books.is_empty() {
                writeln!(f, "- {lane}: (none)")?;
            } else {
                let listed: Vec<String> = books.iter().map(ToString::to_string).collect();
                writeln!(f, "- {lane}: {}", listed.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for PlanSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "### {}: {} to {} ({})",
            self.id, self.start_date, self.end_date, self.days
        )?;
        if self.is_exam() {
            write!(f, " [exam]")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        write!(f, "{}", self.lanes)
    }
}

impl fmt::Display for LaneProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.last_unit {
            Some(last) => writeln!(
                f,
                "- {}: {} read, {} left, last {} / {}",
                self.lane, self.consumed, self.remaining, last.material_id, last.unit_code
            ),
            None => writeln!(f, "- {}: nothing read, {} left", self.lane, self.remaining),
        }
    }
}
