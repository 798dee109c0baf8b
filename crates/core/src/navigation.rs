//! Case-study lookup and the "next case study" link.

use crate::catalog::{case_studies, CaseStudy};
use crate::error::CoreError;
use crate::types::RecordId;

/// Look up a case study by its raw path segment.
///
/// The segment is read as a decimal number, so `3`, `3.0`, `+3` and `3e0`
/// all name case study 3. Segments that are not a whole number in id range
/// are treated the same as ids missing from the table.
pub fn find_case_study(raw_id: &str) -> Result<&'static CaseStudy, CoreError> {
    parse_record_id(raw_id)
        .and_then(case_study_by_id)
        .ok_or_else(|| CoreError::NotFound {
            entity: "CaseStudy",
            id: raw_id.to_string(),
        })
}

fn parse_record_id(raw: &str) -> Option<RecordId> {
    let value = raw.trim().parse::<f64>().ok()?;
    let whole = value.is_finite() && value.fract() == 0.0;
    (whole && (0.0..=f64::from(RecordId::MAX)).contains(&value)).then_some(value as RecordId)
}

/// Look up a case study by id.
pub fn case_study_by_id(id: RecordId) -> Option<&'static CaseStudy> {
    case_studies().iter().find(|c| c.id == id)
}

/// The case study linked from the bottom of case study `id`.
///
/// Picks the table entry at index `id mod len`. With ids assigned 1..=len in
/// table order this lands on the following entry and wraps from the last id
/// back to the first entry.
pub fn next_case_study(id: RecordId) -> &'static CaseStudy {
    let table = case_studies();
    &table[id as usize % table.len()]
}
