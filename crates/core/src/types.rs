/// Identifier of a record in the static data tables.
pub type RecordId = u32;
