use super::*;

mod field;
mod record;

pub(crate) use field::ParsedField;
pub(crate) use record::ParsedRecord;
