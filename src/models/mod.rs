mod filter;
mod month;
mod person;

pub use filter::{FilterField, FilterState, FilterValue};
pub use month::{canonical_month, ALL_MONTHS, MONTHS};
pub use person::PersonRecord;
pub(crate) use person::parse_whole_number;
