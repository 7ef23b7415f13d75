use chrono::Month;

/// Sentinel month filter value matching every record with a recognized month.
pub const ALL_MONTHS: &str = "all months";

/// The twelve canonical months, in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Resolve free text to a canonical month by case-insensitive name match.
///
/// Only full English names are recognized: "march" and "MARCH" resolve,
/// "Mar" and "Marzo" do not.
pub fn canonical_month(text: &str) -> Option<Month> {
    let lower = text.to_lowercase();
    MONTHS
        .iter()
        .copied()
        .find(|m| m.name().to_lowercase() == lower)
}
