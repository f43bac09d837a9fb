//! Country trend-factor table.

use analysis_spi::CountryFactors;

static FACTORS: [(&str, CountryFactors); 5] = [
    ("BD", CountryFactors::new(1.3, 1.4, 0.8)),
    ("US", CountryFactors::new(1.0, 0.9, 0.7)),
    ("BR", CountryFactors::new(1.2, 1.1, 1.8)),
    ("IN", CountryFactors::new(1.4, 1.6, 1.2)),
    ("CN", CountryFactors::new(1.1, 1.5, 0.9)),
];

/// Trend factors for a country code (case-insensitive).
///
/// Unknown codes get [`CountryFactors::neutral`].
pub fn country_factors(code: &str) -> CountryFactors {
    let code = code.trim();
    FACTORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, factors)| *factors)
        .unwrap_or_default()
}

/// Every country with a dedicated factor entry.
pub fn known_countries() -> impl Iterator<Item = (&'static str, CountryFactors)> {
    FACTORS.iter().copied()
}
