//! Text normalization for matching
//!
//! One canonical comparable form, applied identically to stored values
//! and caller-supplied needles. Case-folding only: diacritics are kept,
//! so "Café" and "Cafe" stay distinct on purpose.

/// Produces the canonical comparable form of a text value.
///
/// Trims surrounding whitespace, then Unicode-lowercases. Idempotent:
/// normalizing twice equals normalizing once. Never applied to values
/// meant for display.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
