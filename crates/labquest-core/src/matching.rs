//! Experiment name normalization and matching.
//!
//! Badge criteria reference experiments by loose display names ("ohm's law")
//! while attempt records carry whatever the lab page titled itself
//! ("Ohms Law Laboratory"). Both sides are normalized before a substring
//! containment test so punctuation, case and spacing differences never
//! block a match.

/// Normalize an experiment name: lowercase, strip apostrophes/quotes,
/// collapse internal whitespace, trim.
pub fn normalize(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '\u{2018}' | '\u{2019}'))
        .collect();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Test whether an attempt name satisfies a criterion's experiment type.
///
/// Containment is directional: the normalized criterion string must appear
/// inside the normalized attempt name. An empty criterion matches nothing.
pub fn name_matches(criterion: &str, attempt_name: &str) -> bool {
    let needle = normalize(criterion);
    if needle.is_empty() {
        return false;
    }
    normalize(attempt_name).contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_apostrophes() {
        assert_eq!(normalize("Ohm's Law"), "ohms law");
        assert_eq!(normalize("Ohm\u{2019}s Law"), "ohms law");
        assert_eq!(normalize("\"Double-Slit\""), "double-slit");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  OHM'S   LAW  "), "ohms law");
        assert_eq!(normalize("blood\ttyping"), "blood typing");
    }

    #[test]
    fn test_matches_across_punctuation_and_case() {
        assert!(name_matches("ohm's law", "Ohms Law Laboratory"));
        assert!(name_matches("ohm's law", "OHM'S   LAW"));
        assert!(name_matches("Ohms Law", "ohm's law lab"));
    }

    #[test]
    fn test_containment_is_directional() {
        assert!(name_matches("titration", "Acid-Base Titration Lab"));
        assert!(!name_matches("Acid-Base Titration Lab", "titration"));
    }

    #[test]
    fn test_no_match() {
        assert!(!name_matches("osmosis", "Ohms Law Laboratory"));
    }

    #[test]
    fn test_empty_criterion_never_matches() {
        assert!(!name_matches("", "Ohms Law Laboratory"));
        assert!(!name_matches("  ''  ", "Ohms Law Laboratory"));
    }
}
