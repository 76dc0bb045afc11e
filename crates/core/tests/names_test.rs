use checkits_core::names::{names_match, normalize_name};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_normalize_lowercases_and_splits() {
    assert_eq!(normalize_name("Keana Giron"), vec!["keana", "giron"]);
}

#[test]
fn test_normalize_collapses_punctuation() {
    assert_eq!(
        normalize_name("Chelsea Mae J. Banlasan"),
        vec!["chelsea", "mae", "banlasan"]
    );
}

#[test]
fn test_normalize_drops_single_letter_initials() {
    // "A" is an initial and goes away; "Jr" has two letters and stays
    assert_eq!(
        normalize_name("Juan A. De Lara Jr."),
        vec!["juan", "de", "lara", "jr"]
    );
}

#[test]
fn test_normalize_handles_non_ascii_letters() {
    assert_eq!(
        normalize_name("Ashlee M. Madriñan"),
        vec!["ashlee", "madriñan"]
    );
}

#[test]
fn test_normalize_empty_input() {
    assert_eq!(normalize_name(""), Vec::<String>::new());
    assert_eq!(normalize_name("   "), Vec::<String>::new());
}

#[test]
fn test_normalize_all_initials_yields_nothing() {
    assert_eq!(normalize_name("J. A. B."), Vec::<String>::new());
}

#[rstest]
#[case("De Lara", "Juan A. De Lara Jr.")]
#[case("Keana Giron", "Giron, Keana")]
#[case("Catherine Arnado", "CATHERINE ARNADO")]
#[case("Melgen II A. Simo", "Melgen II Simo")]
fn test_matching_names(#[case] roster_name: &str, #[case] display_name: &str) {
    assert!(names_match(roster_name, display_name));
}

#[rstest]
#[case("Catherine Arnado", "Kyle Abellera")]
#[case("De Lara", "Diana Rose Suello")]
#[case("Kurt Jershon Vidal", "Kurt Cobain")]
fn test_non_matching_names(#[case] roster_name: &str, #[case] display_name: &str) {
    assert!(!names_match(roster_name, display_name));
}

#[test]
fn test_match_is_symmetric() {
    assert!(names_match("Juan A. De Lara Jr.", "De Lara"));
    assert!(names_match("De Lara", "Juan A. De Lara Jr."));
}

#[test]
fn test_empty_name_never_matches() {
    // An empty needle must not vacuously match every haystack
    assert!(!names_match("", "Catherine Arnado"));
    assert!(!names_match("Catherine Arnado", ""));
    assert!(!names_match("", ""));
}

#[test]
fn test_initials_only_name_never_matches() {
    // Normalizes to zero tokens, same guard as the empty string
    assert!(!names_match("J. A.", "Jacky L. Rapal"));
}
