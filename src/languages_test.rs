use crate::languages::{FALLBACK_COLOR, language_color};

#[test]
fn known_languages_use_their_table_entry() {
    assert_eq!(language_color("Rust"), "#000000");
    assert_eq!(language_color("TypeScript"), "#3178c6");
    assert_eq!(language_color("Shell"), "#89e051");
}

#[test]
fn unknown_languages_fall_back_to_neutral_gray() {
    assert_eq!(language_color("COBOL"), FALLBACK_COLOR);
    assert_eq!(language_color(""), FALLBACK_COLOR);
    // Lookups are case-sensitive, matching the free-text API value.
    assert_eq!(language_color("rust"), FALLBACK_COLOR);
}
