//! Display colors for repository language badges.

/// Well-known languages and the color for their badge dot. Pure
/// configuration data; lookups are case-sensitive exact matches against the
/// free-text language name the API returns.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f7df1e"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3776ab"),
    ("Java", "#007396"),
    ("C++", "#00599c"),
    ("C#", "#239120"),
    ("Go", "#00add8"),
    ("Rust", "#000000"),
    ("Swift", "#fa7343"),
    ("Kotlin", "#7f52ff"),
    ("Ruby", "#cc342d"),
    ("PHP", "#777bb4"),
    ("HTML", "#e34c26"),
    ("CSS", "#1572b6"),
    ("Shell", "#89e051"),
    ("Dart", "#0175c2"),
    ("Scala", "#dc322f"),
    ("R", "#198ce7"),
    ("Lua", "#2c2d72"),
    ("Perl", "#39457e"),
];

/// Neutral gray for languages without a table entry.
pub const FALLBACK_COLOR: &str = "#6b7280";

pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}
