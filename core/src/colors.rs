//! Type-based color theming.
//!
//! The table is process-wide read-only data; lookups never fail. Labels
//! without an entry resolve to `FALLBACK_COLOR`.

/// Color used for unknown labels and for records without any type.
pub const FALLBACK_COLOR: &str = "#A8A77A";

/// Alpha suffix appended to a theme color for card and screen backgrounds.
pub const TINT_ALPHA: &str = "40";

static TYPE_COLORS: &[(&str, &str)] = &[
    ("normal", "#A8A77A"),
    ("fire", "#EE8130"),
    ("water", "#6390F0"),
    ("electric", "#F7D02C"),
    ("grass", "#7AC74C"),
    ("ice", "#96D9D6"),
    ("fighting", "#C22E28"),
    ("poison", "#A33EA1"),
    ("ground", "#E2BF65"),
    ("flying", "#A98FF3"),
    ("psychic", "#F95587"),
    ("bug", "#A6B91A"),
    ("rock", "#B6A136"),
    ("ghost", "#735797"),
    ("dragon", "#6F35FC"),
    ("dark", "#705746"),
    ("steel", "#B7B7CE"),
    ("fairy", "#D685AD"),
];

/// `#RRGGBB` color for a type label.
pub fn type_color(label: &str) -> &'static str {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Theme color for an ordered type list: the first label decides.
pub fn primary_color(types: &[String]) -> &'static str {
    types.first().map_or(FALLBACK_COLOR, |label| type_color(label))
}

/// Translucent variant of a color (`#RRGGBBAA`).
pub fn tint(color: &str) -> String {
    format!("{color}{TINT_ALPHA}")
}

/// Whether the table has an explicit entry for `label`.
pub fn is_known_type(label: &str) -> bool {
    TYPE_COLORS.iter().any(|(name, _)| *name == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(type_color("fire"), "#EE8130");
        assert_eq!(type_color("fairy"), "#D685AD");
        assert!(is_known_type("steel"));
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(type_color("shadow"), FALLBACK_COLOR);
        assert_eq!(type_color(""), FALLBACK_COLOR);
        assert!(!is_known_type("shadow"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(type_color("Fire"), FALLBACK_COLOR);
    }

    #[test]
    fn primary_color_uses_first_label() {
        let types = vec!["grass".to_string(), "poison".to_string()];
        assert_eq!(primary_color(&types), "#7AC74C");
    }

    #[test]
    fn primary_color_of_empty_list_falls_back() {
        assert_eq!(primary_color(&[]), FALLBACK_COLOR);
    }

    #[test]
    fn tint_appends_alpha() {
        assert_eq!(tint("#6390F0"), "#6390F040");
    }

    #[test]
    fn every_entry_is_hex_rgb() {
        for (name, color) in TYPE_COLORS {
            assert_eq!(color.len(), 7, "{name}");
            assert!(color.starts_with('#'), "{name}");
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{name}");
        }
    }
}
