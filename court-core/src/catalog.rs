//! Named court surface colors.

/// A named color from the surface catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn opt(name: &'static str, hex: &'static str) -> ColorOption {
    ColorOption { name, hex }
}

/// Name reported for codes missing from the catalog.
pub const CUSTOM_COLOR_NAME: &str = "Custom Color";

/// Standard surface colors.
pub const PLAYERS_CHOICE_COLORS: [ColorOption; 16] = [
    opt("Competition Green", "#445f43"),
    opt("Pro Green", "#475b3f"),
    opt("Medium Green", "#3d4933"),
    opt("Forest Green", "#444b3e"),
    opt("Slate", "#525456"),
    opt("Gray", "#6c6d6f"),
    opt("Competition Blue", "#1a3054"),
    opt("Standard Blue", "#233e6d"),
    opt("Pro Blue", "#1b3d5c"),
    opt("Light Blue", "#23548c"),
    opt("Sandstone", "#8c7f6e"),
    opt("Beige", "#8e7053"),
    opt("Terra Cotta", "#966b53"),
    opt("Standard Orange", "#a8593f"),
    opt("Classic Red", "#7b3522"),
    opt("Brilliant White", "#ffffff"),
];

/// Premium surface colors.
pub const SPECIALTY_COLORS: [ColorOption; 15] = [
    opt("Sky Blue", "#82a3d5"),
    opt("Caribbean Blue", "#3474a4"),
    opt("Sea Green", "#347481"),
    opt("Nautical Navy", "#111f2c"),
    opt("Pro Purple", "#3f3c5e"),
    opt("Ultra Violet", "#542f7e"),
    opt("Viva Violet", "#874d97"),
    opt("Crimson", "#702c32"),
    opt("Bright Red", "#9e2b32"),
    opt("Passion Pink", "#e15d96"),
    opt("Coral", "#ec6661"),
    opt("Bright Orange", "#df7e3b"),
    opt("Bright Yellow", "#f3bb47"),
    opt("Kiwi", "#79a448"),
    opt("Lime", "#5fac45"),
];

/// Iterate over every catalog color, standard palette first.
pub fn all_colors() -> impl Iterator<Item = &'static ColorOption> {
    PLAYERS_CHOICE_COLORS.iter().chain(SPECIALTY_COLORS.iter())
}

/// Find the catalog entry for a code (case-insensitive).
pub fn find_color(code: &str) -> Option<&'static ColorOption> {
    let code = code.trim();
    all_colors().find(|c| c.hex.eq_ignore_ascii_case(code))
}

/// Look up a catalog name for a code, case-insensitively.
pub fn color_name(code: &str) -> &'static str {
    find_color(code).map_or(CUSTOM_COLOR_NAME, |c| c.name)
}

/// Find a catalog entry by name (case-insensitive).
pub fn color_by_name(name: &str) -> Option<&'static ColorOption> {
    let name = name.trim();
    all_colors().find(|c| c.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_name_lookup() {
        assert_eq!(color_name("#233e6d"), "Standard Blue");
        assert_eq!(color_name("#233E6D"), "Standard Blue");
        assert_eq!(color_name("#111f2c"), "Nautical Navy");
    }

    #[test]
    fn test_unknown_code_is_custom() {
        assert_eq!(color_name("#010203"), CUSTOM_COLOR_NAME);
        assert_eq!(color_name(""), CUSTOM_COLOR_NAME);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = all_colors().map(|c| c.hex).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 31);
    }

    #[test]
    fn test_color_by_name() {
        assert_eq!(color_by_name("sea green").map(|c| c.hex), Some("#347481"));
        assert!(color_by_name("Chartreuse").is_none());
    }
}
