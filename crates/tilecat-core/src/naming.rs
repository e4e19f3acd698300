//! # Commercial Naming
//!
//! Word lists and templates for building the commercial product name.
//!
//! The sales team composes names as "Latin prefix + color + stone type"
//! (e.g. "Lux White Marble"), and the stored name wraps that in the fixed
//! Vietnamese catalog phrase with the tile size.

/// The 20 Latin prefixes offered by the name builder.
pub const LATIN_PREFIXES: [&str; 20] = [
    "Lux", "Prima", "Nobilis", "Regal", "Vita", "Aurea", "Stella", "Magnus", "Opus", "Elegans",
    "Fortis", "Clarus", "Vera", "Splendid", "Grandis", "Purus", "Nexus", "Arca", "Divus", "Optima",
];

/// The 20 colors offered by the name builder.
pub const COLORS: [&str; 20] = [
    "White", "Black", "Grey", "Beige", "Brown", "Ivory", "Cream", "Charcoal", "Slate", "Taupe",
    "Blue", "Green", "Red", "Gold", "Silver", "Pearl", "Ebony", "Sand", "Mocha", "Azure",
];

/// The 20 stone types offered by the name builder.
pub const STONE_TYPES: [&str; 20] = [
    "Marble", "Granite", "Quartz", "Porcelain", "Ceramic", "Slate", "Travertine", "Limestone",
    "Sandstone", "Basalt", "Onyx", "Schist", "Soapstone", "Terrazzo", "Obsidian", "Gneiss",
    "Tuff", "Breccia", "Porphyry", "Dolomite",
];

/// Composes a base name suggestion from the three word lists.
pub fn suggest(prefix: &str, color: &str, stone: &str) -> String {
    format!("{prefix} {color} {stone}")
}

/// Wraps a base name in the full stored commercial name:
/// "Gạch porcelain kích thước {size} {base}".
pub fn full_name(size_label: &str, base: &str) -> String {
    format!("Gạch porcelain kích thước {size_label} {base}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_lists_have_twenty_entries() {
        assert_eq!(LATIN_PREFIXES.len(), 20);
        assert_eq!(COLORS.len(), 20);
        assert_eq!(STONE_TYPES.len(), 20);
    }

    #[test]
    fn test_suggest() {
        assert_eq!(suggest("Lux", "White", "Marble"), "Lux White Marble");
    }

    #[test]
    fn test_full_name_template() {
        assert_eq!(
            full_name("60x60", "Lux White Marble"),
            "Gạch porcelain kích thước 60x60 Lux White Marble"
        );
    }
}
