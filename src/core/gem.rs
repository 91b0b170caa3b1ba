//! Gem kinds: five colored currencies plus the gold wildcard.
//!
//! Colored gems are both currency and the permanent discount a card
//! produces once owned. Gold only ever appears as a held token: it is
//! never part of a card cost and no card produces it.

use serde::{Deserialize, Serialize};

/// A gem (resource) kind.
///
/// The declaration order is the canonical order used for iteration,
/// serialization of banks, and tie-breaking when scanning kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gem {
    Emerald,
    Sapphire,
    Ruby,
    Diamond,
    Onyx,
    /// Wildcard. Substitutes for any colored gem when paying.
    Gold,
}

impl Gem {
    /// Number of gem kinds, wildcard included.
    pub const COUNT: usize = 6;

    /// All kinds in canonical order.
    pub const ALL: [Gem; 6] = [
        Gem::Emerald,
        Gem::Sapphire,
        Gem::Ruby,
        Gem::Diamond,
        Gem::Onyx,
        Gem::Gold,
    ];

    /// The five colored (non-wildcard) kinds.
    pub const COLORS: [Gem; 5] = [
        Gem::Emerald,
        Gem::Sapphire,
        Gem::Ruby,
        Gem::Diamond,
        Gem::Onyx,
    ];

    /// Dense index used by `Bank` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this is the gold wildcard.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Gem::Gold)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gem::Emerald => "Emerald",
            Gem::Sapphire => "Sapphire",
            Gem::Ruby => "Ruby",
            Gem::Diamond => "Diamond",
            Gem::Onyx => "Onyx",
            Gem::Gold => "Gold",
        }
    }

    /// Parse a card color as printed in card data files.
    ///
    /// ```
    /// use rust_gems::core::Gem;
    ///
    /// assert_eq!(Gem::from_color_name("Black"), Some(Gem::Onyx));
    /// assert_eq!(Gem::from_color_name("gold"), None);
    /// ```
    #[must_use]
    pub fn from_color_name(color: &str) -> Option<Gem> {
        match color.to_ascii_lowercase().as_str() {
            "black" => Some(Gem::Onyx),
            "blue" => Some(Gem::Sapphire),
            "white" => Some(Gem::Diamond),
            "green" => Some(Gem::Emerald),
            "red" => Some(Gem::Ruby),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, gem) in Gem::ALL.iter().enumerate() {
            assert_eq!(gem.index(), i);
        }
    }

    #[test]
    fn test_colors_exclude_gold() {
        assert_eq!(Gem::COLORS.len(), 5);
        assert!(Gem::COLORS.iter().all(|g| !g.is_wildcard()));
        assert!(Gem::Gold.is_wildcard());
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Gem::from_color_name("Blue"), Some(Gem::Sapphire));
        assert_eq!(Gem::from_color_name("WHITE"), Some(Gem::Diamond));
        assert_eq!(Gem::from_color_name("Green"), Some(Gem::Emerald));
        assert_eq!(Gem::from_color_name("Red"), Some(Gem::Ruby));
        assert_eq!(Gem::from_color_name("purple"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Gem::Ruby), "Ruby");
        assert_eq!(format!("{}", Gem::Gold), "Gold");
    }
}
