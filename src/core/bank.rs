//! Gem banks: a count per gem kind.
//!
//! The same type serves the general bank, a player's held tokens,
//! a card cost profile, and a discount profile.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::gem::Gem;

/// Count per gem kind, stored densely in canonical `Gem` order.
///
/// ## Example
///
/// ```
/// use rust_gems::core::{Bank, Gem};
///
/// let mut bank = Bank::uniform(4, 5);
/// assert_eq!(bank[Gem::Ruby], 4);
/// assert_eq!(bank[Gem::Gold], 5);
///
/// assert!(bank.try_remove(Gem::Ruby, 2));
/// assert_eq!(bank[Gem::Ruby], 2);
/// assert!(!bank.try_remove(Gem::Ruby, 3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    counts: [u8; Gem::COUNT],
}

impl Bank {
    /// An empty bank.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Gem::COUNT],
        }
    }

    /// Same count for every colored kind, plus a gold count.
    #[must_use]
    pub fn uniform(colored: u8, gold: u8) -> Self {
        let mut bank = Self::new();
        for gem in Gem::COLORS {
            bank[gem] = colored;
        }
        bank[Gem::Gold] = gold;
        bank
    }

    /// Count occurrences of each kind in a gem sequence.
    pub fn from_gems<'a>(gems: impl IntoIterator<Item = &'a Gem>) -> Self {
        let mut bank = Self::new();
        for &gem in gems {
            bank.add(gem, 1);
        }
        bank
    }

    /// Count held for a kind.
    #[must_use]
    pub fn get(&self, gem: Gem) -> u8 {
        self.counts[gem.index()]
    }

    /// Add `amount` of a kind.
    pub fn add(&mut self, gem: Gem, amount: u8) {
        self.counts[gem.index()] += amount;
    }

    /// Remove `amount` of a kind.
    ///
    /// Returns false and leaves the bank untouched if fewer than
    /// `amount` are held.
    pub fn try_remove(&mut self, gem: Gem, amount: u8) -> bool {
        let slot = &mut self.counts[gem.index()];
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    /// Total count across all kinds, gold included.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Number of colored kinds with a positive count.
    #[must_use]
    pub fn colors_available(&self) -> usize {
        Gem::COLORS.iter().filter(|&&g| self.get(g) > 0).count()
    }

    /// Colored kinds with a positive count, in canonical order.
    pub fn available_colors(&self) -> impl Iterator<Item = Gem> + '_ {
        Gem::COLORS.into_iter().filter(move |&g| self.get(g) > 0)
    }

    /// Per-kind sum of two banks.
    #[must_use]
    pub fn plus(&self, other: &Bank) -> Bank {
        let mut sum = *self;
        for gem in Gem::ALL {
            sum.add(gem, other.get(gem));
        }
        sum
    }

    /// Whether every kind's count is at least `other`'s.
    #[must_use]
    pub fn covers(&self, other: &Bank) -> bool {
        Gem::ALL.iter().all(|&g| self.get(g) >= other.get(g))
    }

    /// Iterate over `(Gem, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Gem, u8)> + '_ {
        Gem::ALL.into_iter().map(move |g| (g, self.get(g)))
    }
}

impl Index<Gem> for Bank {
    type Output = u8;

    fn index(&self, gem: Gem) -> &Self::Output {
        &self.counts[gem.index()]
    }
}

impl IndexMut<Gem> for Bank {
    fn index_mut(&mut self, gem: Gem) -> &mut Self::Output {
        &mut self.counts[gem.index()]
    }
}

impl std::fmt::Display for Bank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .filter(|&(_, c)| c > 0)
            .map(|(g, c)| format!("{c} {g}"))
            .collect();
        if parts.is_empty() {
            f.write_str("nothing")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}
