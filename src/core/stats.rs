//! Clamped stat values.
//!
//! Every creature stat lives in [0, 100]. `Stat` makes values outside that
//! range unrepresentable: construction clamps, and all arithmetic saturates
//! at the bounds instead of wrapping or erroring.

use serde::Serialize;

/// A single creature stat, always in `[0, Stat::MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Stat(u8);

impl Stat {
    /// Upper bound for every stat.
    pub const MAX: u8 = 100;

    /// Create a stat, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Increase by `amount`, clamped to `Stat::MAX`.
    pub fn gain(&mut self, amount: u8) {
        self.0 = self.0.saturating_add(amount).min(Self::MAX);
    }

    /// Decrease by `amount`, clamped to 0.
    pub fn lose(&mut self, amount: u8) {
        self.0 = self.0.saturating_sub(amount);
    }
}

/// The three core stats of a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub health: Stat,
    pub happiness: Stat,
    pub hunger: Stat,
}

impl Stats {
    /// Stats of a newly created creature.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            health: Stat::new(80),
            happiness: Stat::new(50),
            hunger: Stat::new(50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(Stat::new(100).get(), 100);
        assert_eq!(Stat::new(255).get(), 100);
        assert_eq!(Stat::new(0).get(), 0);
    }

    #[test]
    fn test_gain_saturates_at_max() {
        let mut stat = Stat::new(95);
        stat.gain(10);
        assert_eq!(stat.get(), 100);

        // No wraparound even near u8::MAX headroom
        let mut stat = Stat::new(100);
        stat.gain(200);
        assert_eq!(stat.get(), 100);
    }

    #[test]
    fn test_lose_saturates_at_zero() {
        let mut stat = Stat::new(15);
        stat.lose(20);
        assert_eq!(stat.get(), 0);

        stat.lose(5);
        assert_eq!(stat.get(), 0);
    }

    #[test]
    fn test_initial_stats() {
        let stats = Stats::initial();
        assert_eq!(stats.health.get(), 80);
        assert_eq!(stats.happiness.get(), 50);
        assert_eq!(stats.hunger.get(), 50);
    }
}
