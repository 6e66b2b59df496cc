//! Combat-related components and resources.

use bevy::prelude::*;

/// Full energy for a freshly spawned character.
pub const FULL_ENERGY: u32 = 100;

/// Energy lost per accepted hit.
pub const HIT_DAMAGE: u32 = 5;

/// How long after a hit the entity counts as hurt (animation gate).
pub const HURT_WINDOW_SECS: f64 = 1.0;

/// Health pool with a hurt-cooldown timestamp.
///
/// Energy stays in `[0, 100]`; zero means dead. The timestamp only drives
/// the hurt animation, it does not gate incoming damage.
#[derive(Component, Debug, Clone, Copy)]
pub struct Energy {
    value: u32,
    last_hit: f64,
}

impl Default for Energy {
    fn default() -> Self {
        Self {
            value: FULL_ENERGY,
            last_hit: f64::NEG_INFINITY,
        }
    }
}

impl Energy {
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Apply one hit: subtract the fixed damage, floor at zero, and record
    /// the hit time. Hitting an empty pool is a no-op.
    pub fn hit(&mut self, now: f64) {
        if self.value == 0 {
            return;
        }
        if self.value < HIT_DAMAGE {
            self.value = 0;
            return;
        }
        self.value -= HIT_DAMAGE;
        self.last_hit = now;
    }

    /// Whether the last hit was within the hurt window.
    pub fn is_hurt(&self, now: f64) -> bool {
        now - self.last_hit < HURT_WINDOW_SECS
    }

    pub fn is_dead(&self) -> bool {
        self.value == 0
    }

    /// Fill percentage for the HUD bar.
    pub fn percentage(&self) -> f32 {
        self.value as f32 / FULL_ENERGY as f32
    }
}

/// HUD percentage step per pickup or throw.
pub const STOCK_STEP: u32 = 10;

/// HUD percentage cap.
pub const STOCK_MAX: u32 = 100;

/// Collected coin and bottle stock, as HUD percentages.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Stocks {
    pub coins: u32,
    pub bottles: u32,
}

impl Stocks {
    pub fn add_coin(&mut self) {
        self.coins = (self.coins + STOCK_STEP).min(STOCK_MAX);
    }

    pub fn add_bottle(&mut self) {
        self.bottles = (self.bottles + STOCK_STEP).min(STOCK_MAX);
    }

    /// Whether a bottle can be thrown right now.
    pub fn can_throw(&self) -> bool {
        self.bottles >= STOCK_STEP
    }

    /// Consume one throw's worth of bottle stock.
    pub fn spend_bottle(&mut self) {
        self.bottles = self.bottles.saturating_sub(STOCK_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_after_n_hits_matches_formula() {
        for n in 0..25u32 {
            let mut energy = Energy::default();
            for i in 0..n {
                energy.hit(i as f64);
            }
            assert_eq!(energy.value(), FULL_ENERGY.saturating_sub(HIT_DAMAGE * n));
        }
    }

    #[test]
    fn last_hit_to_zero_still_counts_as_hurt() {
        let mut energy = Energy::default();
        for i in 0..20 {
            energy.hit(i as f64);
        }
        assert!(energy.is_dead());
        assert!(energy.is_hurt(19.5));

        // Hitting a dead character changes nothing.
        energy.hit(30.0);
        assert_eq!(energy.value(), 0);
        assert!(!energy.is_hurt(30.1));
    }

    #[test]
    fn hurt_window_expires() {
        let mut energy = Energy::default();
        energy.hit(10.0);
        assert!(energy.is_hurt(10.9));
        assert!(!energy.is_hurt(11.0));
    }

    #[test]
    fn fresh_energy_is_not_hurt() {
        let energy = Energy::default();
        assert!(!energy.is_hurt(0.0));
    }

    #[test]
    fn coin_stock_caps_at_one_hundred() {
        let mut stocks = Stocks::default();
        for _ in 0..10 {
            stocks.add_coin();
        }
        assert_eq!(stocks.coins, STOCK_MAX);

        // The eleventh coin is a no-op past the cap.
        stocks.add_coin();
        assert_eq!(stocks.coins, STOCK_MAX);
    }

    #[test]
    fn throwing_needs_ten_percent_stock() {
        let mut stocks = Stocks::default();
        assert!(!stocks.can_throw());
        stocks.add_bottle();
        assert!(stocks.can_throw());
        stocks.spend_bottle();
        assert_eq!(stocks.bottles, 0);
        assert!(!stocks.can_throw());
    }
}
