//! Weapon stats and wear.

use serde::{Deserialize, Serialize};

/// Authored weapon numbers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub durability: u32,
    pub base_damage: u32,
}

/// Remaining uses of a weapon. Each struck target costs one point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Durability {
    pub current: u32,
    pub max: u32,
}

impl Durability {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_broken(&self) -> bool {
        self.current == 0
    }

    /// Spend one point. Returns false, and changes nothing, if already broken.
    pub fn wear(&mut self) -> bool {
        if self.is_broken() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

impl From<&WeaponStats> for Durability {
    fn from(stats: &WeaponStats) -> Self {
        Self::new(stats.durability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wears_down_to_broken() {
        let stats = WeaponStats {
            durability: 2,
            base_damage: 10,
        };
        let mut durability = Durability::from(&stats);
        assert!(durability.wear());
        assert_eq!(durability.fraction(), 0.5);
        assert!(durability.wear());
        assert!(durability.is_broken());
        assert!(!durability.wear());
        assert_eq!(durability.current, 0);
    }

    #[test]
    fn zero_durability_is_broken_from_the_start() {
        let mut durability = Durability::new(0);
        assert!(durability.is_broken());
        assert!(!durability.wear());
        assert_eq!(durability.fraction(), 0.0);
    }
}
