//! 牌型永久升級（Planet 效果）

use serde::{Deserialize, Serialize};

use super::constants::HAND_TYPE_COUNT;
use super::hand_types::HandType;

/// 單一牌型累積的升級量
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandUpgrade {
    pub chips: u64,
    pub mult: u64,
    /// 已套用的 Planet 次數
    pub level: u32,
}

/// 以牌型索引定址的固定陣列，保證每種牌型都有一筆記錄
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandUpgradeStore {
    upgrades: [HandUpgrade; HAND_TYPE_COUNT],
}

impl HandUpgradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加升級量（只增不減）
    pub fn apply_planet_upgrade(&mut self, hand_type: HandType, chips: u32, mult: u32) {
        let entry = &mut self.upgrades[hand_type.to_index()];
        entry.chips += chips as u64;
        entry.mult += mult as u64;
        entry.level += 1;
    }

    pub fn get_upgraded_values(&self, hand_type: HandType) -> HandUpgrade {
        self.upgrades[hand_type.to_index()]
    }

    /// 牌型等級（未升級為 1）
    pub fn level(&self, hand_type: HandType) -> u32 {
        self.upgrades[hand_type.to_index()].level + 1
    }

    /// 全部歸零，只在整局重置時使用
    pub fn reset(&mut self) {
        self.upgrades = [HandUpgrade::default(); HAND_TYPE_COUNT];
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let store = HandUpgradeStore::new();
        for hand in HandType::ALL {
            assert_eq!(store.get_upgraded_values(hand), HandUpgrade::default());
            assert_eq!(store.level(hand), 1);
        }
    }

    #[test]
    fn test_upgrades_accumulate() {
        let mut store = HandUpgradeStore::new();
        store.apply_planet_upgrade(HandType::Flush, 15, 2);
        store.apply_planet_upgrade(HandType::Flush, 15, 2);

        let flush = store.get_upgraded_values(HandType::Flush);
        assert_eq!((flush.chips, flush.mult), (30, 4));
        assert_eq!(store.level(HandType::Flush), 3);

        // 其他牌型不受影響
        assert_eq!(store.get_upgraded_values(HandType::Pair), HandUpgrade::default());
    }

    #[test]
    fn test_upgrades_never_decrease() {
        let mut store = HandUpgradeStore::new();
        let mut previous = store.get_upgraded_values(HandType::Straight);
        for (chips, mult) in [(30, 3), (0, 0), (1, 0), (0, 1)] {
            store.apply_planet_upgrade(HandType::Straight, chips, mult);
            let current = store.get_upgraded_values(HandType::Straight);
            assert!(current.chips >= previous.chips);
            assert!(current.mult >= previous.mult);
            previous = current;
        }
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut store = HandUpgradeStore::new();
        for hand in HandType::ALL {
            store.apply_planet_upgrade(hand, 10, 1);
        }
        store.reset();
        assert_eq!(store, HandUpgradeStore::new());
    }
}
