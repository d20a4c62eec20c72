//! 牌型定義

use serde::{Deserialize, Serialize};

use super::constants::HAND_TYPE_COUNT;

/// 牌型（由弱到強）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandType {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandType {
    pub const ALL: [HandType; HAND_TYPE_COUNT] = [
        HandType::HighCard,
        HandType::Pair,
        HandType::TwoPair,
        HandType::ThreeOfAKind,
        HandType::Straight,
        HandType::Flush,
        HandType::FullHouse,
        HandType::FourOfAKind,
        HandType::StraightFlush,
    ];

    /// 預設的基礎 chips 和 mult
    pub fn default_base_values(&self) -> (u32, u32) {
        match self {
            HandType::HighCard => (5, 1),
            HandType::Pair => (10, 2),
            HandType::TwoPair => (20, 2),
            HandType::ThreeOfAKind => (30, 3),
            HandType::Straight => (30, 4),
            HandType::Flush => (35, 4),
            HandType::FullHouse => (40, 4),
            HandType::FourOfAKind => (60, 7),
            HandType::StraightFlush => (100, 8),
        }
    }

    /// 每次 Planet 升級的預設增量
    pub fn default_planet_upgrade(&self) -> (u32, u32) {
        match self {
            HandType::HighCard => (10, 1),
            HandType::Pair => (15, 1),
            HandType::TwoPair => (20, 1),
            HandType::ThreeOfAKind => (20, 2),
            HandType::Straight => (30, 3),
            HandType::Flush => (15, 2),
            HandType::FullHouse => (25, 2),
            HandType::FourOfAKind => (30, 3),
            HandType::StraightFlush => (40, 4),
        }
    }

    /// 升級表與基礎表的索引
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::Pair => "Pair",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
        }
    }

    /// 牌型是否包含對子
    pub fn contains_pair(&self) -> bool {
        matches!(
            self,
            HandType::Pair
                | HandType::TwoPair
                | HandType::ThreeOfAKind
                | HandType::FullHouse
                | HandType::FourOfAKind
        )
    }

    /// 牌型是否包含三條
    pub fn contains_three(&self) -> bool {
        matches!(
            self,
            HandType::ThreeOfAKind | HandType::FullHouse | HandType::FourOfAKind
        )
    }

    pub fn contains_straight(&self) -> bool {
        matches!(self, HandType::Straight | HandType::StraightFlush)
    }

    pub fn contains_flush(&self) -> bool {
        matches!(self, HandType::Flush | HandType::StraightFlush)
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_base_values() {
        assert_eq!(HandType::HighCard.default_base_values(), (5, 1));
        assert_eq!(HandType::Flush.default_base_values(), (35, 4));
        assert_eq!(HandType::FourOfAKind.default_base_values(), (60, 7));
        assert_eq!(HandType::StraightFlush.default_base_values(), (100, 8));
    }

    #[test]
    fn test_hand_to_index() {
        for (i, hand) in HandType::ALL.iter().enumerate() {
            assert_eq!(hand.to_index(), i);
        }
        assert_eq!(HandType::StraightFlush.to_index(), HAND_TYPE_COUNT - 1);
    }

    #[test]
    fn test_hand_ordering() {
        assert!(HandType::StraightFlush > HandType::FourOfAKind);
        assert!(HandType::Flush > HandType::Straight);
        assert!(HandType::Pair > HandType::HighCard);
    }

    #[test]
    fn test_containment() {
        assert!(HandType::FullHouse.contains_pair());
        assert!(HandType::FullHouse.contains_three());
        assert!(!HandType::Straight.contains_pair());
        assert!(HandType::StraightFlush.contains_straight());
        assert!(HandType::StraightFlush.contains_flush());
        assert!(!HandType::Flush.contains_straight());
    }
}
