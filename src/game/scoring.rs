//! 牌型判定
//!
//! 直接判定玩家選出的牌（不在更大的手牌中搜尋子集）。

use serde::{Deserialize, Serialize};

use super::cards::{Card, Rank};
use super::config::BalancingConfig;
use super::constants::{FIVE_CARD_HAND, RANK_COUNT, SUIT_COUNT};
use super::hand_types::HandType;

/// 一次判定的結果快照
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_type: HandType,
    pub cards: Vec<Card>,
    pub base_chips: u32,
    pub base_mult: u32,
}

/// 牌型判定器（基礎數值由注入的設定提供，與升級無關）
#[derive(Clone, Copy, Debug)]
pub struct HandEvaluator<'a> {
    config: &'a BalancingConfig,
}

impl<'a> HandEvaluator<'a> {
    pub fn new(config: &'a BalancingConfig) -> Self {
        Self { config }
    }

    pub fn evaluate_hand(&self, cards: &[Card]) -> HandResult {
        let hand_type = classify(cards);
        let base = self.config.base_values(hand_type);
        HandResult {
            hand_type,
            cards: cards.to_vec(),
            base_chips: base.chips,
            base_mult: base.mult,
        }
    }
}

/// 判定牌型，由強到弱檢查，第一個符合者勝出
pub fn classify(cards: &[Card]) -> HandType {
    if cards.is_empty() {
        return HandType::HighCard;
    }

    let mut rank_counts = [0u8; RANK_COUNT];
    let mut suit_counts = [0u8; SUIT_COUNT];
    for card in cards {
        rank_counts[card.rank.to_index()] += 1;
        suit_counts[card.suit.to_index()] += 1;
    }

    // 順子/同花/葫蘆/四條只在剛好 5 張時成立
    let five_cards = cards.len() == FIVE_CARD_HAND;
    let is_flush = five_cards && suit_counts.iter().any(|&n| n as usize == FIVE_CARD_HAND);
    let is_straight = five_cards && check_straight(&rank_counts);

    let mut count_values: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
    count_values.sort_unstable_by(|a, b| b.cmp(a));
    let top = count_values.first().copied().unwrap_or(0);
    let second = count_values.get(1).copied().unwrap_or(0);

    if is_straight && is_flush {
        HandType::StraightFlush
    } else if five_cards && top >= 4 {
        HandType::FourOfAKind
    } else if five_cards && top == 3 && second == 2 {
        HandType::FullHouse
    } else if is_flush {
        HandType::Flush
    } else if is_straight {
        HandType::Straight
    } else if top >= 3 {
        HandType::ThreeOfAKind
    } else if top == 2 && second == 2 {
        HandType::TwoPair
    } else if top == 2 {
        HandType::Pair
    } else {
        HandType::HighCard
    }
}

/// 檢查是否為 5 個不同且連續的點數
///
/// Ace 可作低（A-2-3-4-5）或高（10-J-Q-K-A），其他跨越 Ace 的組合不算。
pub fn check_straight(rank_counts: &[u8; RANK_COUNT]) -> bool {
    if rank_counts.iter().any(|&n| n > 1) {
        return false;
    }

    let mut consecutive = 0;
    for &count in rank_counts.iter() {
        if count > 0 {
            consecutive += 1;
            if consecutive >= FIVE_CARD_HAND {
                return true;
            }
        } else {
            consecutive = 0;
        }
    }

    is_broadway(rank_counts)
}

/// 10-J-Q-K-A
pub fn is_broadway(rank_counts: &[u8; RANK_COUNT]) -> bool {
    [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
        .iter()
        .all(|rank| rank_counts[rank.to_index()] > 0)
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{CardId, Suit};

    fn make_cards(ranks_suits: &[(u8, Suit)]) -> Vec<Card> {
        ranks_suits
            .iter()
            .enumerate()
            .map(|(i, &(r, s))| {
                Card::new(CardId(i as u32), Rank::from_value(r).expect("rank"), s)
            })
            .collect()
    }

    fn evaluate(cards: &[Card]) -> HandResult {
        let config = BalancingConfig::default();
        HandEvaluator::new(&config).evaluate_hand(cards)
    }

    use Suit::{Clubs as C, Diamonds as D, Hearts as H, Spades as S};

    #[test]
    fn test_high_card() {
        let cards = make_cards(&[(2, S), (4, D), (6, H), (8, C), (10, S)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::HighCard);
        assert_eq!((result.base_chips, result.base_mult), (5, 1));
    }

    #[test]
    fn test_pair() {
        let cards = make_cards(&[(2, S), (2, D), (6, H), (8, C), (10, S)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::Pair);
        assert_eq!((result.base_chips, result.base_mult), (10, 2));
    }

    #[test]
    fn test_two_pair() {
        let cards = make_cards(&[(2, S), (2, D), (8, H), (8, C), (10, S)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::TwoPair);
    }

    #[test]
    fn test_three_of_a_kind() {
        let cards = make_cards(&[(5, S), (5, D), (5, H), (8, C), (10, S)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::ThreeOfAKind);
        assert_eq!((result.base_chips, result.base_mult), (30, 3));
    }

    #[test]
    fn test_straight() {
        let cards = make_cards(&[(5, S), (6, D), (7, H), (8, C), (9, S)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::Straight);
        assert_eq!((result.base_chips, result.base_mult), (30, 4));
    }

    #[test]
    fn test_straight_wheel() {
        let cards = make_cards(&[(1, S), (2, D), (3, H), (4, C), (5, S)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::Straight);
    }

    #[test]
    fn test_straight_broadway() {
        let cards = make_cards(&[(10, S), (11, D), (12, H), (13, C), (1, S)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::Straight);
    }

    #[test]
    fn test_no_wraparound_through_ace() {
        // Q-K-A-2-3 不是順子
        let cards = make_cards(&[(12, S), (13, D), (1, H), (2, C), (3, S)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::HighCard);

        let cards = make_cards(&[(13, S), (1, D), (2, H), (3, C), (4, S)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::HighCard);
    }

    #[test]
    fn test_flush() {
        let cards = make_cards(&[(2, S), (4, S), (6, S), (8, S), (10, S)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::Flush);
        assert_eq!((result.base_chips, result.base_mult), (35, 4));
    }

    #[test]
    fn test_full_house() {
        let cards = make_cards(&[(5, S), (5, D), (5, H), (8, S), (8, D)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::FullHouse);
        assert_eq!((result.base_chips, result.base_mult), (40, 4));
    }

    #[test]
    fn test_four_of_a_kind() {
        let cards = make_cards(&[(7, S), (7, D), (7, H), (7, C), (10, S)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::FourOfAKind);
        assert_eq!((result.base_chips, result.base_mult), (60, 7));
    }

    #[test]
    fn test_straight_flush() {
        let cards = make_cards(&[(5, H), (6, H), (7, H), (8, H), (9, H)]);
        let result = evaluate(&cards);
        assert_eq!(result.hand_type, HandType::StraightFlush);
        assert_eq!((result.base_chips, result.base_mult), (100, 8));
    }

    #[test]
    fn test_suited_wheel_is_straight_flush() {
        let cards = make_cards(&[(1, C), (2, C), (3, C), (4, C), (5, C)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::StraightFlush);
    }

    #[test]
    fn test_suited_broadway_is_straight_flush() {
        let cards = make_cards(&[(10, C), (11, C), (12, C), (13, C), (1, C)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::StraightFlush);
    }

    #[test]
    fn test_empty_hand() {
        let result = evaluate(&[]);
        assert_eq!(result.hand_type, HandType::HighCard);
        assert!(result.cards.is_empty());
    }

    #[test]
    fn test_small_hands_skip_five_card_types() {
        // 4 張同花不是 Flush
        let cards = make_cards(&[(2, H), (4, H), (6, H), (8, H)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::HighCard);

        // 4 張連續不是 Straight
        let cards = make_cards(&[(5, S), (6, D), (7, H), (8, C)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::HighCard);

        // 4 張同點數不到 5 張，只算三條
        let cards = make_cards(&[(9, S), (9, D), (9, H), (9, C)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::ThreeOfAKind);
    }

    #[test]
    fn test_small_hands_pairs() {
        let cards = make_cards(&[(3, S), (3, D)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::Pair);

        let cards = make_cards(&[(3, S), (3, D), (11, H), (11, C)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::TwoPair);

        let cards = make_cards(&[(3, S), (3, D), (3, H)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::ThreeOfAKind);

        let cards = make_cards(&[(12, S)]);
        assert_eq!(evaluate(&cards).hand_type, HandType::HighCard);
    }

    #[test]
    fn test_result_keeps_cards_and_is_deterministic() {
        let cards = make_cards(&[(7, S), (7, D), (7, H), (7, C), (10, S)]);
        let first = evaluate(&cards);
        let second = evaluate(&cards);
        assert_eq!(first, second);
        assert_eq!(first.cards, cards);
    }

    #[test]
    fn test_base_values_come_from_config() {
        let mut config = BalancingConfig::default();
        config.hand_base[HandType::Pair.to_index()].chips = 99;
        let cards = make_cards(&[(3, S), (3, D)]);
        let result = HandEvaluator::new(&config).evaluate_hand(&cards);
        assert_eq!(result.base_chips, 99);
        assert_eq!(result.base_mult, 2);
    }
}
