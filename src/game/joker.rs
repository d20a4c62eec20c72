//! Joker 系統 - Tiered Architecture
//!
//! 每張 Joker 依效果分為三個優先層級，計分時依層級分段套用：
//! - Chips: 加法 chips
//! - Mult: 加法 mult
//! - Multiplier: 乘法 mult
//!
//! 觸發條件以資料（`Condition`）表示而非閉包，可序列化、可單獨測試。

use serde::{Deserialize, Serialize};

use super::cards::{Card, Rank, Suit};
use super::error::{GameError, SlotKind};
use super::hand_types::HandType;

// ============================================================================
// 計分上下文
// ============================================================================

/// 單次計分過程中傳遞的可變累加器
#[derive(Clone, Debug)]
pub struct ScoreContext<'a> {
    pub chips: f64,
    pub mult: f64,
    pub played_cards: &'a [Card],
    pub hand_type: HandType,
    pub remaining_deck_size: usize,
}

impl<'a> ScoreContext<'a> {
    pub fn new(played_cards: &'a [Card], hand_type: HandType, remaining_deck_size: usize) -> Self {
        Self {
            chips: 0.0,
            mult: 0.0,
            played_cards,
            hand_type,
            remaining_deck_size,
        }
    }
}

// ============================================================================
// 優先層級與效果
// ============================================================================

/// 套用順序：Chips → Mult → Multiplier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Chips,
    Mult,
    Multiplier,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum JokerEffect {
    /// +chips
    Chips(u32),
    /// +mult
    Mult(u32),
    /// xmult
    XMult(f64),
}

impl JokerEffect {
    pub fn priority(&self) -> Priority {
        match self {
            JokerEffect::Chips(_) => Priority::Chips,
            JokerEffect::Mult(_) => Priority::Mult,
            JokerEffect::XMult(_) => Priority::Multiplier,
        }
    }

    /// 套用到上下文
    pub fn apply(&self, ctx: &mut ScoreContext) {
        match *self {
            JokerEffect::Chips(chips) => ctx.chips += chips as f64,
            JokerEffect::Mult(mult) => ctx.mult += mult as f64,
            JokerEffect::XMult(factor) => ctx.mult *= factor,
        }
    }
}

// ============================================================================
// 條件系統
// ============================================================================

/// 比較運算符
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl CompareOp {
    pub fn compare(&self, left: usize, right: usize) -> bool {
        match self {
            CompareOp::Eq => left == right,
            CompareOp::Gt => left > right,
            CompareOp::Lt => left < right,
            CompareOp::Gte => left >= right,
            CompareOp::Lte => left <= right,
        }
    }
}

/// 效果觸發條件
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// 無條件觸發
    Always,

    /// 牌型匹配
    HandTypeIn(Vec<HandType>),

    /// 出牌數量條件
    PlayedCardCount {
        min: Option<usize>,
        max: Option<usize>,
    },

    /// 至少 `min` 張指定花色
    SuitPlayed { suit: Suit, min: usize },

    /// 出牌中含有指定點數
    RankPlayed(Rank),

    /// 牌組剩餘張數
    DeckSize { op: CompareOp, value: usize },
}

impl Condition {
    pub fn evaluate(&self, ctx: &ScoreContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::HandTypeIn(hands) => hands.contains(&ctx.hand_type),
            Condition::PlayedCardCount { min, max } => {
                let count = ctx.played_cards.len();
                min.map_or(true, |m| count >= m) && max.map_or(true, |m| count <= m)
            }
            Condition::SuitPlayed { suit, min } => {
                ctx.played_cards.iter().filter(|c| c.suit == *suit).count() >= *min
            }
            Condition::RankPlayed(rank) => ctx.played_cards.iter().any(|c| c.rank == *rank),
            Condition::DeckSize { op, value } => op.compare(ctx.remaining_deck_size, *value),
        }
    }
}

// ============================================================================
// Joker ID 目錄
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JokerId {
    // Chips
    SlyJoker,
    WilyJoker,
    CleverJoker,
    DeviousJoker,
    CraftyJoker,
    Square,
    Arrowhead,

    // Mult
    Joker,
    JollyJoker,
    ZanyJoker,
    MadJoker,
    CrazyJoker,
    DrollJoker,
    HalfJoker,
    Erosion,

    // Multiplier
    TheDuo,
    TheTrio,
    TheFamily,
    TheOrder,
    TheTribe,
    Cavendish,
}

impl JokerId {
    pub fn all() -> &'static [JokerId] {
        &[
            JokerId::SlyJoker,
            JokerId::WilyJoker,
            JokerId::CleverJoker,
            JokerId::DeviousJoker,
            JokerId::CraftyJoker,
            JokerId::Square,
            JokerId::Arrowhead,
            JokerId::Joker,
            JokerId::JollyJoker,
            JokerId::ZanyJoker,
            JokerId::MadJoker,
            JokerId::CrazyJoker,
            JokerId::DrollJoker,
            JokerId::HalfJoker,
            JokerId::Erosion,
            JokerId::TheDuo,
            JokerId::TheTrio,
            JokerId::TheFamily,
            JokerId::TheOrder,
            JokerId::TheTribe,
            JokerId::Cavendish,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            JokerId::SlyJoker => "Sly Joker",
            JokerId::WilyJoker => "Wily Joker",
            JokerId::CleverJoker => "Clever Joker",
            JokerId::DeviousJoker => "Devious Joker",
            JokerId::CraftyJoker => "Crafty Joker",
            JokerId::Square => "Square Joker",
            JokerId::Arrowhead => "Arrowhead",
            JokerId::Joker => "Joker",
            JokerId::JollyJoker => "Jolly Joker",
            JokerId::ZanyJoker => "Zany Joker",
            JokerId::MadJoker => "Mad Joker",
            JokerId::CrazyJoker => "Crazy Joker",
            JokerId::DrollJoker => "Droll Joker",
            JokerId::HalfJoker => "Half Joker",
            JokerId::Erosion => "Erosion",
            JokerId::TheDuo => "The Duo",
            JokerId::TheTrio => "The Trio",
            JokerId::TheFamily => "The Family",
            JokerId::TheOrder => "The Order",
            JokerId::TheTribe => "The Tribe",
            JokerId::Cavendish => "Cavendish",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            JokerId::SlyJoker => "+50 Chips if played hand contains a Pair",
            JokerId::WilyJoker => "+100 Chips if played hand contains a Three of a Kind",
            JokerId::CleverJoker => "+80 Chips if played hand is a Two Pair",
            JokerId::DeviousJoker => "+100 Chips if played hand contains a Straight",
            JokerId::CraftyJoker => "+80 Chips if played hand contains a Flush",
            JokerId::Square => "+64 Chips if played hand has exactly 4 cards",
            JokerId::Arrowhead => "+50 Chips if played hand has 2 or more Spades",
            JokerId::Joker => "+4 Mult",
            JokerId::JollyJoker => "+8 Mult if played hand contains a Pair",
            JokerId::ZanyJoker => "+12 Mult if played hand contains a Three of a Kind",
            JokerId::MadJoker => "+10 Mult if played hand is a Two Pair",
            JokerId::CrazyJoker => "+12 Mult if played hand contains a Straight",
            JokerId::DrollJoker => "+10 Mult if played hand contains a Flush",
            JokerId::HalfJoker => "+20 Mult if played hand has 3 or fewer cards",
            JokerId::Erosion => "+15 Mult if 20 or fewer cards remain in deck",
            JokerId::TheDuo => "X2 Mult if played hand contains a Pair",
            JokerId::TheTrio => "X3 Mult if played hand contains a Three of a Kind",
            JokerId::TheFamily => "X4 Mult if played hand is a Four of a Kind",
            JokerId::TheOrder => "X3 Mult if played hand contains a Straight",
            JokerId::TheTribe => "X2 Mult if played hand contains a Flush",
            JokerId::Cavendish => "X3 Mult",
        }
    }

    /// 目錄定義：效果 + 條件
    pub fn definition(&self) -> (JokerEffect, Condition) {
        let pair_hands = || hands_where(HandType::contains_pair);
        let three_hands = || hands_where(HandType::contains_three);
        let straight_hands = || hands_where(HandType::contains_straight);
        let flush_hands = || hands_where(HandType::contains_flush);

        match self {
            JokerId::SlyJoker => (JokerEffect::Chips(50), Condition::HandTypeIn(pair_hands())),
            JokerId::WilyJoker => (JokerEffect::Chips(100), Condition::HandTypeIn(three_hands())),
            JokerId::CleverJoker => (
                JokerEffect::Chips(80),
                Condition::HandTypeIn(vec![HandType::TwoPair]),
            ),
            JokerId::DeviousJoker => (
                JokerEffect::Chips(100),
                Condition::HandTypeIn(straight_hands()),
            ),
            JokerId::CraftyJoker => (JokerEffect::Chips(80), Condition::HandTypeIn(flush_hands())),
            JokerId::Square => (
                JokerEffect::Chips(64),
                Condition::PlayedCardCount { min: Some(4), max: Some(4) },
            ),
            JokerId::Arrowhead => (
                JokerEffect::Chips(50),
                Condition::SuitPlayed { suit: Suit::Spades, min: 2 },
            ),
            JokerId::Joker => (JokerEffect::Mult(4), Condition::Always),
            JokerId::JollyJoker => (JokerEffect::Mult(8), Condition::HandTypeIn(pair_hands())),
            JokerId::ZanyJoker => (JokerEffect::Mult(12), Condition::HandTypeIn(three_hands())),
            JokerId::MadJoker => (
                JokerEffect::Mult(10),
                Condition::HandTypeIn(vec![HandType::TwoPair]),
            ),
            JokerId::CrazyJoker => (JokerEffect::Mult(12), Condition::HandTypeIn(straight_hands())),
            JokerId::DrollJoker => (JokerEffect::Mult(10), Condition::HandTypeIn(flush_hands())),
            JokerId::HalfJoker => (
                JokerEffect::Mult(20),
                Condition::PlayedCardCount { min: None, max: Some(3) },
            ),
            JokerId::Erosion => (
                JokerEffect::Mult(15),
                Condition::DeckSize { op: CompareOp::Lte, value: 20 },
            ),
            JokerId::TheDuo => (JokerEffect::XMult(2.0), Condition::HandTypeIn(pair_hands())),
            JokerId::TheTrio => (JokerEffect::XMult(3.0), Condition::HandTypeIn(three_hands())),
            JokerId::TheFamily => (
                JokerEffect::XMult(4.0),
                Condition::HandTypeIn(vec![HandType::FourOfAKind]),
            ),
            JokerId::TheOrder => (
                JokerEffect::XMult(3.0),
                Condition::HandTypeIn(straight_hands()),
            ),
            JokerId::TheTribe => (JokerEffect::XMult(2.0), Condition::HandTypeIn(flush_hands())),
            JokerId::Cavendish => (JokerEffect::XMult(3.0), Condition::Always),
        }
    }
}

fn hands_where(predicate: fn(&HandType) -> bool) -> Vec<HandType> {
    HandType::ALL.iter().copied().filter(|h| predicate(h)).collect()
}

// ============================================================================
// Joker
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Joker {
    pub id: JokerId,
    pub effect: JokerEffect,
    pub condition: Condition,
}

impl Joker {
    /// 依目錄建立
    pub fn new(id: JokerId) -> Self {
        let (effect, condition) = id.definition();
        Self { id, effect, condition }
    }

    /// 自訂效果與條件（沿用目錄的名稱）
    pub fn custom(id: JokerId, effect: JokerEffect, condition: Condition) -> Self {
        Self { id, effect, condition }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn description(&self) -> &'static str {
        self.id.description()
    }

    pub fn priority(&self) -> Priority {
        self.effect.priority()
    }

    pub fn can_activate(&self, ctx: &ScoreContext) -> bool {
        self.condition.evaluate(ctx)
    }

    /// 條件成立時套用效果，回傳是否觸發
    pub fn apply_effect(&self, ctx: &mut ScoreContext) -> bool {
        if !self.can_activate(ctx) {
            return false;
        }
        self.effect.apply(ctx);
        true
    }
}

// ============================================================================
// Joker 欄位
// ============================================================================

/// 有上限的 Joker 欄位，保持插入順序
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JokerSlots {
    jokers: Vec<Joker>,
    limit: usize,
}

impl JokerSlots {
    pub fn new(limit: usize) -> Self {
        Self {
            jokers: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn add(&mut self, joker: Joker) -> Result<(), GameError> {
        if self.jokers.len() >= self.limit {
            return Err(GameError::LimitExceeded {
                kind: SlotKind::Joker,
                limit: self.limit,
            });
        }
        self.jokers.push(joker);
        Ok(())
    }

    /// 移除第一張符合 ID 的 Joker
    pub fn remove(&mut self, id: JokerId) -> Option<Joker> {
        let pos = self.jokers.iter().position(|j| j.id == id)?;
        Some(self.jokers.remove(pos))
    }

    pub fn as_slice(&self) -> &[Joker] {
        &self.jokers
    }

    pub fn len(&self) -> usize {
        self.jokers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.jokers.len() >= self.limit
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.jokers.clear();
    }
}

// ============================================================================
// 單元測試
// ============================================================================
