//! 消耗品系統
//!
//! 包含兩種類型的消耗品：
//! - Tarot: 修改選中的卡牌（加成、花色、點數）
//! - Planet: 升級牌型

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cards::{Card, Suit};
use super::config::BalancingConfig;
use super::error::{GameError, SlotKind};
use super::hand_types::HandType;
use super::upgrades::HandUpgradeStore;

/// 消耗品類型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableType {
    Tarot,
    Planet,
}

// ============================================================================
// Tarot
// ============================================================================

/// Tarot 卡 ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TarotId {
    /// The Empress: 選中牌 +4 Mult
    TheEmpress,
    /// The Hierophant: 選中牌 +30 Chips
    TheHierophant,
    /// Strength: 提升選中牌的點數 +1
    Strength,
    /// The Star: 將選中的牌轉為方塊
    TheStar,
    /// The Moon: 將選中的牌轉為梅花
    TheMoon,
    /// The Sun: 將選中的牌轉為紅心
    TheSun,
    /// The World: 將選中的牌轉為黑桃
    TheWorld,
}

impl TarotId {
    pub fn all() -> &'static [TarotId] {
        &[
            TarotId::TheEmpress,
            TarotId::TheHierophant,
            TarotId::Strength,
            TarotId::TheStar,
            TarotId::TheMoon,
            TarotId::TheSun,
            TarotId::TheWorld,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TarotId::TheEmpress => "The Empress",
            TarotId::TheHierophant => "The Hierophant",
            TarotId::Strength => "Strength",
            TarotId::TheStar => "The Star",
            TarotId::TheMoon => "The Moon",
            TarotId::TheSun => "The Sun",
            TarotId::TheWorld => "The World",
        }
    }

    /// 可選擇的目標張數 (min, max)
    pub fn selection_count(&self) -> (usize, usize) {
        match self {
            TarotId::TheEmpress | TarotId::TheHierophant | TarotId::Strength => (1, 2),
            TarotId::TheStar | TarotId::TheMoon | TarotId::TheSun | TarotId::TheWorld => (1, 3),
        }
    }

    /// 對選中的牌套用效果，目標數不符時不做任何修改
    pub fn apply(&self, targets: &mut [&mut Card]) -> Result<(), GameError> {
        let (min, max) = self.selection_count();
        if targets.len() < min || targets.len() > max {
            return Err(GameError::InvalidTargets {
                min,
                max,
                got: targets.len(),
            });
        }

        for card in targets.iter_mut() {
            match self {
                TarotId::TheEmpress => card.mult_bonus += 4,
                TarotId::TheHierophant => card.chip_bonus += 30,
                TarotId::Strength => card.rank = card.rank.next(),
                TarotId::TheStar => card.suit = Suit::Diamonds,
                TarotId::TheMoon => card.suit = Suit::Clubs,
                TarotId::TheSun => card.suit = Suit::Hearts,
                TarotId::TheWorld => card.suit = Suit::Spades,
            }
        }
        Ok(())
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        TarotId::all()
            .choose(rng)
            .copied()
            .unwrap_or(TarotId::TheEmpress)
    }
}

// ============================================================================
// Planet
// ============================================================================

/// Planet 卡 ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetId {
    Pluto,
    Mercury,
    Uranus,
    Venus,
    Saturn,
    Jupiter,
    Earth,
    Mars,
    Neptune,
}

impl PlanetId {
    pub fn all() -> &'static [PlanetId] {
        &[
            PlanetId::Pluto,
            PlanetId::Mercury,
            PlanetId::Uranus,
            PlanetId::Venus,
            PlanetId::Saturn,
            PlanetId::Jupiter,
            PlanetId::Earth,
            PlanetId::Mars,
            PlanetId::Neptune,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Pluto => "Pluto",
            PlanetId::Mercury => "Mercury",
            PlanetId::Uranus => "Uranus",
            PlanetId::Venus => "Venus",
            PlanetId::Saturn => "Saturn",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Neptune => "Neptune",
        }
    }

    pub fn hand_type(&self) -> HandType {
        match self {
            PlanetId::Pluto => HandType::HighCard,
            PlanetId::Mercury => HandType::Pair,
            PlanetId::Uranus => HandType::TwoPair,
            PlanetId::Venus => HandType::ThreeOfAKind,
            PlanetId::Saturn => HandType::Straight,
            PlanetId::Jupiter => HandType::Flush,
            PlanetId::Earth => HandType::FullHouse,
            PlanetId::Mars => HandType::FourOfAKind,
            PlanetId::Neptune => HandType::StraightFlush,
        }
    }

    /// 依設定的升級量升級對應牌型
    pub fn apply(&self, config: &BalancingConfig, upgrades: &mut HandUpgradeStore) {
        let hand = self.hand_type();
        let delta = config.planet_upgrade(hand);
        upgrades.apply_planet_upgrade(hand, delta.chips, delta.mult);
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PlanetId::all()
            .choose(rng)
            .copied()
            .unwrap_or(PlanetId::Pluto)
    }
}

// ============================================================================
// 消耗品與欄位
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consumable {
    Tarot(TarotId),
    Planet(PlanetId),
}

impl Consumable {
    pub fn consumable_type(&self) -> ConsumableType {
        match self {
            Consumable::Tarot(_) => ConsumableType::Tarot,
            Consumable::Planet(_) => ConsumableType::Planet,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Consumable::Tarot(t) => t.name(),
            Consumable::Planet(p) => p.name(),
        }
    }

    /// 使用時需要選擇的目標張數
    pub fn selection_count(&self) -> (usize, usize) {
        match self {
            Consumable::Tarot(t) => t.selection_count(),
            Consumable::Planet(_) => (0, 0),
        }
    }
}

/// 有上限的消耗品欄位
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsumableSlots {
    items: Vec<Consumable>,
    limit: usize,
}

impl ConsumableSlots {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn add(&mut self, item: Consumable) -> Result<(), GameError> {
        if self.items.len() >= self.limit {
            return Err(GameError::LimitExceeded {
                kind: SlotKind::Consumable,
                limit: self.limit,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Consumable> {
        self.items.get(index)
    }

    /// 取出指定欄位的消耗品
    pub fn take(&mut self, index: usize) -> Result<Consumable, GameError> {
        if index >= self.items.len() {
            return Err(GameError::EmptySlot(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn as_slice(&self) -> &[Consumable] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// ============================================================================
// 單元測試
// ============================================================================
