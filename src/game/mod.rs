//! 遊戲核心模組
//!
//! 包含計分引擎所需的核心定義：
//! - `constants`: 遊戲常量
//! - `config`: 平衡參數（可由 JSON 載入）
//! - `cards`: 卡牌定義
//! - `decks`: 牌堆與棄牌堆
//! - `hand_types`: 牌型定義
//! - `scoring`: 牌型判定
//! - `upgrades`: 牌型永久升級
//! - `joker`: Joker 系統 (Tiered Architecture)
//! - `consumables`: 消耗品系統 (Tarot/Planet)
//! - `blinds`: Blind、Boss Blind 與產生器
//! - `error`: 錯誤類型

pub mod constants;
pub mod config;
pub mod cards;
pub mod decks;
pub mod hand_types;
pub mod scoring;
pub mod upgrades;
pub mod joker;
pub mod consumables;
pub mod blinds;
pub mod error;

pub use constants::*;
pub use config::{BalancingConfig, ChipsMult, ConfigError};
pub use cards::{standard_deck, Card, CardId, Rank, Suit};
pub use decks::Deck;
pub use hand_types::HandType;
pub use scoring::{classify, HandEvaluator, HandResult};
pub use upgrades::{HandUpgrade, HandUpgradeStore};
pub use joker::{
    CompareOp, Condition, Joker, JokerEffect, JokerId, JokerSlots, Priority, ScoreContext,
};
pub use consumables::{Consumable, ConsumableSlots, ConsumableType, PlanetId, TarotId};
pub use blinds::{
    Blind, BlindGenerator, BlindKind, BlindModifier, BossBlind, GameEnd, Stage,
};
pub use error::{GameError, SlotKind};
