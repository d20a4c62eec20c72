//! 遊戲錯誤類型
//!
//! 所有錯誤皆可恢復：呼叫端拒絕該動作即可，狀態不會被修改。

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cards::CardId;
use super::hand_types::HandType;

/// 有容量上限的欄位種類
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    Joker,
    Consumable,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Joker => write!(f, "joker"),
            SlotKind::Consumable => write!(f, "consumable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid hand size: {size} cards selected (allowed 1..={max})")]
    InvalidHandSize { size: usize, max: usize },
    #[error("{} is not allowed by the current boss blind", .0.name())]
    IllegalHandType(HandType),
    #[error("{kind} slots are full (limit {limit})")]
    LimitExceeded { kind: SlotKind, limit: usize },
    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),
    #[error("expected {min}..={max} target cards, got {got}")]
    InvalidTargets { min: usize, max: usize, got: usize },
    #[error("no hands remaining this round")]
    NoHandsRemaining,
    #[error("no discards remaining this round")]
    NoDiscardsRemaining,
    #[error("no active blind")]
    NoActiveBlind,
    #[error("a blind is already in progress")]
    BlindInProgress,
    #[error("slot {0} is empty")]
    EmptySlot(usize),
    #[error("round is already over")]
    RoundOver,
}
