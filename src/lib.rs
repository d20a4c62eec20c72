//! MiniBalatro 計分引擎
//!
//! - `game`: 卡牌、牌型判定、Joker、消耗品、Blind 與平衡參數
//! - `service`: 計分管線與遊戲狀態

pub mod game;
pub mod service;

pub use game::{BalancingConfig, GameError};
pub use service::{GameState, ScoreCalculator, ScoreResult};
