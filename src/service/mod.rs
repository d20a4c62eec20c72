//! 服務層模組
//!
//! 提供計分管線與遊戲狀態管理

pub mod scoring;
pub mod state;

pub use scoring::{ScoreCalculator, ScoreResult, ScoreStage, ScoreStep};
pub use state::{GameState, PlayOutcome, RoundStatus};

#[cfg(test)]
mod integration_tests;
