//! 平衡參數
//!
//! `BalancingConfig` 在啟動時建立一次，之後以引用注入 `HandEvaluator`、
//! `ScoreCalculator` 與 `BlindGenerator`。可從 JSON 載入，缺少的欄位使用預設值。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    CONSUMABLE_SLOTS, DISCARDS_PER_BLIND, FINAL_LEVEL, HAND_SIZE, HAND_TYPE_COUNT, JOKER_SLOTS,
    MAX_SELECTED, PLAYS_PER_BLIND, STARTING_MONEY,
};
use super::hand_types::HandType;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// 牌型的 (chips, mult) 數值組
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipsMult {
    pub chips: u32,
    pub mult: u32,
}

impl ChipsMult {
    pub const fn new(chips: u32, mult: u32) -> Self {
        Self { chips, mult }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancingConfig {
    /// 各牌型基礎數值（索引 = HandType::to_index）
    pub hand_base: [ChipsMult; HAND_TYPE_COUNT],
    /// 每張 Planet 卡的升級量
    pub planet_upgrades: [ChipsMult; HAND_TYPE_COUNT],

    /// 第 1 級 Small Blind 目標分數
    pub base_goal: u64,
    /// 每級目標分數的幾何成長率
    pub goal_growth: f64,
    pub big_goal_multiplier: f64,
    pub boss_goal_multiplier: f64,

    pub small_reward: i64,
    pub big_reward: i64,
    pub boss_reward: i64,

    pub hand_size: usize,
    pub max_selected: usize,
    pub joker_slots: usize,
    pub consumable_slots: usize,
    pub hands_per_round: u32,
    pub discards_per_round: u32,
    pub starting_money: i64,
    /// 通過此等級的 Boss Blind 即獲勝
    pub final_level: u32,
}

impl Default for BalancingConfig {
    fn default() -> Self {
        let table = |f: fn(&HandType) -> (u32, u32)| {
            HandType::ALL.map(|hand| {
                let (chips, mult) = f(&hand);
                ChipsMult::new(chips, mult)
            })
        };

        Self {
            hand_base: table(HandType::default_base_values),
            planet_upgrades: table(HandType::default_planet_upgrade),
            base_goal: 300,
            goal_growth: 1.6,
            big_goal_multiplier: 1.5,
            boss_goal_multiplier: 2.0,
            small_reward: 3,
            big_reward: 4,
            boss_reward: 5,
            hand_size: HAND_SIZE,
            max_selected: MAX_SELECTED,
            joker_slots: JOKER_SLOTS,
            consumable_slots: CONSUMABLE_SLOTS,
            hands_per_round: PLAYS_PER_BLIND,
            discards_per_round: DISCARDS_PER_BLIND,
            starting_money: STARTING_MONEY,
            final_level: FINAL_LEVEL,
        }
    }
}

impl BalancingConfig {
    /// 從 JSON 載入並驗證
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_goal == 0 {
            return Err(ConfigError::Invalid("base_goal must be positive".into()));
        }
        if !(self.goal_growth >= 1.0) {
            return Err(ConfigError::Invalid("goal_growth must be >= 1".into()));
        }
        if !(self.big_goal_multiplier > 1.0) {
            return Err(ConfigError::Invalid("big_goal_multiplier must be > 1".into()));
        }
        if !(self.boss_goal_multiplier >= self.big_goal_multiplier) {
            return Err(ConfigError::Invalid(
                "boss_goal_multiplier must be >= big_goal_multiplier".into(),
            ));
        }
        if self.max_selected == 0 || self.max_selected > self.hand_size {
            return Err(ConfigError::Invalid(format!(
                "max_selected must be in 1..={}",
                self.hand_size
            )));
        }
        if self.hands_per_round == 0 {
            return Err(ConfigError::Invalid("hands_per_round must be positive".into()));
        }
        if self.final_level == 0 {
            return Err(ConfigError::Invalid("final_level must be positive".into()));
        }
        Ok(())
    }

    pub fn base_values(&self, hand: HandType) -> ChipsMult {
        self.hand_base[hand.to_index()]
    }

    pub fn planet_upgrade(&self, hand: HandType) -> ChipsMult {
        self.planet_upgrades[hand.to_index()]
    }

    /// 第 `level` 級的基礎目標分數（幾何成長，level 從 1 起算）
    pub fn base_goal(&self, level: u32) -> u64 {
        let exponent = level.saturating_sub(1) as i32;
        (self.base_goal as f64 * self.goal_growth.powi(exponent)).round() as u64
    }
}

// ============================================================================
// 單元測試
// ============================================================================
