//! Blind、Boss Blind 與 Blind 產生器

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::BalancingConfig;
use super::constants::ROUNDS_PER_LEVEL;
use super::hand_types::HandType;

/// 遊戲階段
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    PreBlind,
    Blind,
    PostBlind,
    End(GameEnd),
}

/// 遊戲結束狀態
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    Win,
    Lose,
}

// ============================================================================
// Boss Blind
// ============================================================================

/// Boss Blind 類型 - 每個有獨特的 debuff 效果
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossBlind {
    TheWall,   // 需要 4x 分數 (而非 2x)
    TheNeedle, // 只有 1 次出牌機會
    TheWater,  // 棄牌次數減半
    ThePrism,  // 不能出 Flush / Straight Flush
    TheFlint,  // chips 和 mult 減半
    TheArm,    // mult 減半
    Crimson,   // 出牌次數 -1
}

impl BossBlind {
    pub fn all() -> &'static [BossBlind] {
        &[
            BossBlind::TheWall,
            BossBlind::TheNeedle,
            BossBlind::TheWater,
            BossBlind::ThePrism,
            BossBlind::TheFlint,
            BossBlind::TheArm,
            BossBlind::Crimson,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BossBlind::TheWall => "The Wall",
            BossBlind::TheNeedle => "The Needle",
            BossBlind::TheWater => "The Water",
            BossBlind::ThePrism => "The Prism",
            BossBlind::TheFlint => "The Flint",
            BossBlind::TheArm => "The Arm",
            BossBlind::Crimson => "Crimson Heart",
        }
    }

    /// Boss Blind 的分數倍數
    pub fn goal_multiplier(&self, config: &BalancingConfig) -> f64 {
        match self {
            BossBlind::TheWall => 4.0,
            _ => config.boss_goal_multiplier,
        }
    }

    /// 依 Boss 類型建立規則修改
    pub fn modifier(&self, config: &BalancingConfig) -> BlindModifier {
        let mut modifier = BlindModifier {
            goal_multiplier: self.goal_multiplier(config),
            ..BlindModifier::standard(config)
        };

        match self {
            BossBlind::TheWall => {}
            BossBlind::TheNeedle => modifier.max_hands = 1,
            BossBlind::TheWater => modifier.max_discards = config.discards_per_round / 2,
            BossBlind::ThePrism => {
                modifier.allowed_hand_types = Some(
                    HandType::ALL
                        .iter()
                        .copied()
                        .filter(|h| !h.contains_flush())
                        .collect(),
                );
            }
            BossBlind::TheFlint => {
                modifier.chips_divisor = 2.0;
                modifier.mult_divisor = 2.0;
            }
            BossBlind::TheArm => modifier.mult_divisor = 2.0,
            BossBlind::Crimson => {
                modifier.max_hands = config.hands_per_round.saturating_sub(1).max(1);
            }
        }
        modifier
    }
}

/// Boss Blind 施加的規則限制
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlindModifier {
    pub goal_multiplier: f64,
    pub max_hands: u32,
    pub max_discards: u32,
    /// None 表示所有牌型皆可
    pub allowed_hand_types: Option<Vec<HandType>>,
    /// 除數 >= 1，1 表示無效果
    pub chips_divisor: f64,
    pub mult_divisor: f64,
}

impl BlindModifier {
    /// 無任何限制的修改（只帶入預設的出牌/棄牌次數）
    pub fn standard(config: &BalancingConfig) -> Self {
        Self {
            goal_multiplier: 1.0,
            max_hands: config.hands_per_round,
            max_discards: config.discards_per_round,
            allowed_hand_types: None,
            chips_divisor: 1.0,
            mult_divisor: 1.0,
        }
    }

    pub fn allows(&self, hand_type: HandType) -> bool {
        self.allowed_hand_types
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&hand_type))
    }
}

// ============================================================================
// Blind
// ============================================================================

/// Blind 類型
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BlindKind {
    Small,
    Big,
    Boss {
        boss: BossBlind,
        modifier: BlindModifier,
    },
}

impl BlindKind {
    pub fn to_int(&self) -> i32 {
        match self {
            BlindKind::Small => 0,
            BlindKind::Big => 1,
            BlindKind::Boss { .. } => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blind {
    pub kind: BlindKind,
    pub level: u32,
    pub score_goal: u64,
    pub money_reward: i64,
}

impl Blind {
    pub fn small(level: u32, config: &BalancingConfig) -> Self {
        Self::new(BlindKind::Small, level, config)
    }

    pub fn big(level: u32, config: &BalancingConfig) -> Self {
        Self::new(BlindKind::Big, level, config)
    }

    pub fn boss(boss: BossBlind, level: u32, config: &BalancingConfig) -> Self {
        let modifier = boss.modifier(config);
        Self::new(BlindKind::Boss { boss, modifier }, level, config)
    }

    fn new(kind: BlindKind, level: u32, config: &BalancingConfig) -> Self {
        let base = config.base_goal(level) as f64;
        let (score_goal, money_reward) = match &kind {
            BlindKind::Small => (base, config.small_reward),
            BlindKind::Big => (base * config.big_goal_multiplier, config.big_reward),
            BlindKind::Boss { modifier, .. } => (base * modifier.goal_multiplier, config.boss_reward),
        };
        Self {
            kind,
            level,
            score_goal: score_goal.round() as u64,
            money_reward,
        }
    }

    pub fn get_score_goal(&self) -> u64 {
        self.score_goal
    }

    pub fn get_reward(&self) -> i64 {
        self.money_reward
    }

    pub fn get_level(&self) -> u32 {
        self.level
    }

    /// 只有 Boss Blind 有規則修改
    pub fn get_modifier(&self) -> Option<&BlindModifier> {
        match &self.kind {
            BlindKind::Boss { modifier, .. } => Some(modifier),
            _ => None,
        }
    }

    pub fn boss_type(&self) -> Option<BossBlind> {
        match &self.kind {
            BlindKind::Boss { boss, .. } => Some(*boss),
            _ => None,
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, BlindKind::Boss { .. })
    }
}

// ============================================================================
// Blind 產生器
// ============================================================================

/// 依回合數產生 Blind：每級固定 Small → Big → Boss
#[derive(Clone, Copy, Debug)]
pub struct BlindGenerator<'a> {
    config: &'a BalancingConfig,
}

impl<'a> BlindGenerator<'a> {
    pub fn new(config: &'a BalancingConfig) -> Self {
        Self { config }
    }

    /// 回合數從 1 起算；0 視為 1
    pub fn level_for_round(round_number: u32) -> u32 {
        (round_number.max(1) - 1) / ROUNDS_PER_LEVEL + 1
    }

    pub fn generate_blind<R: Rng + ?Sized>(&self, round_number: u32, rng: &mut R) -> Blind {
        let round = round_number.max(1);
        let level = Self::level_for_round(round);

        let blind = match round % ROUNDS_PER_LEVEL {
            1 => Blind::small(level, self.config),
            2 => Blind::big(level, self.config),
            _ => {
                let boss = BossBlind::all()
                    .choose(rng)
                    .copied()
                    .unwrap_or(BossBlind::TheWall);
                Blind::boss(boss, level, self.config)
            }
        };

        debug!(
            round,
            level,
            kind = blind.kind.to_int(),
            goal = blind.score_goal,
            "blind generated"
        );
        blind
    }
}

// ============================================================================
// 單元測試
// ============================================================================
