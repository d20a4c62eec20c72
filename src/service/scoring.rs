//! 計分服務
//!
//! 固定五段管線（不可重排），每段在 breakdown 中留下一筆記錄：
//! 基礎值 → 卡片加成 → Chips Joker → Mult Joker → Multiplier Joker，
//! 有 Boss 規則時再追加一段除法。

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::game::{
    BalancingConfig, BlindModifier, Card, HandEvaluator, HandType, HandUpgradeStore, Joker,
    JokerId, Priority, ScoreContext,
};

/// 計分階段
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreStage {
    Base,
    CardBonus,
    ChipJokers,
    MultJokers,
    MultiplierJokers,
    BlindModifier,
}

impl ScoreStage {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreStage::Base => "base",
            ScoreStage::CardBonus => "card bonus",
            ScoreStage::ChipJokers => "chip jokers",
            ScoreStage::MultJokers => "mult jokers",
            ScoreStage::MultiplierJokers => "multiplier jokers",
            ScoreStage::BlindModifier => "blind modifier",
        }
    }
}

/// breakdown 中的一筆：該階段結束後的累計值，以及觸發的 Joker（依持有順序）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreStep {
    pub stage: ScoreStage,
    pub chips: f64,
    pub mult: f64,
    pub activated: Vec<JokerId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: u64,
    pub chips: f64,
    pub mult: f64,
    pub hand_type: HandType,
    pub breakdown: Vec<ScoreStep>,
}

impl ScoreResult {
    pub fn step(&self, stage: ScoreStage) -> Option<&ScoreStep> {
        self.breakdown.iter().find(|s| s.stage == stage)
    }
}

/// 計分器：借用設定與升級表，本身不持有可變狀態
#[derive(Clone, Copy, Debug)]
pub struct ScoreCalculator<'a> {
    config: &'a BalancingConfig,
    upgrades: &'a HandUpgradeStore,
    remaining_deck: usize,
}

impl<'a> ScoreCalculator<'a> {
    pub fn new(config: &'a BalancingConfig, upgrades: &'a HandUpgradeStore) -> Self {
        Self {
            config,
            upgrades,
            remaining_deck: 0,
        }
    }

    /// 牌堆剩餘張數（供 DeckSize 條件使用）
    pub fn with_remaining_deck(mut self, remaining: usize) -> Self {
        self.remaining_deck = remaining;
        self
    }

    /// 計算出牌分數，永不失敗；合法性由呼叫端先行檢查
    pub fn calculate_score(
        &self,
        cards: &[Card],
        jokers: &[Joker],
        blind_modifier: Option<&BlindModifier>,
    ) -> ScoreResult {
        let hand = HandEvaluator::new(self.config).evaluate_hand(cards);
        let upgrade = self.upgrades.get_upgraded_values(hand.hand_type);

        let mut ctx = ScoreContext::new(cards, hand.hand_type, self.remaining_deck);
        let mut breakdown = Vec::with_capacity(6);

        // 1. 基礎值 + 永久升級
        ctx.chips = (hand.base_chips as u64 + upgrade.chips) as f64;
        ctx.mult = (hand.base_mult as u64 + upgrade.mult) as f64;
        record(&mut breakdown, ScoreStage::Base, &ctx, Vec::new());

        // 2. 卡片加成（純加總，與順序無關）
        for card in cards {
            ctx.chips += card.chip_bonus as f64;
            ctx.mult += card.mult_bonus as f64;
        }
        record(&mut breakdown, ScoreStage::CardBonus, &ctx, Vec::new());

        // 3-5. Joker 分層套用
        for (stage, priority) in [
            (ScoreStage::ChipJokers, Priority::Chips),
            (ScoreStage::MultJokers, Priority::Mult),
            (ScoreStage::MultiplierJokers, Priority::Multiplier),
        ] {
            let activated = apply_tier(jokers, priority, &mut ctx);
            record(&mut breakdown, stage, &ctx, activated);
        }

        if let Some(modifier) = blind_modifier {
            ctx.chips /= modifier.chips_divisor;
            ctx.mult /= modifier.mult_divisor;
            record(&mut breakdown, ScoreStage::BlindModifier, &ctx, Vec::new());
        }

        let product = (ctx.chips * ctx.mult).floor();
        let total_score = if product.is_finite() && product > 0.0 {
            product as u64
        } else {
            0
        };

        debug!(
            hand = hand.hand_type.name(),
            chips = ctx.chips,
            mult = ctx.mult,
            total_score,
            "hand scored"
        );

        ScoreResult {
            total_score,
            chips: ctx.chips,
            mult: ctx.mult,
            hand_type: hand.hand_type,
            breakdown,
        }
    }
}

/// 依持有順序套用同一層級的 Joker，回傳觸發者
fn apply_tier(jokers: &[Joker], priority: Priority, ctx: &mut ScoreContext) -> Vec<JokerId> {
    jokers
        .iter()
        .filter(|joker| joker.priority() == priority)
        .filter_map(|joker| {
            let fired = joker.apply_effect(ctx);
            trace!(joker = joker.name(), fired, chips = ctx.chips, mult = ctx.mult, "joker");
            fired.then_some(joker.id)
        })
        .collect()
}

fn record(breakdown: &mut Vec<ScoreStep>, stage: ScoreStage, ctx: &ScoreContext, activated: Vec<JokerId>) {
    trace!(stage = stage.name(), chips = ctx.chips, mult = ctx.mult, "score stage");
    breakdown.push(ScoreStep {
        stage,
        chips: ctx.chips,
        mult: ctx.mult,
        activated,
    });
}

// ============================================================================
// 單元測試
// ============================================================================
