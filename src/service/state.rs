//! 遊戲狀態管理
//!
//! `GameState` 是計分引擎的呼叫端：負責回合流程、手牌、出牌/棄牌預算、
//! Joker 與消耗品欄位，並在出牌前檢查所有規則。

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::game::{
    classify, BalancingConfig, Blind, BlindGenerator, BlindModifier, Card, CardId, ConfigError,
    Consumable, ConsumableSlots, Deck, GameEnd, GameError, HandUpgradeStore, Joker, JokerId,
    JokerSlots, Stage,
};

use super::scoring::{ScoreCalculator, ScoreResult};

/// 出牌後的回合狀態
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// 尚未達標，仍有出牌次數
    InProgress,
    /// 達標並已領取獎勵
    Cleared { reward: i64 },
    /// 通過最終等級的 Boss
    Won { reward: i64 },
    /// 出牌次數用盡仍未達標
    Defeated,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub score: ScoreResult,
    pub round_score: u64,
    pub status: RoundStatus,
}

/// 遊戲狀態
///
/// 亂數在每回合開始時由 (seed, round) 導出，因此序列化後還原的狀態
/// 會產生與原狀態完全相同的後續回合。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    config: BalancingConfig,
    seed: u64,

    // 牌組
    pub deck: Deck,
    pub hand: Vec<Card>,

    // Joker / 消耗品 / 升級
    pub jokers: JokerSlots,
    pub consumables: ConsumableSlots,
    pub upgrades: HandUpgradeStore,

    // 遊戲進度
    pub stage: Stage,
    pub round: u32,
    pub blind: Option<Blind>,

    // 當前 Blind 狀態
    pub round_score: u64,
    pub hands_left: u32,
    pub discards_left: u32,

    // 經濟
    pub money: i64,
}

impl GameState {
    pub fn new(config: BalancingConfig, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            hand: Vec::with_capacity(config.hand_size),
            jokers: JokerSlots::new(config.joker_slots),
            consumables: ConsumableSlots::new(config.consumable_slots),
            upgrades: HandUpgradeStore::new(),
            stage: Stage::PreBlind,
            round: 0,
            blind: None,
            round_score: 0,
            hands_left: config.hands_per_round,
            discards_left: config.discards_per_round,
            money: config.starting_money,
            config,
            seed,
        }
    }

    pub fn config(&self) -> &BalancingConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_over(&self) -> bool {
        matches!(self.stage, Stage::End(_))
    }

    pub fn current_modifier(&self) -> Option<&BlindModifier> {
        self.blind.as_ref().and_then(Blind::get_modifier)
    }

    pub fn score_goal(&self) -> Option<u64> {
        self.blind.as_ref().map(Blind::get_score_goal)
    }

    /// 本回合的亂數來源
    fn round_rng(&self) -> StdRng {
        let mix = (self.round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        StdRng::seed_from_u64(self.seed ^ mix)
    }

    // ========================================================================
    // 回合流程
    // ========================================================================

    /// 開始下一回合：產生 Blind、設定預算、洗牌並發牌
    pub fn start_round(&mut self) -> Result<&Blind, GameError> {
        match self.stage {
            Stage::End(_) => return Err(GameError::RoundOver),
            Stage::Blind => return Err(GameError::BlindInProgress),
            Stage::PreBlind | Stage::PostBlind => {}
        }

        self.round += 1;
        let mut rng = self.round_rng();
        let blind = BlindGenerator::new(&self.config).generate_blind(self.round, &mut rng);

        let (hands, discards) = match blind.get_modifier() {
            Some(modifier) => (modifier.max_hands, modifier.max_discards),
            None => (self.config.hands_per_round, self.config.discards_per_round),
        };
        self.hands_left = hands;
        self.discards_left = discards;
        self.round_score = 0;

        self.deck.discard(self.hand.drain(..));
        self.deck.recycle(&mut rng);
        self.refill_hand();

        info!(
            round = self.round,
            level = blind.get_level(),
            goal = blind.get_score_goal(),
            boss = blind.boss_type().map(|b| b.name()),
            hands,
            discards,
            "round started"
        );

        self.stage = Stage::Blind;
        Ok(self.blind.insert(blind))
    }

    /// 出牌：驗證 → 計分 → 累計 → 棄牌補牌 → 判定勝負
    pub fn play_hand(&mut self, ids: &[CardId]) -> Result<PlayOutcome, GameError> {
        self.ensure_blind_active()?;
        let positions = self.select_from_hand(ids)?;
        if self.hands_left == 0 {
            return Err(GameError::NoHandsRemaining);
        }

        let selected: Vec<Card> = positions.iter().map(|&i| self.hand[i].clone()).collect();
        let hand_type = classify(&selected);
        if let Some(modifier) = self.current_modifier() {
            if !modifier.allows(hand_type) {
                warn!(hand = hand_type.name(), "hand type blocked by boss blind");
                return Err(GameError::IllegalHandType(hand_type));
            }
        }

        let score = ScoreCalculator::new(&self.config, &self.upgrades)
            .with_remaining_deck(self.deck.remaining())
            .calculate_score(&selected, self.jokers.as_slice(), self.current_modifier());

        self.hands_left -= 1;
        self.round_score += score.total_score;
        let played = self.take_from_hand(positions);
        self.deck.discard(played);
        self.refill_hand();

        let status = self.resolve_round();
        debug!(
            hand = score.hand_type.name(),
            scored = score.total_score,
            round_score = self.round_score,
            hands_left = self.hands_left,
            "hand played"
        );

        Ok(PlayOutcome {
            score,
            round_score: self.round_score,
            status,
        })
    }

    /// 棄牌並補牌
    pub fn discard(&mut self, ids: &[CardId]) -> Result<(), GameError> {
        self.ensure_blind_active()?;
        let positions = self.select_from_hand(ids)?;
        if self.discards_left == 0 {
            return Err(GameError::NoDiscardsRemaining);
        }

        self.discards_left -= 1;
        let discarded = self.take_from_hand(positions);
        debug!(count = discarded.len(), discards_left = self.discards_left, "cards discarded");
        self.deck.discard(discarded);
        self.refill_hand();
        Ok(())
    }

    fn resolve_round(&mut self) -> RoundStatus {
        let Some(blind) = self.blind.as_ref() else {
            return RoundStatus::InProgress;
        };

        if self.round_score >= blind.get_score_goal() {
            let reward = blind.get_reward();
            let won = blind.is_boss() && blind.get_level() >= self.config.final_level;
            self.money += reward;

            if won {
                self.stage = Stage::End(GameEnd::Win);
                info!(round = self.round, money = self.money, "game won");
                RoundStatus::Won { reward }
            } else {
                self.stage = Stage::PostBlind;
                info!(round = self.round, reward, money = self.money, "blind cleared");
                RoundStatus::Cleared { reward }
            }
        } else if self.hands_left == 0 {
            self.stage = Stage::End(GameEnd::Lose);
            info!(
                round = self.round,
                round_score = self.round_score,
                goal = blind.get_score_goal(),
                "game lost"
            );
            RoundStatus::Defeated
        } else {
            RoundStatus::InProgress
        }
    }

    fn ensure_blind_active(&self) -> Result<(), GameError> {
        match self.stage {
            Stage::Blind => Ok(()),
            Stage::End(_) => Err(GameError::RoundOver),
            Stage::PreBlind | Stage::PostBlind => Err(GameError::NoActiveBlind),
        }
    }

    /// 檢查選取張數與成員資格，回傳手牌索引（依選取順序）
    fn select_from_hand(&self, ids: &[CardId]) -> Result<Vec<usize>, GameError> {
        if ids.is_empty() || ids.len() > self.config.max_selected {
            return Err(GameError::InvalidHandSize {
                size: ids.len(),
                max: self.config.max_selected,
            });
        }
        self.positions_in_hand(ids)
    }

    /// 重複的 ID 視為不在手牌中
    fn positions_in_hand(&self, ids: &[CardId]) -> Result<Vec<usize>, GameError> {
        let mut positions = Vec::with_capacity(ids.len());
        for &id in ids {
            let pos = self
                .hand
                .iter()
                .position(|c| c.id == id)
                .filter(|p| !positions.contains(p))
                .ok_or(GameError::CardNotInHand(id))?;
            positions.push(pos);
        }
        Ok(positions)
    }

    fn take_from_hand(&mut self, positions: Vec<usize>) -> Vec<Card> {
        let mut sorted = positions;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let mut taken: Vec<Card> = sorted.into_iter().map(|i| self.hand.remove(i)).collect();
        taken.reverse();
        taken
    }

    fn refill_hand(&mut self) {
        let missing = self.config.hand_size.saturating_sub(self.hand.len());
        let drawn = self.deck.draw(missing);
        self.hand.extend(drawn);
    }

    // ========================================================================
    // Joker 與消耗品
    // ========================================================================

    pub fn add_joker(&mut self, joker: Joker) -> Result<(), GameError> {
        let name = joker.name();
        self.jokers.add(joker)?;
        debug!(joker = name, held = self.jokers.len(), "joker added");
        Ok(())
    }

    pub fn remove_joker(&mut self, id: JokerId) -> Option<Joker> {
        self.jokers.remove(id)
    }

    pub fn add_consumable(&mut self, item: Consumable) -> Result<(), GameError> {
        self.consumables.add(item)
    }

    /// 使用消耗品；Tarot 需要手牌目標，Planet 不需要目標
    ///
    /// 所有檢查在任何修改前完成，失敗時欄位與手牌維持原狀。
    pub fn use_consumable(
        &mut self,
        index: usize,
        target_ids: &[CardId],
    ) -> Result<Consumable, GameError> {
        let item = self
            .consumables
            .get(index)
            .copied()
            .ok_or(GameError::EmptySlot(index))?;

        let (min, max) = item.selection_count();
        if target_ids.len() < min || target_ids.len() > max {
            return Err(GameError::InvalidTargets {
                min,
                max,
                got: target_ids.len(),
            });
        }
        self.positions_in_hand(target_ids)?;

        match item {
            Consumable::Tarot(tarot) => {
                let mut targets: Vec<&mut Card> = self
                    .hand
                    .iter_mut()
                    .filter(|c| target_ids.contains(&c.id))
                    .collect();
                tarot.apply(&mut targets)?;
            }
            Consumable::Planet(planet) => {
                planet.apply(&self.config, &mut self.upgrades);
            }
        }

        info!(consumable = item.name(), targets = target_ids.len(), "consumable used");
        self.consumables.take(index)
    }

    // ========================================================================
    // 重置與持久化
    // ========================================================================

    /// 整局重置（包含牌型升級）
    pub fn reset(&mut self) {
        self.deck.reset();
        self.hand.clear();
        self.jokers.clear();
        self.consumables.clear();
        self.upgrades.reset();
        self.stage = Stage::PreBlind;
        self.round = 0;
        self.blind = None;
        self.round_score = 0;
        self.hands_left = self.config.hands_per_round;
        self.discards_left = self.config.discards_per_round;
        self.money = self.config.starting_money;
        info!(seed = self.seed, "game reset");
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// 還原狀態，同時驗證內含的設定
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let state: Self = serde_json::from_str(json)?;
        state.config.validate()?;
        Ok(state)
    }
}

// ============================================================================
// 單元測試
// ============================================================================
