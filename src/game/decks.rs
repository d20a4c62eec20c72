//! 牌組：抽牌堆與棄牌堆
//!
//! 一張牌任何時刻只會在其中一堆（或被呼叫端抽到手上）。

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cards::{standard_deck, Card, CardId};
use super::constants::DECK_SIZE;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    discarded: Vec<Card>,
    next_id: u32,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// 標準 52 張，未洗牌
    pub fn new() -> Self {
        Self {
            cards: standard_deck(),
            discarded: Vec::new(),
            next_id: DECK_SIZE as u32,
        }
    }

    /// Fisher–Yates 洗抽牌堆（隨機源由呼叫端注入）
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// 從抽牌堆頂端抽最多 `count` 張，不足時回傳剩餘全部
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let n = count.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 從抽牌堆或棄牌堆移除第一張符合 ID 的牌
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        if let Some(pos) = self.cards.iter().position(|c| c.id == id) {
            return Some(self.cards.remove(pos));
        }
        let pos = self.discarded.iter().position(|c| c.id == id)?;
        Some(self.discarded.remove(pos))
    }

    /// 打出或棄掉的牌回到棄牌堆
    pub fn discard<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discarded.extend(cards);
    }

    /// 棄牌堆洗回抽牌堆（每回合開始）
    pub fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let recycled = self.discarded.len();
        self.cards.append(&mut self.discarded);
        self.shuffle(rng);
        debug!(recycled, remaining = self.cards.len(), "deck recycled");
    }

    /// 重建標準 52 張（清空加成與棄牌堆）
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 抽牌堆剩餘張數
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// 配發一個新的卡牌 ID（給之後加入牌組的牌）
    pub fn next_card_id(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }
}

// ============================================================================
// 單元測試
// ============================================================================
