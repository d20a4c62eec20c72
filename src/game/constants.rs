//! 遊戲常量定義

// ============================================================================
// 遊戲規則常量
// ============================================================================

pub const DECK_SIZE: usize = 52;         // 標準牌組張數
pub const RANK_COUNT: usize = 13;        // 點數種類
pub const SUIT_COUNT: usize = 4;         // 花色種類
pub const HAND_SIZE: usize = 8;          // 手牌數量
pub const MAX_SELECTED: usize = 5;       // 最多選擇 5 張打出
pub const JOKER_SLOTS: usize = 5;        // Joker 欄位數
pub const CONSUMABLE_SLOTS: usize = 2;   // 消耗品欄位數
pub const PLAYS_PER_BLIND: u32 = 4;      // 每 Blind 出牌次數
pub const DISCARDS_PER_BLIND: u32 = 3;   // 每 Blind 棄牌次數
pub const STARTING_MONEY: i64 = 4;       // 起始金幣
pub const ROUNDS_PER_LEVEL: u32 = 3;     // Small → Big → Boss
pub const FINAL_LEVEL: u32 = 8;          // 通過第 8 級 Boss 即獲勝

// ============================================================================
// 牌型常量
// ============================================================================

pub const HAND_TYPE_COUNT: usize = 9;
pub const FIVE_CARD_HAND: usize = 5;     // 順子/同花/葫蘆/四條所需張數
