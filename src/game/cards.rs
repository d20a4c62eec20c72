//! 卡牌定義：點數、花色、卡牌 ID 與永久加成

use std::fmt;

use serde::{Deserialize, Serialize};

/// 花色（順序與索引一致）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    pub fn to_index(&self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Clubs => 3,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
        }
    }
}

/// 點數（Ace = 1）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// 1..=13
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// 在 rank_counts 陣列中的索引（Ace = 0）
    pub fn to_index(&self) -> usize {
        self.value() as usize - 1
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get((value as usize).checked_sub(1)?).copied()
    }

    /// 下一個點數，King 之後回到 Ace（Strength 塔羅）
    pub fn next(&self) -> Rank {
        Rank::ALL[self.value() as usize % Rank::ALL.len()]
    }

    pub fn is_face(&self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 牌組內唯一的卡牌識別碼
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub chip_bonus: u32, // 塔羅牌給予的永久 Chips 加成
    pub mult_bonus: u32, // 塔羅牌給予的永久 Mult 加成
}

impl Card {
    pub fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            chip_bonus: 0,
            mult_bonus: 0,
        }
    }

    /// 是否帶有任何永久加成
    pub fn is_enhanced(&self) -> bool {
        self.chip_bonus > 0 || self.mult_bonus > 0
    }

    /// 在 52 張牌組中的索引
    pub fn index(&self) -> usize {
        self.suit.to_index() * 13 + self.rank.to_index()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// 創建標準 52 張牌組，ID 依序為 0..52
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let id = CardId(deck.len() as u32);
            deck.push(Card::new(id, rank, suit));
        }
    }
    deck
}

// ============================================================================
// 單元測試
// ============================================================================
