//! Service-layer integration tests (round flow + boss rules + persistence)

#[cfg(test)]
mod tests {
    use crate::game::{
        BalancingConfig, Blind, BlindKind, BossBlind, CardId, Consumable, DECK_SIZE, GameEnd,
        GameError, HandType, Joker, JokerId, PlanetId, Rank, Stage, Suit, TarotId,
    };
    use crate::service::{GameState, RoundStatus, ScoreStage};

    fn card_id(rank: Rank, suit: Suit) -> CardId {
        CardId((suit.to_index() * 13 + rank.to_index()) as u32)
    }

    /// 把指定的牌換進手牌（其餘手牌放回抽牌堆）
    fn force_hand(state: &mut GameState, wanted: &[CardId]) {
        for card in state.hand.drain(..) {
            state.deck.add_card(card);
        }
        for &id in wanted {
            let card = state.deck.remove_card(id).expect("card in deck");
            state.hand.push(card);
        }
        let missing = state.config().hand_size - state.hand.len();
        let drawn = state.deck.draw(missing);
        state.hand.extend(drawn);
    }

    fn total_cards(state: &GameState) -> usize {
        state.deck.remaining() + state.deck.discarded().len() + state.hand.len()
    }

    fn four_sevens() -> Vec<CardId> {
        vec![
            card_id(Rank::Seven, Suit::Spades),
            card_id(Rank::Seven, Suit::Diamonds),
            card_id(Rank::Seven, Suit::Hearts),
            card_id(Rank::Seven, Suit::Clubs),
            card_id(Rank::King, Suit::Spades),
        ]
    }

    fn heart_flush() -> Vec<CardId> {
        [Rank::Two, Rank::Five, Rank::Nine, Rank::Jack, Rank::King]
            .iter()
            .map(|&r| card_id(r, Suit::Hearts))
            .collect()
    }

    #[test]
    fn test_full_round_flow() {
        let mut state = GameState::new(BalancingConfig::default(), 7);
        let blind = state.start_round().expect("start").clone();
        assert_eq!(blind.kind, BlindKind::Small);

        let hand = four_sevens();
        force_hand(&mut state, &hand);
        let outcome = state.play_hand(&hand).expect("play");

        assert_eq!(outcome.score.hand_type, HandType::FourOfAKind);
        assert_eq!(outcome.score.total_score, 420);
        assert_eq!(outcome.status, RoundStatus::Cleared { reward: 3 });
        assert_eq!(state.money, 7);
        assert_eq!(state.stage, Stage::PostBlind);
        assert_eq!(total_cards(&state), DECK_SIZE);

        let next = state.start_round().expect("next round").clone();
        assert_eq!(next.kind, BlindKind::Big);
        assert!(next.get_score_goal() > blind.get_score_goal());
        assert_eq!(state.hand.len(), 8);
        assert!(state.deck.discarded().is_empty());
        assert_eq!(total_cards(&state), DECK_SIZE);
    }

    #[test]
    fn test_boss_rejects_illegal_hand_before_scoring() {
        let config = BalancingConfig::default();
        let mut state = GameState::new(config.clone(), 3);
        state.start_round().expect("start");
        state.blind = Some(Blind::boss(BossBlind::ThePrism, 1, &config));

        let flush = heart_flush();
        force_hand(&mut state, &flush);
        let before = state.clone();

        assert_eq!(
            state.play_hand(&flush),
            Err(GameError::IllegalHandType(HandType::Flush))
        );
        assert_eq!(state, before);

        let pair = vec![flush[0], card_id(Rank::Two, Suit::Spades)];
        force_hand(&mut state, &pair);
        let outcome = state.play_hand(&pair).expect("pair is legal");
        assert_eq!(outcome.score.hand_type, HandType::Pair);
        assert_eq!(state.hands_left, 3);
    }

    #[test]
    fn test_flint_halves_chips_and_mult() {
        let config = BalancingConfig::default();
        let mut state = GameState::new(config.clone(), 4);
        state.start_round().expect("start");
        state.blind = Some(Blind::boss(BossBlind::TheFlint, 1, &config));

        let hand = four_sevens();
        force_hand(&mut state, &hand);
        let outcome = state.play_hand(&hand).expect("play");

        let step = outcome.score.step(ScoreStage::BlindModifier).expect("modifier step");
        assert_eq!((step.chips, step.mult), (30.0, 3.5));
        assert_eq!(outcome.score.total_score, 105);
        assert_eq!(outcome.status, RoundStatus::InProgress);
    }

    #[test]
    fn test_boss_round_applies_budgets() {
        let mut config = BalancingConfig::default();
        config.base_goal = 1;
        let mut state = GameState::new(config, 21);

        for _ in 0..2 {
            state.start_round().expect("start");
            let ids: Vec<CardId> = state.hand.iter().take(1).map(|c| c.id).collect();
            state.play_hand(&ids).expect("play");
        }

        let boss = state.start_round().expect("boss").clone();
        let modifier = boss.get_modifier().expect("boss modifier");
        assert!(boss.is_boss());
        assert_eq!(state.hands_left, modifier.max_hands);
        assert_eq!(state.discards_left, modifier.max_discards);
        assert_eq!(total_cards(&state), DECK_SIZE);
    }

    #[test]
    fn test_jokers_and_planets_raise_score() {
        let mut state = GameState::new(BalancingConfig::default(), 5);
        state.start_round().expect("start");

        state.add_joker(Joker::new(JokerId::SlyJoker)).expect("room");
        state.add_joker(Joker::new(JokerId::TheDuo)).expect("room");
        state.add_consumable(Consumable::Planet(PlanetId::Mercury)).expect("room");
        state.add_consumable(Consumable::Tarot(TarotId::TheHierophant)).expect("room");
        assert!(matches!(
            state.add_consumable(Consumable::Planet(PlanetId::Pluto)),
            Err(GameError::LimitExceeded { limit: 2, .. })
        ));

        let pair = vec![card_id(Rank::Four, Suit::Spades), card_id(Rank::Four, Suit::Hearts)];
        force_hand(&mut state, &pair);

        state.use_consumable(0, &[]).expect("planet");
        state.use_consumable(0, &pair[..1]).expect("tarot");
        assert!(state.consumables.is_empty());

        let outcome = state.play_hand(&pair).expect("play");
        // (10 + 15 + 30 + 50) × (2 + 1) × 2
        assert_eq!(outcome.score.chips, 105.0);
        assert_eq!(outcome.score.mult, 6.0);
        assert_eq!(outcome.score.total_score, 630);
        assert_eq!(
            outcome.score.step(ScoreStage::ChipJokers).expect("stage").activated,
            vec![JokerId::SlyJoker]
        );

        // 加成跟著牌進入棄牌堆
        let bonus = state
            .deck
            .discarded()
            .iter()
            .find(|c| c.id == pair[0])
            .map(|c| c.chip_bonus);
        assert_eq!(bonus, Some(30));
    }

    #[test]
    fn test_restored_state_continues_identically() {
        let mut config = BalancingConfig::default();
        config.base_goal = 1;
        let mut original = GameState::new(config, 99);
        original.start_round().expect("start");
        original.add_joker(Joker::new(JokerId::Cavendish)).expect("room");
        let ids: Vec<CardId> = original.hand.iter().take(2).map(|c| c.id).collect();
        original.discard(&ids).expect("discard");

        let json = original.to_json().expect("serialize");
        let mut restored = GameState::from_json(&json).expect("deserialize");
        assert_eq!(restored, original);

        let ids: Vec<CardId> = original.hand.iter().take(3).map(|c| c.id).collect();
        let a = original.play_hand(&ids).expect("play original");
        let b = restored.play_hand(&ids).expect("play restored");
        assert_eq!(a, b);
        assert_eq!(a.status, RoundStatus::Cleared { reward: 3 });

        // 之後的回合由 (seed, round) 決定，兩者一致
        original.start_round().expect("next");
        restored.start_round().expect("next");
        assert_eq!(restored, original);
    }

    #[test]
    fn test_many_rounds_conserve_cards() {
        let mut config = BalancingConfig::default();
        config.base_goal = 1;
        config.final_level = 3;
        let mut state = GameState::new(config, 1234);
        // 單張高牌也能通過每個 Boss
        state.add_joker(Joker::new(JokerId::Joker)).expect("room");
        state.add_joker(Joker::new(JokerId::Cavendish)).expect("room");

        while !state.is_over() {
            state.start_round().expect("start");
            if state.discards_left > 0 {
                let ids: Vec<CardId> = state.hand.iter().take(3).map(|c| c.id).collect();
                state.discard(&ids).expect("discard");
            }
            let ids: Vec<CardId> = state.hand.iter().take(1).map(|c| c.id).collect();
            state.play_hand(&ids).expect("play");
            assert_eq!(total_cards(&state), DECK_SIZE);
        }

        assert_eq!(state.stage, Stage::End(GameEnd::Win));
        assert_eq!(state.round, 9);
    }
}
