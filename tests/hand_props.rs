//! Property tests for hand valuation, settlement, and shuffling.

use bjsolo::{BLACKJACK, Card, DECK_SIZE, Deck, Hand, player_wins};
use proptest::prelude::*;
use proptest::sample::subsequence;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Up to six distinct cards from one deck.
fn cards() -> impl Strategy<Value = Vec<Card>> {
    subsequence((0..DECK_SIZE as u8).collect::<Vec<_>>(), 0..=6)
        .prop_map(|ids| ids.into_iter().map(Card::new).collect())
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card).unwrap();
    }
    hand
}

proptest! {
    /// Property: without Aces the best value is the plain sum.
    #[test]
    fn prop_no_aces_best_equals_min(cards in cards()) {
        let cards: Vec<Card> = cards.into_iter().filter(|c| !c.rank().is_ace()).collect();
        let hand = hand_of(&cards);
        prop_assert_eq!(hand.optional_ace_value(), 0);
        prop_assert_eq!(hand.best_value(), hand.min_value());
    }

    /// Property: promotion adds whole Aces only and never causes a bust.
    #[test]
    fn prop_promotion_is_bounded(cards in cards()) {
        let hand = hand_of(&cards);
        let min = hand.min_value();
        let best = hand.best_value();

        prop_assert!(best >= min);
        prop_assert_eq!((best - min) % 10, 0);
        prop_assert!(best - min <= hand.optional_ace_value());
        if min <= BLACKJACK {
            prop_assert!(best <= BLACKJACK);
        } else {
            prop_assert_eq!(best, min);
        }
    }

    /// Property: promoting one more Ace would always bust a hand that has
    /// Aces left at one.
    #[test]
    fn prop_promotion_is_greedy(cards in cards()) {
        let hand = hand_of(&cards);
        let promoted = hand.best_value() - hand.min_value();
        if promoted < hand.optional_ace_value() {
            prop_assert!(hand.best_value() + 10 > BLACKJACK);
        }
    }

    /// Property: a bust player never wins, whatever the dealer holds.
    #[test]
    fn prop_bust_player_never_wins(player in cards(), dealer in cards()) {
        let player = hand_of(&player);
        let dealer = hand_of(&dealer);
        if player.best_value() > BLACKJACK {
            prop_assert!(!player_wins(&player, &dealer));
        }
        if player.best_value() == dealer.best_value() {
            prop_assert!(!player_wins(&player, &dealer));
        }
    }

    /// Property: any shuffle keeps every card exactly once.
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut ids: Vec<u8> = deck.cards().iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..DECK_SIZE as u8).collect::<Vec<_>>());
    }
}
