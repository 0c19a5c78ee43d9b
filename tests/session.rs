//! Session loop tests with scripted input.

use std::collections::VecDeque;

use bjsolo::{
    Bankroll, BetError, Card, Deck, Game, GameOptions, HandOutcome, Input, InputError, Presenter,
    Prompt, RoundResult, Session,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Shuffled,
    RoundStarted(u32),
    BetPlaced(u32),
    Dealer(Vec<Card>),
    Player(Vec<Card>),
    Rejected(Prompt, InputError),
    Settled(RoundResult),
    Ended(Bankroll),
}

struct Script {
    answers: VecDeque<&'static str>,
}

impl Script {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
        }
    }
}

impl Input for Script {
    fn answer(&mut self, _prompt: Prompt) -> Option<String> {
        self.answers.pop_front().map(String::from)
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn settled(&self) -> Vec<RoundResult> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Settled(result) => Some(*result),
                _ => None,
            })
            .collect()
    }

    fn rejected(&self) -> Vec<InputError> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Rejected(_, error) => Some(*error),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for Recorder {
    fn shuffled(&mut self) {
        self.events.push(Event::Shuffled);
    }

    fn round_started(&mut self, round: u32) {
        self.events.push(Event::RoundStarted(round));
    }

    fn bet_placed(&mut self, amount: u32) {
        self.events.push(Event::BetPlaced(amount));
    }

    fn dealer_hand(&mut self, cards: &[Card]) {
        self.events.push(Event::Dealer(cards.to_vec()));
    }

    fn player_hand(&mut self, cards: &[Card]) {
        self.events.push(Event::Player(cards.to_vec()));
    }

    fn input_rejected(&mut self, prompt: Prompt, error: InputError) {
        self.events.push(Event::Rejected(prompt, error));
    }

    fn round_settled(&mut self, result: &RoundResult) {
        self.events.push(Event::Settled(*result));
    }

    fn session_ended(&mut self, bankroll: &Bankroll) {
        self.events.push(Event::Ended(*bankroll));
    }
}

/// A game that never reshuffles on its own, with the next draws stacked.
fn stacked_game(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default().with_shuffle_interval(0), 1);
    game.deck = Deck::stacked(draws).unwrap();
    game
}

const fn card(id: u8) -> Card {
    Card::new(id)
}

#[test]
fn declining_first_prompt_plays_nothing() {
    let mut session = Session::new(
        Game::new(GameOptions::default(), 1),
        Script::new(&["n"]),
        Recorder::default(),
    );

    let bankroll = session.run().unwrap();

    assert_eq!(bankroll, Bankroll::new());
    assert_eq!(
        session.presenter().events,
        vec![Event::Ended(Bankroll::new())]
    );
    assert_eq!(session.game().rounds_played(), 0);
}

#[test]
fn malformed_answers_are_reprompted() {
    // Player Ten + Nine against dealer Seven + Eight.
    let game = stacked_game(&[card(9), card(6), card(8), card(7)]);
    let script = Script::new(&["maybe", "y", "0", "x", "5", "9", "2", "n"]);
    let mut session = Session::new(game, script, Recorder::default());

    let bankroll = session.run().unwrap();

    assert_eq!(
        session.presenter().rejected(),
        vec![
            InputError::UnknownAnswer,
            InputError::Bet(BetError::OutOfRange {
                amount: 0,
                min: 1,
                max: 9
            }),
            InputError::NotANumber,
            InputError::UnknownAction,
        ]
    );
    assert_eq!(bankroll.balance(), 5);
    assert_eq!(bankroll.wins(), 1);
}

#[test]
fn round_reports_hands_in_order() {
    let game = stacked_game(&[card(9), card(6), card(8), card(7)]);
    let mut session = Session::new(game, Script::new(&["y", "3", "s", "n"]), Recorder::default());

    session.run().unwrap();

    let events = &session.presenter().events;
    assert_eq!(events[0], Event::RoundStarted(1));
    assert_eq!(events[1], Event::BetPlaced(3));
    assert_eq!(events[2], Event::Dealer(vec![card(7)]));
    assert_eq!(events[3], Event::Player(vec![card(9), card(8)]));
    assert_eq!(events[4], Event::Player(vec![card(9), card(8)]));
    assert_eq!(events[5], Event::Dealer(vec![card(6), card(7)]));
    assert!(matches!(
        events[6],
        Event::Settled(RoundResult {
            round: 1,
            outcome: HandOutcome::Win,
            bet: 3,
            balance: 3,
            wins: 1,
            ..
        })
    ));
}

#[test]
fn bust_ends_turn_without_another_action_prompt() {
    // Player Ten + Jack hits a Five.
    let game = stacked_game(&[card(9), card(6), card(10), card(7), card(4)]);
    let mut session = Session::new(game, Script::new(&["y", "4", "1", "n"]), Recorder::default());

    let bankroll = session.run().unwrap();

    let settled = session.presenter().settled();
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].outcome, HandOutcome::Lose);
    assert_eq!(settled[0].player_value, 25);
    assert_eq!(bankroll.balance(), -4);
    assert!(session.presenter().rejected().is_empty());
}

#[test]
fn double_ends_turn_after_one_card() {
    // Player Five + Five doubles into a Queen-equivalent.
    let game = stacked_game(&[card(4), card(8), card(17), card(21), card(11)]);
    let script = Script::new(&["y", "2", "3", "n"]);
    let mut session = Session::new(game, script, Recorder::default());

    let bankroll = session.run().unwrap();

    let settled = session.presenter().settled();
    assert_eq!(settled[0].bet, 4);
    assert_eq!(settled[0].player_value, 20);
    assert_eq!(bankroll.balance(), 4);
    assert!(session.presenter().rejected().is_empty());
}

#[test]
fn running_out_of_input_mid_round_ends_session() {
    let mut session = Session::new(
        Game::new(GameOptions::default(), 4),
        Script::new(&["y", "3"]),
        Recorder::default(),
    );

    let bankroll = session.run().unwrap();

    assert_eq!(bankroll, Bankroll::new());
    assert!(session.presenter().settled().is_empty());
    assert!(matches!(
        session.presenter().events.last(),
        Some(Event::Ended(_))
    ));
}

#[test]
fn consecutive_rounds_share_the_bankroll() {
    let mut session = Session::new(
        Game::new(GameOptions::default(), 7),
        Script::new(&["y", "3", "2", "y", "3", "2", "n"]),
        Recorder::default(),
    );

    let bankroll = session.run().unwrap();

    let events = &session.presenter().events;
    assert_eq!(events[0], Event::Shuffled);
    assert_eq!(
        events
            .iter()
            .filter(|event| **event == Event::Shuffled)
            .count(),
        1
    );

    let settled = session.presenter().settled();
    assert_eq!(settled.len(), 2);
    assert_eq!(settled[0].round, 1);
    assert_eq!(settled[1].round, 2);

    let wins = i64::from(bankroll.wins());
    assert_eq!(bankroll.balance(), 3 * wins - 3 * (2 - wins));
    assert_eq!(settled[1].balance, bankroll.balance());
}

#[test]
fn low_deck_reshuffles_before_next_round() {
    let mut game = Game::new(GameOptions::default().with_shuffle_interval(0), 1);
    // Leave 19 cards; the round deals four of them, dropping to the threshold.
    let mut deck = Deck::new();
    while deck.remaining() > 19 {
        deck.draw();
    }
    game.deck = deck;

    let script = Script::new(&["y", "2", "2", "y", "2", "2", "n"]);
    let mut session = Session::new(game, script, Recorder::default());

    session.run().unwrap();

    let events = &session.presenter().events;
    assert_eq!(events[0], Event::RoundStarted(1));
    let second = events
        .iter()
        .position(|event| *event == Event::RoundStarted(2))
        .unwrap();
    assert_eq!(events[second - 1], Event::Shuffled);
    assert_eq!(
        events
            .iter()
            .filter(|event| **event == Event::Shuffled)
            .count(),
        1
    );

    // Six + Four against Five + Three off the bottom of the ordered deck.
    let settled = session.presenter().settled();
    assert_eq!(settled.len(), 2);
    assert_eq!(settled[0].player_value, 10);
    assert_eq!(settled[0].dealer_value, 8);
    assert!(session.game().cards_remaining() >= 47);
}
