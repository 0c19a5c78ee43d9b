//! Terminal blackjack.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{
    Bankroll, Card, Game, GameOptions, HandOutcome, Input, InputError, Presenter, Prompt,
    RoundResult, Session,
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bjsolo")]
#[command(about = "Single-deck blackjack against the dealer")]
struct Args {
    /// Seed for the shuffle (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

struct TerminalInput<R> {
    reader: R,
}

impl<R: BufRead> Input for TerminalInput<R> {
    fn answer(&mut self, prompt: Prompt) -> Option<String> {
        match prompt {
            Prompt::Play => println!("Do you want to play a game (y/n)?"),
            Prompt::Bet { min, max } => println!("What do you want to bet ({min}-{max})?"),
            Prompt::Action => {
                println!("What action do you want to take?");
                println!("1. Hit");
                println!("2. Stand");
                println!("3. Double");
            }
        }
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn shuffled(&mut self) {
        println!("Deck shuffled.");
    }

    fn round_started(&mut self, round: u32) {
        println!("Black Jack : Round {round}");
    }

    fn bet_placed(&mut self, amount: u32) {
        println!("Betting {amount}");
    }

    fn dealer_hand(&mut self, cards: &[Card]) {
        println!("Dealer Hand: {}", format_cards(cards));
    }

    fn player_hand(&mut self, cards: &[Card]) {
        println!("Player Hand: {}", format_cards(cards));
    }

    fn input_rejected(&mut self, _prompt: Prompt, error: InputError) {
        println!("Invalid answer: {error}");
    }

    fn round_settled(&mut self, result: &RoundResult) {
        match result.outcome {
            HandOutcome::Win => println!("You have won the round."),
            HandOutcome::Lose => println!("You have lost the round."),
        }
        println!(
            "You have earned {} money over {} wins in {} rounds.",
            result.balance, result.wins, result.round
        );
    }

    fn session_ended(&mut self, _bankroll: &Bankroll) {
        println!("Goodbye!");
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    println!("Welcome to Blackjack!");

    let input = TerminalInput {
        reader: io::stdin().lock(),
    };
    let game = Game::new(GameOptions::default(), seed);
    let mut session = Session::new(game, input, TerminalPresenter);

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
