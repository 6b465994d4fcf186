//! The game module contains the core parts of the game, except for input handling and terminal
//! messages.
//!
//! It contains the `init()` function to initialize and run the game loop, the move and score
//! types, the pure round resolver and the random move generator.

use anyhow::Result;
use clap::Parser;
use console::Term;
use fastrand::Rng;

use crate::input::{take_action, Action};
use crate::messages::{banner, farewell, round_report, score_line};

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. It uses the derive attribute and multiple other attributes to
/// set up the single available option, as that was found to be the simplest way of accomplishing
/// what was set out to do.
#[derive(Parser)]
#[command(name = "throwdown", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The seed for the computer's move generator.
    ///
    /// This argument is only needed when the computer should draw its throws from a reproducible
    /// sequence, such as when replaying a session. When it is left unset, the generator seeds
    /// itself from the system.
    #[arg(short, long)]
    #[arg(env = "THROWDOWN_SEED", value_name = "SEED")]
    seed: Option<u64>,
}

/// This enum holds the three throws either side may make in a round. A move is immutable and has
/// no identity beyond its value.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "It's best if the variants reflect the order the game names them in."
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Move {
    /// This variant is the rock throw. It beats scissors and loses to paper.
    Rock,
    /// This variant is the paper throw. It beats rock and loses to scissors.
    Paper,
    /// This variant is the scissors throw. It beats paper and loses to rock.
    Scissors,
}

impl Move {
    /// This function returns the move the implicit object defeats under the fixed rule table:
    /// rock beats scissors, scissors beats paper, paper beats rock.
    pub(crate) const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// This function returns the lowercase name of the implicit object, exactly as it is typed at
    /// the prompt and echoed back after a round.
    pub(crate) const fn repr(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

/// This enum holds the outcome of a single resolved round, to transfer between the resolver, the
/// score and the terminal messages. It is derived per round, never stored.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "It's best if the variants reflect the order the rule table names them in."
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RoundResult {
    /// This variant is used when both sides threw the same move; nobody scores.
    Tie,
    /// This variant is used when the player's throw beats the computer's.
    PlayerWins,
    /// This variant is used when the computer's throw beats the player's.
    ComputerWins,
}

/// This struct holds the running score of one session. It is owned by the game loop, mutated only
/// after a resolved round, and reset only by starting the program again; it is never persisted.
pub(crate) struct Score {
    /// This field counts the rounds the computer has won so far.
    computer: u32,
    /// This field counts the rounds the player has won so far.
    player: u32,
}

impl Score {
    /// This function creates a fresh score with both counters at zero.
    const fn new() -> Self {
        Self {
            computer: 0,
            player: 0,
        }
    }

    /// This function returns the computer's win count.
    pub(crate) const fn computer(&self) -> u32 {
        self.computer
    }

    /// This function returns the player's win count.
    pub(crate) const fn player(&self) -> u32 {
        self.player
    }

    /// This function applies one resolved round to the score. Exactly one counter moves on a won
    /// round; neither moves on a tie. Counters only ever grow within a session.
    fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Tie => {}
            RoundResult::PlayerWins => self.player += 1,
            RoundResult::ComputerWins => self.computer += 1,
        }
    }
}

/// Initializes the game state and runs the loop until the player quits. This is a `main()`
/// function of sorts though it is still called from main.rs.
///
/// This function specifically creates a new interface to the standard output, and a new rng
/// instance to avoid calling the thread local generator every time the loop runs for another
/// iteration. The running score is printed before every prompt; invalid input re-prompts without
/// consuming a round; "quit" or a closed input stream prints the final score and ends the session
/// cleanly.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
pub fn init() -> Result<()> {
    let term = Term::stdout();
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };
    let mut score = Score::new();

    // show the init message
    banner(&term)?;

    // game loop
    loop {
        // show the running score before every prompt
        score_line(&term, &score)?;

        // prompt for a throw; invalid lines re-prompt inside take_action
        match take_action(&term)? {
            Action::Quit => {
                farewell(&term, &score)?;
                break Ok(());
            }
            Action::Throw(player) => {
                // draw the computer's throw and resolve the round
                let computer = random_move(&mut rng);
                let result = resolve_round(player, computer);

                score.record(result);
                round_report(&term, player, computer, result)?;
            }
        }
    }
}

/// This function takes the role of the computer opponent, as it draws one throw uniformly at
/// random from the three moves, independent of history and of the player's current move. It takes
/// the generator as a parameter so a seeded one can stand in for the system-seeded one.
fn random_move(rng: &mut Rng) -> Move {
    match rng.u8(0..3) {
        0 => Move::Rock,
        1 => Move::Paper,
        _ => Move::Scissors,
    }
}

/// This function resolves one round between the player's throw and the computer's. Tie if the
/// throws are equal; the player wins if their throw beats the computer's; the computer wins
/// otherwise. Every one of the nine possible pairs lands in exactly one of the three outcomes.
fn resolve_round(player: Move, computer: Move) -> RoundResult {
    if player == computer {
        RoundResult::Tie
    } else if player.beats() == computer {
        RoundResult::PlayerWins
    } else {
        RoundResult::ComputerWins
    }
}
