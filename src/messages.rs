//! This module contains every line the game writes to the terminal: the welcome banner, the
//! running score, the per-round report and the farewell. Keeping the wording in one place keeps
//! the loop in game.rs free of formatting.

use anyhow::Result;
use console::{style, Term};

use crate::game::{Move, RoundResult, Score};

/// This constant is the horizontal rule drawn under the banner and under every score line.
const DIVIDER: &str = "----------------------------------------";

/// This function writes the welcome banner at the start of a session. It also clears the screen
/// and sets the title of the console window to the name of the game.
pub(crate) fn banner(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to Rock, Paper, Scissors!";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("throwdown");

    term.write_line(&format!("{msg}"))?;
    term.write_line(DIVIDER)?;
    Ok(())
}

/// This function writes the final score and the farewell line when the session ends, whether the
/// player typed "quit" or the input stream closed.
pub(crate) fn farewell(term: &Term, score: &Score) -> Result<()> {
    term.write_line(&format!(
        "\nFinal Score - You: {} | Computer: {}",
        score.player(),
        score.computer()
    ))?;
    term.write_line(&format!("{}", style("Thanks for playing!").bold()))?;
    Ok(())
}

/// This function writes the report of one resolved round: both throws echoed back, followed by
/// the outcome line.
pub(crate) fn round_report(
    term: &Term,
    player: Move,
    computer: Move,
    result: RoundResult,
) -> Result<()> {
    let outcome = match result {
        RoundResult::Tie => "It's a tie!",
        RoundResult::PlayerWins => "You win this round!",
        RoundResult::ComputerWins => "Computer wins this round!",
    };

    term.write_line(&format!("\nYou chose: {}", player.repr()))?;
    term.write_line(&format!("Computer chose: {}", computer.repr()))?;
    term.write_line(&format!("{}", style(outcome).bold()))?;
    Ok(())
}

/// This function writes the running score line shown before every prompt.
pub(crate) fn score_line(term: &Term, score: &Score) -> Result<()> {
    term.write_line(&format!(
        "\nScore - You: {} | Computer: {}",
        score.player(),
        score.computer()
    ))?;
    term.write_line(DIVIDER)?;
    Ok(())
}
