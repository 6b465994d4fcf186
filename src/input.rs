//! This module contains all functions related to taking input from the user. They use the
//! `dialoguer` crate to process the input, and they check for input validation.
//!
//! Specifically, the one available prompt takes the player's choice for a round, and the parser
//! behind it normalizes a raw line into either a throw or a request to quit.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::game::Move;

/// This enum holds the two things a normalized line of player input can mean: a throw to play for
/// one round, or a request to end the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// This variant is used when the player asked to quit the game.
    Quit,
    /// This variant is used when the player named one of the three moves to throw this round.
    Throw(Move),
}

/// This error covers the single recoverable failure in the game: a line that, after trimming and
/// lowercasing, is not one of the three moves and not "quit". It is handled by re-prompting and
/// is never propagated.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("Invalid choice! Please choose rock, paper, or scissors.")]
pub(crate) struct InvalidChoice;

/// This function normalizes one raw line and maps it to a player action. The line is trimmed of
/// surrounding whitespace and lowercase-folded, then matched by strict equality: "rock", "paper"
/// and "scissors" become throws, "quit" becomes the quit action, and anything else at all,
/// including the empty string, is an invalid choice.
///
/// # Errors
///
/// The function returns `InvalidChoice` when the normalized line is not one of the four accepted
/// words.
pub(crate) fn parse_action(raw: &str) -> Result<Action, InvalidChoice> {
    match raw.trim().to_lowercase().as_str() {
        "rock" => Ok(Action::Throw(Move::Rock)),
        "paper" => Ok(Action::Throw(Move::Paper)),
        "scissors" => Ok(Action::Throw(Move::Scissors)),
        "quit" => Ok(Action::Quit),
        _ => Err(InvalidChoice),
    }
}

/// This function is in charge of taking the player's choice for one round. Invalid lines
/// re-prompt in place with the invalid-choice message, without consuming a round; a closed input
/// stream, or any other failure to read a line, is treated as an implicit quit so the session
/// still ends cleanly with the final score.
///
/// # Errors
///
/// The function only errors if a line accepted by the validator fails to parse again for its
/// value, which cannot happen with the same parser on both sides.
pub(crate) fn take_action(term: &Term) -> Result<Action> {
    let input = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style("Enter your choice (rock/paper/scissors) or 'quit' to exit").bold()
        ))
        .allow_empty(true)
        .validate_with(|line: &String| parse_action(line).map(|_| ()))
        .interact_text_on(term);

    match input {
        // parse again for the value; the validator has already accepted the line, so this cannot
        // fail
        Ok(line) => Ok(parse_action(&line)?),
        // the stream closed under the prompt; read it as an implicit quit rather than a fault
        Err(_) => Ok(Action::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// This test checks that surrounding whitespace and letter case fold away, so all the spelled
    /// variants of a move parse to the same throw.
    #[test]
    fn case_and_whitespace_fold_to_the_same_move() {
        for raw in ["rock", "Rock", " ROCK ", "\trock\n", "rock "] {
            assert_eq!(
                parse_action(raw),
                Ok(Action::Throw(Move::Rock)),
                "{raw:?} should normalize to the rock throw"
            );
        }
    }

    /// This test checks that each of the three move words parses to its own throw.
    #[test]
    fn each_move_word_parses_to_its_throw() {
        assert_eq!(parse_action("rock"), Ok(Action::Throw(Move::Rock)));
        assert_eq!(parse_action("paper"), Ok(Action::Throw(Move::Paper)));
        assert_eq!(parse_action("scissors"), Ok(Action::Throw(Move::Scissors)));
    }

    /// This test checks that the quit word parses to the quit action under the same
    /// normalization as the moves.
    #[test]
    fn quit_parses_in_any_spelling_of_case() {
        assert_eq!(parse_action("quit"), Ok(Action::Quit));
        assert_eq!(parse_action(" QUIT "), Ok(Action::Quit));
    }

    /// This test checks that anything that is not strictly one of the four accepted words is an
    /// invalid choice: other games' moves, the empty string, blank lines, near-misses and quit
    /// with trailing punctuation.
    #[test]
    fn anything_else_is_an_invalid_choice() {
        for raw in ["lizard", "", "   ", "rockk", "quit!", "rock paper"] {
            assert_eq!(
                parse_action(raw),
                Err(InvalidChoice),
                "{raw:?} should be rejected"
            );
        }
    }
}
