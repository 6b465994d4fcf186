//! # throwdown
//!
//! This crate is a game of rock, paper, scissors played at the terminal against a computer
//! opponent that picks its throws uniformly at random. You type a throw, the computer draws one,
//! and the round goes to whoever holds the winning hand; ties go to nobody.
//!
//! The game keeps a running score for the length of one session. Typing "quit" (or closing the
//! input stream) ends the session, prints the final score and says goodbye. Nothing is ever
//! written to disk.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use throwdown::init;

fn main() -> Result<()> {
    init()
}
