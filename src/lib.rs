//! The library components of the game. They allow initializing the game loop, taking and
//! validating player input, and writing the game's messages to the terminal.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod game;
mod input;
mod messages;

pub use game::init;
