//! Complete games wired on top of the engine parts.

pub mod classic;

pub use classic::{ClassicGame, SelectResult};
