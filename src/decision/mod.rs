//! The boundary to whatever decides actions.
//!
//! Choosers read the game through `&Game` and return an `Action`; they
//! never touch the state. `play_out` is the reference loop that drives a
//! table with one chooser per seat.

pub mod chooser;
pub mod driver;

pub use chooser::{ActionChooser, GreedyChooser, RandomChooser};
pub use driver::{play_out, Playout};
