mod config;
mod direction;
mod error;
mod game_state;
mod input;
mod snake;

pub mod constants;
pub mod util;

pub use config::*;
pub use direction::*;
pub use error::*;
pub use game_state::*;
pub use input::*;
pub use snake::*;
pub use util::PseudoRandom;
