pub mod card;
pub mod error;
pub mod player;
pub mod tier;

pub use card::*;
pub use error::*;
pub use player::*;
pub use tier::*;
