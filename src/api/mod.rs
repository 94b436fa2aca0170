pub mod chess_com;
pub mod fixture;
pub mod source;

pub use chess_com::ChessComClient;
pub use fixture::FixtureSource;
pub use source::{validate_username, PlayerSource};
