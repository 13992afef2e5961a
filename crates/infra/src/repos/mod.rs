pub mod byes;
pub mod matches;
pub mod players;
pub mod standings;
pub mod tournaments;

pub use matches::CreateMatch;
