// Each domain contains: mod.rs, resolvers.rs, types.rs
// (rounds additionally carries service.rs with the pairing engine).

pub mod matches;
pub mod players;
pub mod rounds;
pub mod standings;
pub mod tournaments;
