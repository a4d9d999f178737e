//! Repository functions: adapters in, `DomainError` and domain structs out.

pub mod devices;
pub mod games;
pub mod leaderboard;
pub mod players;
pub mod shots;
