pub mod admin;
pub mod leaderboard;
pub mod registration;
pub mod sessions;
