//! SeaORM adapters. Every function returns `DbErr`; `repos` maps it.

pub mod devices_sea;
pub mod games_sea;
pub mod leaderboard_sea;
pub mod players_sea;
pub mod shot_results_sea;
