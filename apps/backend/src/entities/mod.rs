pub mod devices;
pub mod games;
pub mod leaderboard_entries;
pub mod players;
pub mod shot_results;

pub use devices::Entity as Devices;
pub use devices::Model as Device;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use leaderboard_entries::Entity as LeaderboardEntries;
pub use leaderboard_entries::Model as LeaderboardEntry;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use shot_results::Entity as ShotResults;
pub use shot_results::Model as ShotResult;
