pub mod games_sea;
