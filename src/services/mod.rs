pub mod scoreboard_service;

pub use scoreboard_service::ScoreboardService;
