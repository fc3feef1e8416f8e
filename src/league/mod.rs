pub mod mirror;
pub mod standings;
