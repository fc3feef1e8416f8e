pub mod common;
pub mod event;
pub mod fixture;
pub mod matches;
pub mod standings;
