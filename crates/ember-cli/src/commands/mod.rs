pub mod complete;
pub mod config;
pub mod quest;
pub mod review;
pub mod streak;
pub mod today;
