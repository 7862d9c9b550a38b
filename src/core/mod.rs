pub mod apply;
pub mod calculator;
pub mod config;
pub mod day;
pub mod export;
pub mod holiday;
pub mod log;
pub mod logic;
pub mod rotation;
pub mod shift;
pub mod target;
pub mod transfer;
pub mod views;
