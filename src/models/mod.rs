pub mod day;
pub mod holiday;
pub mod rotation;
pub mod shift;
pub mod state;
pub mod stats;
