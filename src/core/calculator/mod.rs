//! The schedule derivation engine. Pure functions over explicit state; the
//! only writer is rotation projection, which fills gaps in a calendar map.

pub mod duplicate;
pub mod holidays;
pub mod rotation;
pub mod stats;
