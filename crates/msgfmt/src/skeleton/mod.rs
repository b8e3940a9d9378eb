//! CLDR date skeleton expansion.
//!
//! A skeleton is a compact field description such as `yMMMd`: runs of a
//! field letter select a date component, run length selects its width.
//! Skeletons compile once into render steps; see [`SkeletonFormat`].

mod expand;
mod helpers;
mod tokens;

pub use expand::SkeletonFormat;
pub use helpers::{
    Period, add_days, day_of_week, day_of_year, distance_in_days, milliseconds_in_day, pad,
    start_of,
};
