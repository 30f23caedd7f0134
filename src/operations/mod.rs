pub mod creation;
pub mod extrema;
