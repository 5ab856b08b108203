//! Reusable widgets.

pub mod range_slider;
