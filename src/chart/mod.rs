pub mod dual_axis;
pub mod series;
