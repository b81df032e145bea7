pub mod cost;
pub mod rate;
