pub mod complete;
pub mod quiz;
