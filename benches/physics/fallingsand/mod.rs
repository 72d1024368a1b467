pub mod data;
pub mod simulation;
