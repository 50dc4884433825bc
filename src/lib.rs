pub mod models;
pub mod simulation;
pub mod storage;
pub mod utils;
