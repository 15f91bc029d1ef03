pub mod cli;
pub mod config;
pub mod errors;
pub mod records;
pub mod storage;
