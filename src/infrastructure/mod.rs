pub mod cli;
pub mod config;
pub mod console;
pub mod corpus;
pub mod repositories;
pub mod runner;
pub mod storage;
