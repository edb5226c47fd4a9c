pub mod agents;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod orchestrator;
pub mod profiles;
pub mod route;
pub mod teams;
