pub mod cli;
pub mod clock;
pub mod config;
pub mod cruise;
pub mod daily;
pub mod error;
pub mod exit;
pub mod input;
pub mod parse;
pub mod pipeline;
pub mod region;
pub mod reporting;
pub mod types;
pub mod verification;
