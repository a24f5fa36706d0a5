// signbridge - text to sign-language gloss and illustration service

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod imaging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod provider;
pub mod server;
pub mod translation;
pub mod utils;
