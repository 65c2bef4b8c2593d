pub mod board;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod web;
