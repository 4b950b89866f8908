// src/lib.rs

pub mod app;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod dispatcher;
pub mod download;
pub mod errors;
pub mod key_handlers;
pub mod links;
pub mod logging;
pub mod models;
pub mod status_indicator;
pub mod typing;
pub mod ui;
