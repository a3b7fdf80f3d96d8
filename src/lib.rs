// lib.rs - Library root for the appearance tracker

pub mod cli;
pub mod config;
pub mod context;
pub mod detect;
pub mod emitter;
pub mod scheme;
pub mod tracker;
