//! Core library for the `xmascount` CLI.
//!
//! This crate provides the building blocks used by the binary: the countdown
//! computation (next December 25th, whole minutes remaining, localized
//! labels), the music toggle and its external player, configuration
//! loading, and the terminal dashboard. The primary user-facing interface is
//! the `xmascount` command-line application.
pub mod args;
pub mod audio;
pub mod config;
pub mod countdown;
pub mod error;
pub mod logger;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod ui;
