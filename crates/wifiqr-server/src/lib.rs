//! # wifiqr-server
//!
//! HTTP server library for the wifiqr WiFi QR code generator.
//!
//! This library provides the API handlers, configuration, and state
//! management for wifiqr.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod api;
pub mod config;
pub mod logging;
pub mod state;
