//! Shared utilities for the chamber client.

pub mod logger;
pub mod time;
