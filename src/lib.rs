//! Presence/typing client for the chamber chat service.
//!
//! This library provides a WebSocket client that joins a chamber (chat room),
//! renders server-pushed presence counts and typing indicators on a status
//! line, and reports local typing activity back to the server.

pub mod client;

// shared library
pub mod common;
