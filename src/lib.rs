//! Chat relay between a conversation UI and an n8n-style workflow webhook
//! that turns plain-English questions into SQL.
//!
//! The relay owns the session identifier the webhook uses for conversational
//! memory, forwards each user message upstream, and normalizes whatever shape
//! the workflow answers with into one stable reply envelope.

pub mod app;
pub mod config;
pub mod error;
pub mod normalize;
pub mod session;
pub mod types;
pub mod webhook;
