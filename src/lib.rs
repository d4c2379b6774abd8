//! Mindguard - Mental-health risk analysis for chat messages.
//!
//! This crate classifies free-text messages for mental-health risk signals
//! and aggregates those signals over a conversation's history. It is embedded
//! by a messaging application as a synchronous enrichment step; storage,
//! realtime delivery, and presentation stay with the host.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
