//! Application layer - services orchestrating the domain through ports.

mod analyzer;

pub use analyzer::MessageAnalyzer;
