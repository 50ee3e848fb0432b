//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Tracing subscriber setup
pub mod logging;

/// Text width and number formatting helpers
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
