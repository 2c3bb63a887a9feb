//! Core library components.
//!
//! This module contains the reusable business logic for env parsing,
//! secret publishing, and pipeline generation.

pub mod azure;
pub mod config;
pub mod constants;
pub mod credential;
pub mod env;
pub mod pipeline;
pub mod vault;
