//! Route handlers
//!
//! Thin adapters: extract, call one service operation, map the result.

pub mod campaigns;
pub mod health;
pub mod reactions;
pub mod verification;
