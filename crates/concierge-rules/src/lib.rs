//! Keyword rule tables for the Concierge assistant.
//!
//! A rule pairs a boolean trigger expression over substring tests with one
//! canned response. Rules are evaluated in declaration order and the first
//! match wins; that order is part of the observable contract and must not
//! be reordered.

pub mod property;
pub mod rule;
pub mod storefront;

pub use rule::{Rule, RuleTable, Trigger};
