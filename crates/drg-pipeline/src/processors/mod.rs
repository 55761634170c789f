//! Shipped processors for the analysis pipeline.

mod group_match;

pub use group_match::GroupMatchProcessor;
