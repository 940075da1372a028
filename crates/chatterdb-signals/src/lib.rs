//! Signal extraction and ranking for chatterdb.
//!
//! Pulls candidate ticker symbols out of free-form chatter text, tags each
//! symbol with an asset type, and computes a time-decayed idea score from
//! post popularity and engagement.

pub mod scoring;
pub mod symbols;

pub use scoring::idea_score;
pub use symbols::SymbolExtractor;
