//! Line-oriented markdown parsing.
//!
//! Two phases:
//!
//! 1. **Classification** ([`classify`]): each line is reduced to local
//!    facts with no reference to surrounding context.
//! 2. **Accumulation** ([`builder`]): a [`BlockBuilder`] threads the open
//!    list/fence/toggle state across lines and emits completed blocks.
//!
//! Single pass, O(n) in the input length.

pub mod builder;
pub mod classify;

use crate::blocks::Block;
use builder::BlockBuilder;

/// Parses markdown text into an ordered block sequence.
pub fn parse_markdown(text: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for raw in text.split('\n') {
        builder.push(&classify::classify(raw));
    }
    builder.finish()
}
