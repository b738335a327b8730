//! Request batching for the remote document API.
//!
//! The API bounds one request at a fixed number of blocks. A compiled
//! sequence is already flatten-safe: a toggle's children travel inside it,
//! so splitting the top-level sequence can never break nesting.

use crate::blocks::Block;

/// The remote API's upper bound on blocks per request.
pub const MAX_BLOCKS_PER_REQUEST: usize = 90;

/// Splits a top-level block sequence into request-sized chunks, preserving
/// order. Each top-level block counts as one unit regardless of children.
pub fn chunk_blocks(blocks: Vec<Block>) -> Vec<Vec<Block>> {
    if blocks.is_empty() {
        return Vec::new();
    }
    let mut chunks = Vec::with_capacity(blocks.len().div_ceil(MAX_BLOCKS_PER_REQUEST));
    let mut current = Vec::new();
    for block in blocks {
        if current.len() == MAX_BLOCKS_PER_REQUEST {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(block);
    }
    chunks.push(current);
    chunks
}
