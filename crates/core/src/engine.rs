//! Breadth-first expansion of autosuggest results.
//!
//! One expansion owns a FIFO frontier of queries and a discovery-ordered
//! collection of unique suggestions. Every suggestion becomes both an output
//! item and a future frontier entry, so the walk fans out level by level
//! until the collection cap is hit or the frontier runs dry.

use sources::SuggestSource;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Hard ceiling on the number of suggestions one expansion may collect.
pub const COLLECTION_CAP: usize = 200;

/// Per-batch scan cutoff, checked after every candidate of a response.
/// Lower than [`COLLECTION_CAP`], so reaching it only ends the current batch
/// scan; the outer loop keeps draining the frontier toward the collection
/// cap. See DESIGN.md before changing either constant.
pub const BATCH_CAP: usize = 100;

/// Expand `seed` breadth-first against `source`, returning every unique
/// suggestion discovered, in discovery order.
///
/// Each dequeued query costs exactly one upstream call, awaited to
/// completion before the next dequeue. The source is fail-open, so a bad
/// upstream response shows up here as an empty batch, never as an error.
/// Matching is case-sensitive and exact; no normalization is applied.
pub async fn expand(seed: &str, source: &dyn SuggestSource) -> Vec<String> {
    let mut frontier: VecDeque<String> = VecDeque::from([seed.to_string()]);
    let mut seen: HashSet<String> = HashSet::new();
    let mut collected: Vec<String> = Vec::new();

    while collected.len() < COLLECTION_CAP {
        let Some(query) = frontier.pop_front() else {
            break;
        };

        let batch = source.suggestions(&query).await;
        debug!(
            %query,
            batch = batch.len(),
            collected = collected.len(),
            "expanded frontier entry"
        );

        for suggestion in batch {
            if seen.insert(suggestion.clone()) {
                collected.push(suggestion.clone());
                frontier.push_back(suggestion);
            }
            if collected.len() >= BATCH_CAP {
                break;
            }
        }
    }

    collected
}
