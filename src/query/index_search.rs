#![allow(dead_code)]

use std::time::{Duration, Instant};

use serde_json::json;

use crate::index::hash::{hash_fn::hash_key, hash_index::HashIndex};

pub struct SearchResult {
    pub found: bool,
    pub location: Option<i32>,
    /// bucket pages read, inclusive of the hit page
    pub cost: i32,
    pub elapsed: Duration,
    pub bucket_addr: i32,
    pub overflow_pages: i32,
    pub local_overflow_pct: f64,
    /// keys per page over the whole accessed chain, head first
    pub chain_keys: Vec<Vec<String>>,
}

impl SearchResult {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "found": self.found,
            "location": self.location,
            "cost": self.cost,
            "elapsed_secs": self.elapsed.as_secs_f64(),
            "bucket_addr": self.bucket_addr,
            "overflow_pages": self.overflow_pages,
            "local_overflow_pct": self.local_overflow_pct,
            "chain_keys": self.chain_keys,
        })
    }
}

/// Looks a key up through the hash directory, reading the addressed
/// bucket chain page by page. The chain diagnostics cover the whole
/// chain even when the key is found on an early page.
pub fn search_index(index: &HashIndex, key: &str) -> SearchResult {
    let start = Instant::now();
    let addr = hash_key(key, index.nb());
    let chain = index.chain(addr);

    let num_pages = chain.num_pages();
    let chain_keys: Vec<Vec<String>> = chain.pages().iter().map(|p| p.keys()).collect();
    let overflow_pages = (num_pages - 1).max(0);
    let local_overflow_pct = if num_pages > 0 {
        overflow_pages as f64 / num_pages as f64 * 100.0
    } else {
        0.0
    };

    let mut cost = 0;
    for page in chain.pages() {
        cost += 1;
        if let Some(page_id) = page.get(key) {
            return SearchResult {
                found: true,
                location: Some(page_id),
                cost,
                elapsed: start.elapsed(),
                bucket_addr: addr,
                overflow_pages,
                local_overflow_pct,
                chain_keys,
            };
        }
    }
    SearchResult {
        found: false,
        location: None,
        cost,
        elapsed: start.elapsed(),
        bucket_addr: addr,
        overflow_pages,
        local_overflow_pct,
        chain_keys,
    }
}
