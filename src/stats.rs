#![allow(dead_code)]

use serde_json::json;

use crate::index::hash::hash_index::HashIndex;

/// Global collision and overflow statistics, computed in one read-only
/// pass over every bucket chain of a completed index.
pub struct GlobalStats {
    nb: i32,
    indexed_keys: i32,
    total_collisions: i32,
    overflow_buckets: i32,
    nonempty_buckets: i32,
}

impl GlobalStats {
    pub fn compute(index: &HashIndex) -> GlobalStats {
        let mut indexed_keys = 0;
        let mut total_collisions = 0;
        let mut overflow_buckets = 0;
        let mut nonempty_buckets = 0;

        for chain in index.directory() {
            let mut chain_keys = 0;
            for (i, page) in chain.pages().iter().enumerate() {
                chain_keys += page.num_keys();
                // only keys that overflowed the home page count as collisions
                if i > 0 {
                    total_collisions += page.num_keys();
                }
            }
            if chain_keys > 0 {
                nonempty_buckets += 1;
            }
            if chain.num_pages() > 1 {
                overflow_buckets += 1;
            }
            indexed_keys += chain_keys;
        }

        GlobalStats {
            nb: index.nb(),
            indexed_keys,
            total_collisions,
            overflow_buckets,
            nonempty_buckets,
        }
    }

    /// NU: distinct keys actually stored (duplicates never reach the index).
    pub fn indexed_keys(&self) -> i32 {
        self.indexed_keys
    }

    pub fn total_collisions(&self) -> i32 {
        self.total_collisions
    }

    pub fn collision_pct(&self) -> f64 {
        if self.indexed_keys > 0 {
            self.total_collisions as f64 / self.indexed_keys as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn overflow_buckets(&self) -> i32 {
        self.overflow_buckets
    }

    pub fn overflow_bucket_pct(&self) -> f64 {
        if self.nb > 0 {
            self.overflow_buckets as f64 / self.nb as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn nonempty_buckets(&self) -> i32 {
        self.nonempty_buckets
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "NB": self.nb,
            "NU": self.indexed_keys,
            "total_collisions": self.total_collisions,
            "collision_pct": self.collision_pct(),
            "overflow_buckets": self.overflow_buckets,
            "overflow_bucket_pct": self.overflow_bucket_pct(),
            "nonempty_buckets": self.nonempty_buckets,
        })
    }
}
