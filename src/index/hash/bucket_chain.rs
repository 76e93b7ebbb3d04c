#![allow(dead_code)]

use super::bucket_page::BucketPage;

// A chain is a flat vector of pages rather than linked nodes; page 0 is
// the head, everything after it is overflow.
pub struct BucketChain {
    fr: i32,
    pages: Vec<BucketPage>,
}

impl BucketChain {
    pub fn new(fr: i32) -> BucketChain {
        BucketChain {
            fr,
            pages: vec![BucketPage::new(fr)],
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pages.iter().any(|p| p.contains(key))
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.pages.iter().find_map(|p| p.get(key))
    }

    /// Inserts key -> page_id at the first non-full page, appending an
    /// overflow page when every page is full. A key already present
    /// anywhere in the chain is left untouched.
    pub fn insert(&mut self, key: &str, page_id: i32) {
        if self.contains(key) {
            return;
        }
        let pos = match self.pages.iter().position(|p| !p.is_full()) {
            Some(pos) => pos,
            None => {
                self.pages.push(BucketPage::new(self.fr));
                self.pages.len() - 1
            }
        };
        self.pages[pos].put(key, page_id);
    }

    pub fn pages(&self) -> &[BucketPage] {
        &self.pages
    }

    pub fn num_pages(&self) -> i32 {
        self.pages.len() as i32
    }

    pub fn num_keys(&self) -> i32 {
        self.pages.iter().map(|p| p.num_keys()).sum()
    }
}
