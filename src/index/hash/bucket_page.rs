#![allow(dead_code)]

// Slots are kept in insertion order so the chain diagnostics can replay
// exactly what each page holds.
pub struct BucketPage {
    capacity: i32,
    slots: Vec<(String, i32)>,
}

impl BucketPage {
    pub fn new(capacity: i32) -> BucketPage {
        BucketPage {
            capacity,
            slots: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.num_keys() >= self.capacity
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.slots
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, page_id)| *page_id)
    }

    pub(super) fn put(&mut self, key: &str, page_id: i32) {
        self.slots.push((key.to_string(), page_id));
    }

    pub fn num_keys(&self) -> i32 {
        self.slots.len() as i32
    }

    pub fn keys(&self) -> Vec<String> {
        self.slots.iter().map(|(k, _)| k.clone()).collect()
    }
}
