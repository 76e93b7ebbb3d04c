#![allow(dead_code)]

use std::time::{Duration, Instant};

use serde_json::json;

use crate::record::data_page::DataPage;

pub struct ScanResult {
    pub found: bool,
    pub location: Option<i32>,
    /// data pages read: page_id + 1 on a hit, total pages on a miss
    pub cost: i32,
    pub elapsed: Duration,
    pub records_read: Vec<String>,
}

impl ScanResult {
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "found": self.found,
            "location": self.location,
            "cost": self.cost,
            "elapsed_secs": self.elapsed.as_secs_f64(),
            "records_read": self.records_read,
        })
    }
}

/// Linear search across the data pages, ignoring the index. With
/// `list_records` every key visited is recorded in order, up to and
/// including the match.
pub fn table_scan(pages: &[DataPage], key: &str, list_records: bool) -> ScanResult {
    let start = Instant::now();
    let mut records_read = Vec::new();
    for page in pages {
        for record in page.keys() {
            if list_records {
                records_read.push(record.clone());
            }
            if record == key {
                return ScanResult {
                    found: true,
                    location: Some(page.id()),
                    cost: page.id() + 1,
                    elapsed: start.elapsed(),
                    records_read,
                };
            }
        }
    }
    ScanResult {
        found: false,
        location: None,
        cost: pages.len() as i32,
        elapsed: start.elapsed(),
        records_read,
    }
}

#[cfg(test)]
mod tests {
    use crate::record::data_page::paginate;

    use super::*;

    fn keys(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn example_pages() -> Vec<DataPage> {
        paginate(&keys(&["ana", "bob", "cy", "ana", "dee"]), 2)
    }

    #[test]
    fn hit_costs_the_pages_up_to_the_match() {
        let pages = example_pages();
        let r = table_scan(&pages, "cy", true);

        assert!(r.found);
        assert_eq!(r.location, Some(1));
        assert_eq!(r.cost, 2);
        assert_eq!(r.records_read, keys(&["ana", "bob", "cy"]));
        assert!(r.elapsed.as_secs_f64() >= 0.0);
    }

    #[test]
    fn hit_on_the_first_record_stops_immediately() {
        let pages = example_pages();
        let r = table_scan(&pages, "ana", true);

        assert_eq!(r.location, Some(0));
        assert_eq!(r.cost, 1);
        assert_eq!(r.records_read, keys(&["ana"]));
    }

    #[test]
    fn miss_costs_every_page() {
        let pages = example_pages();
        let r = table_scan(&pages, "zzz", true);

        assert!(!r.found);
        assert_eq!(r.location, None);
        assert_eq!(r.cost, 3);
        assert_eq!(r.records_read, keys(&["ana", "bob", "cy", "ana", "dee"]));
    }

    #[test]
    fn trace_is_skipped_unless_requested() {
        let pages = example_pages();
        let r = table_scan(&pages, "dee", false);

        assert!(r.found);
        assert!(r.records_read.is_empty());
    }

    #[test]
    fn scan_over_no_pages() {
        let r = table_scan(&[], "ana", true);

        assert!(!r.found);
        assert_eq!(r.cost, 0);
        assert!(r.records_read.is_empty());
    }

    #[test]
    fn to_json_round_trips_the_result_fields() {
        let pages = example_pages();
        let v = table_scan(&pages, "zzz", true).to_json();

        assert_eq!(v["found"], false);
        assert_eq!(v["location"], serde_json::Value::Null);
        assert_eq!(v["cost"], 3);
        assert!(v["elapsed_secs"].as_f64().unwrap() >= 0.0);
        assert_eq!(v["records_read"].as_array().unwrap().len(), 5);
    }
}
