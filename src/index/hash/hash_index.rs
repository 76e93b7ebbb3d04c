#![allow(dead_code)]

use tracing::info;

use crate::{record::data_page::DataPage, util::Result};

use super::{bucket_chain::BucketChain, hash_fn::hash_key};

pub const DEFAULT_FILL_RATIO: i32 = 10;

/// Static hash index: a fixed directory of NB bucket chains over a fixed
/// set of data pages. Built once, queried read-only; a changed record set
/// or configuration means building a new index.
pub struct HashIndex {
    nb: i32,
    fr: i32,
    directory: Vec<BucketChain>,
    pages: Vec<DataPage>,
}

impl HashIndex {
    pub fn build(pages: Vec<DataPage>, nb: i32, fr: i32) -> Result<HashIndex> {
        if nb <= 0 {
            return Err("NB must be positive".into());
        }
        if fr <= 0 {
            return Err("FR must be positive".into());
        }
        let mut directory: Vec<BucketChain> = (0..nb).map(|_| BucketChain::new(fr)).collect();
        for page in &pages {
            for key in page.keys() {
                let addr = hash_key(key, nb);
                directory[addr as usize].insert(key, page.id());
            }
        }
        info!(
            "hash index built: NB={}, FR={}, data pages={}",
            nb,
            fr,
            pages.len()
        );
        Ok(HashIndex {
            nb,
            fr,
            directory,
            pages,
        })
    }

    pub fn nb(&self) -> i32 {
        self.nb
    }

    pub fn fr(&self) -> i32 {
        self.fr
    }

    pub fn directory(&self) -> &[BucketChain] {
        &self.directory
    }

    pub fn chain(&self, addr: i32) -> &BucketChain {
        &self.directory[addr as usize]
    }

    pub fn data_pages(&self) -> &[DataPage] {
        &self.pages
    }
}
