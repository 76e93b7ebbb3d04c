pub mod bucket_chain;
pub mod bucket_page;
pub mod hash_fn;
pub mod hash_index;
