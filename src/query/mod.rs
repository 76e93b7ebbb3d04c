pub mod index_search;
pub mod table_scan;
