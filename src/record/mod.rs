pub mod data_page;
