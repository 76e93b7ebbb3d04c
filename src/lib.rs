pub mod index;
pub mod query;
pub mod record;
pub mod stats;
pub mod util;
