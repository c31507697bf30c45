pub mod create_sample;
pub mod head;
pub mod meta;
pub mod query;
pub mod schema;
pub mod stats;
pub mod tail;
