pub mod client;
pub mod raw_record;
