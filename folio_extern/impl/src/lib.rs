pub mod data_insert;
pub mod http;
pub mod relay;
