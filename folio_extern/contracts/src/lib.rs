pub mod data_insert;
pub mod relay;
