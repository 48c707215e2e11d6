pub mod entity;
pub mod write_result;
