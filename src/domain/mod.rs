pub mod catalog;
pub mod trending;
