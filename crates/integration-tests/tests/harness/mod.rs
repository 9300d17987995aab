pub mod boundary;
pub mod store;
