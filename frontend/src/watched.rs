pub mod components;
pub mod store;
