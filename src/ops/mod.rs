pub mod drag;
pub mod filter;
pub mod grid;
pub mod resize;
pub mod select;
pub mod store;
