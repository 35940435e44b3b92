pub mod api;
pub mod blueprint;
pub mod config;
pub mod errors;
pub mod materialize;
pub mod preview;
pub mod tree;
