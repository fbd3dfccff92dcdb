pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod roster;
pub mod scorer;
// cmd and reports belong to the binary (main.rs).
