pub mod charts;
pub mod filters;
pub mod loader;
pub mod stats;
pub mod table;
