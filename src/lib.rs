// Library exports for integration tests and reusable components

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod ui;

pub mod api;
pub mod config;
pub mod export;
pub mod state;
pub mod theme;
