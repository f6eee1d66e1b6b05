//! Library crate root re-exporting CLI, project, registry, and serve modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod project;
pub mod registry;
pub mod serve;
