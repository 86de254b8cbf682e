//! Settings, module contract, and lifecycle registry shared by DeskBooker crates.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
