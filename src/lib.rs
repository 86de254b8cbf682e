//! DeskBooker application library
//!
//! Wires the desk store and the project modules into a [`ModuleRegistry`].

use std::sync::Arc;

use deskbooker_core::DeskBookingProcessor;
use deskbooker_db::InMemoryDeskStore;
use deskbooker_kernel::ModuleRegistry;

pub mod modules;
pub mod utils;

/// Registry holding the `db` core module and every project module, all
/// backed by `store`.
pub fn build_registry(store: Arc<InMemoryDeskStore>) -> ModuleRegistry {
    let processor = Arc::new(DeskBookingProcessor::new(store.clone(), store.clone()));

    let mut registry = ModuleRegistry::new();
    registry.register_core(deskbooker_db::create_module(store.clone()));
    modules::register_all(&mut registry, processor, store);
    registry
}
