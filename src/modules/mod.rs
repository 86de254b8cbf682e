pub mod desks;

use std::sync::Arc;

use deskbooker_core::{BookingProcessor, DeskRepository};
use deskbooker_kernel::ModuleRegistry;

/// Register all project-specific modules with the registry
pub fn register_all(
    registry: &mut ModuleRegistry,
    processor: Arc<dyn BookingProcessor>,
    inventory: Arc<dyn DeskRepository>,
) {
    registry.register_custom(desks::create_module(processor, inventory));
}
