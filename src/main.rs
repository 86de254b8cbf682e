use std::sync::Arc;

use anyhow::Context;
use deskbooker_db::InMemoryDeskStore;
use deskbooker_kernel::{settings::Settings, InitCtx};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load DeskBooker settings")?;

    deskbooker_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        desks = settings.inventory.desk_count,
        "deskbooker bootstrap starting"
    );

    let store = Arc::new(InMemoryDeskStore::with_desk_count(
        settings.inventory.desk_count,
    ));
    let registry = deskbooker_app::build_registry(store);
    tracing::info!(
        core = registry.core_module_count(),
        custom = registry.custom_module_count(),
        "modules registered"
    );
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_core_modules(&ctx).await?;
    registry.init_custom_modules(&ctx).await?;
    registry.start_core_modules(&ctx).await?;
    registry.start_custom_modules(&ctx).await?;

    tracing::info!("deskbooker bootstrap complete");

    let served = deskbooker_http::start_server(&registry, &settings).await;

    registry.stop_custom_modules().await?;
    registry.stop_core_modules().await?;

    served
}
