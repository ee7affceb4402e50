use tracing::info;
use tracing_subscriber::EnvFilter;

use ledgerdesk::config::Config;
use ledgerdesk::ui;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ledgerdesk=debug")),
        )
        .init();

    let config = Config::load();
    info!(
        "Starting ledgerdesk against {}",
        config.api_base_url()
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(ui::make_config())
        .with_context(config)
        .launch(ui::App);
}
