use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the search tool's subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the default of info for this crate and warn for
/// reqwest. `APP_ENV=production` emits one JSON object per event.
pub fn setup_tracing() {
    let is_production = std::env::var("APP_ENV").as_deref() == Ok("production");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jumpcloud_search=info,reqwest=warn".into());

    let subscriber = tracing_subscriber::registry().with(filter);

    if is_production {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    };
}
