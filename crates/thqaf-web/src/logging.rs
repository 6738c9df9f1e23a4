//! Browser console logging through `tracing`.

use thqaf_config::LogLevel;
use tracing_subscriber::layer::SubscriberExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

pub fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

/// Install the console subscriber. Returns `false` if the host page already
/// installed a global subscriber.
pub fn install(level: LogLevel) -> bool {
    let layer = WASMLayer::new(
        WASMLayerConfigBuilder::new()
            .set_max_level(tracing_level(level))
            .build(),
    );
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
