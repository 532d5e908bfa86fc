use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ログは stderr へ。stdout の出力内容には影響させない
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
