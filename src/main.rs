use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CATALOG_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV))
        .with_writer(std::io::stderr)
        .init();

    catalog_mirror::app::cli::run();
}
