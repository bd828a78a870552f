use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Traces go to stderr so they never mix with the menu on stdout.
pub fn init_cli_logger(level: &str, verbose: bool) {
    let directives = if verbose {
        "ordio=debug,ordiolib=debug".to_string()
    } else {
        format!("ordio={level},ordiolib={level}")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
