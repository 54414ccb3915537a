use tracing_subscriber::EnvFilter;

/// Install the global subscriber for a binary. `RUST_LOG` picks the filter
/// (default `info`), `LOG_FORMAT=json` switches to JSON lines.
/// Returns false when a subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    let installed = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    };

    if installed {
        std::panic::set_hook(Box::new(|info| {
            let backtrace = std::backtrace::Backtrace::capture();
            tracing::error!(%info, ?backtrace, "panic");
        }));
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused_without_panicking() {
        init_tracing();
        assert!(!init_tracing());
    }
}
