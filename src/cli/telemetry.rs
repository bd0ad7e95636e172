use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Initialize logging. `RUST_LOG` directives take precedence over the
/// verbosity level.
///
/// # Errors
///
/// Returns an error if a directive cannot be parsed or a global subscriber is
/// already installed
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let filter = filter(verbosity_level)?;

    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_target(false);

    let subscriber = Registry::default().with(fmt_layer).with(filter);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn filter(verbosity_level: Option<Level>) -> Result<EnvFilter> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    Ok(EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_error() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = filter(None).unwrap().to_string();
            assert!(filter.contains("error"), "{filter}");
            assert!(filter.contains("hyper=error"), "{filter}");
        });
    }

    #[test]
    fn filter_uses_verbosity_level() {
        temp_env::with_var("RUST_LOG", None::<&str>, || {
            let filter = filter(Some(Level::DEBUG)).unwrap().to_string();
            assert!(filter.contains("debug"), "{filter}");
        });
    }
}
