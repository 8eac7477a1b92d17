//! Tracing setup
//!
//! Logs go to stderr so stdout only carries rendered results.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map `-v` occurrences to a level for this crate
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the log filter
///
/// Without `RUST_LOG` everything logs at `warn` and this crate at the `-v`
/// level. With `RUST_LOG` its directives decide; `-v` still raises this crate
/// when given explicitly.
pub fn build_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let crate_directive = format!("repo_lookup={}", level_for(verbose));

    let env_filter = rust_log
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| match EnvFilter::try_new(v) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("ignoring invalid RUST_LOG '{}': {}", v, e);
                None
            }
        });

    match env_filter {
        Some(filter) if verbose == 0 => filter,
        Some(filter) => match crate_directive.parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        },
        None => EnvFilter::new(format!("warn,{}", crate_directive)),
    }
}

/// Initialize tracing to stderr
///
/// See [`build_filter`] for how `RUST_LOG` and `verbose` combine. Set
/// `LOG_FORMAT=json` for structured JSON output.
pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, rust_log.as_deref());

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
