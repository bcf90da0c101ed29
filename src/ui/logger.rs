//! Wires the `log` facade to stderr through `env_logger`.

use log::LevelFilter;

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the logger. `RUST_LOG` overrides the default level; only the first call has any effect.
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level(verbose))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
