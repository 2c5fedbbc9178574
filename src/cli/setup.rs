//! Runtime setup for the CLI.

use env_logger::Env;

/// Log level used when `RUST_LOG` is unset.
pub fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize `env_logger` on stderr so stdout stays machine-readable.
pub fn init_logging(verbosity: u8) {
    let env = Env::default().default_filter_or(default_log_level(verbosity));
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(0), "info");
        assert_eq!(default_log_level(1), "debug");
        assert_eq!(default_log_level(5), "trace");
    }
}
