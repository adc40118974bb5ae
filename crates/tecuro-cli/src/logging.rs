use is_terminal::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt};

use crate::types::LogLevel;

const TARGETS: [&str; 6] = [
    "tecuro",
    "tecuro_cli",
    "tecuro_core",
    "tecuro_engine",
    "tecuro_runtime",
    "tecuro_types",
];

/// Install the stderr subscriber. `RUST_LOG`, when set, wins over `level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Dependencies stay at `warn`; our own crates log at `level`.
pub fn default_directives(level: LogLevel) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(TARGETS.iter().map(|target| format!("{}={}", target, level)));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let directives = default_directives(LogLevel::Debug);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("tecuro_runtime=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
