//! Logging setup shared by the Hiroba binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the default level.
const HIROBA_CRATES: [&str; 3] = ["hiroba_shared", "hiroba_server", "hiroba_client"];

/// Build the default filter directive used when `RUST_LOG` is not set.
///
/// Every Hiroba crate plus the binary itself is enabled at `default_log_level`;
/// third-party crates stay at the global default (`warn`).
pub fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        HIROBA_CRATES
            .iter()
            .map(|krate| format!("{}={}", krate, default_log_level)),
    );
    directives.push(format!(
        "{}={}",
        binary_name.replace('-', "_"),
        default_log_level
    ));
    directives.join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "hiroba-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use hiroba_shared::logger::setup_logger;
///
/// setup_logger("hiroba-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Logger initialized for {}", binary_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_all_crates_and_binary() {
        // テスト項目: デフォルトのフィルタに全クレートとバイナリ名が含まれる
        // given (前提条件):
        let binary_name = "hiroba-server";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("hiroba_server=debug"));
        assert!(filter.contains("hiroba_shared=debug"));
        assert!(filter.contains("hiroba_client=debug"));
        assert!(!filter.contains("hiroba-server"));
    }

    #[test]
    fn test_default_filter_parses_as_env_filter() {
        // テスト項目: 生成したフィルタ文字列が EnvFilter として解釈できる
        // given (前提条件):
        let filter = default_filter("hiroba-client", "info");

        // when (操作):
        let parsed = tracing_subscriber::EnvFilter::try_new(&filter);

        // then (期待する結果):
        assert!(parsed.is_ok());
    }
}
