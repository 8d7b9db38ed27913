use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 启用详细调试输出的环境变量
pub const DEBUG_ENV: &str = "REQUEST_FILTER_DEBUG";

/// 日志配置
pub struct LoggingConfig;

impl LoggingConfig {
    /// 初始化日志系统
    ///
    /// 支持通过环境变量配置：
    /// - RUST_LOG: 设置日志级别（error, warn, info, debug, trace）
    /// - REQUEST_FILTER_DEBUG: 启用详细调试输出
    ///
    /// 重复调用不会报错，已有的全局 subscriber 保持不变。
    ///
    /// ```no_run
    /// use request_filter::utils::LoggingConfig;
    ///
    /// LoggingConfig::init();
    /// ```
    pub fn init() {
        let is_debug = Self::is_debug();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new(Self::default_filter(is_debug)),
        };

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(is_debug)
            .with_file(is_debug)
            .with_line_number(is_debug)
            .with_thread_ids(is_debug);

        let installed = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok();

        if installed && is_debug {
            tracing::debug!("调试模式已启用");
        }
    }

    /// 检查是否启用调试模式
    pub fn is_debug() -> bool {
        env::var(DEBUG_ENV).is_ok()
    }

    fn default_filter(is_debug: bool) -> &'static str {
        if is_debug {
            "request_filter=debug,info"
        } else {
            "request_filter=info,warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_debug() {
        env::remove_var(DEBUG_ENV);
        assert!(!LoggingConfig::is_debug());

        env::set_var(DEBUG_ENV, "1");
        assert!(LoggingConfig::is_debug());

        env::remove_var(DEBUG_ENV);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(LoggingConfig::default_filter(false), "request_filter=info,warn");
        assert_eq!(LoggingConfig::default_filter(true), "request_filter=debug,info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        LoggingConfig::init();
        LoggingConfig::init();
    }
}
