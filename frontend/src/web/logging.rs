//! 核心库 `tracing` 事件输出到浏览器控制台

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// 调试构建输出 debug（含每个请求的日志），发布构建只保留 info 及以上
pub fn max_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// 安装全局订阅者；重复调用时保留第一次安装的订阅者
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(max_level());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        log_error!("[Logging] a tracing subscriber is already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_builds_keep_request_logs() {
        // request start/finish events are emitted at debug level
        assert_eq!(max_level() >= LevelFilter::DEBUG, cfg!(debug_assertions));
    }
}
