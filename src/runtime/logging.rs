//! tracing 初始化
//!
//! 开发环境输出到终端并带文件/行号，生产环境输出 JSON 到滚动日志文件。
//! 返回的 guard 需要由调用方持有到进程结束，否则日志会被截断。

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;

pub fn init_tracing() -> WorkerGuard {
    let config = AppConfig::get();
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);

    if config.is_production() {
        let file_appender = tracing_appender::rolling::daily(&config.app.log_dir, "edusystem.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .json()
            .init();

        guard
    } else {
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(non_blocking_writer)
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init();

        guard
    }
}
