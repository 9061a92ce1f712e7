//! 日志工具模块
//!
//! `log` 门面的 flexi_logger 后端：库代码只调用 `log::*` 宏，
//! 由可执行程序或测试决定日志写到文件还是标准错误

use crate::config::{Config, LogConfig};
use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化文件日志
///
/// 日志按 `max_file_size` 滚动，保留 `max_files` 个历史文件，异步写入
///
/// # Examples
/// ```no_run
/// use graphalgo::config::Config;
/// use graphalgo::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> Result<(), FlexiLoggerError> {
    let log = &config.log;
    let handle = Logger::try_with_str(&log.level)?
        .log_to_file(file_spec(log))
        .rotate(
            Criterion::Size(log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    replace_handle(handle);
    log::info!("文件日志已启用: {}/{}", log.dir, log.file);
    Ok(())
}

/// 初始化输出到标准错误的日志，`RUST_LOG` 优先于 `level`
pub fn init_stderr(level: &str) -> Result<(), FlexiLoggerError> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;

    replace_handle(handle);
    Ok(())
}

fn file_spec(log: &LogConfig) -> FileSpec {
    FileSpec::default()
        .basename(&log.file)
        .directory(&log.dir)
        .suppress_timestamp()
}

fn replace_handle(handle: LoggerHandle) {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(previous) = guard.replace(handle) {
            previous.flush();
        }
    }
}

/// 刷新并关闭日志系统，程序退出前调用
pub fn shutdown() {
    let handle = LOGGER_HANDLE.lock().ok().and_then(|mut guard| guard.take());
    if let Some(handle) = handle {
        handle.flush();
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
