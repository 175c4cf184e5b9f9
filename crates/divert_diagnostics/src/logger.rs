//! Logger - 分级日志接收端
//!
//! 缓冲区刷新时使用的四方法日志能力，以及基于 `tracing` 的默认实现

use crate::diagnostic::RecordContext;
use crate::level::Severity;

/// 四个分级方法的日志接收端
pub trait Logger {
    fn notice(&self, message: &str, context: &RecordContext<'_>);
    fn warning(&self, message: &str, context: &RecordContext<'_>);
    fn error(&self, message: &str, context: &RecordContext<'_>);
    fn critical(&self, message: &str, context: &RecordContext<'_>);

    /// 按严重级别分派
    fn log(&self, severity: Severity, message: &str, context: &RecordContext<'_>) {
        match severity {
            Severity::Notice => self.notice(message, context),
            Severity::Warning => self.warning(message, context),
            Severity::Error => self.error(message, context),
            Severity::Fatal => self.critical(message, context),
        }
    }
}

/// 转发到 `tracing` 的日志接收端
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn notice(&self, message: &str, context: &RecordContext<'_>) {
        tracing::info!(context = %context.to_json(), "{}", message);
    }

    fn warning(&self, message: &str, context: &RecordContext<'_>) {
        tracing::warn!(context = %context.to_json(), "{}", message);
    }

    fn error(&self, message: &str, context: &RecordContext<'_>) {
        tracing::error!(context = %context.to_json(), "{}", message);
    }

    fn critical(&self, message: &str, context: &RecordContext<'_>) {
        tracing::error!(critical = true, context = %context.to_json(), "{}", message);
    }
}
