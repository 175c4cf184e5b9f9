//! ConsoleLogger - 终端输出
//!
//! 把刷新出来的诊断记录格式化写到标准错误

use crate::diagnostic::RecordContext;
use crate::level::Severity;
use crate::logger::Logger;
use colored::*;

/// 终端日志接收端
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 渲染单条记录
    pub fn render(&self, severity: Severity, message: &str, context: &RecordContext<'_>) -> String {
        if self.use_colors {
            self.render_colored(severity, message, context)
        } else {
            self.render_plain(severity, message, context)
        }
    }

    fn render_colored(
        &self,
        severity: Severity,
        message: &str,
        context: &RecordContext<'_>,
    ) -> String {
        let mut out = format!("{}: {}\n", severity.colored_name(), message.bold());
        out.push_str(&format!(
            "  {} {}:{}\n",
            "-->".blue().bold(),
            context.file,
            context.line
        ));

        for frame in context.trace.unwrap_or_default() {
            out.push_str(&format!("  {} {}\n", "at".bright_black(), frame));
        }
        out
    }

    fn render_plain(
        &self,
        severity: Severity,
        message: &str,
        context: &RecordContext<'_>,
    ) -> String {
        let mut out = format!("{}: {}\n", severity, message);
        out.push_str(&format!("  --> {}:{}\n", context.file, context.line));

        for frame in context.trace.unwrap_or_default() {
            out.push_str(&format!("  at {}\n", frame));
        }
        out
    }

    fn emit(&self, severity: Severity, message: &str, context: &RecordContext<'_>) {
        eprint!("{}", self.render(severity, message, context));
    }
}

impl Logger for ConsoleLogger {
    fn notice(&self, message: &str, context: &RecordContext<'_>) {
        self.emit(Severity::Notice, message, context);
    }

    fn warning(&self, message: &str, context: &RecordContext<'_>) {
        self.emit(Severity::Warning, message, context);
    }

    fn error(&self, message: &str, context: &RecordContext<'_>) {
        self.emit(Severity::Error, message, context);
    }

    fn critical(&self, message: &str, context: &RecordContext<'_>) {
        self.emit(Severity::Fatal, message, context);
    }
}
