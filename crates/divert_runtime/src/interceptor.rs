//! Interceptor - 实时拦截
//!
//! 运行时产生可恢复诊断时同步调用：分类、记录，或转换为错误

use crate::error::RaisedError;
use crate::host::{DiagnosticEvent, Runtime};
use crate::Handler;
use divert_diagnostics::{classify, format_message, Severity};

/// 拦截结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// 不归本引擎管理，交给宿主默认处理
    Decline,
    /// 已记录；`handled` 为 false 时宿主的默认处理仍应执行
    Record { handled: bool },
    /// 转换为错误
    Raise(RaisedError),
}

impl Decision {
    /// 转换为宿主回调约定：`Ok(handled)` 或抛出的错误
    pub fn into_result(self) -> Result<bool, RaisedError> {
        match self {
            Self::Decline => Ok(false),
            Self::Record { handled } => Ok(handled),
            Self::Raise(error) => Err(error),
        }
    }

    pub fn is_raise(&self) -> bool {
        matches!(self, Self::Raise(_))
    }
}

impl Handler {
    /// 拦截一次诊断
    ///
    /// 不再检查掩码：宿主只会为安装时给定掩码内的种类调用拦截器。
    pub fn intercept<R>(&mut self, runtime: &R, event: &DiagnosticEvent) -> Decision
    where
        R: Runtime + ?Sized,
    {
        let Some(entry) = classify(event.kind) else {
            tracing::trace!(kind = %event.kind, "declined unmanaged diagnostic");
            return Decision::Decline;
        };

        let message = format_message(entry.label, &event.message, &event.file, event.line);

        match entry.severity {
            // Fatal 通常不会走到这里，按 Error 处理
            Severity::Error | Severity::Fatal => {
                if self.log_on_raise {
                    self.record(runtime, &message, event, entry.severity);
                }
                tracing::trace!(kind = %event.kind, "raising diagnostic as error");
                Decision::Raise(RaisedError::live(
                    message,
                    event.kind,
                    event.file.clone(),
                    event.line,
                ))
            }
            Severity::Notice | Severity::Warning => {
                self.record(runtime, &message, event, entry.severity);
                let handled = self.has_logger();
                tracing::trace!(kind = %event.kind, handled, "recorded diagnostic");
                Decision::Record { handled }
            }
        }
    }

    /// 拦截并按宿主回调约定返回
    pub fn handle<R>(&mut self, runtime: &R, event: &DiagnosticEvent) -> Result<bool, RaisedError>
    where
        R: Runtime + ?Sized,
    {
        self.intercept(runtime, event).into_result()
    }
}
