//! Finalizer - 收尾阶段
//!
//! 进程退出时调用一次：释放预留内存，回溯发现绕过拦截器的致命诊断，
//! 刷新缓冲区，再把合成的错误转交给应用层错误处理器。

use crate::error::RaisedError;
use crate::handler::{InstalledHandler, ResolvedHandler};
use crate::host::{DiagnosticEvent, Runtime};
use crate::Handler;
use divert_diagnostics::{classify, format_message, ClassificationEntry, Severity};

/// 收尾结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// 没有需要升级的致命诊断
    NoFatal,
    /// 有致命诊断，但没有可调用的处理器
    NoHandler(RaisedError),
    /// 已转交给处理器
    Forwarded(RaisedError),
    /// 处理器返回了错误
    ForwardFailed(RaisedError),
}

impl FinalizeOutcome {
    /// 合成的致命错误 (如果有)
    pub fn error(&self) -> Option<&RaisedError> {
        match self {
            Self::NoFatal => None,
            Self::NoHandler(error) | Self::Forwarded(error) | Self::ForwardFailed(error) => {
                Some(error)
            }
        }
    }
}

impl Handler {
    /// 收尾
    ///
    /// 消耗处理器本身，因此每个进程最多执行一次。
    pub fn finalize<R>(mut self, runtime: &mut R) -> FinalizeOutcome
    where
        R: Runtime + ?Sized,
    {
        self.run_finalizer(runtime)
    }

    /// 释放预留内存，返回之前是否持有
    pub(crate) fn release_headroom(&mut self) -> bool {
        let released = self.headroom.release();
        tracing::trace!(released, "released headroom");
        released
    }

    pub(crate) fn run_finalizer<R>(&mut self, runtime: &mut R) -> FinalizeOutcome
    where
        R: Runtime + ?Sized,
    {
        // 必须是第一步
        self.release_headroom();

        let Some((event, entry)) = self.inspect(&*runtime) else {
            let flushed = self.flush();
            tracing::debug!(flushed, "finalized without fatal diagnostic");
            return FinalizeOutcome::NoFatal;
        };

        let message = format_message(entry.label, &event.message, &event.file, event.line);
        if self.log_on_raise {
            self.record(&*runtime, &message, &event, Severity::Fatal);
        }

        // 先刷新，保证转交失败时致命诊断也已写入日志
        let flushed = self.flush();
        tracing::debug!(kind = %event.kind, flushed, "recovered fatal diagnostic");

        let error = RaisedError::fatal(message, event.kind, event.file, event.line);

        let Some(resolved) = current_error_handler(runtime) else {
            return FinalizeOutcome::NoHandler(error);
        };

        match resolved.invoke(&error) {
            Ok(()) => FinalizeOutcome::Forwarded(error),
            Err(err) => {
                tracing::warn!(error = %err, "application error handler failed");
                FinalizeOutcome::ForwardFailed(error)
            }
        }
    }

    /// 查找需要升级的致命诊断
    fn inspect<R>(&self, runtime: &R) -> Option<(DiagnosticEvent, &'static ClassificationEntry)>
    where
        R: Runtime + ?Sized,
    {
        if self.mask.is_empty() {
            return None;
        }

        let event = runtime.last_diagnostic()?;
        let entry = classify(event.kind)?;

        // 已被拦截器处理过的诊断不是致命的
        if entry.severity != Severity::Fatal || !self.mask.covers(event.kind) {
            return None;
        }

        Some((event, entry))
    }
}

/// 查询当前安装的应用层错误处理器，并立即恢复原状态
fn current_error_handler<R>(runtime: &mut R) -> Option<ResolvedHandler>
where
    R: Runtime + ?Sized,
{
    let previous = runtime.replace_error_handler(InstalledHandler::placeholder());
    runtime.restore_error_handler();

    let resolved = previous?.resolve();
    if resolved.is_none() {
        tracing::debug!("installed error handler is not invocable");
    }
    resolved
}
