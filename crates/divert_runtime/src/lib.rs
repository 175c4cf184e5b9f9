//! Divert Runtime
//!
//! 拦截宿主运行时的诊断并按严重级别处理：
//!
//! - Notice / Warning 累积到缓冲区，不打断控制流
//! - Error 转换为可捕获的 [`RaisedError`]
//! - 在拦截之前就终止执行的 Fatal 诊断，在收尾阶段回溯发现并转交给应用层错误处理器
//!
//! # 示例
//!
//! ```rust
//! use divert_diagnostics::{DiagnosticKind, KindMask, TracingLogger};
//! use divert_runtime::{Config, DiagnosticEvent, Handler, Runtime};
//!
//! #[derive(Default)]
//! struct Host {
//!     last: Option<DiagnosticEvent>,
//! }
//!
//! impl Runtime for Host {
//!     fn reporting_mask(&self) -> KindMask {
//!         KindMask::ALL
//!     }
//!     fn last_diagnostic(&self) -> Option<DiagnosticEvent> {
//!         self.last.clone()
//!     }
//!     fn disable_display(&mut self) {}
//!     fn install_interceptor(&mut self, _mask: KindMask) {}
//!     fn install_finalizer(&mut self) {}
//! }
//!
//! let mut host = Host::default();
//! let mut handler = Handler::register(&mut host, Config::default());
//! handler.set_logger(TracingLogger::new());
//!
//! let event = DiagnosticEvent::new(DiagnosticKind::USER_ERROR, "Ooops :(", "app.php", 101);
//! let err = handler.handle(&host, &event).unwrap_err();
//! assert_eq!(err.message(), "User-generated Error: Ooops :( in app.php on line 101");
//!
//! handler.finalize(&mut host);
//! ```

pub mod config;
pub mod error;
pub mod finalizer;
pub mod handler;
pub mod headroom;
pub mod host;
pub mod interceptor;

pub use config::{Config, DEFAULT_TRACE_DEPTH};
pub use error::{ConfigError, Origin, RaisedError};
pub use finalizer::FinalizeOutcome;
pub use handler::{
    HandlerClass, HandlerObject, InstalledHandler, MethodKind, Receiver, ResolvedHandler,
};
pub use headroom::{Headroom, HEADROOM_BYTES};
pub use host::{DiagnosticEvent, Runtime};
pub use interceptor::Decision;

use divert_diagnostics::{
    classify, format_message, DiagnosticBuffer, DiagnosticRecord, KindMask, Logger, Severity,
};

/// 已注册的诊断处理器
///
/// 每个进程一个实例，独占自己的配置、缓冲区和日志接收端。
pub struct Handler {
    mask: KindMask,
    log_on_raise: bool,
    buffer: DiagnosticBuffer,
    logger: Option<Box<dyn Logger>>,
    headroom: Headroom,
}

impl Handler {
    /// 注册处理器
    ///
    /// 先检查注册前已经存在的诊断 (只记录掩码内的 Notice/Warning)，
    /// 再预留内存、关闭宿主默认显示、安装拦截器与收尾钩子。
    pub fn register<R>(runtime: &mut R, config: Config) -> Self
    where
        R: Runtime + ?Sized,
    {
        let mask = config.mask.unwrap_or_else(|| runtime.reporting_mask());

        let mut handler = Self {
            mask,
            log_on_raise: config.log_on_raise,
            buffer: DiagnosticBuffer::new(config.trace_depth),
            logger: None,
            headroom: Headroom::default(),
        };

        if let Some(event) = runtime.last_diagnostic() {
            handler.record_pending(&*runtime, &event);
        }

        handler.headroom = Headroom::reserve(HEADROOM_BYTES);

        runtime.disable_display();
        runtime.install_interceptor(mask);
        runtime.install_finalizer();

        tracing::debug!(
            mask = mask.bits(),
            log_on_raise = handler.log_on_raise,
            trace_depth = config.trace_depth,
            pending = handler.buffer.len(),
            "registered diagnostic handler"
        );

        handler
    }

    /// 设置日志接收端，替换之前的接收端
    pub fn set_logger<L>(&mut self, logger: L)
    where
        L: Logger + 'static,
    {
        self.logger = Some(Box::new(logger));
    }

    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }

    /// 把缓冲区刷新到日志接收端，返回输出的记录数
    pub fn flush(&mut self) -> usize {
        self.buffer.flush(self.logger.as_deref())
    }

    pub fn mask(&self) -> KindMask {
        self.mask
    }

    pub fn log_on_raise(&self) -> bool {
        self.log_on_raise
    }

    pub fn trace_depth(&self) -> usize {
        self.buffer.trace_depth()
    }

    pub fn buffer(&self) -> &DiagnosticBuffer {
        &self.buffer
    }

    pub fn headroom(&self) -> &Headroom {
        &self.headroom
    }

    fn record_pending<R>(&mut self, runtime: &R, event: &DiagnosticEvent)
    where
        R: Runtime + ?Sized,
    {
        let Some(entry) = classify(event.kind) else {
            return;
        };

        if self.mask.covers(event.kind) && entry.severity.is_deferred() {
            let message = format_message(entry.label, &event.message, &event.file, event.line);
            self.record(runtime, &message, event, entry.severity);
        }
    }

    fn record<R>(
        &mut self,
        runtime: &R,
        message: &str,
        event: &DiagnosticEvent,
        severity: Severity,
    ) where
        R: Runtime + ?Sized,
    {
        let file = event.file.as_str();
        let record = DiagnosticRecord::new(message, event.kind, severity, file, event.line);
        self.buffer.push(record, || runtime.call_stack());
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("mask", &self.mask)
            .field("log_on_raise", &self.log_on_raise)
            .field("buffer", &self.buffer)
            .field("has_logger", &self.logger.is_some())
            .field("headroom_reserved", &self.headroom.is_reserved())
            .finish()
    }
}
