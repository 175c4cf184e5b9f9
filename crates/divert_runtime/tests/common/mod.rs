//! 测试用的宿主运行时与日志接收端

#![allow(dead_code)]

use divert_diagnostics::{Frame, KindMask, Logger, RecordContext};
use divert_runtime::{DiagnosticEvent, InstalledHandler, Runtime};
use std::cell::RefCell;
use std::rc::Rc;

/// 可编程的宿主运行时
pub struct MockRuntime {
    pub reporting: KindMask,
    pub last: Option<DiagnosticEvent>,
    pub stack: Vec<Frame>,
    pub display_disabled: bool,
    pub interceptor_mask: Option<KindMask>,
    pub finalizer_installed: bool,
    /// 错误处理器栈，`None` 表示宿主不支持查询
    pub handlers: Option<Vec<InstalledHandler>>,
    pub handler_queries: u32,
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self {
            reporting: KindMask::ALL,
            last: None,
            stack: Vec::new(),
            display_disabled: false,
            interceptor_mask: None,
            finalizer_installed: false,
            handlers: Some(Vec::new()),
            handler_queries: 0,
        }
    }
}

impl MockRuntime {
    pub fn with_last(mut self, event: DiagnosticEvent) -> Self {
        self.last = Some(event);
        self
    }

    pub fn with_handler(mut self, handler: InstalledHandler) -> Self {
        self.handlers.get_or_insert_with(Vec::new).push(handler);
        self
    }

    pub fn with_stack(mut self, depth: usize) -> Self {
        self.stack = (0..depth)
            .map(|i| Frame::new(format!("frame{}", i)))
            .collect();
        self
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.as_ref().map_or(0, Vec::len)
    }
}

impl Runtime for MockRuntime {
    fn reporting_mask(&self) -> KindMask {
        self.reporting
    }

    fn last_diagnostic(&self) -> Option<DiagnosticEvent> {
        self.last.clone()
    }

    fn call_stack(&self) -> Vec<Frame> {
        self.stack.clone()
    }

    fn disable_display(&mut self) {
        self.display_disabled = true;
    }

    fn install_interceptor(&mut self, mask: KindMask) {
        self.interceptor_mask = Some(mask);
    }

    fn install_finalizer(&mut self) {
        self.finalizer_installed = true;
    }

    fn replace_error_handler(&mut self, handler: InstalledHandler) -> Option<InstalledHandler> {
        let handlers = self.handlers.as_mut()?;
        self.handler_queries += 1;
        let previous = handlers.last().cloned();
        handlers.push(handler);
        previous
    }

    fn restore_error_handler(&mut self) {
        if let Some(handlers) = self.handlers.as_mut() {
            handlers.pop();
        }
    }
}

/// 只实现必需能力的宿主
#[derive(Default)]
pub struct BareRuntime {
    pub last: Option<DiagnosticEvent>,
}

impl Runtime for BareRuntime {
    fn reporting_mask(&self) -> KindMask {
        KindMask::ALL
    }

    fn last_diagnostic(&self) -> Option<DiagnosticEvent> {
        self.last.clone()
    }

    fn disable_display(&mut self) {}

    fn install_interceptor(&mut self, _mask: KindMask) {}

    fn install_finalizer(&mut self) {}
}

/// 一次日志调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCall {
    pub method: &'static str,
    pub message: String,
    pub context: String,
}

/// 记录所有调用的日志接收端
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    pub calls: Rc<RefCell<Vec<LogCall>>>,
}

impl RecordingLogger {
    fn push(&self, method: &'static str, message: &str, context: &RecordContext<'_>) {
        self.calls.borrow_mut().push(LogCall {
            method,
            message: message.to_string(),
            context: context.to_json(),
        });
    }

    pub fn methods(&self) -> Vec<&'static str> {
        let calls = self.calls.borrow();
        calls.iter().map(|call| call.method).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        let calls = self.calls.borrow();
        calls.iter().map(|call| call.message.clone()).collect()
    }
}

impl Logger for RecordingLogger {
    fn notice(&self, message: &str, context: &RecordContext<'_>) {
        self.push("notice", message, context);
    }

    fn warning(&self, message: &str, context: &RecordContext<'_>) {
        self.push("warning", message, context);
    }

    fn error(&self, message: &str, context: &RecordContext<'_>) {
        self.push("error", message, context);
    }

    fn critical(&self, message: &str, context: &RecordContext<'_>) {
        self.push("critical", message, context);
    }
}
