//! Runtime - 宿主运行时能力
//!
//! 引擎只通过这个 trait 与宿主交互：查询报告掩码与最后一次诊断、获取调用栈、
//! 安装拦截器和收尾钩子、替换与恢复应用层错误处理器。

use crate::handler::InstalledHandler;
use divert_diagnostics::{DiagnosticKind, Frame, KindMask};

/// 运行时产生的一次诊断
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub kind: DiagnosticKind,
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl DiagnosticEvent {
    pub fn new(
        kind: impl Into<DiagnosticKind>,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            file: file.into(),
            line,
        }
    }
}

/// 宿主运行时
///
/// 默认实现表示对应能力不存在。
pub trait Runtime {
    /// 当前的报告掩码，注册时未指定掩码则使用它
    fn reporting_mask(&self) -> KindMask;

    /// 最后一次观察到的诊断
    fn last_diagnostic(&self) -> Option<DiagnosticEvent> {
        None
    }

    /// 当前调用栈，最内层在前；最内层两帧是引擎自身的拦截帧
    fn call_stack(&self) -> Vec<Frame> {
        Vec::new()
    }

    /// 关闭宿主默认的诊断显示
    fn disable_display(&mut self);

    /// 安装拦截器，宿主只为 `mask` 内的种类调用它
    fn install_interceptor(&mut self, mask: KindMask);

    /// 安装收尾钩子
    fn install_finalizer(&mut self);

    /// 安装新的错误处理器，返回之前安装的处理器
    fn replace_error_handler(&mut self, _handler: InstalledHandler) -> Option<InstalledHandler> {
        None
    }

    /// 恢复上一个错误处理器
    fn restore_error_handler(&mut self) {}
}
