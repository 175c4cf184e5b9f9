//! Runtime Errors
//!
//! 注册参数错误，以及由 Error/Fatal 级别诊断转换而来的错误值

use divert_diagnostics::DiagnosticKind;
use thiserror::Error;

/// 注册参数错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 参数不是合法的整数取值
    #[error("invalid argument: {name} must be {expected}, got {value}")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
        value: i64,
    },
}

impl ConfigError {
    pub(crate) fn invalid_mask(value: i64) -> Self {
        Self::InvalidArgument {
            name: "mask",
            expected: "an unsigned 32-bit integer",
            value,
        }
    }

    pub(crate) fn invalid_trace_depth(value: i64) -> Self {
        Self::InvalidArgument {
            name: "trace_depth",
            expected: "a non-negative integer",
            value,
        }
    }
}

/// 错误的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// 拦截器实时转换
    Live,
    /// 收尾阶段从致命诊断回溯合成
    Fatal,
}

/// 由诊断转换而来的可捕获错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RaisedError {
    message: String,
    code: i32,
    kind: DiagnosticKind,
    file: String,
    line: u32,
    origin: Origin,
}

impl RaisedError {
    /// 拦截器实时抛出的错误
    pub fn live(
        message: impl Into<String>,
        kind: DiagnosticKind,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self::with_origin(message, kind, file, line, Origin::Live)
    }

    /// 收尾阶段合成的致命错误
    pub fn fatal(
        message: impl Into<String>,
        kind: DiagnosticKind,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self::with_origin(message, kind, file, line, Origin::Fatal)
    }

    fn with_origin(
        message: impl Into<String>,
        kind: DiagnosticKind,
        file: impl Into<String>,
        line: u32,
        origin: Origin,
    ) -> Self {
        Self {
            message: message.into(),
            code: 0,
            kind,
            file: file.into(),
            line,
            origin,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 错误码，始终为 0
    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// 是否由收尾阶段合成
    pub fn is_fatal(&self) -> bool {
        self.origin == Origin::Fatal
    }
}
