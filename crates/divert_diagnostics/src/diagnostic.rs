//! DiagnosticRecord - 诊断记录
//!
//! 归一化后的诊断信息，追加到缓冲区后不可变

use crate::kind::DiagnosticKind;
use crate::level::Severity;
use serde::Serialize;
use std::fmt;

/// 调用栈帧
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// 函数名
    pub function: String,
    /// 文件 (如果有)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 行号 (如果有)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Frame {
    /// 创建新的栈帧
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            file: None,
            line: None,
        }
    }

    /// 设置位置信息
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{} ({}:{})", self.function, file, line),
            (Some(file), None) => write!(f, "{} ({})", self.function, file),
            _ => write!(f, "{}", self.function),
        }
    }
}

/// 诊断记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// 已格式化的消息
    pub message: String,
    /// 诊断种类
    pub kind: DiagnosticKind,
    /// 严重级别 (来自分类表)
    pub severity: Severity,
    /// 文件
    pub file: String,
    /// 行号
    pub line: u32,
    /// 调用栈 (深度为 0 时不存在)
    pub trace: Option<Vec<Frame>>,
}

impl DiagnosticRecord {
    /// 创建新的记录
    pub fn new(
        message: impl Into<String>,
        kind: DiagnosticKind,
        severity: Severity,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            severity,
            file: file.into(),
            line,
            trace: None,
        }
    }

    /// 附加调用栈
    pub fn with_trace(mut self, trace: Vec<Frame>) -> Self {
        self.trace = Some(trace);
        self
    }

    /// 除消息以外的字段
    pub fn context(&self) -> RecordContext<'_> {
        RecordContext {
            kind: self.kind,
            file: &self.file,
            line: self.line,
            trace: self.trace.as_deref(),
        }
    }
}

/// 传给日志接收端的结构化上下文 (不含消息本身)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordContext<'a> {
    pub kind: DiagnosticKind,
    pub file: &'a str,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<&'a [Frame]>,
}

impl RecordContext<'_> {
    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".into())
    }
}
