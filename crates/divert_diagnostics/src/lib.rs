//! Divert Diagnostics
//!
//! 诊断的分类、归一化与缓冲。运行时引擎 (`divert_runtime`) 建立在这些类型之上。
//!
//! # 核心类型
//!
//! - [`DiagnosticKind`] / [`KindMask`] - 诊断种类与种类掩码
//! - [`Severity`] - 严重级别（Notice/Warning/Error/Fatal）
//! - [`classify`] - 分类表查询
//! - [`DiagnosticRecord`] - 归一化后的诊断记录
//! - [`DiagnosticBuffer`] - 按观察顺序累积记录的缓冲区
//! - [`Logger`] - 四方法分级日志接收端
//!
//! # 示例
//!
//! ```rust
//! use divert_diagnostics::{
//!     classify, DiagnosticBuffer, DiagnosticKind, DiagnosticRecord, TracingLogger,
//! };
//!
//! let kind = DiagnosticKind::USER_WARNING;
//! let entry = classify(kind).unwrap();
//! let mut buffer = DiagnosticBuffer::new(0);
//!
//! let record = DiagnosticRecord::new("disk almost full", kind, entry.severity, "app.php", 12);
//! buffer.push(record, Vec::new);
//!
//! assert_eq!(buffer.flush(Some(&TracingLogger::new())), 1);
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod kind;
pub mod level;
pub mod logger;
pub mod sink;
pub mod table;

// 重新导出核心类型
pub use diagnostic::{DiagnosticRecord, Frame, RecordContext};
pub use emitter::ConsoleLogger;
pub use kind::{DiagnosticKind, KindMask};
pub use level::Severity;
pub use logger::{Logger, TracingLogger};
pub use sink::{DiagnosticBuffer, SKIPPED_FRAMES};
pub use table::{classify, format_message, ClassificationEntry};
