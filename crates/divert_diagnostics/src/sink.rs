//! DiagnosticBuffer - 诊断缓冲区
//!
//! 按观察顺序累积诊断记录，在收尾阶段刷新到日志接收端

use crate::diagnostic::{DiagnosticRecord, Frame};
use crate::level::Severity;
use crate::logger::Logger;

/// 捕获调用栈时丢弃的最内层帧数 (引擎自身的拦截帧)
pub const SKIPPED_FRAMES: usize = 2;

/// 诊断缓冲区
///
/// 只追加、不重排、不去重。
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    /// 收集的记录列表
    records: Vec<DiagnosticRecord>,
    /// 每条记录保留的最大栈深度，0 表示不捕获
    trace_depth: usize,
}

impl DiagnosticBuffer {
    /// 创建新的缓冲区
    pub fn new(trace_depth: usize) -> Self {
        Self {
            records: Vec::new(),
            trace_depth,
        }
    }

    /// 栈深度限制
    pub fn trace_depth(&self) -> usize {
        self.trace_depth
    }

    /// 追加记录
    ///
    /// `capture` 返回当前调用栈 (最内层在前)，仅在深度限制大于 0 时调用。
    pub fn push<F>(&mut self, mut record: DiagnosticRecord, capture: F)
    where
        F: FnOnce() -> Vec<Frame>,
    {
        if self.trace_depth > 0 {
            let trace = capture()
                .into_iter()
                .skip(SKIPPED_FRAMES)
                .take(self.trace_depth)
                .collect();
            record.trace = Some(trace);
        } else {
            record.trace = None;
        }
        self.records.push(record);
    }

    /// 刷新到日志接收端，返回输出的记录数
    ///
    /// 没有接收端时不做任何事，记录保留到下一次刷新。
    pub fn flush(&mut self, logger: Option<&dyn Logger>) -> usize {
        let Some(logger) = logger else {
            return 0;
        };

        let drained = self.records.len();
        for record in self.records.drain(..) {
            logger.log(record.severity, &record.message, &record.context());
        }
        drained
    }

    /// 获取所有记录
    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    /// 获取某一级别的记录数量
    pub fn count(&self, severity: Severity) -> usize {
        self.records
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// 获取记录数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::RecordContext;
    use crate::kind::DiagnosticKind;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(&'static str, String)>>);

    impl Logger for Recorder {
        fn notice(&self, message: &str, _: &RecordContext<'_>) {
            self.0.borrow_mut().push(("notice", message.to_string()));
        }
        fn warning(&self, message: &str, _: &RecordContext<'_>) {
            self.0.borrow_mut().push(("warning", message.to_string()));
        }
        fn error(&self, message: &str, _: &RecordContext<'_>) {
            self.0.borrow_mut().push(("error", message.to_string()));
        }
        fn critical(&self, message: &str, _: &RecordContext<'_>) {
            self.0.borrow_mut().push(("critical", message.to_string()));
        }
    }

    fn record(message: &str, severity: Severity) -> DiagnosticRecord {
        DiagnosticRecord::new(message, DiagnosticKind::NOTICE, severity, "file", 1)
    }

    fn stack(n: usize) -> Vec<Frame> {
        (0..n).map(|i| Frame::new(format!("f{}", i))).collect()
    }

    #[test]
    fn test_buffer_creation() {
        let buffer = DiagnosticBuffer::new(5);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.trace_depth(), 5);
    }

    #[test]
    fn test_push_keeps_frames_after_skipped() {
        let mut buffer = DiagnosticBuffer::new(2);
        buffer.push(record("m", Severity::Notice), || stack(5));

        let trace = buffer.records()[0].trace.as_ref().unwrap();
        assert_eq!(trace, &vec![Frame::new("f2"), Frame::new("f3")]);
    }

    #[test]
    fn test_push_short_stack() {
        let mut buffer = DiagnosticBuffer::new(5);
        buffer.push(record("m", Severity::Notice), || stack(1));

        assert_eq!(buffer.records()[0].trace, Some(Vec::new()));
    }

    #[test]
    fn test_zero_depth_has_no_trace_and_skips_capture() {
        let mut buffer = DiagnosticBuffer::new(0);
        buffer.push(record("m", Severity::Notice), || {
            panic!("stack must not be captured")
        });

        assert!(buffer.records()[0].trace.is_none());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut buffer = DiagnosticBuffer::new(0);
        buffer.push(record("same", Severity::Warning), Vec::new);
        buffer.push(record("same", Severity::Warning), Vec::new);

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.count(Severity::Warning), 2);
    }

    #[test]
    fn test_flush_order_and_methods() {
        let mut buffer = DiagnosticBuffer::new(0);
        buffer.push(record("n", Severity::Notice), Vec::new);
        buffer.push(record("w1", Severity::Warning), Vec::new);
        buffer.push(record("w2", Severity::Warning), Vec::new);
        buffer.push(record("e", Severity::Error), Vec::new);
        buffer.push(record("f", Severity::Fatal), Vec::new);

        let logger = Recorder::default();
        assert_eq!(buffer.flush(Some(&logger)), 5);
        assert!(buffer.is_empty());

        let calls = logger.0.borrow();
        let expected = [
            ("notice", "n"),
            ("warning", "w1"),
            ("warning", "w2"),
            ("error", "e"),
            ("critical", "f"),
        ];
        assert_eq!(calls.len(), expected.len());
        for ((method, message), (want_method, want_message)) in calls.iter().zip(expected) {
            assert_eq!(*method, want_method);
            assert_eq!(message, want_message);
        }
    }

    #[test]
    fn test_flush_without_logger_keeps_records() {
        let mut buffer = DiagnosticBuffer::new(0);
        buffer.push(record("n", Severity::Notice), Vec::new);

        assert_eq!(buffer.flush(None), 0);
        assert_eq!(buffer.len(), 1);

        let logger = Recorder::default();
        assert_eq!(buffer.flush(Some(&logger)), 1);
        assert_eq!(logger.0.borrow().len(), 1);
    }
}
