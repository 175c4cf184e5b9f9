//! Classification Table - 分类表
//!
//! 诊断种类到 (标签, 严重级别) 的静态映射。表中不存在的种类不归本引擎管理。

use crate::kind::DiagnosticKind;
use crate::level::Severity;

/// 分类条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationEntry {
    /// 人类可读的标签
    pub label: &'static str,
    /// 严重级别
    pub severity: Severity,
}

impl ClassificationEntry {
    const fn new(label: &'static str, severity: Severity) -> Self {
        Self { label, severity }
    }
}

static TABLE: [(DiagnosticKind, ClassificationEntry); 15] = [
    (
        DiagnosticKind::ERROR,
        ClassificationEntry::new("Fatal Runtime Error", Severity::Fatal),
    ),
    (
        DiagnosticKind::WARNING,
        ClassificationEntry::new("Runtime Warning", Severity::Warning),
    ),
    (
        DiagnosticKind::PARSE,
        ClassificationEntry::new("Fatal Parse", Severity::Fatal),
    ),
    (
        DiagnosticKind::NOTICE,
        ClassificationEntry::new("Runtime Notice", Severity::Notice),
    ),
    (
        DiagnosticKind::CORE_ERROR,
        ClassificationEntry::new("Fatal PHP Startup Error", Severity::Fatal),
    ),
    (
        DiagnosticKind::CORE_WARNING,
        ClassificationEntry::new("PHP Startup Warning", Severity::Warning),
    ),
    (
        DiagnosticKind::COMPILE_ERROR,
        ClassificationEntry::new("Fatal Compilation Error", Severity::Fatal),
    ),
    (
        DiagnosticKind::COMPILE_WARNING,
        ClassificationEntry::new("Compilation Warning", Severity::Warning),
    ),
    (
        DiagnosticKind::USER_ERROR,
        ClassificationEntry::new("User-generated Error", Severity::Error),
    ),
    (
        DiagnosticKind::USER_WARNING,
        ClassificationEntry::new("User-generated Warning", Severity::Warning),
    ),
    (
        DiagnosticKind::USER_NOTICE,
        ClassificationEntry::new("User-generated Notice", Severity::Notice),
    ),
    (
        DiagnosticKind::STRICT,
        ClassificationEntry::new("Runtime Notice (Strict)", Severity::Notice),
    ),
    (
        DiagnosticKind::RECOVERABLE_ERROR,
        ClassificationEntry::new("Catchable Fatal Error", Severity::Error),
    ),
    (
        DiagnosticKind::DEPRECATED,
        ClassificationEntry::new("Deprecated Warning", Severity::Warning),
    ),
    (
        DiagnosticKind::USER_DEPRECATED,
        ClassificationEntry::new("User Deprecated Warning", Severity::Warning),
    ),
];

/// 查询种类的分类
///
/// 返回 `None` 表示该种类完全不由本引擎管理 (与"已知但被掩码过滤"不同)。
pub fn classify(kind: DiagnosticKind) -> Option<&'static ClassificationEntry> {
    TABLE
        .iter()
        .find(|(known, _)| *known == kind)
        .map(|(_, entry)| entry)
}

/// 生成统一格式的诊断消息
pub fn format_message(label: &str, message: &str, file: &str, line: u32) -> String {
    format!("{}: {} in {} on line {}", label, message, file, line)
}

/// 遍历分类表中的所有条目
pub fn entries() -> impl Iterator<Item = (DiagnosticKind, &'static ClassificationEntry)> {
    TABLE.iter().map(|(kind, entry)| (*kind, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::KindMask;

    #[test]
    fn test_classify_known_kinds() {
        let entry = classify(DiagnosticKind::USER_ERROR).unwrap();
        assert_eq!(entry.label, "User-generated Error");
        assert_eq!(entry.severity, Severity::Error);

        let entry = classify(DiagnosticKind::ERROR).unwrap();
        assert_eq!(entry.severity, Severity::Fatal);

        let entry = classify(DiagnosticKind::USER_NOTICE).unwrap();
        assert_eq!(entry.severity, Severity::Notice);

        let entry = classify(DiagnosticKind::STRICT).unwrap();
        assert_eq!(entry.label, "Runtime Notice (Strict)");
        assert_eq!(entry.severity, Severity::Notice);
    }

    #[test]
    fn test_startup_labels() {
        let entry = classify(DiagnosticKind::CORE_ERROR).unwrap();
        assert_eq!(entry.label, "Fatal PHP Startup Error");
        assert_eq!(entry.severity, Severity::Fatal);

        let entry = classify(DiagnosticKind::CORE_WARNING).unwrap();
        assert_eq!(entry.label, "PHP Startup Warning");
        assert_eq!(entry.severity, Severity::Warning);
    }

    #[test]
    fn test_classify_is_stable() {
        for (kind, entry) in entries() {
            assert_eq!(classify(kind), Some(entry));
            assert_eq!(classify(kind), classify(kind));
        }
    }

    #[test]
    fn test_classify_unknown_kind() {
        assert!(classify(DiagnosticKind::from_raw(0)).is_none());
        assert!(classify(DiagnosticKind::from_raw(1 << 20)).is_none());
        // 组合位不是单一种类
        assert!(classify(DiagnosticKind::from_raw(3)).is_none());
    }

    #[test]
    fn test_table_matches_all_mask() {
        let mut covered = KindMask::empty();
        for (kind, _) in entries() {
            covered |= kind.as_mask();
        }
        assert_eq!(covered, KindMask::ALL);
    }

    #[test]
    fn test_format_message() {
        let message = format_message("User-generated Error", "Ooops :(", "/path/to/file", 101);
        assert_eq!(
            message,
            "User-generated Error: Ooops :( in /path/to/file on line 101"
        );
    }
}
