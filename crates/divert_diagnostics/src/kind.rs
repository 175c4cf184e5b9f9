//! DiagnosticKind - 诊断种类
//!
//! 运行时为每一类诊断提供的标识。每个已知种类占用一个位，
//! 因此种类集合可以直接表示为位掩码 [`KindMask`]。

use bitflags::bitflags;
use serde::Serialize;
use std::fmt;

/// 诊断种类 (运行时提供的不透明标识)
///
/// 并非所有可能的种类都在分类表中出现，未知种类会被原样保留。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DiagnosticKind(u32);

impl DiagnosticKind {
    pub const ERROR: Self = Self(1);
    pub const WARNING: Self = Self(1 << 1);
    pub const PARSE: Self = Self(1 << 2);
    pub const NOTICE: Self = Self(1 << 3);
    pub const CORE_ERROR: Self = Self(1 << 4);
    pub const CORE_WARNING: Self = Self(1 << 5);
    pub const COMPILE_ERROR: Self = Self(1 << 6);
    pub const COMPILE_WARNING: Self = Self(1 << 7);
    pub const USER_ERROR: Self = Self(1 << 8);
    pub const USER_WARNING: Self = Self(1 << 9);
    pub const USER_NOTICE: Self = Self(1 << 10);
    pub const STRICT: Self = Self(1 << 11);
    pub const RECOVERABLE_ERROR: Self = Self(1 << 12);
    pub const DEPRECATED: Self = Self(1 << 13);
    pub const USER_DEPRECATED: Self = Self(1 << 14);

    /// 从运行时提供的原始值创建
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// 获取原始值
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// 作为单元素掩码
    pub const fn as_mask(self) -> KindMask {
        KindMask::from_bits_retain(self.0)
    }
}

impl From<u32> for DiagnosticKind {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags! {
    /// 诊断种类掩码
    ///
    /// 决定哪些种类由本引擎管理，掩码之外的种类交给宿主的默认处理。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KindMask: u32 {
        const ERROR = DiagnosticKind::ERROR.raw();
        const WARNING = DiagnosticKind::WARNING.raw();
        const PARSE = DiagnosticKind::PARSE.raw();
        const NOTICE = DiagnosticKind::NOTICE.raw();
        const CORE_ERROR = DiagnosticKind::CORE_ERROR.raw();
        const CORE_WARNING = DiagnosticKind::CORE_WARNING.raw();
        const COMPILE_ERROR = DiagnosticKind::COMPILE_ERROR.raw();
        const COMPILE_WARNING = DiagnosticKind::COMPILE_WARNING.raw();
        const USER_ERROR = DiagnosticKind::USER_ERROR.raw();
        const USER_WARNING = DiagnosticKind::USER_WARNING.raw();
        const USER_NOTICE = DiagnosticKind::USER_NOTICE.raw();
        const STRICT = DiagnosticKind::STRICT.raw();
        const RECOVERABLE_ERROR = DiagnosticKind::RECOVERABLE_ERROR.raw();
        const DEPRECATED = DiagnosticKind::DEPRECATED.raw();
        const USER_DEPRECATED = DiagnosticKind::USER_DEPRECATED.raw();

        const ALL = 0x7FFF;
    }
}

impl KindMask {
    /// 种类是否在掩码内 (该种类的所有位都必须存在)
    pub fn covers(self, kind: DiagnosticKind) -> bool {
        kind.raw() != 0 && self.contains(kind.as_mask())
    }
}

impl From<DiagnosticKind> for KindMask {
    fn from(kind: DiagnosticKind) -> Self {
        kind.as_mask()
    }
}
