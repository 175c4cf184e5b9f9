//! Severity - 严重级别
//!
//! 定义 Notice、Warning、Error、Fatal 四个升级级别

use colored::*;
use serde::Serialize;
use std::fmt;

/// 严重级别，按升级程度排序 (而非种类数值)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 提示 - 仅记录
    Notice,
    /// 警告 - 仅记录
    Warning,
    /// 错误 - 转换为可捕获的错误
    Error,
    /// 致命 - 只能在收尾阶段回溯发现
    Fatal,
}

impl Severity {
    /// 获取级别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// 升级等级
    pub fn rank(&self) -> u16 {
        match self {
            Self::Notice => 100,
            Self::Warning => 200,
            Self::Error => 300,
            Self::Fatal => 400,
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Notice => self.name().blue().bold(),
            Self::Warning => self.name().yellow().bold(),
            Self::Error => self.name().red().bold(),
            Self::Fatal => self.name().bright_red().bold().underline(),
        }
    }

    /// 是否只记录、不打断控制流
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Notice | Self::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
