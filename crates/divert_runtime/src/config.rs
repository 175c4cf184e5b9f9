//! Config - 注册参数
//!
//! 注册时确定的掩码、抛出时是否记录、调用栈深度；注册后只读

use crate::error::ConfigError;
use divert_diagnostics::KindMask;

/// 默认调用栈深度
pub const DEFAULT_TRACE_DEPTH: usize = 5;

/// 注册参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 管理的种类掩码，`None` 表示使用运行时当前的报告掩码
    pub mask: Option<KindMask>,
    /// 转换为错误的诊断是否也写入缓冲区
    pub log_on_raise: bool,
    /// 每条记录保留的最大栈深度，0 表示不记录调用栈
    pub trace_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mask: None,
            log_on_raise: true,
            trace_depth: DEFAULT_TRACE_DEPTH,
        }
    }
}

impl Config {
    /// 使用指定掩码创建
    pub fn new(mask: KindMask) -> Self {
        Self {
            mask: Some(mask),
            ..Self::default()
        }
    }

    pub fn log_on_raise(mut self, log_on_raise: bool) -> Self {
        self.log_on_raise = log_on_raise;
        self
    }

    pub fn trace_depth(mut self, trace_depth: usize) -> Self {
        self.trace_depth = trace_depth;
        self
    }

    /// 从宿主传入的原始整数构建并校验
    pub fn from_raw(
        mask: Option<i64>,
        log_on_raise: bool,
        trace_depth: i64,
    ) -> Result<Self, ConfigError> {
        let mask = match mask {
            None => None,
            Some(raw) => match u32::try_from(raw) {
                Ok(bits) => Some(KindMask::from_bits_retain(bits)),
                Err(_) => return Err(ConfigError::invalid_mask(raw)),
            },
        };

        let trace_depth = usize::try_from(trace_depth)
            .map_err(|_| ConfigError::invalid_trace_depth(trace_depth))?;

        Ok(Self {
            mask,
            log_on_raise,
            trace_depth,
        })
    }
}
