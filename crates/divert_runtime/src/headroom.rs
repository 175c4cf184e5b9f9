//! Headroom - 预留内存
//!
//! 注册时预先分配一块内存，收尾阶段第一步释放，保证内存耗尽时收尾逻辑仍有空间运行

/// 预留的字节数
pub const HEADROOM_BYTES: usize = 10 * 1024;

/// 预留内存
#[derive(Debug, Default)]
pub struct Headroom {
    block: Option<Box<[u8]>>,
}

impl Headroom {
    /// 分配并写入预留块，确保页面真正被占用
    pub fn reserve(size: usize) -> Self {
        Self {
            block: Some(vec![b'x'; size].into_boxed_slice()),
        }
    }

    /// 释放预留块，返回之前是否持有
    pub fn release(&mut self) -> bool {
        self.block.take().is_some()
    }

    pub fn is_reserved(&self) -> bool {
        self.block.is_some()
    }

    /// 预留的字节数
    pub fn len(&self) -> usize {
        self.block.as_ref().map_or(0, |block| block.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_and_release() {
        let mut headroom = Headroom::reserve(HEADROOM_BYTES);
        assert!(headroom.is_reserved());
        assert_eq!(headroom.len(), 10240);

        assert!(headroom.release());
        assert!(!headroom.is_reserved());
        assert!(headroom.is_empty());

        // 只释放一次
        assert!(!headroom.release());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(!Headroom::default().is_reserved());
    }
}
