//! Error Handler - 应用层错误处理器
//!
//! 宿主可能安装的处理器形态：独立的可调用对象，或 (类型, 方法) 对。
//! 调用约定在查询时一次性解析为 [`ResolvedHandler`]，调用点不再关心形态。

use crate::error::RaisedError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// 可调用的处理函数
pub type HandlerFn = dyn Fn(&RaisedError) -> anyhow::Result<()>;

/// 方法的调用方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// 类型级方法，无需实例
    Static,
    /// 实例方法
    Instance,
}

/// 处理器类型
pub trait HandlerClass {
    /// 类型名
    fn name(&self) -> &str;

    /// 方法是否存在，以及调用方式
    fn method_kind(&self, method: &str) -> Option<MethodKind>;

    /// 调用类型级方法
    fn call_static(&self, method: &str, error: &RaisedError) -> anyhow::Result<()>;

    /// 创建新实例
    fn instantiate(&self) -> anyhow::Result<Box<dyn HandlerObject>>;
}

/// 处理器实例
pub trait HandlerObject {
    fn responds_to(&self, method: &str) -> bool;

    fn call(&mut self, method: &str, error: &RaisedError) -> anyhow::Result<()>;
}

/// 方法的接收者
#[derive(Clone)]
pub enum Receiver {
    /// 类型本身
    Type(Rc<dyn HandlerClass>),
    /// 已有实例
    Object(Rc<RefCell<dyn HandlerObject>>),
}

/// 宿主中安装的处理器 (原始形态)
#[derive(Clone)]
pub enum InstalledHandler {
    /// 独立的可调用对象
    Function(Rc<HandlerFn>),
    /// (接收者, 方法名) 对
    Method { receiver: Receiver, method: String },
    /// 不可调用的值
    Opaque(String),
}

impl InstalledHandler {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&RaisedError) -> anyhow::Result<()> + 'static,
    {
        Self::Function(Rc::new(f))
    }

    pub fn static_method(class: Rc<dyn HandlerClass>, method: impl Into<String>) -> Self {
        Self::Method {
            receiver: Receiver::Type(class),
            method: method.into(),
        }
    }

    pub fn object_method(
        object: Rc<RefCell<dyn HandlerObject>>,
        method: impl Into<String>,
    ) -> Self {
        Self::Method {
            receiver: Receiver::Object(object),
            method: method.into(),
        }
    }

    /// 查询时临时安装的空处理器
    pub(crate) fn placeholder() -> Self {
        Self::function(|_| Ok(()))
    }

    /// 解析调用约定，不可调用时返回 `None`
    pub fn resolve(self) -> Option<ResolvedHandler> {
        match self {
            Self::Function(f) => Some(ResolvedHandler::Function(f)),
            Self::Method {
                receiver: Receiver::Type(class),
                method,
            } => match class.method_kind(&method)? {
                MethodKind::Static => Some(ResolvedHandler::Static { class, method }),
                MethodKind::Instance => Some(ResolvedHandler::Instantiate { class, method }),
            },
            Self::Method {
                receiver: Receiver::Object(object),
                method,
            } => {
                if object.borrow().responds_to(&method) {
                    Some(ResolvedHandler::Bound { object, method })
                } else {
                    None
                }
            }
            Self::Opaque(_) => None,
        }
    }
}

impl fmt::Debug for InstalledHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => write!(f, "Function(..)"),
            Self::Method {
                receiver: Receiver::Type(class),
                method,
            } => write!(f, "Method({}::{})", class.name(), method),
            Self::Method {
                receiver: Receiver::Object(_),
                method,
            } => write!(f, "Method(<object>->{})", method),
            Self::Opaque(value) => write!(f, "Opaque({:?})", value),
        }
    }
}

/// 已解析调用约定的处理器
pub enum ResolvedHandler {
    Function(Rc<HandlerFn>),
    /// 类型级方法
    Static {
        class: Rc<dyn HandlerClass>,
        method: String,
    },
    /// 实例方法，调用前先创建实例
    Instantiate {
        class: Rc<dyn HandlerClass>,
        method: String,
    },
    /// 绑定到已有实例的方法
    Bound {
        object: Rc<RefCell<dyn HandlerObject>>,
        method: String,
    },
}

impl ResolvedHandler {
    /// 调用一次处理器
    pub fn invoke(self, error: &RaisedError) -> anyhow::Result<()> {
        match self {
            Self::Function(f) => f(error),
            Self::Static { class, method } => class.call_static(&method, error),
            Self::Instantiate { class, method } => class.instantiate()?.call(&method, error),
            Self::Bound { object, method } => object.borrow_mut().call(&method, error),
        }
    }
}

impl fmt::Debug for ResolvedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => write!(f, "Function(..)"),
            Self::Static { class, method } => write!(f, "Static({}::{})", class.name(), method),
            Self::Instantiate { class, method } => {
                write!(f, "Instantiate({}->{})", class.name(), method)
            }
            Self::Bound { method, .. } => write!(f, "Bound(<object>->{})", method),
        }
    }
}
