//! # Error 模块
//!
//! 定义 morph-runtime 中使用的错误类型。

use thiserror::Error;

/// morph-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphError {
    /// 不支持的标签名
    ///
    /// 工厂边界的快速失败：这是编程错误，不可恢复。
    #[error("[animated] 不支持 <{tag}> 标签")]
    UnsupportedTag { tag: String },

    /// 会话被以错误的顺序驱动
    #[error("当前阶段不允许此操作：期望 {expected}，实际 {actual}")]
    StateMismatch { expected: String, actual: String },
}

/// Result 类型别名
pub type MorphResult<T> = Result<T, MorphError>;
