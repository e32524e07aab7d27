//! Ta-Du 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，所有存储错误同步上抛给调用方。

use std::io;
use thiserror::Error;

/// Ta-Du 错误类型
#[derive(Debug, Error)]
pub enum TaduError {
    /// 校验错误（必填字段为空等）
    #[error("Validation error: {0}")]
    Validation(String),

    /// 目标记录不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 数据库错误
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// I/O 错误（目录创建等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Ta-Du Result 类型别名
pub type Result<T> = std::result::Result<T, TaduError>;

impl TaduError {
    /// 创建 Validation 错误
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
