//! 本地持久化
//!
//! 数据库文件固定放在用户文档目录的 `Ta-Du/` 子目录下，
//! 目录不存在时自动创建。

pub mod settings;
pub mod tasks;

pub use tasks::TaskStore;

use std::path::PathBuf;

use crate::error::Result;

/// 获取 Ta-Du 数据目录路径（文档目录不可用时回退到家目录）
pub fn data_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Ta-Du")
}

/// 获取数据库文件路径
pub fn database_path() -> PathBuf {
    data_dir().join("tasks.db")
}

/// 确保数据目录存在并返回数据库路径
pub fn ensure_database_path() -> Result<PathBuf> {
    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("tasks.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_under_data_dir() {
        let path = database_path();
        assert!(path.ends_with("Ta-Du/tasks.db"));
    }
}
