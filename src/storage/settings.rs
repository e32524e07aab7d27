//! 主题偏好持久化
//!
//! settings 表只有一个已知的 key：`theme`，值为 `dark` 或 `light`。
//! 首次切换时创建，之后 upsert。

use rusqlite::{params, OptionalExtension};

use crate::error::Result;
use crate::theme::Theme;

use super::TaskStore;

impl TaskStore {
    /// 读取主题偏好，未设置时默认浅色
    pub fn get_theme(&self) -> Result<Theme> {
        let value: Option<String> = self
            .conn()
            .query_row(
                "SELECT value FROM settings WHERE key = 'theme'",
                params![],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value
            .as_deref()
            .map(Theme::from_db_str)
            .unwrap_or(Theme::Light))
    }

    /// 保存主题偏好
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES ('theme', ?1)",
            params![theme.as_db_str()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let store = TaskStore::open_in_memory().unwrap();
        assert_eq!(store.get_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_roundtrip() {
        let store = TaskStore::open_in_memory().unwrap();
        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(store.get_theme().unwrap(), Theme::Dark);

        // upsert：再次写入覆盖
        store.set_theme(Theme::Light).unwrap();
        assert_eq!(store.get_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_unknown_value_falls_back_to_light() {
        let store = TaskStore::open_in_memory().unwrap();
        store
            .conn()
            .execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES ('theme', 'solarized')",
                params![],
            )
            .unwrap();
        assert_eq!(store.get_theme().unwrap(), Theme::Light);
    }
}
