//! 任务存储
//!
//! `TaskStore` 持有唯一的数据库连接：启动时打开一次，进程退出时随
//! drop 关闭。每个操作都是单条自动提交语句，要么完整落盘要么不落盘。

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use crate::error::{Result, TaduError};
use crate::model::task::DATE_FORMAT;
use crate::model::{Category, Priority, Task};

/// 任务与设置的持久化存储
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// 打开指定路径的数据库，建表（幂等）
    pub fn open(path: impl AsRef<Path>) -> Result<TaskStore> {
        let conn = Connection::open(path)?;
        let store = TaskStore { conn };
        store.create_tables()?;
        Ok(store)
    }

    /// 打开默认位置的数据库（文档目录下的 Ta-Du/tasks.db）
    pub fn open_default() -> Result<TaskStore> {
        let path = super::ensure_database_path()?;
        Self::open(path)
    }

    /// 内存数据库（测试用）
    #[cfg(test)]
    pub fn open_in_memory() -> Result<TaskStore> {
        let conn = Connection::open_in_memory()?;
        let store = TaskStore { conn };
        store.create_tables()?;
        Ok(store)
    }

    fn create_tables(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                category TEXT NOT NULL,
                priority TEXT NOT NULL,
                due_date TEXT NOT NULL,
                completed INTEGER DEFAULT 0
            )",
            params![],
        )?;
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            params![],
        )?;
        Ok(())
    }

    /// 底层连接（settings 模块共用）
    pub(super) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// 创建任务，返回新分配的 ID
    ///
    /// 标题去除首尾空白后为空时返回 `Validation` 错误，不写入任何行。
    pub fn create(
        &self,
        title: &str,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Result<i64> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaduError::validation("task title cannot be empty"));
        }

        self.conn.execute(
            "INSERT INTO tasks (title, category, priority, due_date)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                title,
                category.as_db_str(),
                priority.as_db_str(),
                due_date.format(DATE_FORMAT).to_string(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// 列出全部活跃任务（completed = 0），按插入顺序返回
    pub fn list_active(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, category, priority, due_date, completed
             FROM tasks WHERE completed = 0 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![], decode_row)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row??);
        }
        Ok(tasks)
    }

    /// 替换任务的全部可变字段
    pub fn update(
        &self,
        id: i64,
        title: &str,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaduError::validation("task title cannot be empty"));
        }

        let affected = self.conn.execute(
            "UPDATE tasks
             SET title = ?1, category = ?2, priority = ?3, due_date = ?4
             WHERE id = ?5",
            params![
                title,
                category.as_db_str(),
                priority.as_db_str(),
                due_date.format(DATE_FORMAT).to_string(),
                id,
            ],
        )?;
        if affected == 0 {
            return Err(TaduError::not_found(format!("task {id}")));
        }
        Ok(())
    }

    /// 只修改任务的分类（目标与当前相同时也算成功）
    pub fn move_category(&self, id: i64, new_category: Category) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE tasks SET category = ?1 WHERE id = ?2",
            params![new_category.as_db_str(), id],
        )?;
        if affected == 0 {
            return Err(TaduError::not_found(format!("task {id}")));
        }
        Ok(())
    }

    /// 删除任务
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(TaduError::not_found(format!("task {id}")));
        }
        Ok(())
    }
}

/// 解码一行任务记录；分类/优先级超出枚举集合视为数据损坏
fn decode_row(row: &Row) -> rusqlite::Result<Result<Task>> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let category: String = row.get(2)?;
    let priority: String = row.get(3)?;
    let due_date: String = row.get(4)?;
    let completed: i64 = row.get(5)?;

    Ok(build_task(id, title, &category, &priority, &due_date, completed))
}

fn build_task(
    id: i64,
    title: String,
    category: &str,
    priority: &str,
    due_date: &str,
    completed: i64,
) -> Result<Task> {
    Ok(Task {
        id,
        title,
        category: Category::from_db_str(category)?,
        priority: Priority::from_db_str(priority)?,
        due_date: NaiveDate::parse_from_str(due_date, DATE_FORMAT)
            .map_err(|e| TaduError::validation(format!("bad due_date {due_date:?}: {e}")))?,
        completed: completed != 0,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_create_then_list() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store
            .create("Buy milk", Category::ToDo, Priority::Medium, date("2025-01-01"))
            .unwrap();

        let tasks = store.list_active().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[0].category, Category::ToDo);
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert_eq!(tasks[0].due_date, date("2025-01-01"));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_create_trims_title() {
        let store = TaskStore::open_in_memory().unwrap();
        store
            .create("  padded  ", Category::Doing, Priority::Low, date("2025-06-01"))
            .unwrap();
        assert_eq!(store.list_active().unwrap()[0].title, "padded");
    }

    #[test]
    fn test_create_empty_title_is_validation_error() {
        let store = TaskStore::open_in_memory().unwrap();
        for title in ["", "   ", "\t\n"] {
            let err = store
                .create(title, Category::ToDo, Priority::Low, date("2025-01-01"))
                .unwrap_err();
            assert!(matches!(err, TaduError::Validation(_)));
        }
        // 失败的 create 不应写入任何行
        assert!(store.list_active().unwrap().is_empty());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = TaskStore::open_in_memory().unwrap();
        for title in ["first", "second", "third"] {
            store
                .create(title, Category::ToDo, Priority::High, date("2025-01-01"))
                .unwrap();
        }
        let titles: Vec<_> = store
            .list_active()
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store
            .create("Old", Category::ToDo, Priority::Low, date("2025-01-01"))
            .unwrap();

        store
            .update(id, "New", Category::Done, Priority::High, date("2025-02-02"))
            .unwrap();

        let tasks = store.list_active().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "New");
        assert_eq!(tasks[0].category, Category::Done);
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].due_date, date("2025-02-02"));
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let store = TaskStore::open_in_memory().unwrap();
        let err = store
            .update(99, "X", Category::ToDo, Priority::Low, date("2025-01-01"))
            .unwrap_err();
        assert!(matches!(err, TaduError::NotFound(_)));
    }

    #[test]
    fn test_move_category() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store
            .create("Task", Category::ToDo, Priority::Low, date("2025-01-01"))
            .unwrap();

        store.move_category(id, Category::Wishlist).unwrap();
        assert_eq!(store.list_active().unwrap()[0].category, Category::Wishlist);

        // 同分类 move 也算成功
        store.move_category(id, Category::Wishlist).unwrap();

        let err = store.move_category(1000, Category::Done).unwrap_err();
        assert!(matches!(err, TaduError::NotFound(_)));
    }

    #[test]
    fn test_delete() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store
            .create("Task", Category::ToDo, Priority::Low, date("2025-01-01"))
            .unwrap();

        store.delete(id).unwrap();
        assert!(store.list_active().unwrap().is_empty());

        // 重复删除报 NotFound
        let err = store.delete(id).unwrap_err();
        assert!(matches!(err, TaduError::NotFound(_)));
    }

    #[test]
    fn test_completed_rows_are_hidden() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store
            .create("Hidden", Category::Done, Priority::Low, date("2025-01-01"))
            .unwrap();
        store
            .conn()
            .execute("UPDATE tasks SET completed = 1 WHERE id = ?1", params![id])
            .unwrap();
        assert!(store.list_active().unwrap().is_empty());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.db");

        let id;
        {
            let store = TaskStore::open(&path).unwrap();
            id = store
                .create("Durable", Category::Doing, Priority::Medium, date("2025-03-03"))
                .unwrap();
        }

        let store = TaskStore::open(&path).unwrap();
        let tasks = store.list_active().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "Durable");
    }

    #[test]
    fn test_corrupt_category_is_error() {
        let store = TaskStore::open_in_memory().unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO tasks (title, category, priority, due_date)
                 VALUES ('x', 'Backlog', 'Orta', '2025-01-01')",
                params![],
            )
            .unwrap();
        assert!(store.list_active().is_err());
    }

    // 完整生命周期：创建 → 步进 → 任意跳转 → 删除
    #[test]
    fn test_lifecycle_scenario() {
        let store = TaskStore::open_in_memory().unwrap();
        let id = store
            .create("Buy milk", Category::ToDo, Priority::Medium, date("2025-01-01"))
            .unwrap();
        assert_eq!(id, 1);

        store.move_category(id, Category::Doing).unwrap();
        assert_eq!(store.list_active().unwrap()[0].category, Category::Doing);

        store.move_category(id, Category::Wishlist).unwrap();
        assert_eq!(store.list_active().unwrap()[0].category, Category::Wishlist);

        store.delete(id).unwrap();
        assert!(store.list_active().unwrap().is_empty());
    }
}
