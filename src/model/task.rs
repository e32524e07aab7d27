//! 任务数据

use chrono::NaiveDate;

use super::{Category, Priority};

/// 数据库中 due_date 的存储格式（yyyy-MM-dd）
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 任务记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务 ID（数据库自增主键，创建后不变）
    pub id: i64,
    /// 标题（非空）
    pub title: String,
    /// 所在分类
    pub category: Category,
    /// 优先级
    pub priority: Priority,
    /// 截止日期（无时间部分）
    pub due_date: NaiveDate,
    /// 完成标记（schema 中存在，当前没有路径会置 true）
    pub completed: bool,
}

impl Task {
    /// 截止日期的卡片短格式显示（dd.MM.yy）
    pub fn due_short(&self) -> String {
        self.due_date.format("%d.%m.%y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_short() {
        let task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            category: Category::ToDo,
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            completed: false,
        };
        assert_eq!(task.due_short(), "01.01.25");
    }
}
