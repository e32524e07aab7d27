//! 任务分类与优先级
//!
//! 四个分类构成固定线性顺序 `ToDo < Doing < Done < Wishlist`，
//! `next`/`prev` 只用于 Shift 步进；move/跳转可以到任意其他分类。
//!
//! 数据库中存储的是土耳其语字符串（沿用既有 tasks.db 的取值），
//! UI 显示英文标签。

use crate::error::{Result, TaduError};

/// 任务分类（看板四列）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ToDo,
    Doing,
    Done,
    Wishlist,
}

impl Category {
    /// 线性顺序的全部分类
    pub const ALL: [Category; 4] = [
        Category::ToDo,
        Category::Doing,
        Category::Done,
        Category::Wishlist,
    ];

    /// 在线性顺序中的下标
    pub fn index(self) -> usize {
        match self {
            Category::ToDo => 0,
            Category::Doing => 1,
            Category::Done => 2,
            Category::Wishlist => 3,
        }
    }

    /// 线性顺序中的下一个分类（Wishlist 为边界，返回 None）
    pub fn next(self) -> Option<Category> {
        Category::ALL.get(self.index() + 1).copied()
    }

    /// 线性顺序中的上一个分类（ToDo 为边界，返回 None）
    pub fn prev(self) -> Option<Category> {
        self.index().checked_sub(1).map(|i| Category::ALL[i])
    }

    /// UI 显示标签
    pub fn label(self) -> &'static str {
        match self {
            Category::ToDo => "To Do",
            Category::Doing => "Doing",
            Category::Done => "Done",
            Category::Wishlist => "Wishlist",
        }
    }

    /// 列标题（带图标）
    pub fn title(self) -> &'static str {
        match self {
            Category::ToDo => " 📋 To Do ",
            Category::Doing => " 🔄 Doing ",
            Category::Done => " ✅ Done ",
            Category::Wishlist => " ⭐ Wishlist ",
        }
    }

    /// 数据库存储值（与既有数据文件保持兼容）
    pub fn as_db_str(self) -> &'static str {
        match self {
            Category::ToDo => "Yapılacak",
            Category::Doing => "Yapılıyor",
            Category::Done => "Bitti",
            Category::Wishlist => "Dilek Listesi",
        }
    }

    /// 从数据库存储值解析；未知值视为数据损坏
    pub fn from_db_str(s: &str) -> Result<Category> {
        match s {
            "Yapılacak" => Ok(Category::ToDo),
            "Yapılıyor" => Ok(Category::Doing),
            "Bitti" => Ok(Category::Done),
            "Dilek Listesi" => Ok(Category::Wishlist),
            other => Err(TaduError::validation(format!(
                "unknown category in database: {other:?}"
            ))),
        }
    }

    /// 循环到下一个分类（表单切换用，越界回绕）
    pub fn cycle_next(self) -> Category {
        Category::ALL[(self.index() + 1) % Category::ALL.len()]
    }

    /// 循环到上一个分类（表单切换用，越界回绕）
    pub fn cycle_prev(self) -> Category {
        Category::ALL[(self.index() + Category::ALL.len() - 1) % Category::ALL.len()]
    }
}

/// 任务优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// 全部优先级（表单循环切换用）
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// UI 显示标签
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// 数据库存储值（与既有数据文件保持兼容）
    pub fn as_db_str(self) -> &'static str {
        match self {
            Priority::Low => "Düşük",
            Priority::Medium => "Orta",
            Priority::High => "Yüksek",
        }
    }

    /// 从数据库存储值解析
    pub fn from_db_str(s: &str) -> Result<Priority> {
        match s {
            "Düşük" => Ok(Priority::Low),
            "Orta" => Ok(Priority::Medium),
            "Yüksek" => Ok(Priority::High),
            other => Err(TaduError::validation(format!(
                "unknown priority in database: {other:?}"
            ))),
        }
    }

    /// 循环到下一个优先级
    pub fn cycle_next(self) -> Priority {
        let i = Priority::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Priority::ALL[(i + 1) % Priority::ALL.len()]
    }

    /// 循环到上一个优先级
    pub fn cycle_prev(self) -> Priority {
        let i = Priority::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Priority::ALL[(i + Priority::ALL.len() - 1) % Priority::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_order() {
        assert_eq!(Category::ToDo.next(), Some(Category::Doing));
        assert_eq!(Category::Doing.next(), Some(Category::Done));
        assert_eq!(Category::Done.next(), Some(Category::Wishlist));
        assert_eq!(Category::Wishlist.next(), None);

        assert_eq!(Category::ToDo.prev(), None);
        assert_eq!(Category::Wishlist.prev(), Some(Category::Done));
    }

    #[test]
    fn test_category_db_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_db_str(cat.as_db_str()).unwrap(), cat);
        }
    }

    #[test]
    fn test_unknown_category_is_error() {
        assert!(Category::from_db_str("Backlog").is_err());
        assert!(Category::from_db_str("").is_err());
    }

    #[test]
    fn test_priority_db_roundtrip() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_db_str(p.as_db_str()).unwrap(), p);
        }
        assert!(Priority::from_db_str("Urgent").is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Category::Wishlist.cycle_next(), Category::ToDo);
        assert_eq!(Category::ToDo.cycle_prev(), Category::Wishlist);
        assert_eq!(Priority::High.cycle_next(), Priority::Low);
        assert_eq!(Priority::Low.cycle_prev(), Priority::High);
    }
}
