//! 看板视图模型
//!
//! 四个分类桶由存储的活跃任务全量派生。每次成功的变更之后都从存储
//! 重新推导全部四个桶，不做增量修补。

use ratatui::widgets::ListState;

use crate::error::Result;
use crate::model::{Category, Task};
use crate::storage::TaskStore;

/// 看板状态：四个分类桶 + 每列独立的选中状态
pub struct Board {
    /// 按分类线性顺序排列的四个桶，桶内保持插入顺序
    buckets: [Vec<Task>; 4],
    /// 每列的列表选中状态
    list_states: [ListState; 4],
    /// 当前选中的列
    pub selected_column: usize,
}

impl Board {
    /// 从存储加载初始状态
    pub fn load(store: &TaskStore) -> Result<Board> {
        let mut board = Board {
            buckets: Default::default(),
            list_states: Default::default(),
            selected_column: 0,
        };
        board.refresh(store)?;
        Ok(board)
    }

    /// 从存储重新推导全部四个桶
    pub fn refresh(&mut self, store: &TaskStore) -> Result<()> {
        let mut buckets: [Vec<Task>; 4] = Default::default();
        for task in store.list_active()? {
            buckets[task.category.index()].push(task);
        }
        self.buckets = buckets;

        // 每列的选中项收敛到合法范围
        for (bucket, state) in self.buckets.iter().zip(self.list_states.iter_mut()) {
            if bucket.is_empty() {
                state.select(None);
            } else {
                let clamped = state.selected().unwrap_or(0).min(bucket.len() - 1);
                state.select(Some(clamped));
            }
        }
        Ok(())
    }

    /// 指定分类的桶
    pub fn bucket(&self, category: Category) -> &[Task] {
        &self.buckets[category.index()]
    }

    /// 当前列的桶
    pub fn current_bucket(&self) -> &[Task] {
        &self.buckets[self.selected_column]
    }

    /// 当前列的分类
    pub fn current_category(&self) -> Category {
        Category::ALL[self.selected_column]
    }

    /// 指定列的列表状态（渲染用）
    pub fn list_state_mut(&mut self, column: usize) -> &mut ListState {
        &mut self.list_states[column]
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.list_states[self.selected_column].selected()?;
        self.buckets[self.selected_column].get(index)
    }

    /// 切到右边一列
    pub fn next_column(&mut self) {
        self.selected_column = (self.selected_column + 1) % Category::ALL.len();
    }

    /// 切到左边一列
    pub fn prev_column(&mut self) {
        self.selected_column =
            (self.selected_column + Category::ALL.len() - 1) % Category::ALL.len();
    }

    /// 当前列内选中下一项（回绕）
    pub fn select_next(&mut self) {
        let len = self.buckets[self.selected_column].len();
        if len == 0 {
            return;
        }
        let state = &mut self.list_states[self.selected_column];
        let current = state.selected().unwrap_or(0);
        state.select(Some((current + 1) % len));
    }

    /// 当前列内选中上一项（回绕）
    pub fn select_previous(&mut self) {
        let len = self.buckets[self.selected_column].len();
        if len == 0 {
            return;
        }
        let state = &mut self.list_states[self.selected_column];
        let current = state.selected().unwrap_or(0);
        state.select(Some(if current == 0 { len - 1 } else { current - 1 }));
    }

    /// 沿线性顺序前进一格；Wishlist 为边界，静默跳过
    ///
    /// 返回是否发生了移动。
    pub fn advance(&mut self, store: &TaskStore, task_id: i64, from: Category) -> Result<bool> {
        let Some(next) = from.next() else {
            return Ok(false);
        };
        store.move_category(task_id, next)?;
        self.refresh(store)?;
        Ok(true)
    }

    /// 沿线性顺序后退一格；ToDo 为边界，静默跳过
    pub fn retreat(&mut self, store: &TaskStore, task_id: i64, from: Category) -> Result<bool> {
        let Some(prev) = from.prev() else {
            return Ok(false);
        };
        store.move_category(task_id, prev)?;
        self.refresh(store)?;
        Ok(true)
    }

    /// 直接跳转到任意目标分类（move 菜单 / 拖放语义）
    pub fn set_category(&mut self, store: &TaskStore, task_id: i64, target: Category) -> Result<()> {
        store.move_category(task_id, target)?;
        self.refresh(store)
    }
}

// ============================================================================
// Tests
// ============================================================================
