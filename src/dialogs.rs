//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。

// 从 ui/components 导入对话框数据类型
pub use crate::ui::components::confirm_dialog::DeleteConfirmData;
pub use crate::ui::components::move_menu::MoveMenuData;
pub use crate::ui::components::task_form::TaskFormData;

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 任务表单（新建/编辑）
    pub task_form: Option<TaskFormData>,
    /// 删除确认弹窗
    pub delete_confirm: Option<DeleteConfirmData>,
    /// 移动菜单
    pub move_menu: Option<MoveMenuData>,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭所有对话框
    pub fn close_all(&mut self) {
        self.task_form = None;
        self.delete_confirm = None;
        self.move_menu = None;
        self.show_help = false;
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.task_form.is_some()
            || self.delete_confirm.is_some()
            || self.move_menu.is_some()
            || self.show_help
    }
}

// ============================================================================
// Tests
// ============================================================================
