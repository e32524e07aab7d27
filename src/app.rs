//! 全局应用状态

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

use crate::board::Board;
use crate::dialogs::{DeleteConfirmData, DialogState, MoveMenuData, TaskFormData};
use crate::error::Result;
use crate::notify::{Notifier, TaskEvent};
use crate::storage::TaskStore;
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, is_error: bool, duration: Duration) -> Self {
        Self {
            message: message.into(),
            is_error,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务存储（进程生命周期内唯一连接）
    pub store: TaskStore,
    /// 看板视图模型
    pub board: Board,
    /// 对话框状态
    pub dialogs: DialogState,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 注入的通知接口（音效等，fire-and-forget）
    notifier: Box<dyn Notifier>,
}

impl App {
    /// 创建应用：加载主题偏好和看板数据
    pub fn new(store: TaskStore, notifier: Box<dyn Notifier>) -> Result<Self> {
        let theme = store.get_theme()?;
        let colors = get_theme_colors(theme);
        let board = Board::load(&store)?;

        Ok(Self {
            should_quit: false,
            store,
            board,
            dialogs: DialogState::new(),
            theme,
            colors,
            toast: None,
            notifier,
        })
    }

    /// 今天（due date 下限的 UI 策略基准）
    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// 从存储重新加载看板
    pub fn refresh(&mut self) {
        if let Err(e) = self.board.refresh(&self.store) {
            self.show_error(format!("{e}"));
        }
    }

    // ========== Task Form ==========

    /// 打开新建表单（分类默认当前列）
    pub fn open_add_form(&mut self) {
        self.dialogs.task_form = Some(TaskFormData::new_add(
            self.board.current_category(),
            Self::today(),
        ));
    }

    /// 打开编辑表单（预填当前选中任务）
    pub fn open_edit_form(&mut self) {
        if let Some(task) = self.board.selected_task() {
            self.dialogs.task_form = Some(TaskFormData::new_edit(task));
        }
    }

    /// 提交表单：校验失败保持弹窗并提示；成功后写库、刷新、关弹窗
    pub fn submit_task_form(&mut self) {
        let Some(form) = self.dialogs.task_form.clone() else {
            return;
        };

        let output = match form.validate(Self::today()) {
            Ok(output) => output,
            Err(msg) => {
                self.show_error(msg);
                return;
            }
        };

        let result = match form.editing {
            None => self
                .store
                .create(&output.title, output.category, output.priority, output.due_date)
                .map(|_| {
                    self.notifier.notify(TaskEvent::Added);
                    format!("Added: {}", output.title)
                }),
            Some(id) => self
                .store
                .update(id, &output.title, output.category, output.priority, output.due_date)
                .map(|_| format!("Updated: {}", output.title)),
        };

        match result {
            Ok(message) => {
                self.dialogs.task_form = None;
                self.refresh();
                self.show_toast(message);
            }
            Err(e) => self.show_error(format!("{e}")),
        }
    }

    // ========== Delete ==========

    /// 打开删除确认弹窗
    pub fn open_delete_confirm(&mut self) {
        if let Some(task) = self.board.selected_task() {
            self.dialogs.delete_confirm = Some(DeleteConfirmData::new(task.id, task.title.clone()));
        }
    }

    /// 确认删除
    pub fn confirm_delete(&mut self) {
        let Some(confirm) = self.dialogs.delete_confirm.take() else {
            return;
        };

        match self.store.delete(confirm.task_id) {
            Ok(()) => {
                self.notifier.notify(TaskEvent::Deleted);
                self.refresh();
                self.show_toast(format!("Deleted: {}", confirm.title));
            }
            Err(e) => self.show_error(format!("{e}")),
        }
    }

    // ========== Move ==========

    /// 当前选中任务沿线性顺序前进一格（Wishlist 边界静默忽略）
    pub fn advance_selected(&mut self) {
        let Some(task) = self.board.selected_task() else {
            return;
        };
        let (id, from) = (task.id, task.category);

        match self.board.advance(&self.store, id, from) {
            Ok(true) => self.notifier.notify(TaskEvent::Moved),
            Ok(false) => {}
            Err(e) => self.show_error(format!("{e}")),
        }
    }

    /// 当前选中任务沿线性顺序后退一格（ToDo 边界静默忽略）
    pub fn retreat_selected(&mut self) {
        let Some(task) = self.board.selected_task() else {
            return;
        };
        let (id, from) = (task.id, task.category);

        match self.board.retreat(&self.store, id, from) {
            Ok(true) => self.notifier.notify(TaskEvent::Moved),
            Ok(false) => {}
            Err(e) => self.show_error(format!("{e}")),
        }
    }

    /// 打开移动菜单
    pub fn open_move_menu(&mut self) {
        if let Some(task) = self.board.selected_task() {
            self.dialogs.move_menu =
                Some(MoveMenuData::new(task.id, task.title.clone(), task.category));
        }
    }

    /// 移动菜单确认：跳转到选中的目标分类
    pub fn confirm_move(&mut self) {
        let Some(menu) = self.dialogs.move_menu.take() else {
            return;
        };
        let target = menu.chosen();

        match self.board.set_category(&self.store, menu.task_id, target) {
            Ok(()) => {
                self.notifier.notify(TaskEvent::Moved);
                self.show_toast(format!("Moved to {}", target.label()));
            }
            Err(e) => self.show_error(format!("{e}")),
        }
    }

    // ========== Theme ==========

    /// 浅色/深色互切并持久化
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.colors = get_theme_colors(self.theme);
        if let Err(e) = self.store.set_theme(self.theme) {
            self.show_error(format!("{e}"));
            return;
        }
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, false, Duration::from_secs(2)));
    }

    /// 显示错误 Toast
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, true, Duration::from_secs(3)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ============================================================================
// Tests
// ============================================================================
