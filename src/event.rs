//! 事件处理
//!
//! 100ms 轮询；弹窗事件优先于看板按键。

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::ui::components::task_form::FormField;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 弹窗事件优先于看板按键
    if !app.dialogs.has_active_dialog() {
        handle_board_key(app, key);
        return;
    }

    // 帮助面板：任意键关闭
    if app.dialogs.show_help {
        app.dialogs.close_all();
        return;
    }

    // 任务表单
    if app.dialogs.task_form.is_some() {
        handle_task_form_key(app, key);
        return;
    }

    // 删除确认弹窗
    if app.dialogs.delete_confirm.is_some() {
        handle_delete_confirm_key(app, key);
        return;
    }

    // 移动菜单
    if app.dialogs.move_menu.is_some() {
        handle_move_menu_key(app, key);
    }
}

/// 处理看板按键
fn handle_board_key(app: &mut App, key: KeyEvent) {
    // Shift+←/→ 沿线性顺序步进
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Right => {
                app.advance_selected();
                return;
            }
            KeyCode::Left => {
                app.retreat_selected();
                return;
            }
            _ => {}
        }
    }

    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 列切换
        KeyCode::Char('h') | KeyCode::Left => app.board.prev_column(),
        KeyCode::Char('l') | KeyCode::Right => app.board.next_column(),

        // 列内导航
        KeyCode::Char('j') | KeyCode::Down => app.board.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.board.select_previous(),

        // 功能按键 - 新建任务
        KeyCode::Char('a') => app.open_add_form(),

        // 功能按键 - 编辑任务
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),

        // 功能按键 - 删除任务（带确认）
        KeyCode::Char('x') | KeyCode::Delete => app.open_delete_confirm(),

        // 功能按键 - 移动菜单
        KeyCode::Char('m') => app.open_move_menu(),

        // 功能按键 - 主题切换
        KeyCode::Char('t') => app.toggle_theme(),

        // 功能按键 - 刷新
        KeyCode::Char('r') => {
            app.refresh();
            app.show_toast("Reloaded");
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.dialogs.show_help = true;
        }

        _ => {}
    }
}

/// 处理任务表单按键
fn handle_task_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_task_form();
            return;
        }
        KeyCode::Esc => {
            app.dialogs.task_form = None;
            return;
        }
        _ => {}
    }

    let Some(form) = app.dialogs.task_form.as_mut() else {
        return;
    };

    match key.code {
        // 字段切换
        KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
        KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),

        // 选项字段循环 / 文本字段无效
        KeyCode::Left => form.cycle_left(),
        KeyCode::Right => form.cycle_right(),

        // 文本输入
        KeyCode::Backspace => form.delete_char(),
        KeyCode::Char(c) => {
            // 表单内字符全部进入焦点字段：分类/优先级字段忽略
            if form.field == FormField::Title || form.field == FormField::DueDate {
                form.input_char(c);
            }
        }

        _ => {}
    }
}

/// 处理删除确认弹窗按键
fn handle_delete_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.dialogs.delete_confirm = None;
        }
        _ => {}
    }
}

/// 处理移动菜单按键
fn handle_move_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.confirm_move();
            return;
        }
        KeyCode::Esc => {
            app.dialogs.move_menu = None;
            return;
        }
        _ => {}
    }

    let Some(menu) = app.dialogs.move_menu.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => menu.select_next(),
        KeyCode::Char('k') | KeyCode::Up => menu.select_previous(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority};
    use crate::notify::SilentNotifier;
    use crate::storage::TaskStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn test_app() -> App {
        let store = TaskStore::open_in_memory().unwrap();
        store
            .create(
                "Task",
                Category::ToDo,
                Priority::Medium,
                chrono::Local::now().date_naive(),
            )
            .unwrap();
        App::new(store, Box::new(SilentNotifier)).unwrap()
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_shift_right_advances() {
        let mut app = test_app();
        handle_key(&mut app, shift(KeyCode::Right));
        assert_eq!(app.store.list_active().unwrap()[0].category, Category::Doing);
    }

    #[test]
    fn test_plain_right_switches_column() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.board.current_category(), Category::Doing);
        // 任务没有被移动
        assert_eq!(app.store.list_active().unwrap()[0].category, Category::ToDo);
    }

    #[test]
    fn test_dialog_precedence_over_board_keys() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert!(app.dialogs.task_form.is_some());

        // 表单打开时 'q' 是输入而不是退出
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.dialogs.task_form.as_ref().unwrap().title, "q");

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.dialogs.task_form.is_none());
    }

    #[test]
    fn test_delete_flow_via_keys() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(app.dialogs.delete_confirm.is_some());

        // N 取消
        handle_key(&mut app, press(KeyCode::Char('n')));
        assert!(app.dialogs.delete_confirm.is_none());
        assert_eq!(app.store.list_active().unwrap().len(), 1);

        // Y 确认
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Char('y')));
        assert!(app.store.list_active().unwrap().is_empty());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert!(app.dialogs.show_help);
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert!(!app.dialogs.show_help);
    }
}
