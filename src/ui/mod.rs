//! UI 渲染入口
//!
//! 每帧整体重绘：标题栏、四列看板、底部快捷键栏，最后叠加弹窗与 Toast。

pub mod board;
pub mod components;

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::components::{confirm_dialog, footer, help_panel, move_menu, task_form, toast};

/// 渲染整个界面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // 填充背景色
    frame.render_widget(
        Block::default().style(Style::default().bg(app.colors.bg)),
        area,
    );

    let [header_area, board_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3), // 带边框的快捷键栏
    ])
    .areas(area);

    // 标题栏
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Ta-Du ",
            Style::default()
                .fg(app.colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", app.theme.label()),
            Style::default().fg(app.colors.muted),
        ),
    ]));
    frame.render_widget(header, header_area);

    // 看板主体
    board::render(frame, board_area, &mut app.board, &app.colors);

    // 底部快捷键栏
    let has_items = !app.board.current_bucket().is_empty();
    footer::render(frame, footer_area, has_items, &app.colors);

    // 弹窗层
    if let Some(form) = &app.dialogs.task_form {
        task_form::render(frame, form, &app.colors);
    }
    if let Some(confirm) = &app.dialogs.delete_confirm {
        confirm_dialog::render(frame, confirm, &app.colors);
    }
    if let Some(menu) = &app.dialogs.move_menu {
        move_menu::render(frame, menu, &app.colors);
    }
    if app.dialogs.show_help {
        help_panel::render(frame, &app.colors);
    }

    // Toast 最后绘制，盖在所有内容上
    if let Some(t) = &app.toast {
        toast::render(frame, &t.message, t.is_error, &app.colors);
    }
}
