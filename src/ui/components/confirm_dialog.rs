//! 删除确认弹窗组件
//!
//! 删除不可恢复，总是先弹确认框。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 待确认的删除目标
#[derive(Debug, Clone)]
pub struct DeleteConfirmData {
    pub task_id: i64,
    pub title: String,
}

impl DeleteConfirmData {
    pub fn new(task_id: i64, title: impl Into<String>) -> Self {
        Self {
            task_id,
            title: title.into(),
        }
    }

    fn message(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(format!("Delete \"{}\"?", self.title)),
            Line::from(""),
            Line::from("This cannot be undone."),
        ]
    }
}

/// 渲染删除确认弹窗
pub fn render(frame: &mut Frame, confirm: &DeleteConfirmData, colors: &ThemeColors) {
    let area = frame.area();

    let message_lines = confirm.message();
    let popup_width = 40u16.min(area.width.saturating_sub(4));
    let popup_height = (message_lines.len() as u16) + 4; // 边框 + 内容 + 提示

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Delete ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.error))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [content_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner_area);

    let styled_lines: Vec<Line> = message_lines
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(colors.text),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(styled_lines).alignment(Alignment::Center),
        content_area,
    );

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled(
            "Y",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" delete  ", Style::default().fg(colors.muted)),
        Span::styled(
            "N",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
