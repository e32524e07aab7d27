//! 快捷键帮助面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 38;
/// 帮助面板高度
const PANEL_HEIGHT: u16 = 22;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();

    // 居中计算
    let x = area.width.saturating_sub(PANEL_WIDTH) / 2;
    let y = area.height.saturating_sub(PANEL_HEIGHT) / 2;
    let panel_area = Rect::new(
        x,
        y,
        PANEL_WIDTH.min(area.width),
        PANEL_HEIGHT.min(area.height),
    );

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(build_help_lines(colors)).block(block);
    frame.render_widget(paragraph, panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("← / →  (h / l)", "Switch column", colors),
        key_line("↑ / ↓  (k / j)", "Select card", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("a", "Add task", colors),
        key_line("e / Enter", "Edit task", colors),
        key_line("x / Del", "Delete task", colors),
        Line::from(""),
        section_header("Move", colors),
        key_line("Shift+→", "Advance one column", colors),
        key_line("Shift+←", "Retreat one column", colors),
        key_line("m", "Move to any column", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Toggle light/dark", colors),
        key_line("r", "Reload", colors),
        key_line("q", "Quit", colors),
        Line::from(""),
        Line::from(Span::styled(
            "  press any key to close",
            Style::default().fg(colors.muted),
        )),
    ]
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<16}"), Style::default().fg(colors.text)),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
