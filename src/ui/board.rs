//! 看板四列渲染
//!
//! 每列一个 List，卡片两行：标题行带优先级色条，副行显示优先级与截止日期。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::board::Board;
use crate::model::{Category, Priority, Task};
use crate::theme::ThemeColors;

/// 渲染四列看板
pub fn render(frame: &mut Frame, area: Rect, board: &mut Board, colors: &ThemeColors) {
    let columns = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .split(area);

    for (i, category) in Category::ALL.iter().enumerate() {
        render_column(frame, columns[i], board, *category, colors);
    }
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    board: &mut Board,
    category: Category,
    colors: &ThemeColors,
) {
    let column = category.index();
    let is_active = column == board.selected_column;
    let accent = colors.column_accents[column];

    let border_style = if is_active {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.border)
    };

    let count = board.bucket(category).len();
    let title = Line::from(vec![
        Span::styled(
            category.title(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{count} "), Style::default().fg(colors.muted)),
    ]);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(colors.bg));

    // 卡片内容拷贝成自有数据，渲染时才能可变借用列表状态
    let items: Vec<ListItem<'static>> = board
        .bucket(category)
        .iter()
        .map(|task| card_item(task, colors))
        .collect();

    // 选中高亮只在当前列生效
    let highlight = if is_active {
        Style::default().bg(colors.highlight).fg(colors.bg)
    } else {
        Style::default()
    };

    let list = List::new(items).block(block).highlight_style(highlight);

    frame.render_stateful_widget(list, area, board.list_state_mut(column));
}

/// 单张卡片：标题行 + 信息副行
fn card_item(task: &Task, colors: &ThemeColors) -> ListItem<'static> {
    let marker = Span::styled("▍", Style::default().fg(priority_color(task.priority, colors)));

    let title_line = Line::from(vec![
        marker,
        Span::styled(task.title.clone(), Style::default().fg(colors.text)),
    ]);
    let info_line = Line::from(Span::styled(
        format!("  {} · {}", task.priority.label(), task.due_short()),
        Style::default().fg(colors.muted),
    ));

    ListItem::new(vec![title_line, info_line])
}

fn priority_color(priority: Priority, colors: &ThemeColors) -> Color {
    match priority {
        Priority::Low => colors.priority_low,
        Priority::Medium => colors.priority_medium,
        Priority::High => colors.priority_high,
    }
}
