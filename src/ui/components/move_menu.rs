//! 移动菜单组件
//!
//! 列出当前分类以外的三个目标，选中后直接跳转（不限相邻）。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::Category;
use crate::theme::ThemeColors;

/// 移动菜单状态
#[derive(Debug, Clone)]
pub struct MoveMenuData {
    pub task_id: i64,
    pub title: String,
    /// 可选目标（当前分类除外的三个）
    pub targets: Vec<Category>,
    pub selected: usize,
}

impl MoveMenuData {
    /// 为任务构建菜单，目标列表排除当前分类
    pub fn new(task_id: i64, title: impl Into<String>, current: Category) -> Self {
        let targets = Category::ALL
            .into_iter()
            .filter(|c| *c != current)
            .collect();
        Self {
            task_id,
            title: title.into(),
            targets,
            selected: 0,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.targets.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.targets.len() - 1) % self.targets.len();
    }

    pub fn chosen(&self) -> Category {
        self.targets[self.selected]
    }
}

/// 渲染移动菜单弹窗
pub fn render(frame: &mut Frame, menu: &MoveMenuData, colors: &ThemeColors) {
    let area = frame.area();

    let popup_width = 30u16.min(area.width.saturating_sub(4));
    let popup_height = (menu.targets.len() as u16) + 4; // 边框 + 列表 + 提示

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Move \"{}\" ", menu.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [list_area, hint_area] = Layout::vertical([
        Constraint::Length(menu.targets.len() as u16),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    // 渲染目标列表
    let lines: Vec<Line> = menu
        .targets
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let is_selected = i == menu.selected;
            let prefix = if is_selected { "❯ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(Span::styled(format!("{}{}", prefix, category.label()), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), list_area);

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" move  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_exclude_current() {
        let menu = MoveMenuData::new(1, "x", Category::Doing);
        assert_eq!(
            menu.targets,
            vec![Category::ToDo, Category::Done, Category::Wishlist]
        );
    }

    #[test]
    fn test_selection_wraps() {
        let mut menu = MoveMenuData::new(1, "x", Category::ToDo);
        assert_eq!(menu.chosen(), Category::Doing);
        menu.select_previous();
        assert_eq!(menu.chosen(), Category::Wishlist);
        menu.select_next();
        assert_eq!(menu.chosen(), Category::Doing);
    }
}
