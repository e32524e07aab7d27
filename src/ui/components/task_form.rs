//! 任务表单弹窗（新建/编辑共用）
//!
//! 四个字段：标题、分类、优先级、截止日期。截止日期按 yyyy-MM-dd
//! 文本输入，提交时校验不得早于今天。这是入口处的 UI 策略，
//! 存储层不做此约束。

use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::task::DATE_FORMAT;
use crate::model::{Category, Priority, Task};
use crate::theme::ThemeColors;

/// 表单焦点字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    Priority,
    DueDate,
}

impl FormField {
    const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Category,
        FormField::Priority,
        FormField::DueDate,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// 校验通过的表单内容
pub struct FormOutput {
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

/// 任务表单状态
#[derive(Debug, Clone)]
pub struct TaskFormData {
    /// 编辑目标的任务 ID；None 表示新建
    pub editing: Option<i64>,
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    /// 日期文本缓冲（yyyy-MM-dd）
    pub due_input: String,
    pub field: FormField,
}

impl TaskFormData {
    /// 新建表单：分类取当前列，日期默认今天
    pub fn new_add(category: Category, today: NaiveDate) -> Self {
        Self {
            editing: None,
            title: String::new(),
            category,
            priority: Priority::Medium,
            due_input: today.format(DATE_FORMAT).to_string(),
            field: FormField::Title,
        }
    }

    /// 编辑表单：预填任务现有字段
    pub fn new_edit(task: &Task) -> Self {
        Self {
            editing: Some(task.id),
            title: task.title.clone(),
            category: task.category,
            priority: task.priority,
            due_input: task.due_date.format(DATE_FORMAT).to_string(),
            field: FormField::Title,
        }
    }

    /// 当前焦点字段接收字符
    pub fn input_char(&mut self, c: char) {
        match self.field {
            FormField::Title => self.title.push(c),
            FormField::DueDate => {
                if c.is_ascii_digit() || c == '-' {
                    self.due_input.push(c);
                }
            }
            _ => {}
        }
    }

    /// 当前焦点字段删除字符
    pub fn delete_char(&mut self) {
        match self.field {
            FormField::Title => {
                self.title.pop();
            }
            FormField::DueDate => {
                self.due_input.pop();
            }
            _ => {}
        }
    }

    /// 焦点字段上的 ←/→：分类、优先级循环切换
    pub fn cycle_left(&mut self) {
        match self.field {
            FormField::Category => self.category = self.category.cycle_prev(),
            FormField::Priority => self.priority = self.priority.cycle_prev(),
            _ => {}
        }
    }

    pub fn cycle_right(&mut self) {
        match self.field {
            FormField::Category => self.category = self.category.cycle_next(),
            FormField::Priority => self.priority = self.priority.cycle_next(),
            _ => {}
        }
    }

    /// 提交前校验：标题非空，日期可解析且不早于今天
    pub fn validate(&self, today: NaiveDate) -> Result<FormOutput, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Task title cannot be empty".to_string());
        }

        let due_date = NaiveDate::parse_from_str(self.due_input.trim(), DATE_FORMAT)
            .map_err(|_| format!("Invalid date {:?} (use yyyy-mm-dd)", self.due_input.trim()))?;
        if due_date < today {
            return Err("Due date cannot be in the past".to_string());
        }

        Ok(FormOutput {
            title: title.to_string(),
            category: self.category,
            priority: self.priority,
            due_date,
        })
    }
}

/// 渲染任务表单弹窗
pub fn render(frame: &mut Frame, form: &TaskFormData, colors: &ThemeColors) {
    let area = frame.area();

    let popup_width = 52u16.min(area.width.saturating_sub(4));
    let popup_height = 12u16;

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    let title = if form.editing.is_some() {
        " Edit Task "
    } else {
        " New Task "
    };

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // 内部布局: 空行 + 四个字段行（行间空行）+ 提示行
    let [_, title_area, _, category_area, _, priority_area, _, date_area, _, hint_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Category
            Constraint::Length(1),
            Constraint::Length(1), // Priority
            Constraint::Length(1),
            Constraint::Length(1), // Due date
            Constraint::Min(0),
            Constraint::Length(1), // 提示行
        ])
        .areas(inner_area);

    frame.render_widget(
        Paragraph::new(text_field_line(
            "Task",
            &form.title,
            form.field == FormField::Title,
            colors,
        )),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(choice_field_line(
            "Category",
            form.category.label(),
            form.field == FormField::Category,
            colors,
        )),
        category_area,
    );
    frame.render_widget(
        Paragraph::new(choice_field_line(
            "Priority",
            form.priority.label(),
            form.field == FormField::Priority,
            colors,
        )),
        priority_area,
    );
    frame.render_widget(
        Paragraph::new(text_field_line(
            "Due",
            &form.due_input,
            form.field == FormField::DueDate,
            colors,
        )),
        date_area,
    );

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(colors.highlight)),
        Span::styled(" field  ", Style::default().fg(colors.muted)),
        Span::styled("←/→", Style::default().fg(colors.highlight)),
        Span::styled(" choose  ", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" save  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// 文本输入字段行: "  Task: {value}█"
fn text_field_line<'a>(
    label: &'static str,
    value: &'a str,
    focused: bool,
    colors: &ThemeColors,
) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };

    let mut spans = vec![
        Span::styled(format!("  {label:>8}: "), label_style),
        Span::styled(value, Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
    }
    Line::from(spans)
}

/// 选项字段行: "  Category: ◂ Doing ▸"
fn choice_field_line(
    label: &'static str,
    value: &'static str,
    focused: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };
    let arrow_style = if focused {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.border)
    };

    Line::from(vec![
        Span::styled(format!("  {label:>8}: "), label_style),
        Span::styled("◂ ", arrow_style),
        Span::styled(value, Style::default().fg(colors.text)),
        Span::styled(" ▸", arrow_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_validate_accepts_today_and_later() {
        let mut form = TaskFormData::new_add(Category::ToDo, today());
        form.title = "Buy milk".to_string();
        assert!(form.validate(today()).is_ok());

        form.due_input = "2025-12-31".to_string();
        let out = form.validate(today()).unwrap();
        assert_eq!(out.due_date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut form = TaskFormData::new_add(Category::ToDo, today());
        form.title = "   ".to_string();
        assert!(form.validate(today()).is_err());
    }

    #[test]
    fn test_validate_rejects_past_date() {
        let mut form = TaskFormData::new_add(Category::ToDo, today());
        form.title = "x".to_string();
        form.due_input = "2025-06-14".to_string();
        assert!(form.validate(today()).is_err());
    }

    #[test]
    fn test_validate_rejects_garbage_date() {
        let mut form = TaskFormData::new_add(Category::ToDo, today());
        form.title = "x".to_string();
        form.due_input = "soon".to_string();
        assert!(form.validate(today()).is_err());
    }

    #[test]
    fn test_date_field_only_accepts_digits_and_dashes() {
        let mut form = TaskFormData::new_add(Category::ToDo, today());
        form.field = FormField::DueDate;
        form.due_input.clear();
        for c in "2x0-2!5".chars() {
            form.input_char(c);
        }
        assert_eq!(form.due_input, "20-25");
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Title.next(), FormField::Category);
        assert_eq!(FormField::DueDate.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::DueDate);
    }

    #[test]
    fn test_new_edit_prefills() {
        let task = Task {
            id: 7,
            title: "Write report".to_string(),
            category: Category::Doing,
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            completed: false,
        };
        let form = TaskFormData::new_edit(&task);
        assert_eq!(form.editing, Some(7));
        assert_eq!(form.title, "Write report");
        assert_eq!(form.category, Category::Doing);
        assert_eq!(form.due_input, "2025-07-01");
    }
}
