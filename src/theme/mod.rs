//! 主题

mod colors;

use ratatui::style::Color;

pub use colors::{dark_colors, light_colors};

/// 主题类型（浅色为默认）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 主题显示名称
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// settings 表中的存储值
    pub fn as_db_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// 从存储值解析；未知值退回浅色
    pub fn from_db_str(s: &str) -> Theme {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// 浅色/深色互切
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 高亮色（选中列边框、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 优先级 - Low
    pub priority_low: Color,
    /// 优先级 - Medium
    pub priority_medium: Color,
    /// 优先级 - High
    pub priority_high: Color,
    /// 错误色（删除确认边框、错误 toast）
    pub error: Color,
    /// 四列的列头强调色
    pub column_accents: [Color; 4],
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => light_colors(),
        Theme::Dark => dark_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_str_roundtrip() {
        assert_eq!(Theme::from_db_str(Theme::Dark.as_db_str()), Theme::Dark);
        assert_eq!(Theme::from_db_str(Theme::Light.as_db_str()), Theme::Light);
        assert_eq!(Theme::from_db_str("nonsense"), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }
}
