//! 主题颜色定义
//!
//! 深色以 #1a202c/#2d3748 为基调，浅色以 #f7fafc 为基调，
//! 优先级红/琥珀/绿。

use ratatui::style::Color;

use super::ThemeColors;

/// 浅色主题（默认）
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(247, 250, 252),    // #f7fafc
        highlight: Color::Rgb(49, 130, 206), // #3182ce 蓝
        text: Color::Rgb(26, 32, 44),     // #1a202c
        muted: Color::Rgb(113, 128, 150), // #718096
        border: Color::Rgb(226, 232, 240), // #e2e8f0
        priority_low: Color::Rgb(47, 133, 90),    // #2f855a 绿
        priority_medium: Color::Rgb(183, 121, 31), // #b7791f 琥珀
        priority_high: Color::Rgb(197, 48, 48),   // #c53030 红
        error: Color::Rgb(229, 62, 62), // #e53e3e
        column_accents: [
            Color::Rgb(49, 130, 206),  // To Do - 蓝
            Color::Rgb(183, 121, 31),  // Doing - 琥珀
            Color::Rgb(47, 133, 90),   // Done - 绿
            Color::Rgb(128, 90, 213),  // Wishlist - 紫
        ],
    }
}

/// 深色主题
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(26, 32, 44),       // #1a202c
        highlight: Color::Rgb(66, 153, 225), // #4299e1 蓝
        text: Color::White,
        muted: Color::Rgb(113, 128, 150), // #718096
        border: Color::Rgb(74, 85, 104),  // #4a5568
        priority_low: Color::Rgb(104, 211, 145),   // #68d391 绿
        priority_medium: Color::Rgb(246, 173, 85), // #f6ad55 琥珀
        priority_high: Color::Rgb(252, 129, 129),  // #fc8181 红
        error: Color::Rgb(252, 129, 129), // #fc8181
        column_accents: [
            Color::Rgb(66, 153, 225),  // To Do - 蓝
            Color::Rgb(246, 173, 85),  // Doing - 琥珀
            Color::Rgb(104, 211, 145), // Done - 绿
            Color::Rgb(159, 122, 234), // Wishlist - 紫
        ],
    }
}
