pub mod confirm_dialog;
pub mod footer;
pub mod help_panel;
pub mod move_menu;
pub mod task_form;
pub mod toast;
