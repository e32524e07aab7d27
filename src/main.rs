mod app;
mod board;
mod cli;
mod dialogs;
mod error;
mod event;
mod model;
mod notify;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use notify::{BellNotifier, Notifier, SilentNotifier};
use storage::TaskStore;

/// 启动 TUI 界面
fn run_tui(quiet: bool) -> io::Result<()> {
    // 打开任务库（自动建目录、建表）
    let store = match TaskStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open task database: {}", e);
            std::process::exit(1);
        }
    };

    let notifier: Box<dyn Notifier> = if quiet {
        Box::new(SilentNotifier)
    } else {
        Box::new(BellNotifier)
    };

    let mut app = match App::new(store, notifier) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to load task board: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::DbPath) => {
            println!("{}", storage::database_path().display());
        }
        None => {
            run_tui(cli.quiet)?;
        }
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
