//! # surfig - fcc(111) 表面吸附示意图生成工具
//!
//! 构建指定元素的 fcc(111) 表面 slab，可选在其上方随机放置气体分子，
//! 并将结构渲染保存为 PNG 图像。
//!
//! ## 用法
//! ```text
//! surfig <slab_element>                            # -> <slab>.png
//! surfig <slab_element> <gas_element> <gas_count>  # -> <slab>_<gas>_<count>.png
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── build/     (slab、分子、吸附物放置)
//!   │     ├── render/    (投影与 PNG 输出)
//!   │     ├── writers/   (结构文件导出)
//!   │     └── models/    (数据模型与元素表)
//!   ├── utils/      (输出、进度条、几何)
//!   └── error.rs    (错误处理)
//! ```

mod build;
mod cli;
mod commands;
mod error;
mod models;
mod render;
mod utils;
mod writers;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(commands::parse_exit_code(&e));
        }
    };

    let result = commands::run(cli);
    if let Err(e) = &result {
        utils::output::print_error(&format!("{}", e));
    }
    std::process::exit(commands::exit_code(&result));
}
