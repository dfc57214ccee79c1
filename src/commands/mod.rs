//! # 命令执行模块
//!
//! 实现命令的业务逻辑，并决定进程退出码。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `build/`, `render/`, `writers/`, `utils/`
//! - 子模块: figure

pub mod figure;

use crate::cli::Cli;
use crate::error::Result;

use clap::error::ErrorKind;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    figure::execute(cli.figure)
}

/// 参数解析失败时的退出码：帮助/版本信息为 0，其余均为 1
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// 命令执行结果对应的退出码
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_code(args: &[&str]) -> i32 {
        match Cli::try_parse_from(args) {
            Ok(_) => 0,
            Err(e) => parse_exit_code(&e),
        }
    }

    fn run_code(args: &[&str]) -> i32 {
        let cli = Cli::try_parse_from(args).unwrap();
        exit_code(&run(cli))
    }

    #[test]
    fn test_wrong_argument_count_exits_with_one() {
        assert_eq!(parse_code(&["surfig"]), 1);
        assert_eq!(parse_code(&["surfig", "Pt", "CO"]), 1);
        assert_eq!(parse_code(&["surfig", "Pt", "CO", "3", "extra"]), 1);
        assert_eq!(parse_code(&["surfig", "Pt", "--no-such-flag"]), 1);
    }

    #[test]
    fn test_help_and_version_exit_with_zero() {
        assert_eq!(parse_code(&["surfig", "--help"]), 0);
        assert_eq!(parse_code(&["surfig", "--version"]), 0);
    }

    #[test]
    fn test_bad_gas_count_exits_with_one() {
        assert_eq!(run_code(&["surfig", "Pt", "CO", "many"]), 1);
        assert_eq!(run_code(&["surfig", "Pt", "CO", "2.5"]), 1);
        assert_eq!(run_code(&["surfig", "Pt", "CO", "-3"]), 1);
    }

    #[test]
    fn test_successful_run_exits_with_zero() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("Pt.png");
        let image_arg = image.to_string_lossy().into_owned();

        let code = run_code(&[
            "surfig", "Pt", "--size", "2x2x1", "--seed", "1", "-o", &image_arg,
        ]);
        assert_eq!(code, 0);
        assert!(image.exists());
    }
}
