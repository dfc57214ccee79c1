//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 用法
//! ```text
//! surfig <slab_element>
//! surfig <slab_element> <gas_element> <gas_count>
//! ```
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: figure

pub mod figure;

use clap::Parser;

/// surfig - fcc(111) 表面吸附示意图生成工具
#[derive(Parser, Debug)]
#[command(name = "surfig")]
#[command(version)]
#[command(
    about = "Build an fcc(111) slab, optionally scatter gas molecules above it, and save a PNG",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub figure: figure::FigureArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_slab_only() {
        let cli = Cli::try_parse_from(["surfig", "Pt"]).unwrap();
        assert_eq!(cli.figure.slab_element, "Pt");
        assert!(cli.figure.gas_element.is_none());
        assert!(cli.figure.gas_count.is_none());
        assert_eq!(cli.figure.size, (10, 10, 4));
        assert_eq!(cli.figure.z_range, (0.0, 5.0));
        assert_eq!(cli.figure.rotation, "100x");
    }

    #[test]
    fn test_slab_with_gas() {
        let cli = Cli::try_parse_from(["surfig", "Cu", "CO", "12"]).unwrap();
        assert_eq!(cli.figure.gas_element.as_deref(), Some("CO"));
        assert_eq!(cli.figure.gas_count.as_deref(), Some("12"));
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert_eq!(
            Cli::try_parse_from(["surfig"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            Cli::try_parse_from(["surfig", "Pt", "CO"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert!(Cli::try_parse_from(["surfig", "Pt", "CO", "3", "extra"]).is_err());
    }

    #[test]
    fn test_non_integer_count_reaches_command_layer() {
        // 计数的整数校验在命令层完成，以便给出统一的错误信息
        let cli = Cli::try_parse_from(["surfig", "Pt", "CO", "many"]).unwrap();
        assert_eq!(cli.figure.gas_count.as_deref(), Some("many"));
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "surfig",
            "Au",
            "--size",
            "4x4x3",
            "--z-range",
            "-1,2",
            "--rotation",
            "-90x,10y",
            "--seed",
            "42",
            "--show-cell",
            "-o",
            "au.png",
        ])
        .unwrap();
        assert_eq!(cli.figure.size, (4, 4, 3));
        assert_eq!(cli.figure.z_range, (-1.0, 2.0));
        assert_eq!(cli.figure.rotation, "-90x,10y");
        assert_eq!(cli.figure.seed, Some(42));
        assert!(cli.figure.show_cell);
        assert_eq!(
            cli.figure.output.as_deref(),
            Some(std::path::Path::new("au.png"))
        );
    }
}
