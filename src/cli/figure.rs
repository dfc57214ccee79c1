//! # 出图参数 CLI 定义
//!
//! 位置参数 `<slab_element> [<gas_element> <gas_count>]` 与可选的构建/渲染参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/figure.rs`

use clap::Args;
use std::path::PathBuf;

/// 出图参数
#[derive(Args, Debug, Clone)]
pub struct FigureArgs {
    /// Element of the fcc(111) slab (e.g. Pt, Cu, Au)
    pub slab_element: String,

    /// Gas molecule or element to scatter above the slab (e.g. CO, H2O, Ar)
    #[arg(requires = "gas_count")]
    pub gas_element: Option<String>,

    /// Number of gas molecules to place
    #[arg(allow_hyphen_values = true)]
    pub gas_count: Option<String>,

    /// Output image name [default: <slab>.png or <slab>_<gas>_<count>.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Slab size as NXxNYxLAYERS
    #[arg(long, default_value = "10x10x4", value_parser = parse_size)]
    pub size: (usize, usize, usize),

    /// Vacuum thickness above and below the slab (Å)
    #[arg(long, default_value_t = 10.0)]
    pub vacuum: f64,

    /// Override the reference fcc lattice constant (Å)
    #[arg(long)]
    pub lattice_constant: Option<f64>,

    /// Vertical range for gas centers of mass as MIN,MAX (Å, cell coordinates)
    #[arg(long, default_value = "0,5", value_parser = parse_range, allow_hyphen_values = true)]
    pub z_range: (f64, f64),

    /// Random seed for reproducible placement
    #[arg(long, env = "SURFIG_SEED")]
    pub seed: Option<u64>,

    /// View rotation, e.g. '100x' or '-90x,30y'
    #[arg(long, default_value = "100x", allow_hyphen_values = true)]
    pub rotation: String,

    /// Pixels per Ångström
    #[arg(long, default_value_t = 20.0)]
    pub scale: f64,

    /// Scale factor applied to covalent radii
    #[arg(long, default_value_t = 1.0)]
    pub radius_scale: f64,

    /// Draw the unit cell wireframe
    #[arg(long, default_value_t = false)]
    pub show_cell: bool,

    /// Also write the final structure (.xyz, .vasp, POSCAR*)
    #[arg(long)]
    pub save_structure: Option<PathBuf>,
}

/// 解析 slab 尺寸 `10x10x4`
pub fn parse_size(input: &str) -> Result<(usize, usize, usize), String> {
    let parts: Vec<&str> = input.split(['x', 'X']).collect();
    if parts.len() != 3 {
        return Err(format!("expected NXxNYxLAYERS, got '{}'", input));
    }

    let mut values = [0usize; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a positive integer", part))?;
        if *value == 0 {
            return Err("size components must be at least 1".to_string());
        }
    }

    Ok((values[0], values[1], values[2]))
}

/// 解析区间 `MIN,MAX`
pub fn parse_range(input: &str) -> Result<(f64, f64), String> {
    let (lo, hi) = input
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{}'", input))?;

    let lo: f64 = lo
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", lo))?;
    let hi: f64 = hi
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", hi))?;

    if lo >= hi {
        return Err(format!("MIN must be smaller than MAX, got {},{}", lo, hi));
    }
    Ok((lo, hi))
}
