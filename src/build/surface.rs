//! # fcc(111) 表面 slab 构建
//!
//! 沿面心立方 (111) 面切出的表面模型，非正交六方面内晶胞。
//!
//! ## 几何
//! ```text
//! u1 = a/√2 · (1, 0, 0)
//! u2 = a/√2 · (1/2, √3/2, 0)
//! d  = a/√3                      # 层间距
//! ```
//! ABC 堆垛：顶层不偏移，向下依次偏移 (1/3, 1/3)、(2/3, 2/3)，循环。
//! 原子顺序为底层在前，层内先 x 后 y。
//!
//! ## 依赖关系
//! - 被 `commands/figure.rs` 调用
//! - 使用 `models/` 数据模型与元素表

use crate::error::{Result, SurfigError};
use crate::models::elements;
use crate::models::{Atom, Crystal, Lattice, SurfaceInfo, SurfaceSite};

/// slab 构建参数
#[derive(Debug, Clone, PartialEq)]
pub struct SlabConfig {
    /// 面内重复次数 (nx, ny) 与层数
    pub size: (usize, usize, usize),
    /// 上下真空层厚度 (Å)；`None` 表示沿 z 周期堆垛
    pub vacuum: Option<f64>,
    /// 覆盖元素参考晶格常数 (Å)
    pub lattice_constant: Option<f64>,
}

impl Default for SlabConfig {
    fn default() -> Self {
        SlabConfig {
            size: (10, 10, 4),
            vacuum: Some(10.0),
            lattice_constant: None,
        }
    }
}

/// 构建 fcc(111) slab
pub fn fcc111(symbol: &str, config: &SlabConfig) -> Result<Crystal> {
    let element =
        elements::lookup(symbol).ok_or_else(|| SurfigError::UnknownElement(symbol.to_string()))?;

    let a = match config.lattice_constant {
        Some(a) => a,
        None => element
            .fcc_lattice_constant
            .ok_or_else(|| SurfigError::NoLatticeConstant {
                symbol: symbol.to_string(),
            })?,
    };

    let (nx, ny, nl) = config.size;
    if nx == 0 || ny == 0 || nl == 0 {
        return Err(SurfigError::InvalidGeometry(format!(
            "size components must be at least 1, got {}x{}x{}",
            nx, ny, nl
        )));
    }
    if !a.is_finite() || a <= 0.0 {
        return Err(SurfigError::InvalidGeometry(format!(
            "lattice constant must be positive and finite, got {}",
            a
        )));
    }
    if let Some(v) = config.vacuum {
        if !v.is_finite() || v < 0.0 {
            return Err(SurfigError::InvalidGeometry(format!(
                "vacuum must be non-negative and finite, got {}",
                v
            )));
        }
    }

    let nn = a / 2.0_f64.sqrt();
    let d = a / 3.0_f64.sqrt();
    let u1 = [nn, 0.0];
    let u2 = [0.5 * nn, 0.5 * 3.0_f64.sqrt() * nn];

    let (height, z0, pbc_z) = match config.vacuum {
        Some(v) => (d * (nl - 1) as f64 + 2.0 * v, v, false),
        None => (d * nl as f64, 0.0, true),
    };

    let mut atoms = Vec::with_capacity(nx * ny * nl);
    for k in 0..nl {
        let from_top = nl - 1 - k;
        let shift = (from_top % 3) as f64 / 3.0;
        let z = z0 + k as f64 * d;

        for j in 0..ny {
            for i in 0..nx {
                let fi = i as f64 + shift;
                let fj = j as f64 + shift;
                atoms.push(Atom::new(
                    element.symbol,
                    [fi * u1[0] + fj * u2[0], fi * u1[1] + fj * u2[1], z],
                ));
            }
        }
    }

    let lattice = Lattice::from_vectors([
        [nx as f64 * u1[0], nx as f64 * u1[1], 0.0],
        [ny as f64 * u2[0], ny as f64 * u2[1], 0.0],
        [0.0, 0.0, height],
    ]);

    let mut slab = Crystal::new(format!("{}(111)", element.symbol), lattice, atoms);
    slab.pbc = [true, true, pbc_z];
    slab.adsorbate_info = Some(SurfaceInfo {
        cell: [u1, u2],
        sites: vec![
            SurfaceSite {
                name: "ontop",
                offset: [0.0, 0.0],
            },
            SurfaceSite {
                name: "fcc",
                offset: [1.0 / 3.0, 1.0 / 3.0],
            },
            SurfaceSite {
                name: "hcp",
                offset: [2.0 / 3.0, 2.0 / 3.0],
            },
        ],
        top_layer_z: z0 + (nl - 1) as f64 * d,
    });

    Ok(slab)
}
