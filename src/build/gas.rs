//! # 随机气体吸附物放置
//!
//! 在 slab 晶胞内均匀随机采样位置，放置随机取向的气体分子。
//!
//! ## 流程（每个吸附物）
//! 1. 采样 x ∈ [0, a_x)、y ∈ [0, b_y)、z ∈ [z_min, z_max)
//! 2. 查找分子几何；失败则退化为单个原子放在采样点
//! 3. 采样 Euler 角 α, β, γ ∈ [0, 360)，依次绕质心沿 z、y、x 旋转
//! 4. 平移使质心落在采样点，追加到 slab
//!
//! ## 依赖关系
//! - 被 `commands/figure.rs` 调用
//! - 使用 `build/molecule.rs`、`models/`
//! - 使用 `rand` 采样，`indicatif` 显示进度

use crate::build::molecule::molecule;
use crate::error::{Result, SurfigError};
use crate::models::elements;
use crate::models::{Atom, Crystal};
use crate::utils::geometry::{self, Axis, Vec3};

use indicatif::ProgressBar;
use rand::Rng;

/// 吸附物放置参数
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// 质心 z 坐标采样区间 [min, max)，晶胞绝对坐标 (Å)
    pub z_range: (f64, f64),
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig { z_range: (0.0, 5.0) }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.z_range;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(SurfigError::InvalidArgument(format!(
                "z range must satisfy min < max, got {},{}",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// 放置结果类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    Molecule,
    /// 分子构建失败时退化为单原子
    BareAtom,
}

/// 单个吸附物的放置记录
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub kind: PlacementKind,
    /// 采样点（分子质心或原子位置）
    pub position: Vec3,
    /// Euler 角 (α, β, γ)，单原子为 `None`
    pub euler: Option<[f64; 3]>,
}

/// 放置统计
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementReport {
    pub placements: Vec<Placement>,
}

impl PlacementReport {
    pub fn molecules(&self) -> usize {
        self.count(PlacementKind::Molecule)
    }

    pub fn bare_atoms(&self) -> usize {
        self.count(PlacementKind::BareAtom)
    }

    fn count(&self, kind: PlacementKind) -> usize {
        self.placements.iter().filter(|p| p.kind == kind).count()
    }
}

/// 向 slab 逐个放置同种吸附物
pub struct GasPlacer<'a> {
    gas: &'a str,
    bounds: [(f64, f64); 3],
}

impl<'a> GasPlacer<'a> {
    /// 采样范围取自 slab 晶胞: x < a_x, y < b_y
    pub fn new(slab: &Crystal, gas: &'a str, config: &PlacementConfig) -> Result<Self> {
        config.validate()?;

        let m = slab.lattice.matrix;
        let (x_max, y_max) = (m[0][0], m[1][1]);
        if x_max <= 0.0 || y_max <= 0.0 {
            return Err(SurfigError::InvalidGeometry(format!(
                "slab cell has no lateral extent ({:.3} x {:.3})",
                x_max, y_max
            )));
        }

        Ok(GasPlacer {
            gas,
            bounds: [(0.0, x_max), (0.0, y_max), config.z_range],
        })
    }

    /// 放置一个吸附物
    pub fn place_one<R: Rng + ?Sized>(
        &self,
        slab: &mut Crystal,
        rng: &mut R,
    ) -> Result<Placement> {
        let target = [
            rng.gen_range(self.bounds[0].0..self.bounds[0].1),
            rng.gen_range(self.bounds[1].0..self.bounds[1].1),
            rng.gen_range(self.bounds[2].0..self.bounds[2].1),
        ];

        match molecule(self.gas) {
            Ok(mut mol) => {
                let euler = [
                    rng.gen_range(0.0..360.0),
                    rng.gen_range(0.0..360.0),
                    rng.gen_range(0.0..360.0),
                ];
                mol.rotate_about_com(euler[0], Axis::Z);
                mol.rotate_about_com(euler[1], Axis::Y);
                mol.rotate_about_com(euler[2], Axis::X);

                let com = mol.center_of_mass();
                mol.translate(geometry::sub(target, com));
                slab.extend(&mol);

                Ok(Placement {
                    kind: PlacementKind::Molecule,
                    position: target,
                    euler: Some(euler),
                })
            }
            Err(_) => {
                let element = elements::lookup(self.gas)
                    .ok_or_else(|| SurfigError::UnknownElement(self.gas.to_string()))?;
                slab.push(Atom::new(element.symbol, target));

                Ok(Placement {
                    kind: PlacementKind::BareAtom,
                    position: target,
                    euler: None,
                })
            }
        }
    }
}

/// 在 slab 上随机放置 `count` 个 `gas` 吸附物
pub fn add_gas<R: Rng + ?Sized>(
    slab: &mut Crystal,
    gas: &str,
    count: usize,
    config: &PlacementConfig,
    rng: &mut R,
    pb: &ProgressBar,
) -> Result<PlacementReport> {
    let placer = GasPlacer::new(slab, gas, config)?;
    let mut report = PlacementReport::default();

    pb.set_length(count as u64);
    for _ in 0..count {
        report.placements.push(placer.place_one(slab, rng)?);
        pb.inc(1);
    }

    Ok(report)
}
