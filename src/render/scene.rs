//! # 渲染场景
//!
//! 将原子结构旋转、正交投影到像素平面，得到按深度排序的圆盘与晶胞线段。
//!
//! ## 视角约定
//! - 旋转字符串如 `"100x,-10y"`：逗号分隔，每段为角度（度）加坐标轴，
//!   从左到右依次作用于原子坐标，右手系
//! - 观察者位于 +z，x 向右、y 向上；z 越大越靠前
//!
//! ## 依赖关系
//! - 被 `render/png.rs`、`commands/figure.rs` 使用
//! - 使用 `models/`、`utils/geometry.rs`

use crate::error::{Result, SurfigError};
use crate::models::elements;
use crate::models::Crystal;
use crate::utils::geometry::{self, Axis, Mat3, Vec3};

/// 画布单边像素上限
const MAX_CANVAS_PX: u32 = 10_000;

/// 渲染参数
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// 视角旋转字符串
    pub rotation: String,
    /// 每 Å 像素数
    pub scale: f64,
    /// 共价半径缩放
    pub radius_scale: f64,
    /// 是否绘制晶胞线框
    pub show_cell: bool,
    /// 边距（像素）
    pub margin: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            rotation: "100x".to_string(),
            scale: 20.0,
            radius_scale: 1.0,
            show_cell: false,
            margin: 10,
        }
    }
}

/// 解析旋转字符串为旋转矩阵
pub fn parse_rotation(input: &str) -> Result<Mat3> {
    let invalid = |reason: String| SurfigError::InvalidRotation {
        input: input.to_string(),
        reason,
    };

    let mut rotation = geometry::identity();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(rotation);
    }

    for part in trimmed.split(',') {
        let part = part.trim();
        let axis_char = part
            .chars()
            .last()
            .ok_or_else(|| invalid("empty rotation component".to_string()))?;
        let axis = Axis::from_char(axis_char)
            .ok_or_else(|| invalid(format!("'{}' is not one of x, y, z", axis_char)))?;

        let angle_str = &part[..part.len() - axis_char.len_utf8()];
        let angle: f64 = angle_str
            .trim()
            .parse()
            .map_err(|_| invalid(format!("'{}' is not a number", angle_str)))?;

        rotation = geometry::mat_mul(&geometry::rotation_matrix(axis, angle), &rotation);
    }

    Ok(rotation)
}

/// 投影后的原子圆盘
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    /// 像素坐标（原点左上）
    pub center: (f64, f64),
    pub radius: f64,
    pub depth: f64,
    pub color: (u8, u8, u8),
}

/// 可直接绘制的场景
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// 由远及近排序
    pub discs: Vec<Disc>,
    pub cell_lines: Vec<((f64, f64), (f64, f64))>,
}

impl Scene {
    pub fn from_crystal(crystal: &Crystal, options: &RenderOptions) -> Result<Scene> {
        if options.scale.is_nan() || options.scale <= 0.0 {
            return Err(SurfigError::InvalidArgument(format!(
                "scale must be positive, got {}",
                options.scale
            )));
        }
        if options.radius_scale.is_nan() || options.radius_scale <= 0.0 {
            return Err(SurfigError::InvalidArgument(format!(
                "radius scale must be positive, got {}",
                options.radius_scale
            )));
        }

        let rotation = parse_rotation(&options.rotation)?;

        let mut raw: Vec<(Vec3, f64, (u8, u8, u8))> = crystal
            .atoms
            .iter()
            .map(|atom| {
                let (radius, color) = match elements::lookup(&atom.element) {
                    Some(e) => (e.covalent_radius, e.color),
                    None => (1.0, (255, 20, 147)),
                };
                (
                    geometry::mat_vec(&rotation, atom.position),
                    radius * options.radius_scale,
                    color,
                )
            })
            .collect();

        let cell_edges: Vec<(Vec3, Vec3)> = if options.show_cell {
            cell_edges(crystal)
                .into_iter()
                .map(|(a, b)| {
                    (
                        geometry::mat_vec(&rotation, a),
                        geometry::mat_vec(&rotation, b),
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        // 包围盒（Å）
        let mut lo = [f64::INFINITY; 2];
        let mut hi = [f64::NEG_INFINITY; 2];
        for (p, r, _) in &raw {
            for k in 0..2 {
                lo[k] = lo[k].min(p[k] - r);
                hi[k] = hi[k].max(p[k] + r);
            }
        }
        for (a, b) in &cell_edges {
            for p in [a, b] {
                for k in 0..2 {
                    lo[k] = lo[k].min(p[k]);
                    hi[k] = hi[k].max(p[k]);
                }
            }
        }
        if !lo[0].is_finite() {
            lo = [0.0, 0.0];
            hi = [0.0, 0.0];
        }

        let margin = options.margin as f64;
        let width = ((hi[0] - lo[0]) * options.scale + 2.0 * margin).ceil().max(1.0);
        let height = ((hi[1] - lo[1]) * options.scale + 2.0 * margin).ceil().max(1.0);
        if width > MAX_CANVAS_PX as f64 || height > MAX_CANVAS_PX as f64 {
            return Err(SurfigError::InvalidArgument(format!(
                "image would be {:.0}x{:.0} px (limit {} px); lower --scale",
                width, height, MAX_CANVAS_PX
            )));
        }

        let to_px = |p: Vec3| {
            (
                (p[0] - lo[0]) * options.scale + margin,
                (hi[1] - p[1]) * options.scale + margin,
            )
        };

        raw.sort_by(|a, b| a.0[2].total_cmp(&b.0[2]));
        let discs = raw
            .into_iter()
            .map(|(p, r, color)| Disc {
                center: to_px(p),
                radius: r * options.scale,
                depth: p[2],
                color,
            })
            .collect();

        let cell_lines = cell_edges
            .into_iter()
            .map(|(a, b)| (to_px(a), to_px(b)))
            .collect();

        Ok(Scene {
            width: width as u32,
            height: height as u32,
            discs,
            cell_lines,
        })
    }
}

/// 晶胞 12 条棱（笛卡尔坐标）；零晶胞返回空
fn cell_edges(crystal: &Crystal) -> Vec<(Vec3, Vec3)> {
    if crystal.lattice.volume().abs() < 1e-10 {
        return Vec::new();
    }

    let corner = |i: usize, j: usize, k: usize| {
        crystal
            .lattice
            .frac_to_cart([i as f64, j as f64, k as f64])
    };

    let mut edges = Vec::with_capacity(12);
    for a in 0..2 {
        for b in 0..2 {
            edges.push((corner(0, a, b), corner(1, a, b)));
            edges.push((corner(a, 0, b), corner(a, 1, b)));
            edges.push((corner(a, b, 0), corner(a, b, 1)));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Lattice};

    fn two_atoms() -> Crystal {
        Crystal::new(
            "pair",
            Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]),
            vec![
                Atom::new("Cu", [0.0, 0.0, 1.0]),
                Atom::new("O", [2.0, 0.0, 0.0]),
            ],
        )
    }

    #[test]
    fn test_parse_rotation() {
        let r = parse_rotation("90x").unwrap();
        let v = geometry::mat_vec(&r, [0.0, 1.0, 0.0]);
        assert!(geometry::distance(v, [0.0, 0.0, 1.0]) < 1e-9);

        // 从左到右依次作用：先绕 z 再绕 x
        let r = parse_rotation("90z, 90x").unwrap();
        let v = geometry::mat_vec(&r, [1.0, 0.0, 0.0]);
        assert!(geometry::distance(v, [0.0, 0.0, 1.0]) < 1e-9);

        let r = parse_rotation("").unwrap();
        assert_eq!(r, geometry::identity());

        let r = parse_rotation("-10.5Y").unwrap();
        assert!((r[0][0] - 10.5_f64.to_radians().cos()).abs() < 1e-12);
    }

    #[test]
    fn test_parse_rotation_errors() {
        assert!(parse_rotation("100").is_err());
        assert!(parse_rotation("abcx").is_err());
        assert!(parse_rotation("10x,").is_err());
        assert!(parse_rotation("10w").is_err());
    }

    #[test]
    fn test_scene_sorted_back_to_front() {
        let options = RenderOptions {
            rotation: String::new(),
            ..RenderOptions::default()
        };
        let scene = Scene::from_crystal(&two_atoms(), &options).unwrap();

        assert_eq!(scene.discs.len(), 2);
        assert!(scene.discs[0].depth <= scene.discs[1].depth);
        // O 在后 (z=0)，Cu 在前 (z=1)
        assert_eq!(scene.discs[1].color, elements::lookup("Cu").unwrap().color);
    }

    #[test]
    fn test_scene_fits_canvas() {
        let options = RenderOptions {
            rotation: String::new(),
            show_cell: true,
            ..RenderOptions::default()
        };
        let scene = Scene::from_crystal(&two_atoms(), &options).unwrap();

        assert_eq!(scene.cell_lines.len(), 12);
        for d in &scene.discs {
            assert!(d.center.0 - d.radius >= 0.0);
            assert!(d.center.1 - d.radius >= 0.0);
            assert!(d.center.0 + d.radius <= scene.width as f64);
            assert!(d.center.1 + d.radius <= scene.height as f64);
        }
        for (a, b) in &scene.cell_lines {
            for p in [a, b] {
                assert!(p.0 >= 0.0 && p.0 <= scene.width as f64);
                assert!(p.1 >= 0.0 && p.1 <= scene.height as f64);
            }
        }
    }

    #[test]
    fn test_y_axis_points_up() {
        let crystal = Crystal::molecule(
            "stack",
            vec![Atom::new("H", [0.0, 0.0, 0.0]), Atom::new("H", [0.0, 3.0, 0.0])],
        );
        let options = RenderOptions {
            rotation: String::new(),
            ..RenderOptions::default()
        };
        let scene = Scene::from_crystal(&crystal, &options).unwrap();
        let (low, high) = (&scene.discs[0], &scene.discs[1]);
        let upper = if low.center.1 < high.center.1 { low } else { high };
        let lower = if low.center.1 < high.center.1 { high } else { low };
        assert!((lower.center.1 - upper.center.1 - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_oversized_canvas_and_bad_scale() {
        let options = RenderOptions {
            scale: 1e6,
            ..RenderOptions::default()
        };
        assert!(Scene::from_crystal(&two_atoms(), &options).is_err());

        let options = RenderOptions {
            scale: 0.0,
            ..RenderOptions::default()
        };
        assert!(Scene::from_crystal(&two_atoms(), &options).is_err());
    }

    #[test]
    fn test_empty_structure() {
        let crystal = Crystal::molecule("empty", vec![]);
        let scene = Scene::from_crystal(&crystal, &RenderOptions::default()).unwrap();
        assert!(scene.discs.is_empty());
        assert_eq!(scene.width, 20);
    }
}
