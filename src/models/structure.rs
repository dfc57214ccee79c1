//! # 原子结构数据模型
//!
//! 定义晶胞、原子以及带表面元数据的结构。原子坐标统一使用笛卡尔坐标 (Å)，
//! 便于分子拼接、旋转和平移。
//!
//! ## 依赖关系
//! - 被 `build/`、`render/`、`writers/` 使用
//! - 使用 `models/elements.rs`、`utils/geometry.rs`

use crate::models::elements;
use crate::utils::geometry::{self, Axis, Mat3, Vec3};

use std::collections::BTreeMap;

/// 晶格参数表示
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: Mat3,
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: Mat3) -> Self {
        Lattice { matrix }
    }

    /// 零晶胞（孤立分子）
    pub fn zero() -> Self {
        Lattice {
            matrix: [[0.0; 3]; 3],
        }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a_vec, b_vec, c_vec] = self.matrix;

        let a = geometry::norm(a_vec);
        let b = geometry::norm(b_vec);
        let c = geometry::norm(c_vec);

        let alpha = (geometry::dot(b_vec, c_vec) / (b * c)).acos().to_degrees();
        let beta = (geometry::dot(a_vec, c_vec) / (a * c)).acos().to_degrees();
        let gamma = (geometry::dot(a_vec, b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix;

        // 行列式计算
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// 分数坐标转笛卡尔坐标
    pub fn frac_to_cart(&self, frac: Vec3) -> Vec3 {
        let m = self.matrix;
        [
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ]
    }

    /// 笛卡尔坐标转分数坐标；奇异晶胞返回 `None`
    pub fn cart_to_frac(&self, cart: Vec3) -> Option<Vec3> {
        let m = self.matrix;
        let det = self.volume();

        if det.abs() < 1e-10 {
            return None;
        }

        let inv = [
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
            ],
        ];

        // cart = frac · M  =>  frac = cart · M⁻¹
        Some([
            cart[0] * inv[0][0] + cart[1] * inv[1][0] + cart[2] * inv[2][0],
            cart[0] * inv[0][1] + cart[1] * inv[1][1] + cart[2] * inv[2][1],
            cart[0] * inv[0][2] + cart[1] * inv[1][2] + cart[2] * inv[2][2],
        ])
    }
}

/// 原子信息
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 笛卡尔坐标 [x, y, z] (Å)
    pub position: Vec3,
}

impl Atom {
    pub fn new(element: impl Into<String>, position: Vec3) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 表面高对称吸附位
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSite {
    pub name: &'static str,
    /// 以单位表面晶胞为基的分数偏移
    pub offset: [f64; 2],
}

/// 表面模型的吸附元数据
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceInfo {
    /// 单位表面晶胞 (两个面内向量)
    pub cell: [[f64; 2]; 2],
    pub sites: Vec<SurfaceSite>,
    /// 顶层原子的 z 坐标 (Å)
    pub top_layer_z: f64,
}

impl SurfaceInfo {
    pub fn site(&self, name: &str) -> Option<&SurfaceSite> {
        self.sites.iter().find(|s| s.name == name)
    }
}

/// 原子结构（表面 slab 或孤立分子）
#[derive(Debug, Clone, PartialEq)]
pub struct Crystal {
    /// 结构名称
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 原子列表
    pub atoms: Vec<Atom>,

    /// 三个晶格方向上的周期性
    pub pbc: [bool; 3],

    /// 吸附元数据，仅表面模型携带
    pub adsorbate_info: Option<SurfaceInfo>,
}

impl Crystal {
    pub fn new(name: impl Into<String>, lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Crystal {
            name: name.into(),
            lattice,
            atoms,
            pbc: [false; 3],
            adsorbate_info: None,
        }
    }

    /// 孤立分子：零晶胞、无周期性
    pub fn molecule(name: impl Into<String>, atoms: Vec<Atom>) -> Self {
        Crystal::new(name, Lattice::zero(), atoms)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    /// 追加另一个结构的全部原子（晶胞与元数据保持不变）
    pub fn extend(&mut self, other: &Crystal) {
        self.atoms.extend(other.atoms.iter().cloned());
    }

    /// 移除吸附元数据并返回
    pub fn take_adsorbate_info(&mut self) -> Option<SurfaceInfo> {
        self.adsorbate_info.take()
    }

    /// 各元素原子数，按元素符号排序
    pub fn composition(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        self.composition()
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 质心（按原子质量加权）；空结构返回原点
    pub fn center_of_mass(&self) -> Vec3 {
        let mut total = 0.0;
        let mut acc = [0.0; 3];

        for atom in &self.atoms {
            let m = elements::atomic_mass(&atom.element);
            total += m;
            acc = geometry::add(acc, geometry::scale(atom.position, m));
        }

        if total > 0.0 {
            geometry::scale(acc, 1.0 / total)
        } else {
            acc
        }
    }

    /// 平移全部原子
    pub fn translate(&mut self, shift: Vec3) {
        for atom in &mut self.atoms {
            atom.position = geometry::add(atom.position, shift);
        }
    }

    /// 绕 `center` 沿坐标轴旋转 `angle_deg` 度，晶胞不动
    pub fn rotate(&mut self, angle_deg: f64, axis: Axis, center: Vec3) {
        let r = geometry::rotation_matrix(axis, angle_deg);
        for atom in &mut self.atoms {
            let local = geometry::sub(atom.position, center);
            atom.position = geometry::add(geometry::mat_vec(&r, local), center);
        }
    }

    /// 以质心为中心旋转
    pub fn rotate_about_com(&mut self, angle_deg: f64, axis: Axis) {
        let com = self.center_of_mass();
        self.rotate(angle_deg, axis, com);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Crystal {
        Crystal::molecule(
            "H2O",
            vec![
                Atom::new("O", [0.0, 0.0, 0.119262]),
                Atom::new("H", [0.0, 0.763239, -0.477047]),
                Atom::new("H", [0.0, -0.763239, -0.477047]),
            ],
        )
    }

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_vectors([[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]]);
        assert!((lattice.volume().abs() - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_hexagonal_parameters() {
        let s3 = 3.0_f64.sqrt();
        let lattice =
            Lattice::from_vectors([[3.0, 0.0, 0.0], [-1.5, 1.5 * s3, 0.0], [0.0, 0.0, 5.0]]);
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 3.0).abs() < 1e-6);
        assert!((b - 3.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_frac_cart_conversion() {
        let lattice =
            Lattice::from_vectors([[4.0, 0.0, 0.0], [2.0, 3.0, 0.0], [0.0, 0.0, 10.0]]);
        let cart = lattice.frac_to_cart([0.5, 0.5, 0.25]);
        assert!(geometry::distance(cart, [3.0, 1.5, 2.5]) < 1e-9);

        let frac = lattice.cart_to_frac(cart).unwrap();
        assert!(geometry::distance(frac, [0.5, 0.5, 0.25]) < 1e-9);

        assert!(Lattice::zero().cart_to_frac(cart).is_none());
    }

    #[test]
    fn test_formula_and_composition() {
        let mol = water();
        assert_eq!(mol.formula(), "H2O");
        assert_eq!(mol.composition().get("H"), Some(&2));
    }

    #[test]
    fn test_center_of_mass_is_mass_weighted() {
        let mol = Crystal::molecule(
            "CO",
            vec![
                Atom::new("C", [0.0, 0.0, 0.0]),
                Atom::new("O", [0.0, 0.0, 1.0]),
            ],
        );
        let com = mol.center_of_mass();
        let expected = 15.999 / (12.011 + 15.999);
        assert!((com[2] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_about_com_preserves_com_and_distances() {
        let mut mol = water();
        let com = mol.center_of_mass();
        let d_before = geometry::distance(mol.atoms[0].position, mol.atoms[1].position);

        mol.rotate_about_com(73.0, Axis::Z);
        mol.rotate_about_com(211.0, Axis::Y);
        mol.rotate_about_com(5.0, Axis::X);

        assert!(geometry::distance(mol.center_of_mass(), com) < 1e-9);
        let d_after = geometry::distance(mol.atoms[0].position, mol.atoms[1].position);
        assert!((d_before - d_after).abs() < 1e-9);
    }

    #[test]
    fn test_translate_and_extend() {
        let mut slab = Crystal::new("slab", Lattice::zero(), vec![Atom::new("Pt", [0.0; 3])]);
        let mut mol = water();
        mol.translate([1.0, 2.0, 3.0]);
        assert!((mol.atoms[0].position[1] - 2.0).abs() < 1e-12);

        slab.extend(&mol);
        assert_eq!(slab.len(), 4);
        assert_eq!(slab.formula(), "H2OPt");
    }

    #[test]
    fn test_take_adsorbate_info_removes_key() {
        let mut slab = Crystal::new("slab", Lattice::zero(), vec![]);
        slab.adsorbate_info = Some(SurfaceInfo {
            cell: [[1.0, 0.0], [0.0, 1.0]],
            sites: vec![SurfaceSite {
                name: "ontop",
                offset: [0.0, 0.0],
            }],
            top_layer_z: 0.0,
        });

        let info = slab.take_adsorbate_info();
        assert!(info.is_some());
        assert!(info.unwrap().site("ontop").is_some());
        assert!(slab.take_adsorbate_info().is_none());
    }
}
