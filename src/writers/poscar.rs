//! # VASP POSCAR 格式输出
//!
//! ## POSCAR 格式说明
//! ```text
//! Comment line (structure name)
//! 1.0                    # scaling factor
//! a1 a2 a3               # lattice vector a
//! b1 b2 b3               # lattice vector b
//! c1 c2 c3               # lattice vector c
//! Element1 Element2 ...  # element symbols (VASP 5+)
//! n1 n2 ...              # number of atoms per element
//! Direct                 # coordinate type
//! x1 y1 z1               # atom positions
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `writers/mod.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{Result, SurfigError};
use crate::models::Crystal;

use std::collections::BTreeMap;

/// 将 Crystal 转换为 POSCAR 格式字符串（分数坐标）
pub fn to_poscar_string(crystal: &Crystal) -> Result<String> {
    // 按元素分组，保持首次出现的顺序
    let mut elem_order: Vec<&str> = Vec::new();
    let mut elem_atoms: BTreeMap<&str, Vec<[f64; 3]>> = BTreeMap::new();

    for atom in &crystal.atoms {
        let frac = crystal.lattice.cart_to_frac(atom.position).ok_or_else(|| {
            SurfigError::UnsupportedFormat(format!(
                "POSCAR needs a non-singular cell, '{}' has none",
                crystal.name
            ))
        })?;

        if !elem_order.contains(&atom.element.as_str()) {
            elem_order.push(atom.element.as_str());
        }
        elem_atoms
            .entry(atom.element.as_str())
            .or_default()
            .push(frac);
    }

    let mut result = String::new();

    // Line 0: Comment
    result.push_str(&format!("{}\n", crystal.name));

    // Line 1: Scale
    result.push_str("1.0\n");

    // Lines 2-4: Lattice
    for row in &crystal.lattice.matrix {
        result.push_str(&format!(
            "  {:16.10}  {:16.10}  {:16.10}\n",
            row[0], row[1], row[2]
        ));
    }

    // Line 5: Elements
    result.push_str(&format!("   {}\n", elem_order.join("   ")));

    // Line 6: Counts
    let counts: Vec<String> = elem_order
        .iter()
        .map(|e| elem_atoms.get(e).map(|v| v.len()).unwrap_or(0).to_string())
        .collect();
    result.push_str(&format!("   {}\n", counts.join("   ")));

    result.push_str("Direct\n");

    for elem in &elem_order {
        if let Some(positions) = elem_atoms.get(elem) {
            for pos in positions {
                result.push_str(&format!(
                    "  {:16.10}  {:16.10}  {:16.10}\n",
                    pos[0], pos[1], pos[2]
                ));
            }
        }
    }

    Ok(result)
}
