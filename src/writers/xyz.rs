//! # 扩展 XYZ 格式输出
//!
//! 第二行写入晶胞与周期性，便于其他可视化软件恢复 slab 晶胞。
//!
//! ## 依赖关系
//! - 被 `writers/mod.rs` 使用
//! - 使用 `models/structure.rs`

use crate::models::Crystal;

/// 转换为扩展 XYZ 格式
pub fn to_xyz_string(crystal: &Crystal) -> String {
    let mut result = String::new();
    result.push_str(&format!("{}\n", crystal.atoms.len()));

    let lattice = crystal
        .lattice
        .matrix
        .iter()
        .flat_map(|row| row.iter())
        .map(|v| format!("{:.8}", v))
        .collect::<Vec<_>>()
        .join(" ");
    let pbc = crystal
        .pbc
        .iter()
        .map(|&p| if p { "T" } else { "F" })
        .collect::<Vec<_>>()
        .join(" ");
    result.push_str(&format!(
        "Lattice=\"{}\" Properties=species:S:1:pos:R:3 pbc=\"{}\" name={}\n",
        lattice, pbc, crystal.name
    ));

    for atom in &crystal.atoms {
        result.push_str(&format!(
            "{:<2} {:16.10} {:16.10} {:16.10}\n",
            atom.element, atom.position[0], atom.position[1], atom.position[2]
        ));
    }

    result
}
