//! # 结构文件输出模块
//!
//! 将最终结构导出为常见结构文件格式，便于后续计算使用。
//!
//! ## 依赖关系
//! - 被 `commands/figure.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: poscar, xyz

pub mod poscar;
pub mod xyz;

use crate::error::{Result, SurfigError};
use crate::models::Crystal;
use std::fs;
use std::path::Path;

/// 结构文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Xyz,
    Poscar,
}

impl std::fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructureFormat::Xyz => write!(f, "xyz"),
            StructureFormat::Poscar => write!(f, "poscar"),
        }
    }
}

/// 从文件路径推断格式
pub fn detect_format(path: &Path) -> Result<StructureFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xyz" | "extxyz" => Ok(StructureFormat::Xyz),
        "vasp" | "poscar" => Ok(StructureFormat::Poscar),
        _ => {
            // POSCAR/CONTCAR (无扩展名)
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with("POSCAR") || name.starts_with("CONTCAR") {
                    return Ok(StructureFormat::Poscar);
                }
            }
            Err(SurfigError::UnsupportedFormat(format!(
                "Cannot determine format for: {}",
                path.display()
            )))
        }
    }
}

/// 写出结构文件，返回所用格式
pub fn write_structure(crystal: &Crystal, path: &Path) -> Result<StructureFormat> {
    let format = detect_format(path)?;

    let content = match format {
        StructureFormat::Xyz => xyz::to_xyz_string(crystal),
        StructureFormat::Poscar => poscar::to_poscar_string(crystal)?,
    };

    fs::write(path, content).map_err(|e| SurfigError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(format)
}
