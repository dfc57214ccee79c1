//! # 数据模型模块
//!
//! 定义原子结构数据模型与元素数据。
//!
//! ## 依赖关系
//! - 被 `build/`、`render/`、`writers/`、`commands/` 使用
//! - 子模块: elements, structure

pub mod elements;
pub mod structure;

pub use structure::{Atom, Crystal, Lattice, SurfaceInfo, SurfaceSite};
