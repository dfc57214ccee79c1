//! # 结构构建模块
//!
//! 构建表面 slab、气体分子，并在表面上随机放置吸附物。
//!
//! ## 子模块
//! - `surface`: fcc(111) slab
//! - `molecule`: 气相小分子数据库
//! - `gas`: 随机吸附物放置
//!
//! ## 依赖关系
//! - 被 `commands/figure.rs` 使用
//! - 使用 `models/`

pub mod gas;
pub mod molecule;
pub mod surface;

pub use gas::{add_gas, PlacementConfig, PlacementReport};
pub use surface::{fcc111, SlabConfig};
