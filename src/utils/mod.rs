//! # 工具函数模块
//!
//! 提供美化输出、进度条与三维几何运算。
//!
//! ## 依赖关系
//! - 被 `commands/`、`build/`、`render/` 模块使用
//! - 子模块: geometry, output, progress

pub mod geometry;
pub mod output;
pub mod progress;
