//! # 结构渲染模块
//!
//! 将原子结构渲染为图像。
//!
//! ## 子模块
//! - `scene`: 视角旋转与正交投影
//! - `png`: PNG 输出
//!
//! ## 依赖关系
//! - 被 `commands/figure.rs` 使用
//! - 使用 `models/`

pub mod png;
pub mod scene;

pub use png::render_png;
pub use scene::{RenderOptions, Scene};
