//! # 统一错误处理模块
//!
//! 定义 surfig 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// surfig 统一错误类型
#[derive(Error, Debug)]
pub enum SurfigError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 元素 / 结构错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("No reference fcc lattice constant for {symbol}; pass --lattice-constant")]
    NoLatticeConstant { symbol: String },

    #[error("Invalid slab geometry: {0}")]
    InvalidGeometry(String),

    #[error("Unsupported structure format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Usage(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid rotation string '{input}': {reason}")]
    InvalidRotation { input: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 渲染错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to render image {path}: {reason}")]
    RenderError { path: String, reason: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SurfigError>;
