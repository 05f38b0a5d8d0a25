//! # imgtag
//!
//! 校验图片URL、提取和替换HTML片段中 `<img>` 标签 `src` 属性的小型工具库。
//!
//! ## 模块组织
//!
//! - `utils` - 图片URL校验与分类
//! - `parsers` - `<img>` 源地址的提取与替换
//! - `env` - 环境变量配置（命令行工具使用）

pub mod env;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use parsers::*;
pub use utils::*;
