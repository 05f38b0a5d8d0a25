//! # 解析器模块
//!
//! - `img` - `<img>` 标签源地址的提取与替换

pub mod img;

// Re-export commonly used items for convenience
pub use img::{extract_image_sources, image_sources, replace_image_source, IMG_SRC_PATTERN};
