//! # 工具模块
//!
//! - `url` - 图片URL校验与分类

pub mod url;

// Re-export commonly used items for convenience
pub use url::{
    classify_image_url, is_valid_image_url, ImageUrlKind, Url, DATA_IMAGE_PREFIX,
    RELATIVE_PATH_PREFIXES,
};
