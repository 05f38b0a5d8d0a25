//! 图片URL校验工具
//!
//! 纯语法层面的判断，不访问网络，也不检查目标资源是否存在。
//! 判定顺序（先命中者优先）：
//!
//! 1. 空值或缺失 → 无效
//! 2. 以 `data:image/` 开头 → 内联图片（不校验编码内容）
//! 3. 能被解析为绝对URL → 有效
//! 4. 解析失败时回退到相对路径检查：以 `/`、`./` 或 `../` 开头

pub use url::Url;

/// 内联图片数据URL的固定前缀
pub const DATA_IMAGE_PREFIX: &str = "data:image/";

/// 被视为相对路径的前缀
pub const RELATIVE_PATH_PREFIXES: &[&str] = &["/", "./", "../"];

/// 有效图片引用的类别
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageUrlKind {
    /// `data:image/...` 内联图片
    DataUri,
    /// 带协议的绝对URL
    Absolute(Url),
    /// 以 `/`、`./` 或 `../` 开头的相对路径
    RelativePath,
}

impl ImageUrlKind {
    /// 类别的短名称，用于命令行输出
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageUrlKind::DataUri => "data",
            ImageUrlKind::Absolute(_) => "absolute",
            ImageUrlKind::RelativePath => "relative",
        }
    }
}

/// 对图片引用进行分类
///
/// 无效（包括空值和缺失）时返回 `None`。
///
/// # 示例
///
/// ```rust
/// use imgtag::utils::url::{classify_image_url, ImageUrlKind};
///
/// assert_eq!(classify_image_url("data:image/gif;base64,R0lG"), Some(ImageUrlKind::DataUri));
/// assert_eq!(classify_image_url("../a.png"), Some(ImageUrlKind::RelativePath));
/// assert_eq!(classify_image_url("a.png"), None);
/// assert_eq!(classify_image_url(None::<&str>), None);
/// ```
pub fn classify_image_url<'a>(candidate: impl Into<Option<&'a str>>) -> Option<ImageUrlKind> {
    let candidate = candidate.into().filter(|c| !c.is_empty())?;

    if candidate.starts_with(DATA_IMAGE_PREFIX) {
        return Some(ImageUrlKind::DataUri);
    }

    match Url::parse(candidate) {
        Ok(parsed) => Some(ImageUrlKind::Absolute(parsed)),
        Err(err) => {
            tracing::trace!(
                "candidate ({} bytes) is not an absolute URL: {}",
                candidate.len(),
                err
            );
            if is_relative_path(candidate) {
                Some(ImageUrlKind::RelativePath)
            } else {
                None
            }
        }
    }
}

/// 判断字符串是否是可用的图片引用
///
/// ```rust
/// use imgtag::utils::url::is_valid_image_url;
///
/// assert!(is_valid_image_url("https://example.com/a.png"));
/// assert!(is_valid_image_url("./images/a.png"));
/// assert!(!is_valid_image_url("images/a.png"));
/// assert!(!is_valid_image_url(""));
/// ```
pub fn is_valid_image_url<'a>(candidate: impl Into<Option<&'a str>>) -> bool {
    classify_image_url(candidate).is_some()
}

fn is_relative_path(candidate: &str) -> bool {
    RELATIVE_PATH_PREFIXES
        .iter()
        .any(|prefix| candidate.starts_with(prefix))
}
