//! `<img>` 标签源地址处理
//!
//! 基于正则的文本扫描，不是HTML解析器：单引号属性、无引号属性、
//! 属性值内部出现的 `>` 以及畸形或嵌套标记都不在处理范围内。
//!
//! 所有函数都是全函数：空值或缺失输入返回空序列或原始字符串，从不报错。

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// `<img` + 非 `>` 字符 + `src="..."` + 非 `>` 字符 + `>`
pub const IMG_SRC_PATTERN: &str = r#"<img[^>]+src="([^"]+)"[^>]*>"#;

fn img_src_regex() -> Option<&'static Regex> {
    static IMG_SRC_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

    IMG_SRC_REGEX
        .get_or_init(|| match Regex::new(IMG_SRC_PATTERN) {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::error!("failed to compile <img> pattern: {}", err);
                None
            }
        })
        .as_ref()
}

/// 按文档顺序遍历所有 `<img>` 的 `src` 值，直接借用输入
///
/// ```rust
/// use imgtag::parsers::img::image_sources;
///
/// let html = r#"<img src="a.png"><img src="b.png">"#;
/// assert_eq!(image_sources(html).collect::<Vec<_>>(), vec!["a.png", "b.png"]);
/// ```
pub fn image_sources(html: &str) -> impl Iterator<Item = &str> + '_ {
    img_src_regex().into_iter().flat_map(move |re| {
        re.captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    })
}

/// 提取HTML片段中所有 `<img>` 标签的 `src` 属性值
///
/// 保持出现顺序，保留重复项。空值或缺失输入返回空向量。
///
/// # 示例
///
/// ```rust
/// use imgtag::parsers::img::extract_image_sources;
///
/// let html = r#"<p>x</p><img alt="a" src="one.png"><img src="two.png" class="b">"#;
/// assert_eq!(extract_image_sources(html), vec!["one.png", "two.png"]);
/// assert!(extract_image_sources(None::<&str>).is_empty());
/// ```
pub fn extract_image_sources<'a>(html: impl Into<Option<&'a str>>) -> Vec<String> {
    match html.into() {
        Some(html) if !html.is_empty() => image_sources(html).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// 将所有 `src="<old>"` 替换为 `src="<new>"`
///
/// `old` 按字面量匹配（正则特殊字符没有特殊含义，长度不受限制），`new` 原样插入，
/// 不做 `$` 展开也不做编码，调用方需保证它已是安全的属性值。
/// 任一参数为空或缺失时原样返回片段；没有发生替换时返回借用的输入。
///
/// # 示例
///
/// ```rust
/// use imgtag::parsers::img::replace_image_source;
///
/// let html = r#"<img src="a.png"><img src="a.png">"#;
/// assert_eq!(
///     replace_image_source(html, "a.png", "b.png"),
///     r#"<img src="b.png"><img src="b.png">"#
/// );
/// assert_eq!(replace_image_source(html, "a.png", ""), html);
/// ```
pub fn replace_image_source<'h, 'o, 'n>(
    html: impl Into<Option<&'h str>>,
    old_src: impl Into<Option<&'o str>>,
    new_src: impl Into<Option<&'n str>>,
) -> Cow<'h, str> {
    let html = html.into().unwrap_or_default();

    let (old_src, new_src) = match (old_src.into(), new_src.into()) {
        (Some(old), Some(new)) if !html.is_empty() && !old.is_empty() && !new.is_empty() => {
            (old, new)
        }
        _ => return Cow::Borrowed(html),
    };

    let needle = format!(r#"src="{}""#, old_src);
    if !html.contains(&needle) {
        return Cow::Borrowed(html);
    }

    tracing::debug!(
        "replacing image source ({} bytes) with new source ({} bytes)",
        old_src.len(),
        new_src.len()
    );

    Cow::Owned(html.replace(&needle, &format!(r#"src="{}""#, new_src)))
}
