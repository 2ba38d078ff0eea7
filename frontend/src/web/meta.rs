//! 页面配置读取
//!
//! 从 `<meta name="pulse:NAME" content="...">` 读取配置覆盖值，
//! 交给 `StorefrontConfig::from_lookup` 使用。

/// meta 标签名前缀
const META_PREFIX: &str = "pulse:";

pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}{}\"]", META_PREFIX, name);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}
