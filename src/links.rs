use site_core::SiteConfig;

/// Link kinds accepted in `data-link` attributes.
pub const LINK_KINDS: [&str; 3] = ["whatsapp", "linkedin", "email"];

/// `href` for a `data-link` value, or `None` for unknown kinds.
pub fn link_href(kind: &str, config: &SiteConfig) -> Option<String> {
    match kind.trim() {
        "whatsapp" => Some(config.whatsapp_link()),
        "linkedin" => Some(config.linkedin.clone()),
        "email" => Some(config.mailto_link()),
        _ => None,
    }
}

/// Canvas backing size for a CSS viewport, at least `min` pixels per side.
#[inline]
pub fn backing_size(width: f64, height: f64, min: u32) -> (u32, u32) {
    let w = if width.is_finite() { width.max(0.0) as u32 } else { 0 };
    let h = if height.is_finite() { height.max(0.0) as u32 } else { 0 };
    (w.max(min), h.max(min))
}
