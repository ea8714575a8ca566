/// Which edges of the thumbnail strip fade out to hint at hidden content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GradientMask {
    Left,
    Right,
    Both,
}

/// Snapshot of the thumbnail strip after initialization or a page move.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThumbnailPage {
    /// 1-based page index.
    pub current_page: u32,
    /// Signed horizontal distance the strip has been scrolled.
    pub left_offset: f64,
    pub items_per_page: usize,
    pub total_pages: u32,
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    /// Unset until the first page move.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub mask: Option<GradientMask>,
}
