//! Thumbnail strip paging.
//!
//! Everything here is derived from three measurements: the width of the strip
//! container, the width of one thumbnail and the number of thumbnails.
//!
//! ```text
//! items_per_page = max(1, ceil(container_width / item_width))
//! total_pages    = round(item_count / items_per_page)
//! step           = (pre_scrolled_pages + 1) * items_per_page * item_width
//!                  - item_width
//! ```
//!
//! `total_pages` rounds rather than taking the ceiling, so with some width
//! ratios the last page is never reached and the right scroll affordance turns
//! off one page early. Each step holds one thumbnail back so the last thumbnail
//! of a page stays visible as the first one of the next.

use slideshow_model::{GradientMask, SlideDirection, ThumbnailPage};
use tracing::{debug, trace};

use crate::error::{Result, SlideshowError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailPaginator {
    container_width: f64,
    item_width: f64,
    item_count: usize,
    pre_scrolled_pages: u32,
}

impl ThumbnailPaginator {
    /// Fails when `item_width` is missing or not a positive finite number.
    ///
    /// A non-finite or negative container width is treated as unmeasured (0).
    pub fn new(
        container_width: f64,
        item_width: Option<f64>,
        item_count: usize,
    ) -> Result<Self> {
        let item_width = match item_width {
            Some(width) if width.is_finite() && width > 0.0 => width,
            Some(width) => {
                return Err(SlideshowError::InvalidConfiguration(format!(
                    "thumbnail width must be a positive number, got {width}"
                )));
            }
            None => {
                return Err(SlideshowError::InvalidConfiguration(
                    "thumbnail width is required for thumbnail paging".into(),
                ));
            }
        };

        let container_width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };

        Ok(Self {
            container_width,
            item_width,
            item_count,
            pre_scrolled_pages: 0,
        })
    }

    pub fn with_pre_scrolled_pages(mut self, pages: u32) -> Self {
        self.pre_scrolled_pages = pages;
        self
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_per_page(&self) -> usize {
        let fit = (self.container_width / self.item_width).ceil();
        // Saturating float-to-int cast; fit is finite and non-negative here.
        (fit as usize).max(1)
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.item_count as f64 / self.items_per_page() as f64;
        pages.round() as u32
    }

    /// Distance the strip scrolls for one page move.
    pub fn step(&self) -> f64 {
        let pages = f64::from(self.pre_scrolled_pages) + 1.0;
        pages * self.items_per_page() as f64 * self.item_width
            - self.item_width
    }

    /// Layout of a freshly measured strip on page 1.
    pub fn initialize(&self) -> ThumbnailPage {
        self.layout_at(1, 0.0)
    }

    /// Layout for a strip already scrolled to `current_page`, before any
    /// further paging. On page 1 right scrolling is allowed only when the
    /// thumbnails do not all fit in one page; past it the same edge rule as
    /// [`Self::paginate`] applies.
    pub fn layout_at(
        &self,
        current_page: u32,
        left_offset: f64,
    ) -> ThumbnailPage {
        let items_per_page = self.items_per_page();
        let current_page = current_page.max(1);
        let total_pages = self.total_pages();
        let can_scroll_right = if current_page == 1 {
            self.item_count > items_per_page
        } else {
            current_page <= total_pages
        };
        let page = ThumbnailPage {
            current_page,
            left_offset,
            items_per_page,
            total_pages,
            can_scroll_left: current_page > 1,
            can_scroll_right,
            mask: None,
        };
        debug!(
            items_per_page,
            total_pages = page.total_pages,
            can_scroll_right = page.can_scroll_right,
            "thumbnail strip initialized"
        );
        page
    }

    /// Move one page in `direction` from `current_page`.
    ///
    /// Boundary checks are the caller's; this only computes where the strip
    /// ends up.
    pub fn paginate(
        &self,
        current_page: u32,
        left_offset: f64,
        direction: SlideDirection,
    ) -> ThumbnailPage {
        let step = self.step();
        let (new_page, new_left) = match direction {
            SlideDirection::Next => {
                (current_page.saturating_add(1), left_offset - step)
            }
            SlideDirection::Previous => {
                (current_page.saturating_sub(1), left_offset + step)
            }
        };
        let total_pages = self.total_pages();

        let mask = if new_page > total_pages {
            GradientMask::Left
        } else if new_page == 1 {
            GradientMask::Right
        } else {
            GradientMask::Both
        };

        trace!(new_page, new_left, total_pages, ?mask, "paginate");
        ThumbnailPage {
            current_page: new_page,
            left_offset: new_left,
            items_per_page: self.items_per_page(),
            total_pages,
            can_scroll_left: new_page > 1,
            can_scroll_right: new_page <= total_pages,
            mask: Some(mask),
        }
    }
}

/// Paging state of one thumbnail strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailStrip {
    paginator: ThumbnailPaginator,
    page: ThumbnailPage,
}

impl ThumbnailStrip {
    pub fn new(paginator: ThumbnailPaginator) -> Self {
        let page = paginator.initialize();
        Self { paginator, page }
    }

    pub fn paginator(&self) -> &ThumbnailPaginator {
        &self.paginator
    }

    pub fn page(&self) -> &ThumbnailPage {
        &self.page
    }

    /// Re-measure the strip. The current page and scroll distance are kept.
    pub fn reinitialize(
        &mut self,
        paginator: ThumbnailPaginator,
    ) -> &ThumbnailPage {
        self.page =
            paginator.layout_at(self.page.current_page, self.page.left_offset);
        self.paginator = paginator;
        &self.page
    }

    /// Page in `direction`. Returns `None` without changing anything when the
    /// strip is already at that edge.
    pub fn move_page(
        &mut self,
        direction: SlideDirection,
    ) -> Option<&ThumbnailPage> {
        let blocked = match direction {
            SlideDirection::Next => !self.page.can_scroll_right,
            SlideDirection::Previous => self.page.current_page <= 1,
        };
        if blocked {
            debug!(
                %direction,
                page = self.page.current_page,
                "thumbnail strip at edge"
            );
            return None;
        }

        self.page = self.paginator.paginate(
            self.page.current_page,
            self.page.left_offset,
            direction,
        );
        Some(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(
        container: f64,
        item: f64,
        count: usize,
    ) -> ThumbnailPaginator {
        ThumbnailPaginator::new(container, Some(item), count).unwrap()
    }

    #[test]
    fn missing_or_bad_width_is_invalid_configuration() {
        for width in [None, Some(0.0), Some(-3.0), Some(f64::NAN)] {
            assert!(matches!(
                ThumbnailPaginator::new(500.0, width, 10),
                Err(SlideshowError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn wide_thumbnails_in_unmeasured_container_can_scroll_right() {
        let page = paginator(0.0, 2_000_000.0, 10).initialize();
        assert_eq!(page.items_per_page, 1);
        assert!(page.can_scroll_right);
        assert!(!page.can_scroll_left);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.mask, None);
    }

    #[test]
    fn empty_strip_cannot_scroll_right() {
        let page = paginator(0.0, 1.0, 0).initialize();
        assert!(!page.can_scroll_right);
    }

    #[test]
    fn geometry() {
        let p = paginator(450.0, 100.0, 23);
        assert_eq!(p.items_per_page(), 5);
        // 23 / 5 = 4.6 rounds up
        assert_eq!(p.total_pages(), 5);
        assert_eq!(p.step(), 400.0);

        // 22 / 5 = 4.4 rounds down: the fifth page is unreachable
        assert_eq!(paginator(450.0, 100.0, 22).total_pages(), 4);

        let pre = paginator(450.0, 100.0, 23).with_pre_scrolled_pages(1);
        assert_eq!(pre.step(), 900.0);
    }

    #[test]
    fn paging_moves_offset_and_page_together() {
        let p = paginator(500.0, 100.0, 20);

        let second = p.paginate(1, 0.0, SlideDirection::Next);
        assert_eq!(second.current_page, 2);
        assert_eq!(second.left_offset, -400.0);
        assert!(second.can_scroll_left);
        assert!(second.can_scroll_right);
        assert_eq!(second.mask, Some(GradientMask::Both));

        let back = p.paginate(2, -400.0, SlideDirection::Previous);
        assert_eq!(back.current_page, 1);
        assert_eq!(back.left_offset, 0.0);
        assert!(!back.can_scroll_left);
        assert_eq!(back.mask, Some(GradientMask::Right));

        let past = p.paginate(4, -1200.0, SlideDirection::Next);
        assert_eq!(past.current_page, 5);
        assert!(!past.can_scroll_right);
        assert_eq!(past.mask, Some(GradientMask::Left));
    }

    #[test]
    fn strip_stops_at_both_edges() {
        let mut strip = ThumbnailStrip::new(paginator(500.0, 100.0, 10));
        assert!(strip.move_page(SlideDirection::Previous).is_none());

        // total_pages = 2
        assert_eq!(
            strip.move_page(SlideDirection::Next).map(|p| p.current_page),
            Some(2)
        );
        assert_eq!(
            strip.move_page(SlideDirection::Next).map(|p| p.current_page),
            Some(3)
        );
        assert!(!strip.page().can_scroll_right);
        assert!(strip.move_page(SlideDirection::Next).is_none());
        assert_eq!(strip.page().current_page, 3);
    }

    #[test]
    fn remeasure_past_the_last_page_keeps_the_right_edge_closed() {
        let p = paginator(500.0, 100.0, 10);
        let edge = p.layout_at(3, -800.0);
        assert!(!edge.can_scroll_right);
        assert!(edge.can_scroll_left);

        let middle = p.layout_at(2, -400.0);
        assert!(middle.can_scroll_right);

        let mut strip = ThumbnailStrip::new(p);
        while strip.move_page(SlideDirection::Next).is_some() {}
        strip.reinitialize(p);
        assert_eq!(strip.page().current_page, 3);
        assert!(strip.move_page(SlideDirection::Next).is_none());
    }

    #[test]
    fn reinitialize_keeps_position() {
        let mut strip = ThumbnailStrip::new(paginator(500.0, 100.0, 30));
        strip.move_page(SlideDirection::Next);

        let page = *strip.reinitialize(paginator(1000.0, 100.0, 30));
        assert_eq!(page.current_page, 2);
        assert_eq!(page.left_offset, -400.0);
        assert_eq!(page.items_per_page, 10);
        assert!(page.can_scroll_left);
        assert!(page.can_scroll_right);
    }
}
