use slideshow_core::{
    MemoryDeck, Slideshow, SlideshowError, SlideshowOptions, drain,
};
use slideshow_model::{
    EventLabel, EventMetadata, GradientMask, ItemId, LoadingState,
    SlideDirection, SlideshowEvent,
};

fn thumbnail_options(width: f64) -> SlideshowOptions {
    SlideshowOptions {
        show_thumbnails: true,
        thumbnail_width: Some(width),
        ..SlideshowOptions::default()
    }
}

fn deck_with_strip(len: usize, strip_width: f64) -> MemoryDeck {
    let mut deck = MemoryDeck::new(len, 0);
    deck.set_strip_width(Some(strip_width));
    deck
}

#[test]
fn store_changes_are_republished_in_dispatch_order() {
    let mut show =
        Slideshow::new(MemoryDeck::new(3, 0), SlideshowOptions::default())
            .unwrap();
    let mut rx = show.subscribe();

    show.request_move(SlideDirection::Next, None).unwrap();
    show.on_transition_end(ItemId(1)).unwrap();

    assert_eq!(
        drain(&mut rx),
        vec![
            SlideshowEvent::loading_change(LoadingState::Sliding),
            SlideshowEvent::offset_change(1),
            SlideshowEvent::new(EventLabel::SlideNext),
            SlideshowEvent::loading_change(LoadingState::Ready),
            SlideshowEvent::new(EventLabel::ActiveTransitionComplete),
        ]
    );
}

#[test]
fn jump_reports_every_offset_step() {
    let mut show =
        Slideshow::new(MemoryDeck::new(4, 0), SlideshowOptions::default())
            .unwrap();
    let mut rx = show.subscribe();

    show.jump_to(2).unwrap();

    let offsets: Vec<_> = drain(&mut rx)
        .into_iter()
        .filter_map(|event| match event.metadata {
            Some(EventMetadata::Offset(offset))
                if event.label == EventLabel::OffsetChange =>
            {
                Some(offset)
            }
            _ => None,
        })
        .collect();
    assert_eq!(offsets, vec![0, 1, 2]);
}

#[test]
fn wide_thumbnails_in_unmeasured_strip_allow_scrolling_right() {
    let mut show =
        Slideshow::new(MemoryDeck::new(10, 0), thumbnail_options(2_000_000.0))
            .unwrap();

    show.after_view_checked().unwrap();

    let page = show.thumbnail_page().copied().unwrap();
    assert!(page.can_scroll_right);
    assert!(!page.can_scroll_left);
    assert_eq!(show.surface().applied_pages(), &[page]);
}

#[test]
fn empty_deck_cannot_scroll_thumbnails() {
    let mut show =
        Slideshow::new(MemoryDeck::new(0, 0), thumbnail_options(1.0)).unwrap();
    let page = show.initialize_thumbnails().unwrap();
    assert!(!page.can_scroll_right);
}

#[test]
fn after_view_checked_ignores_hidden_thumbnails() {
    let mut show =
        Slideshow::new(MemoryDeck::new(5, 0), SlideshowOptions::default())
            .unwrap();
    show.after_view_checked().unwrap();
    assert!(show.thumbnail_page().is_none());
    assert!(show.surface().applied_pages().is_empty());
}

#[test]
fn thumbnail_paging_requires_a_width() {
    let mut show =
        Slideshow::new(MemoryDeck::new(5, 0), SlideshowOptions::default())
            .unwrap();
    let err = show.move_thumbnail_page(SlideDirection::Next).unwrap_err();
    assert!(matches!(err, SlideshowError::InvalidConfiguration(_)));
}

#[test]
fn thumbnail_pages_move_and_stop_at_edges() {
    let mut show =
        Slideshow::new(deck_with_strip(10, 500.0), thumbnail_options(100.0))
            .unwrap();
    let mut rx = show.subscribe();

    assert_eq!(show.move_thumbnail_page(SlideDirection::Previous), Ok(None));

    let second = show
        .move_thumbnail_page(SlideDirection::Next)
        .unwrap()
        .unwrap();
    assert_eq!(second.current_page, 2);
    assert_eq!(second.left_offset, -400.0);
    assert_eq!(second.mask, Some(GradientMask::Both));

    let third = show
        .move_thumbnail_page(SlideDirection::Next)
        .unwrap()
        .unwrap();
    assert!(!third.can_scroll_right);
    assert_eq!(third.mask, Some(GradientMask::Left));
    assert_eq!(show.move_thumbnail_page(SlideDirection::Next), Ok(None));

    let back = show
        .move_thumbnail_page(SlideDirection::Previous)
        .unwrap()
        .unwrap();
    assert_eq!(back.current_page, 2);
    assert_eq!(back.left_offset, -400.0);

    assert_eq!(
        drain(&mut rx),
        vec![
            SlideshowEvent::with_metadata(
                EventLabel::MoveThumbnailsRight,
                EventMetadata::Thumbnails(second),
            ),
            SlideshowEvent::with_metadata(
                EventLabel::MoveThumbnailsRight,
                EventMetadata::Thumbnails(third),
            ),
            SlideshowEvent::with_metadata(
                EventLabel::MoveThumbnailsLeft,
                EventMetadata::Thumbnails(back),
            ),
        ]
    );
    // Initial layout plus three page moves.
    assert_eq!(show.surface().applied_pages().len(), 4);
}

#[test]
fn view_checks_at_the_last_thumbnail_page_do_not_reopen_the_right_edge() {
    let mut show =
        Slideshow::new(deck_with_strip(10, 500.0), thumbnail_options(100.0))
            .unwrap();
    show.after_view_checked().unwrap();
    while show
        .move_thumbnail_page(SlideDirection::Next)
        .unwrap()
        .is_some()
    {}
    let edge = show.thumbnail_page().copied().unwrap();
    assert_eq!(edge.current_page, 3);
    assert!(!edge.can_scroll_right);

    let mut rx = show.subscribe();
    for _ in 0..3 {
        show.after_view_checked().unwrap();
        assert_eq!(show.move_thumbnail_page(SlideDirection::Next), Ok(None));
    }

    let page = show.thumbnail_page().copied().unwrap();
    assert_eq!(page.current_page, 3);
    assert_eq!(page.left_offset, edge.left_offset);
    assert!(!page.can_scroll_right);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn remeasuring_keeps_the_current_thumbnail_page() {
    let mut show =
        Slideshow::new(deck_with_strip(30, 500.0), thumbnail_options(100.0))
            .unwrap();
    show.after_view_checked().unwrap();
    show.move_thumbnail_page(SlideDirection::Next).unwrap();

    show.surface_mut().set_strip_width(Some(1000.0));
    show.after_view_checked().unwrap();

    let page = show.thumbnail_page().copied().unwrap();
    assert_eq!(page.current_page, 2);
    assert_eq!(page.items_per_page, 10);
    assert_eq!(page.total_pages, 3);
    assert!(page.can_scroll_left);
    assert_eq!(page.mask, None);
}

#[test]
fn dropping_the_widget_closes_the_bus() {
    let show =
        Slideshow::new(MemoryDeck::new(2, 0), SlideshowOptions::default())
            .unwrap();
    let mut rx = show.subscribe();
    drop(show);

    assert!(drain(&mut rx).is_empty());
    assert!(matches!(
        rx.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Closed)
    ));
}
