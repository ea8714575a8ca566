use std::io::Write;

use anyhow::{Context, Result, bail};
use slideshow_core::{
    EventBus, MemoryDeck, Slideshow, SlideshowOptions, drain,
};
use slideshow_model::{ItemId, LoadingState, Offset, SlideshowEvent};
use tokio::sync::broadcast::Receiver;
use tracing::{debug, warn};

use crate::script::ScriptCommand;

/// How a scripted run is set up.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub items: usize,
    pub active: usize,
    pub options: SlideshowOptions,
    /// Stop at the first command that fails instead of reporting it and
    /// carrying on.
    pub strict: bool,
}

/// State of the deck once the script has run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub loading: LoadingState,
    pub offset: Offset,
    pub deck: String,
    pub failures: usize,
}

/// One output line per event: the label, then the metadata as JSON if any.
pub fn format_event(event: &SlideshowEvent) -> Result<String> {
    match &event.metadata {
        None => Ok(event.label.to_string()),
        Some(metadata) => {
            let json = serde_json::to_string(metadata)
                .context("failed to encode event metadata")?;
            Ok(format!("{} {json}", event.label))
        }
    }
}

fn flush_events<W: Write>(
    rx: &mut Receiver<SlideshowEvent>,
    out: &mut W,
) -> Result<()> {
    for event in drain(rx) {
        writeln!(out, "{}", format_event(&event)?)?;
    }
    Ok(())
}

fn execute(
    show: &mut Slideshow<MemoryDeck>,
    command: ScriptCommand,
) -> slideshow_core::Result<()> {
    match command {
        ScriptCommand::Move(direction) => show.request_move(direction, None),
        ScriptCommand::Jump(index) => show.jump_to(index),
        ScriptCommand::Swipe(swipe) => show.on_swipe(swipe),
        ScriptCommand::TransitionEnd(index) => {
            show.on_transition_end(ItemId(index))
        }
        ScriptCommand::Finalize => show.finalize_transition(),
        ScriptCommand::ThumbnailPage(direction) => {
            show.move_thumbnail_page(direction).map(|_| ())
        }
        ScriptCommand::ThumbnailInit => {
            show.initialize_thumbnails().map(|_| ())
        }
        ScriptCommand::StripWidth(width) => {
            show.surface_mut().set_strip_width(Some(width));
            Ok(())
        }
    }
}

/// Drive an in-memory deck through `commands`, writing every emitted event
/// and every failed command to `out`.
pub fn run_script<W: Write>(
    commands: &[ScriptCommand],
    config: RunConfig,
    out: &mut W,
) -> Result<RunReport> {
    if config.items > 0 && config.active >= config.items {
        bail!(
            "active slide {} is outside a deck of {} slides",
            config.active,
            config.items
        );
    }

    let bus = EventBus::new(config.options.event_capacity);
    let mut rx = bus.subscribe();
    let mut show = Slideshow::with_event_bus(
        MemoryDeck::new(config.items, config.active),
        config.options,
        bus,
    )
    .context("invalid slideshow options")?;
    flush_events(&mut rx, out)?;

    let mut failures = 0;
    for &command in commands {
        debug!(%command, "executing");
        let outcome = execute(&mut show, command);
        flush_events(&mut rx, out)?;

        if let Err(err) = outcome {
            if config.strict {
                return Err(err).with_context(|| format!("`{command}` failed"));
            }
            warn!(%command, error = %err, "command failed");
            writeln!(out, "error {command}: {err}")?;
            failures += 1;
        }
    }

    Ok(RunReport {
        loading: show.loading_state(),
        offset: show.offset(),
        deck: show.surface().to_string(),
        failures,
    })
}
