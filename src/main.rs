//! rickmorty-tui - browse Rick and Morty characters in the terminal
//!
//! Pages come from the public character API; the status filter narrows the
//! page on screen and the light/dark theme choice is remembered between runs.

mod action;
mod app;
mod component;
mod components;
mod config;
mod controller;
mod logging;
mod model;
mod render;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::{
    prefers_dark_scheme, CharacterSource, FetchCompletion, FilePreferenceStore,
    HttpCharacterSource, MemoryPreferenceStore, PreferenceStore,
};
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::MissedTickBehavior;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let log_dir = Config::config_dir();
    if let Err(e) = logging::init(log_dir.as_deref()) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let config = Config::load();
    tracing::info!(api = %config.api_base_url, "configuration loaded");

    let source: Arc<dyn CharacterSource> = Arc::new(
        HttpCharacterSource::new(config.api_base_url.clone(), config.request_timeout())
            .context("failed to build HTTP client")?,
    );
    let preferences: Box<dyn PreferenceStore> = match FilePreferenceStore::open_default() {
        Some(store) => Box::new(store),
        None => {
            tracing::warn!("HOME not set, theme preference will not be saved");
            Box::new(MemoryPreferenceStore::new())
        }
    };

    let mut app = App::new(source, preferences);
    let fetch_rx = app
        .fetch_runner
        .take_receiver()
        .context("fetch receiver already taken")?;

    // Setup terminal
    let mut tui = Tui::new()?;
    tui.enter()?;

    app.init(prefers_dark_scheme());

    // Main event loop
    let result = run_app(&mut tui, &mut app, fetch_rx, config.tick_rate()).await;

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("exiting");
    Ok(())
}

/// Run the main application loop
async fn run_app(
    tui: &mut Tui,
    app: &mut App,
    mut fetch_rx: UnboundedReceiver<FetchCompletion>,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit {
        let palette = app.palette();
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area(), &palette) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        let action = tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key)?
                }
                Some(Ok(Event::Resize(w, h))) => Some(Action::Resize(w, h)),
                Some(Ok(_)) => None,
                Some(Err(e)) => {
                    return Err(anyhow::Error::new(e).context("reading terminal events"))
                }
                None => Some(Action::ForceQuit),
            },
            Some(completion) = fetch_rx.recv() => Some(Action::FetchCompleted(completion)),
            _ = ticker.tick() => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
