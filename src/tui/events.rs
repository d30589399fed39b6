use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::{Stream, StreamExt};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use reqwest::Client;
use std::io;
use tokio::sync::mpsc;

use crate::config::ProxyConfig;
use crate::tui::api::{proxy_client, spawn_apply};
use crate::tui::draw::draw;
use crate::tui::providers::Provider;
use crate::tui::state::{Action, App, ApplyDone, Effect};

// ── Entry point ───────────────────────────────────────────────────────────────

pub async fn run(providers: Vec<Provider>, proxy: ProxyConfig) -> Result<()> {
    let client = proxy_client()?;

    enable_raw_mode()?;
    let result = run_in_terminal(providers, &client, &proxy).await;
    restore_terminal();
    result
}

async fn run_in_terminal(providers: Vec<Provider>, client: &Client, proxy: &ProxyConfig) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(providers);
    event_loop(&mut terminal, &mut app, client, proxy, EventStream::new()).await
}

/// Undo raw mode and the alternate screen. Each step runs even if an earlier one failed.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

// ── Event loop ────────────────────────────────────────────────────────────────

/// Redraw, then wait for either an Apply-Config completion or a terminal event.
/// Returns on quit or when `events` ends.
pub async fn event_loop<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: &Client,
    proxy: &ProxyConfig,
    mut events: S,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    // Apply-Config completions: sender cloned into each spawned request, receiver polled here
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<ApplyDone>();

    loop {
        terminal.draw(|f| draw(f, app))?;

        tokio::select! {
            // completions first, so a result already delivered is shown before a queued quit
            biased;

            Some(done) = done_rx.recv() => {
                app.complete(done);
            }

            maybe_event = events.next() => {
                let event = match maybe_event {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                };
                let Event::Key(key) = event else { continue };
                let Some(action) = Action::from_key(key) else { continue };
                match app.update(action) {
                    Some(Effect::Quit) => return Ok(()),
                    Some(Effect::Apply(req)) => {
                        spawn_apply(client.clone(), proxy.clone(), req, done_tx.clone());
                    }
                    None => {}
                }
            }
        }
    }
}
