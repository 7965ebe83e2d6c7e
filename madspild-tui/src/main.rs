//! Terminal UI that lets users find Salling Group stores by postal code and
//! browse their discounted near-expiry products.

mod app;
mod input;
mod ui;

use std::{env, io, sync::Arc, time::Duration as StdDuration, time::Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use madspild_core::{StoreQuery, model::StoreId, service::MadspildService};
use madspild_provider_salling as salling;
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;

use crate::app::{App, Screen};
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    // Credential + HTTP + service setup
    let api_key = env::var("SALLING_KEY")
        .context("SALLING_KEY must be set to a Salling Group API credential")?;

    let client = Client::builder().user_agent("madspild/0.1").build()?;

    let service = Arc::new(MadspildService::new(salling::plugin(client, api_key)));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Re-fetch the open listing once it goes stale; prices and stock
        // change constantly while a store sells through its clearances.
        if matches!(app.screen, Screen::ClearanceView)
            && !app.is_loading
            && app.listing.is_some()
            && app.listing_is_stale()
            && let Some(store_id) = app.selected_store.as_ref().map(|store| store.id.clone())
        {
            load_listing(terminal, &mut app, &store_id).await?;
            continue;
        }

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::SearchStores => {
                    let zip_text = app.zip_input.trim();
                    if zip_text.is_empty() {
                        app.error_message =
                            Some("Type a postal code, then press Enter".into());
                        continue;
                    }

                    let query = StoreQuery::new(Some(zip_text));

                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.stores(&query).await;

                    app.is_loading = false;
                    match res {
                        Ok(Some(stores)) => {
                            app.stores = stores;
                            app.store_list_index = 0;
                            app.selected_store = None;
                        }
                        // Blank input never reaches the service, but keep the
                        // contract visible: no query performed, no results.
                        Ok(None) => {
                            app.stores.clear();
                            app.store_list_index = 0;
                        }
                        Err(err) => {
                            app.error_message = Some(format!("Search failed: {err}"));
                        }
                    }
                }
                Action::LoadClearancesForCurrentStore => {
                    let store = match app.screen {
                        Screen::StoreSearch => app.select_current_store(),
                        Screen::ClearanceView => app.selected_store.clone(),
                    };

                    let Some(store) = store else {
                        app.error_message =
                            Some("No store selected (search and pick one first)".into());
                        continue;
                    };

                    load_listing(terminal, &mut app, &store.id).await?;
                }
            }
        }
    }

    Ok(())
}

async fn load_listing(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store_id: &StoreId,
) -> Result<()> {
    app.is_loading = true;
    app.error_message = None;
    terminal.draw(|frame| ui::draw(frame, app))?;

    let res = app.service.food_waste_info(Some(store_id)).await;

    app.is_loading = false;
    match res {
        Ok(Some(listing)) => {
            app.listing = Some(listing);
            app.last_refresh = Some(Instant::now());
        }
        Ok(None) => {}
        Err(err) => {
            app.listing = None;
            app.error_message = Some(format!("Failed to load clearances: {err}"));
        }
    }

    Ok(())
}
