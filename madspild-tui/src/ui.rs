use madspild_core::model::{Brand, Clearance, StoreSummary};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header. The affiliation note stays visible on every screen.
    let header = Paragraph::new(
        "madspild – near-expiry clearances · not affiliated with Salling Group",
    )
    .block(Block::default().borders(Borders::ALL).title("Madspild"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::StoreSearch => draw_store_search(frame, app, *content_area),
        Screen::ClearanceView => draw_clearance_view(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::StoreSearch => {
            "Type a postal code · Enter search · ↑/↓ pick store · Tab/→ open clearances · q/Ctrl-C quit"
        }
        Screen::ClearanceView => "r refresh · Esc/←/b back to stores · q/Ctrl-C quit",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text.to_owned())
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_store_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // zip input
            Constraint::Min(0),    // store results
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, results_area] = chunks else {
        return;
    };

    let input = Paragraph::new(app.zip_input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Postal code (Enter to search)"),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(input, *input_area);

    let items = if app.stores.is_empty() {
        vec![ListItem::new(format!(
            "Ingen butikker fundet på post nr: {}",
            app.zip_input
        ))]
    } else {
        app.stores.iter().map(store_list_item).collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Stores (↑/↓, Tab/→ to open clearances)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.stores.is_empty() {
        state.select(Some(app.store_list_index));
    }
    frame.render_stateful_widget(list, *results_area, &mut state);
}

fn store_list_item(store: &StoreSummary) -> ListItem<'static> {
    let tag = format!("[{}]", store.brand.as_str());
    let line = Line::from(vec![
        Span::styled(tag, Style::default().fg(brand_color(store.brand))),
        Span::raw(" "),
        Span::raw(store.short_name().to_owned()),
    ]);
    ListItem::new(line)
}

fn draw_clearance_view(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let store_name = app
        .selected_store
        .as_ref()
        .map_or("<store>", StoreSummary::short_name);

    let title = match app.listing.as_ref() {
        Some(listing) => format!(
            "{store_name} · {}, {} (r to refresh, Esc/←/b to go back)",
            listing.store.address.street, listing.store.address.city
        ),
        None => format!("{store_name} (Esc/←/b to go back)"),
    };

    if app.is_loading && app.listing.is_none() {
        let paragraph = Paragraph::new("Loading clearances…")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let clearances = app
        .listing
        .as_ref()
        .map(|listing| listing.clearances.as_slice())
        .unwrap_or_default();

    if clearances.is_empty() {
        let paragraph = Paragraph::new("No discounted products right now.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = clearances.iter().map(|clearance| {
        let Clearance { offer, product } = clearance;

        let stock = format!("{} {}", offer.stock, stock_unit_label(&offer.stock_unit));
        let expires = expiry_label(offer.end_time);
        let was = format!("{:.2}", offer.original_price);
        let now = format!("{:.2} {}", offer.new_price, offer.currency);
        let discount = format!("-{:.2}", offer.discount);

        Row::new(vec![
            Cell::from(product.description.clone()),
            Cell::from(stock),
            Cell::from(expires),
            Cell::from(Span::styled(was, Style::default().fg(Color::DarkGray))),
            Cell::from(Span::styled(
                now,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(discount, Style::default().fg(Color::Green))),
        ])
    });

    let column_widths = [
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Product", "Stock", "Udløber", "Før", "Nu", "Rabat"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn brand_color(brand: Brand) -> Color {
    match brand {
        Brand::Foetex => Color::Blue,
        Brand::Netto => Color::Yellow,
        Brand::Bilka => Color::Cyan,
    }
}

/// Upstream counts pieces as "each"; show the Danish "stk" instead.
fn stock_unit_label(unit: &str) -> &str {
    if unit == "each" { "stk" } else { unit }
}

fn expiry_label(end: chrono::DateTime<chrono::Utc>) -> String {
    end.format("%d/%m/%Y").to_string()
}
