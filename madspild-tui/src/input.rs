use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.stores`(...) for the typed postal code
    SearchStores,
    /// Run `service.food_waste_info`(...) for the currently selected store
    LoadClearancesForCurrentStore,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::StoreSearch => match key.code {
            Up => {
                if app.store_list_index > 0 {
                    app.store_list_index -= 1;
                }
            }
            Down => {
                if app.store_list_index + 1 < app.stores.len() {
                    app.store_list_index += 1;
                }
            }
            Char(character) => {
                // Danish postal codes are all digits; skip everything else.
                if character.is_ascii_digit() && !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.zip_input.push(character);
                }
            }
            Backspace => {
                app.zip_input.pop();
            }
            Enter => {
                action = Action::SearchStores;
            }
            Right | Tab => {
                action = Action::LoadClearancesForCurrentStore;
            }
            Esc => {
                app.stores.clear();
                app.store_list_index = 0;
                app.error_message = None;
            }
            _ => {}
        },

        Screen::ClearanceView => match key.code {
            Left | Esc | Char('b') => {
                app.screen = Screen::StoreSearch;
                app.listing = None;
                app.last_refresh = None;
            }
            Char('r') => {
                action = Action::LoadClearancesForCurrentStore;
            }
            _ => {}
        },
    }
    action
}
