use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyEvent;
use reqwest::Url;

use crate::autocomplete::{AutocompleteState, AutocompleteView, ListAction, ListEvent, ListOutcome};
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::drink::{Drink, normalize_drinks};
use crate::fetch::Fetcher;
use crate::input::{InputState, sanitize};

/// Query parameter the lookup service reads the search text from
const QUERY_PARAM: &str = "s";

/// Owns everything between a keystroke and a chosen drink
///
/// Raw input goes through the debouncer; each settled value becomes a lookup
/// key for the fetcher; loaded responses are normalized into the option list
/// the navigator walks. Committing an option fills the input with its label
/// and keeps the full record for the details panel.
pub struct SearchState {
    input: InputState,
    debouncer: Debouncer<String>,
    fetcher: Fetcher,
    endpoint: Url,
    drinks: Option<Vec<Drink>>,
    list: AutocompleteState,
    /// Cleared after a selection so the follow-up lookup runs silently
    show_loading: bool,
    /// `ui.show_loading` from config; false hides the indicator for good
    loading_enabled: bool,
    no_options_label: String,
    selected: Option<Drink>,
}

impl SearchState {
    pub fn new(config: &Config, endpoint: Url, fetcher: Fetcher) -> Self {
        Self {
            input: InputState::new(&config.ui.placeholder),
            debouncer: Debouncer::new(String::new(), config.search.quiet_period()),
            fetcher,
            endpoint,
            drinks: None,
            list: AutocompleteState::new(),
            show_loading: true,
            loading_enabled: config.ui.show_loading,
            no_options_label: config.ui.no_options_label.clone(),
            selected: None,
        }
    }

    /// Route a key press
    ///
    /// List keys (arrows, Enter, Esc) go to the navigator and never reach
    /// the text field. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if let Some(action) = ListAction::from_key(&key) {
            self.handle_list_event(ListEvent::Key(action), now);
            return true;
        }
        if self.input.handle_key(key) {
            self.on_input_changed(now);
            return true;
        }
        false
    }

    /// Apply a navigator event and carry out what it asks of the host
    pub fn handle_list_event(&mut self, event: ListEvent, now: Instant) -> ListOutcome {
        let outcome = self.list.handle(event);
        match outcome {
            ListOutcome::Selected(index) => self.commit(index, now),
            ListOutcome::Dismissed => self.set_query("", now),
            ListOutcome::Unchanged | ListOutcome::Moved(_) | ListOutcome::Hovered(_) => {}
        }
        outcome
    }

    /// Replace the input text as if it had been typed
    pub fn set_query(&mut self, text: &str, now: Instant) {
        self.input.set_text(&sanitize(text));
        self.on_input_changed(now);
    }

    fn on_input_changed(&mut self, now: Instant) {
        self.debouncer.update(self.input.text().to_string(), now);
        self.list.open();
        self.show_loading = true;
    }

    fn commit(&mut self, index: usize, now: Instant) {
        let Some(drink) = self.drinks.as_ref().and_then(|d| d.get(index)).cloned() else {
            return;
        };
        let label = drink.label();
        log::info!("Selected {} ({})", label, drink.id);

        self.input.set_text(&label);
        self.debouncer.update(label, now);
        self.show_loading = false;
        self.selected = Some(drink);
    }

    /// Advance timers and collect lookup results
    pub fn tick(&mut self, now: Instant) {
        if let Some(settled) = self.debouncer.poll(now) {
            let key = self.lookup_key(&settled);
            self.fetcher.fetch(&key);
            self.refresh_options();
        }
        if self.fetcher.poll() {
            self.refresh_options();
        }
    }

    fn refresh_options(&mut self) {
        self.drinks = normalize_drinks(self.fetcher.data());
        self.list
            .sync_options(self.drinks.as_ref().map_or(0, Vec::len));
    }

    /// Size the option list's scroll window to the rows the popup can show
    pub fn fit_list_viewport(&mut self, rows: u16) {
        self.list.set_viewport(rows);
    }

    /// Lookup URL for a settled query; empty when there is nothing to look up
    pub fn lookup_key(&self, settled: &str) -> String {
        if settled.is_empty() {
            return String::new();
        }
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, settled);
        url.into()
    }

    /// Time until the debouncer wants to run again
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Everything the option popup renders from
    pub fn view(&self) -> AutocompleteView<'_, Drink> {
        AutocompleteView {
            options: self.drinks.as_deref(),
            input_value: self.input.text(),
            debounced_value: Some(self.debouncer.settled().as_str()),
            loading: self.fetcher.is_loading(),
            show_loading: Some(self.loading_enabled && self.show_loading),
            placeholder: self.input.placeholder(),
            no_options_label: Some(self.no_options_label.as_str()),
            get_option_label: Drink::label,
        }
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn settled_query(&self) -> &str {
        self.debouncer.settled()
    }

    pub fn list(&self) -> &AutocompleteState {
        &self.list
    }

    pub fn drinks(&self) -> Option<&[Drink]> {
        self.drinks.as_deref()
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Last lookup failure, if the current key failed
    pub fn error(&self) -> Option<&str> {
        self.fetcher.error()
    }

    pub fn selected_drink(&self) -> Option<&Drink> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
