/// Everything the option popup needs to draw itself
///
/// Mirrors what a host hands an autocomplete widget: the options (or `None`
/// while nothing has loaded), the live and settled input, loading flags and
/// labels. Selection and input changes flow back through
/// [`ListOutcome`](super::ListOutcome) rather than callbacks.
pub struct AutocompleteView<'a, T> {
    pub options: Option<&'a [T]>,
    pub input_value: &'a str,
    /// Settled input; highlighting prefers it over `input_value`
    pub debounced_value: Option<&'a str>,
    pub loading: bool,
    /// `None` shows the indicator whenever `loading`; `Some(false)` hides it
    pub show_loading: Option<bool>,
    pub placeholder: &'a str,
    pub no_options_label: Option<&'a str>,
    pub get_option_label: fn(&T) -> String,
}

pub const DEFAULT_NO_OPTIONS_LABEL: &str = "No options";

impl<T> AutocompleteView<'_, T> {
    /// Text to highlight inside each option label
    pub fn highlight_needle(&self) -> &str {
        self.debounced_value.unwrap_or(self.input_value)
    }

    pub fn loading_visible(&self) -> bool {
        self.show_loading.unwrap_or(true) && self.loading
    }

    /// The empty-results row is shown once results for a non-empty settled
    /// query have loaded and came back empty
    pub fn shows_no_options(&self) -> bool {
        let settled_non_empty = self.debounced_value.is_none_or(|v| !v.is_empty());
        settled_non_empty && self.options.is_some_and(|o| o.is_empty())
    }

    pub fn no_options_label(&self) -> &str {
        self.no_options_label
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_NO_OPTIONS_LABEL)
    }
}
