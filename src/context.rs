//! The set of form elements the handlers operate on, resolved once at startup.

use crate::availability::AvailabilityMap;
use crate::handlers::{
    clear_file_list, filter_scores, mirror_interval, render_file_list, toggle_interval,
};
use crate::{FormError, UiElement};
use log::{debug, error, info};
use std::rc::Rc;

/// Handles to every element the form wiring needs.
#[derive(Clone)]
pub struct FormContext<E: UiElement> {
    pub interval_range: E,
    pub interval_display: E,
    /// Score-value select; also receives the forced "Publication year" value.
    pub value_select: E,
    pub file_input: E,
    pub file_list: E,
    pub reset_form: E,
    pub database: E,
}

/// Log a handler failure instead of letting it escape into the event loop.
fn report(action: &str, result: Result<(), FormError>) {
    if let Err(e) = result {
        error!("{} failed: {}", action, e);
    }
}

impl<E: UiElement> FormContext<E> {
    /// Register every listener. Availability is read-only from here on.
    pub fn bind(&self, availability: Rc<AvailabilityMap>) -> Result<(), FormError> {
        for event in ["input", "change"] {
            let range = self.interval_range.clone();
            let display = self.interval_display.clone();
            self.interval_range
                .listen(event, Box::new(move || mirror_interval(&range, &display)))?;
        }

        {
            let input = self.file_input.clone();
            let container = self.file_list.clone();
            self.file_input
                .listen("change", Box::new(move || render_file_list(&input, &container)))?;
        }

        {
            let container = self.file_list.clone();
            self.reset_form
                .listen("click", Box::new(move || clear_file_list(&container)))?;
        }

        {
            let database = self.database.clone();
            let scores = self.value_select.clone();
            self.database.listen(
                "change",
                Box::new(move || {
                    debug!("Database changed to '{}'", database.value());
                    report("Score filter", filter_scores(&database, &scores, &availability));
                }),
            )?;
        }

        info!("Form handlers bound");
        Ok(())
    }

    pub fn toggle_interval(&self, enabled: bool) -> Result<(), FormError> {
        toggle_interval(&self.interval_range, &self.value_select, enabled)
    }

    /// Apply `toggle_interval(enabled)` whenever `source` becomes checked.
    pub fn bind_toggle_source(&self, source: &E, enabled: bool) -> Result<(), FormError> {
        for event in ["change", "click"] {
            let ctx = self.clone();
            let radio = source.clone();
            source.listen(
                event,
                Box::new(move || {
                    if radio.is_checked() {
                        report("Interval toggle", ctx.toggle_interval(enabled));
                    }
                }),
            )?;
        }
        Ok(())
    }
}
