//! Event handlers for the form widgets.
//!
//! Each handler is a stateless function of the current element state (plus the
//! availability table for the score filter), so re-running one with unchanged
//! inputs leaves the page unchanged.

use crate::availability::AvailabilityMap;
use crate::config::{DISABLED_ATTR, PUBLICATION_YEAR_VALUE};
use crate::{FormError, UiElement};
use log::debug;

/// Copy the slider's current value verbatim into its display element.
pub fn mirror_interval<E: UiElement>(range: &E, display: &E) {
    display.set_text(&range.value());
}

/// Enable or disable the interval slider.
///
/// Enabling also switches the score select to "Publication year"; disabling
/// leaves the select untouched.
pub fn toggle_interval<E: UiElement>(
    range: &E,
    select: &E,
    enabled: bool,
) -> Result<(), FormError> {
    if enabled {
        range.remove_attribute(DISABLED_ATTR)?;
        select.set_value(PUBLICATION_YEAR_VALUE);
    } else {
        range.set_attribute(DISABLED_ATTR, "")?;
    }
    Ok(())
}

/// Build `<ul>` markup with one `<li>` per file name, in order.
pub fn file_list_markup<S: AsRef<str>>(names: &[S]) -> String {
    let mut markup = String::from("<ul>");
    for name in names {
        markup.push_str("<li>");
        push_escaped(&mut markup, name.as_ref());
        markup.push_str("</li>");
    }
    markup.push_str("</ul>");
    markup
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Replace the container's content with the names currently selected in `input`.
pub fn render_file_list<E: UiElement>(input: &E, container: &E) {
    let names = input.file_names();
    debug!("Listing {} selected file(s)", names.len());
    container.set_inner_html(&file_list_markup(&names));
}

/// Empty the file list container. The input's own selection is left to the
/// browser's native form reset.
pub fn clear_file_list<E: UiElement>(container: &E) {
    container.set_inner_html("");
}

/// Enable exactly the score options permitted for the selected database.
///
/// The lookup key is the database selector's value at the time of the call.
pub fn filter_scores<E: UiElement>(
    database: &E,
    scores: &E,
    availability: &AvailabilityMap,
) -> Result<(), FormError> {
    let key = database.value();
    if availability.allowed(&key).is_none() {
        debug!("No availability entry for database '{}'; enabling all scores", key);
    }
    // A rejected option must not leave the remaining ones stale.
    let mut first_error = None;
    for option in scores.options() {
        let result = if availability.permits(&key, &option.value()) {
            option.remove_attribute(DISABLED_ATTR)
        } else {
            option.set_attribute(DISABLED_ATTR, "")
        };
        if let Err(e) = result {
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}
