//! Browser backend: [`UiElement`] over `web_sys` and the startup sequence.

use crate::availability::AvailabilityMap;
use crate::config::*;
use crate::{FormContext, FormError, UiElement};
use log::{info, warn};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

fn js_error(err: JsValue) -> FormError {
    FormError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// A live DOM element.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(Element);

impl DomElement {
    /// Look up `id` in the current document.
    pub fn by_id(id: &str) -> Result<Self, FormError> {
        gloo_utils::document()
            .get_element_by_id(id)
            .map(DomElement)
            .ok_or_else(|| FormError::MissingElement(id.to_string()))
    }
}

impl UiElement for DomElement {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(option) = self.0.dyn_ref::<HtmlOptionElement>() {
            option.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(option) = self.0.dyn_ref::<HtmlOptionElement>() {
            option.set_value(value);
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FormError> {
        self.0.set_attribute(name, value).map_err(js_error)
    }

    fn remove_attribute(&self, name: &str) -> Result<(), FormError> {
        self.0.remove_attribute(name).map_err(js_error)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }

    fn is_checked(&self) -> bool {
        self.0
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::checked)
            .unwrap_or(false)
    }

    fn file_names(&self) -> Vec<String> {
        let files = self
            .0
            .dyn_ref::<HtmlInputElement>()
            .and_then(HtmlInputElement::files);
        let Some(files) = files else {
            return Vec::new();
        };
        (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|file| file.name())
            .collect()
    }

    fn options(&self) -> Vec<Self> {
        let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() else {
            return Vec::new();
        };
        let options = select.options();
        (0..options.length())
            .filter_map(|i| options.item(i))
            .map(DomElement)
            .collect()
    }

    fn listen(&self, event: &str, mut handler: Box<dyn FnMut()>) -> Result<(), FormError> {
        let closure =
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
        self.0
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // Listeners stay bound for the page's lifetime.
        closure.forget();
        Ok(())
    }
}

impl FormContext<DomElement> {
    /// Resolve every required element from the current document.
    pub fn from_document() -> Result<Self, FormError> {
        Ok(Self {
            interval_range: DomElement::by_id(INTERVAL_RANGE_ID)?,
            interval_display: DomElement::by_id(INTERVAL_DISPLAY_ID)?,
            value_select: DomElement::by_id(VALUE_SELECT_ID)?,
            file_input: DomElement::by_id(FILE_INPUT_ID)?,
            file_list: DomElement::by_id(FILE_LIST_ID)?,
            reset_form: DomElement::by_id(RESET_FORM_ID)?,
            database: DomElement::by_id(DATABASE_SELECT_ID)?,
        })
    }
}

/// Decode the availability global, or fall back to an empty, unrestricted
/// table when the page does not define it.
fn availability_or_default<T>(
    global: Option<T>,
    decode: impl FnOnce(T) -> Result<AvailabilityMap, FormError>,
) -> Result<AvailabilityMap, FormError> {
    match global {
        Some(value) => decode(value),
        None => {
            warn!("window.{} is not defined; all score values stay enabled", AVAILABILITY_GLOBAL);
            Ok(AvailabilityMap::new())
        }
    }
}

/// Read the page's availability table.
pub fn load_availability() -> Result<AvailabilityMap, FormError> {
    let window: JsValue = gloo_utils::window().into();
    let global = js_sys::Reflect::get(&window, &JsValue::from_str(AVAILABILITY_GLOBAL))
        .map_err(js_error)?;
    let global = (!global.is_undefined() && !global.is_null()).then_some(global);
    availability_or_default(global, |value| {
        serde_wasm_bindgen::from_value(value).map_err(|e| FormError::Availability(e.to_string()))
    })
}

/// Install `window.toggleInterval(flag)` for inline page handlers.
pub fn expose_toggle(ctx: &FormContext<DomElement>) -> Result<(), FormError> {
    let ctx = ctx.clone();
    let toggle = Closure::<dyn Fn(JsValue)>::new(move |flag: JsValue| {
        if let Err(e) = ctx.toggle_interval(flag.is_truthy()) {
            log::error!("Interval toggle failed: {}", e);
        }
    });
    let window: JsValue = gloo_utils::window().into();
    js_sys::Reflect::set(&window, &JsValue::from_str(TOGGLE_GLOBAL), toggle.as_ref())
        .map_err(js_error)?;
    toggle.forget();
    Ok(())
}

/// Flag carried by a `data-interval-toggle` attribute; `None` unless it is
/// exactly `"true"` or `"false"`.
fn parse_toggle_flag(attr: Option<&str>) -> Option<bool> {
    match attr {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Bind every element marked with `data-interval-toggle="true|false"`.
pub fn bind_toggle_sources(ctx: &FormContext<DomElement>) -> Result<usize, FormError> {
    let selector = format!("[{}]", TOGGLE_SOURCE_ATTR);
    let nodes = gloo_utils::document()
        .query_selector_all(&selector)
        .map_err(js_error)?;
    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let attr = element.get_attribute(TOGGLE_SOURCE_ATTR);
        let Some(enabled) = parse_toggle_flag(attr.as_deref()) else {
            warn!("Ignoring {}={:?}; expected \"true\" or \"false\"", TOGGLE_SOURCE_ATTR, attr);
            continue;
        };
        ctx.bind_toggle_source(&DomElement(element), enabled)?;
        bound += 1;
    }
    Ok(bound)
}

/// Resolve the form, load the availability table and bind all handlers.
pub fn start() -> Result<FormContext<DomElement>, FormError> {
    let ctx = FormContext::from_document()?;
    let availability = load_availability()?;
    info!("Loaded availability for {} database(s)", availability.len());
    ctx.bind(Rc::new(availability))?;
    expose_toggle(&ctx)?;
    let sources = bind_toggle_sources(&ctx)?;
    if sources > 0 {
        info!("Bound {} interval toggle source(s)", sources);
    }
    Ok(ctx)
}
