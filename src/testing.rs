//! In-memory [`UiElement`] used by the unit tests.

use crate::{FormError, UiElement};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
struct FakeState {
    value: String,
    attributes: BTreeMap<String, String>,
    content: String,
    checked: bool,
    fail_attributes: bool,
    files: Vec<String>,
    options: Vec<FakeElement>,
    listeners: HashMap<String, Vec<Listener>>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<FakeState>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let el = Self::new();
        el.set_value(value);
        el
    }

    /// A select whose options carry the given values; the first one is selected.
    pub fn select(values: &[&str]) -> Self {
        let el = Self::new();
        {
            let mut state = el.0.borrow_mut();
            state.options = values.iter().map(|v| FakeElement::with_value(v)).collect();
            state.value = values.first().map(|v| v.to_string()).unwrap_or_default();
        }
        el
    }

    pub fn content(&self) -> String {
        self.0.borrow().content.clone()
    }

    pub fn set_checked(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }

    /// Make attribute changes on this element fail like a rejected DOM call.
    pub fn set_fail_attributes(&self, fail: bool) {
        self.0.borrow_mut().fail_attributes = fail;
    }

    fn check_attributes(&self) -> Result<(), FormError> {
        if self.0.borrow().fail_attributes {
            return Err(FormError::Dom("attribute change rejected".to_string()));
        }
        Ok(())
    }

    pub fn select_files(&self, names: &[&str]) {
        self.0.borrow_mut().files = names.iter().map(|n| n.to_string()).collect();
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.0
            .borrow()
            .listeners
            .get(event)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Values of the options without a `disabled` attribute.
    pub fn enabled_options(&self) -> Vec<String> {
        self.options()
            .into_iter()
            .filter(|o| !o.has_attribute("disabled"))
            .map(|o| o.value())
            .collect()
    }

    /// Fire `event`, running every listener registered for it.
    pub fn dispatch(&self, event: &str) {
        // Listeners may touch this element, so run them without holding the borrow.
        let mut listeners = self
            .0
            .borrow_mut()
            .listeners
            .remove(event)
            .unwrap_or_default();
        for listener in listeners.iter_mut() {
            listener();
        }
        let mut state = self.0.borrow_mut();
        let added = state.listeners.remove(event).unwrap_or_default();
        listeners.extend(added);
        state.listeners.insert(event.to_string(), listeners);
    }
}

impl UiElement for FakeElement {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.borrow().attributes.contains_key(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FormError> {
        self.check_attributes()?;
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), FormError> {
        self.check_attributes()?;
        self.0.borrow_mut().attributes.remove(name);
        Ok(())
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().content = text.to_string();
    }

    fn set_inner_html(&self, markup: &str) {
        self.0.borrow_mut().content = markup.to_string();
    }

    fn is_checked(&self) -> bool {
        self.0.borrow().checked
    }

    fn file_names(&self) -> Vec<String> {
        self.0.borrow().files.clone()
    }

    fn options(&self) -> Vec<Self> {
        self.0.borrow().options.clone()
    }

    fn listen(&self, event: &str, handler: Box<dyn FnMut()>) -> Result<(), FormError> {
        self.0
            .borrow_mut()
            .listeners
            .entry(event.to_string())
            .or_default()
            .push(handler);
        Ok(())
    }
}
