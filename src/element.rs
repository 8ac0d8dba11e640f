//! Capability interface for the widgets the form handlers touch.

use crate::FormError;

/// An element that can be read, mutated and observed.
///
/// Implemented by [`crate::dom::DomElement`] for the browser. Cloning must be
/// cheap and yield a handle to the same underlying element.
pub trait UiElement: Clone + 'static {
    /// Current value of an input, select or option. Empty for other elements.
    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    fn has_attribute(&self, name: &str) -> bool;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FormError>;

    fn remove_attribute(&self, name: &str) -> Result<(), FormError>;

    /// Replace the element's content with plain text.
    fn set_text(&self, text: &str);

    /// Replace the element's content with markup.
    fn set_inner_html(&self, markup: &str);

    /// Checked state of a checkbox or radio; `false` for anything else.
    fn is_checked(&self) -> bool;

    /// Names of the files selected in a file input, in selection order.
    fn file_names(&self) -> Vec<String>;

    /// Options of a select element, in document order.
    fn options(&self) -> Vec<Self>;

    /// Run `handler` every time `event` fires on this element.
    ///
    /// The registration lives as long as the element.
    fn listen(&self, event: &str, handler: Box<dyn FnMut()>) -> Result<(), FormError>;
}
