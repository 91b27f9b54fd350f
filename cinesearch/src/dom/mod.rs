pub mod document;
pub mod ids;

use crate::search::render::Rendered;

/// The page surface event handlers act on.
///
/// Selectors starting with `.` address the first element carrying that class; anything else is an element id.
/// Operations on selectors that match nothing are no-ops, and queries on them answer `false` or `None`.
pub trait UiBinding: Send + 'static {
    fn exists(&self, selector: &str) -> bool;

    /// Whether `target` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &str, target: &str) -> bool;

    fn has_class(&self, selector: &str, class: &str) -> bool;

    fn add_class(&mut self, selector: &str, class: &str);

    fn remove_class(&mut self, selector: &str, class: &str);

    /// Returns whether the class is present afterwards.
    fn toggle_class(&mut self, selector: &str, class: &str) -> bool {
        if self.has_class(selector, class) {
            self.remove_class(selector, class);

            false
        } else {
            self.add_class(selector, class);

            self.has_class(selector, class)
        }
    }

    fn set_class(&mut self, selector: &str, class: &str, present: bool) {
        if present {
            self.add_class(selector, class);
        } else {
            self.remove_class(selector, class);
        }
    }

    fn set_html(&mut self, selector: &str, html: String);

    fn clear(&mut self, selector: &str) {
        self.set_html(selector, String::new());
    }

    fn show_results(&mut self, selector: &str, rendered: Rendered) {
        self.set_html(selector, rendered.html);
    }

    fn value(&self, selector: &str) -> Option<String>;

    fn set_value(&mut self, selector: &str, value: String);

    fn data(&self, selector: &str, key: &str) -> Option<String>;

    fn set_style(&mut self, selector: &str, property: &str, value: &str);

    fn focus(&mut self, selector: &str);

    fn remove(&mut self, selector: &str);

    fn alert(&mut self, message: &str);

    /// Ids of every element carrying `class`, in document order.
    fn select_all(&self, class: &str) -> Vec<String>;
}
