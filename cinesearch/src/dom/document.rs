use crate::{
    dom::{ids, UiBinding},
    search::render::{Rendered, ResultsView},
    utils::any::Any,
};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default)]
struct Element {
    id: String,
    parent: Option<usize>,
    classes: BTreeSet<String>,
    html: String,
    view: Option<ResultsView>,
    value: String,
    data: HashMap<String, String>,
    styles: HashMap<String, String>,
    removed: bool,
}

/// In-memory element tree implementing [`UiBinding`].
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    alerts: Vec<String>,
    focused: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        let body = Element {
            id: ids::BODY.into(),
            ..Element::default()
        };

        Self {
            elements: std::vec![body],
            alerts: std::vec![],
            focused: None,
        }
    }

    /// The header, sidebars and search panels every page of the site renders.
    pub fn site() -> Self {
        let mut document = Self::new();

        document
            .append(ids::BODY, ids::MOBILE_MENU_TOGGLE, &[])
            .append(ids::BODY, ids::MOBILE_SIDEBAR, &[])
            .append(ids::MOBILE_SIDEBAR, ids::SIDEBAR_CLOSE, &[])
            .append(ids::BODY, ids::SIDEBAR_OVERLAY, &[])
            .append(ids::BODY, ids::MOBILE_SEARCH_TOGGLE, &[])
            .append(ids::BODY, ids::MOBILE_SEARCH, &["mobile-search"])
            .append(ids::MOBILE_SEARCH, ids::MOBILE_SEARCH_INPUT, &["mobile-search-input"])
            .append(ids::MOBILE_SEARCH, ids::MOBILE_SEARCH_CLOSE, &[])
            .append(ids::MOBILE_SEARCH, ids::MOBILE_SEARCH_RESULTS, &[])
            .append(ids::BODY, ids::MOBILE_MORE_TOGGLE, &[])
            .append(ids::BODY, ids::MOBILE_MORE_DROPDOWN, &[])
            .append(ids::BODY, "navSearchDesktop", &["nav-search-desktop"])
            .append("navSearchDesktop", ids::DESKTOP_SEARCH_INPUT, &[])
            .append("navSearchDesktop", ids::DESKTOP_SEARCH_RESULTS, &[])
            .append(ids::BODY, ids::SIDEBAR_TOGGLE, &[])
            .append(ids::BODY, ids::DESKTOP_SIDEBAR, &[])
            .append(ids::DESKTOP_SIDEBAR, "sidebarDropdownToggle", &["sidebar-dropdown-toggle"])
            .append(ids::DESKTOP_SIDEBAR, "sidebarNavDropdown", &["sidebar-nav-dropdown"])
            .append(ids::BODY, "userMenu", &["user-menu"])
            .append("userMenu", ids::GUEST_AVATAR, &[])
            .append(ids::BODY, "content", &[]);

        document
    }

    /// Appends an element under `parent`; an unknown parent attaches it to the body.
    pub fn append(&mut self, parent: &str, id: &str, classes: &[&str]) -> &mut Self {
        let parent = self.find(parent).unwrap_or(0);
        let element = Element {
            id: id.into(),
            parent: parent.some(),
            classes: classes.iter().map(|class| (*class).to_owned()).collect(),
            ..Element::default()
        };

        self.elements.push(element);

        self
    }

    #[cfg(test)]
    pub fn with_data(&mut self, selector: &str, key: &str, value: &str) -> &mut Self {
        if let Some(element) = self.element_mut(selector) {
            element.data.insert(key.into(), value.into());
        }

        self
    }

    fn find(&self, selector: &str) -> Option<usize> {
        match selector.strip_prefix('.') {
            Some(class) => self
                .elements
                .iter()
                .position(|element| !element.removed && element.classes.contains(class)),
            None => self
                .elements
                .iter()
                .position(|element| !element.removed && element.id == selector),
        }
    }

    fn element(&self, selector: &str) -> Option<&Element> {
        self.elements.get(self.find(selector)?)
    }

    fn element_mut(&mut self, selector: &str) -> Option<&mut Element> {
        let index = self.find(selector)?;

        self.elements.get_mut(index)
    }

    fn is_within(&self, mut index: usize, ancestor: usize) -> bool {
        loop {
            if index == ancestor {
                return true;
            }

            let Some(parent) = self.elements[index].parent else {
                return false;
            };

            index = parent;
        }
    }

    #[cfg(test)]
    pub fn html(&self, selector: &str) -> Option<&str> {
        self.element(selector)?.html.as_str().some()
    }

    pub fn view(&self, selector: &str) -> Option<&ResultsView> {
        self.element(selector)?.view.as_ref()
    }

    #[cfg(test)]
    pub fn style(&self, selector: &str, property: &str) -> Option<&str> {
        self.element(selector)?.styles.get(property).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    #[cfg(test)]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl UiBinding for Document {
    fn exists(&self, selector: &str) -> bool {
        self.find(selector).is_some()
    }

    fn contains(&self, ancestor: &str, target: &str) -> bool {
        let (Some(ancestor), Some(target)) = (self.find(ancestor), self.find(target)) else {
            return false;
        };

        self.is_within(target, ancestor)
    }

    fn has_class(&self, selector: &str, class: &str) -> bool {
        self.element(selector)
            .is_some_and(|element| element.classes.contains(class))
    }

    fn add_class(&mut self, selector: &str, class: &str) {
        if let Some(element) = self.element_mut(selector) {
            element.classes.insert(class.into());
        }
    }

    fn remove_class(&mut self, selector: &str, class: &str) {
        if let Some(element) = self.element_mut(selector) {
            element.classes.remove(class);
        }
    }

    fn set_html(&mut self, selector: &str, html: String) {
        if let Some(element) = self.element_mut(selector) {
            element.html = html;
            element.view = None;
        }
    }

    fn show_results(&mut self, selector: &str, rendered: Rendered) {
        if let Some(element) = self.element_mut(selector) {
            element.html = rendered.html;
            element.view = rendered.view.some();
        }
    }

    fn value(&self, selector: &str) -> Option<String> {
        self.element(selector)?.value.clone().some()
    }

    fn set_value(&mut self, selector: &str, value: String) {
        if let Some(element) = self.element_mut(selector) {
            element.value = value;
        }
    }

    fn data(&self, selector: &str, key: &str) -> Option<String> {
        self.element(selector)?.data.get(key).cloned()
    }

    fn set_style(&mut self, selector: &str, property: &str, value: &str) {
        let Some(element) = self.element_mut(selector) else {
            return;
        };

        if value.is_empty() {
            element.styles.remove(property);
        } else {
            element.styles.insert(property.into(), value.into());
        }
    }

    fn focus(&mut self, selector: &str) {
        if let Some(element) = self.element(selector) {
            self.focused = element.id.clone().some();
        }
    }

    fn remove(&mut self, selector: &str) {
        let Some(index) = self.find(selector) else {
            return;
        };

        for other in 0..self.elements.len() {
            if self.is_within(other, index) {
                self.elements[other].removed = true;
            }
        }
    }

    fn alert(&mut self, message: &str) {
        tracing::info!(message, "alert");

        self.alerts.push(message.into());
    }

    fn select_all(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|element| !element.removed && element.classes.contains(class))
            .map(|element| element.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_resolve_ids_and_classes() {
        let document = Document::site();

        assert!(document.exists(ids::DESKTOP_SEARCH_RESULTS));
        assert!(document.exists(ids::DESKTOP_SEARCH));
        assert!(document.exists(ids::USER_MENU));
        assert!(!document.exists(ids::COMMENT_FORM));
    }

    #[test]
    fn containment_follows_ancestry() {
        let document = Document::site();

        assert!(document.contains(ids::MOBILE_SEARCH, ids::MOBILE_SEARCH_RESULTS));
        assert!(document.contains(ids::MOBILE_SEARCH, ids::MOBILE_SEARCH));
        assert!(document.contains(ids::DESKTOP_SEARCH, ids::DESKTOP_SEARCH_INPUT));
        assert!(!document.contains(ids::MOBILE_SEARCH, ids::MOBILE_SEARCH_TOGGLE));
        assert!(!document.contains(ids::MOBILE_SEARCH, "missing"));
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut document = Document::site();

        assert!(document.toggle_class(ids::MOBILE_SIDEBAR, ids::class::ACTIVE));
        assert!(document.has_class(ids::MOBILE_SIDEBAR, ids::class::ACTIVE));
        assert!(!document.toggle_class(ids::MOBILE_SIDEBAR, ids::class::ACTIVE));
        assert!(!document.toggle_class("missing", ids::class::ACTIVE));
    }

    #[test]
    fn removed_elements_disappear_with_descendants() {
        let mut document = Document::new();

        document
            .append(ids::BODY, "flash1", &[ids::FLASH_MESSAGE_CLASS])
            .append("flash1", "flash1Text", &[])
            .append(ids::BODY, "flash2", &[ids::FLASH_MESSAGE_CLASS]);

        assert_eq!(document.select_all(ids::FLASH_MESSAGE_CLASS), ["flash1", "flash2"]);

        document.remove("flash1");

        assert!(!document.exists("flash1Text"));
        assert_eq!(document.select_all(ids::FLASH_MESSAGE_CLASS), ["flash2"]);
    }

    #[test]
    fn plain_html_drops_structured_view() {
        let mut document = Document::site();
        let rendered = Rendered {
            view: ResultsView::Loading,
            html: "<div>…</div>".into(),
        };

        document.show_results(ids::DESKTOP_SEARCH_RESULTS, rendered);

        assert_eq!(document.view(ids::DESKTOP_SEARCH_RESULTS), Some(&ResultsView::Loading));

        document.clear(ids::DESKTOP_SEARCH_RESULTS);

        assert_eq!(document.view(ids::DESKTOP_SEARCH_RESULTS), None);
        assert_eq!(document.html(ids::DESKTOP_SEARCH_RESULTS), Some(""));
    }
}
