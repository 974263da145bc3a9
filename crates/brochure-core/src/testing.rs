//! In-memory elements for exercising controllers without a browser.

use std::{cell::Cell, cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::{
    contact::FormPayload,
    dom::{Control, Element, Form, Viewport},
};

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    id: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    initial_value: String,
    required: bool,
    disabled: bool,
    action: String,
    fields: Vec<FakeElement>,
}

/// Shared handle to a fake node, cloned the way DOM handles are.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeElement(Rc<RefCell<FakeState>>);

impl FakeElement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_id(id: &str) -> Self {
        let element = Self::new();
        element.0.borrow_mut().id = id.to_string();
        element
    }

    pub(crate) fn attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub(crate) fn action(self, action: &str) -> Self {
        self.0.borrow_mut().action = action.to_string();
        self
    }

    pub(crate) fn field(self, field: FakeElement) -> Self {
        self.0.borrow_mut().fields.push(field);
        self
    }

    pub(crate) fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub(crate) fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }
}

impl Element for FakeElement {
    fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn set_class_name(&self, value: &str) {
        self.0.borrow_mut().classes = value.split_whitespace().map(str::to_string).collect();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }
}

impl Control for FakeElement {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    fn is_required(&self) -> bool {
        self.0.borrow().required
    }

    fn set_required(&self, required: bool) {
        self.0.borrow_mut().required = required;
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }
}

impl Form for FakeElement {
    fn action(&self) -> String {
        self.0.borrow().action.clone()
    }

    fn payload(&self) -> FormPayload {
        let fields = self.0.borrow().fields.clone();
        fields
            .iter()
            .filter_map(|field| field.attribute("name").map(|name| (name, field.value())))
            .collect()
    }

    fn reset(&self) {
        for field in &self.0.borrow().fields {
            let initial = field.0.borrow().initial_value.clone();
            field.set_value(&initial);
        }
    }
}

/// Viewport that counts scroll-to-top requests.
#[derive(Debug, Default)]
pub(crate) struct FakeViewport {
    scrolls: Cell<u32>,
}

impl FakeViewport {
    pub(crate) fn scrolls(&self) -> u32 {
        self.scrolls.get()
    }
}

impl Viewport for FakeViewport {
    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

impl Viewport for Rc<FakeViewport> {
    fn scroll_to_top(&self) {
        self.as_ref().scroll_to_top();
    }
}
