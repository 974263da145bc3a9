//! `web-sys` adapters for the core element traits.

use brochure_core::{Control, Element, Form, FormPayload, SiteError, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollToOptions, Window,
};

/// Convert a thrown JavaScript value into a core error.
pub fn dom_error(err: JsValue) -> SiteError {
    SiteError::dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Handle to an HTML element of the live document.
#[derive(Debug, Clone)]
pub struct DomElement(pub HtmlElement);

impl DomElement {
    /// Wrap a generic element; `None` for non-HTML nodes such as SVG.
    pub fn from_element(element: web_sys::Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(Self)
    }

    pub fn html(&self) -> &HtmlElement {
        &self.0
    }

    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }

    /// Whether `node` is this element or one of its descendants.
    pub fn contains(&self, node: Option<&web_sys::Node>) -> bool {
        self.0.contains(node)
    }

    /// Same underlying DOM node.
    pub fn is(&self, other: &web_sys::Element) -> bool {
        js_sys::Object::is(self.0.as_ref(), other.as_ref())
    }
}

impl Element for DomElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("cannot add class {class:?}: {}", dom_error(err));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("cannot remove class {class:?}: {}", dom_error(err));
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or_else(|err| {
            log::warn!("cannot toggle class {class:?}: {}", dom_error(err));
            self.has_class(class)
        })
    }

    fn set_class_name(&self, value: &str) {
        self.0.set_class_name(value);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.0.style().set_property(property, value) {
            log::warn!("cannot set {property}: {}", dom_error(err));
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl Control for DomElement {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_value(value);
        }
    }

    fn is_required(&self) -> bool {
        self.0.has_attribute("required")
    }

    fn set_required(&self, required: bool) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_required(required);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_required(required);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_required(required);
        }
    }

    fn is_disabled(&self) -> bool {
        self.0.has_attribute("disabled")
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_disabled(disabled);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_disabled(disabled);
        }
    }
}

impl Form for DomElement {
    fn action(&self) -> String {
        self.0
            .dyn_ref::<HtmlFormElement>()
            .map(HtmlFormElement::action)
            .unwrap_or_default()
    }

    /// Text entries of the form's data set; file entries are skipped.
    fn payload(&self) -> FormPayload {
        let Some(form) = self.0.dyn_ref::<HtmlFormElement>() else {
            return FormPayload::new();
        };

        let entries = FormData::new_with_form(form)
            .ok()
            .and_then(|data| js_sys::try_iter(&data).ok().flatten());
        let Some(entries) = entries else {
            log::warn!("cannot read form data");
            return FormPayload::new();
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn reset(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

/// The browser window as a scrollable viewport.
#[derive(Debug, Clone)]
pub struct DomViewport(pub Window);

impl Viewport for DomViewport {
    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}

/// Look up an HTML element by id.
pub fn by_id(document: &Document, id: &str) -> Option<DomElement> {
    document
        .get_element_by_id(id)
        .and_then(DomElement::from_element)
}

/// All HTML elements under `document` matching `selector`, in document
/// order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<DomElement>, SiteError> {
    let nodes = document.query_selector_all(selector).map_err(dom_error)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomElement)
        .collect())
}

/// First HTML element under `root` matching `selector`.
pub fn query_in(root: &DomElement, selector: &str) -> Result<Option<DomElement>, SiteError> {
    Ok(root
        .0
        .query_selector(selector)
        .map_err(dom_error)?
        .and_then(DomElement::from_element))
}
