//! Element abstractions shared by every controller.
//!
//! The browser runtime implements these traits for `web-sys` elements. All
//! methods take `&self`: elements are handles into a document that owns the
//! actual state, so mutation goes through the handle.

/// A styled, classable node of the document.
pub trait Element: Clone {
    /// The element's `id` attribute, empty when unset.
    fn id(&self) -> String;

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Replace the whole `class` attribute.
    fn set_class_name(&self, value: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Set an inline style property (kebab-case CSS name).
    fn set_style(&self, property: &str, value: &str);

    fn text(&self) -> String;

    fn set_text(&self, text: &str);
}

/// A form control: input, select, textarea or button.
pub trait Control: Element {
    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    fn is_required(&self) -> bool;

    fn set_required(&self, required: bool);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);
}

/// A submittable form.
pub trait Form: Element {
    /// The resolved `action` URL.
    fn action(&self) -> String;

    /// Current successful field values, in document order.
    fn payload(&self) -> crate::contact::FormPayload;

    /// Restore every field to its initial value.
    fn reset(&self);
}

/// The scrollable viewport.
pub trait Viewport {
    fn scroll_to_top(&self);
}
