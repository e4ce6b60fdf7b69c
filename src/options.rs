//! Configuration options for encoding.
//!
//! - [`CodeOptions`]: main configuration struct
//! - [`ElementMarkers`]: which marker symbols identify UI element nodes
//!
//! Both optional recognizers can be switched off without affecting the rest of
//! the encoder chain; values they would have claimed are rendered by the
//! generic object encoder instead.
//!
//! ## Examples
//!
//! ```rust
//! use serialize_as_code::{to_string_with_options, CodeOptions, Value};
//!
//! let div = Value::instance("HTMLDivElement");
//! assert_eq!(to_string_with_options(&div, &CodeOptions::new()), "HTMLDivElement");
//!
//! let options = CodeOptions::new().with_host_elements(false);
//! assert_eq!(to_string_with_options(&div, &options), "HTMLDivElement{}");
//! ```

/// Registry keys that identify element nodes.
///
/// An object is an element candidate when its marker property holds a registry
/// symbol whose key starts with `namespace`. Only the `element` kind is
/// rendered as a tag; other kinds in the namespace fall through.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::ElementMarkers;
///
/// let markers = ElementMarkers::default();
/// assert_eq!(markers.namespace, "react.");
/// assert_eq!(markers.element, "react.element");
/// assert_eq!(markers.fragment, "react.fragment");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementMarkers {
    pub namespace: String,
    pub element: String,
    pub fragment: String,
}

impl ElementMarkers {
    pub fn new(
        namespace: impl Into<String>,
        element: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        ElementMarkers {
            namespace: namespace.into(),
            element: element.into(),
            fragment: fragment.into(),
        }
    }

    /// Returns `true` if `key` lies inside the marker namespace.
    #[must_use]
    pub fn in_namespace(&self, key: &str) -> bool {
        key.starts_with(&self.namespace)
    }
}

impl Default for ElementMarkers {
    fn default() -> Self {
        ElementMarkers::new("react.", "react.element", "react.fragment")
    }
}

/// Configuration options for encoding.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{CodeOptions, ElementMarkers};
///
/// let options = CodeOptions::new();
/// assert!(options.element_markers.is_some());
/// assert!(options.host_elements);
///
/// let options = CodeOptions::new()
///     .with_element_markers(ElementMarkers::new("ui.", "ui.node", "ui.group"))
///     .with_host_elements(false);
/// ```
#[derive(Clone, Debug)]
pub struct CodeOptions {
    /// Element recognizer; `None` disables it.
    pub element_markers: Option<ElementMarkers>,
    /// Render `HTML...Element` instances as their bare constructor name.
    pub host_elements: bool,
}

impl Default for CodeOptions {
    fn default() -> Self {
        CodeOptions {
            element_markers: Some(ElementMarkers::default()),
            host_elements: true,
        }
    }
}

impl CodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element_markers(mut self, markers: ElementMarkers) -> Self {
        self.element_markers = Some(markers);
        self
    }

    #[must_use]
    pub fn without_element_markers(mut self) -> Self {
        self.element_markers = None;
        self
    }

    #[must_use]
    pub fn with_host_elements(mut self, enabled: bool) -> Self {
        self.host_elements = enabled;
        self
    }
}
