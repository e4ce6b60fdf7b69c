//! UI element trees.
//!
//! An element node is an object whose `$$typeof` property holds a registry
//! symbol from the configured marker namespace, with `type`, `props`, `key` and
//! `ref` fields. Nodes of the element kind render as tags:
//!
//! ```rust
//! use serialize_as_code::{run, Element};
//!
//! let node = Element::new("div")
//!     .prop("className", "test")
//!     .key("test-key")
//!     .child(Element::new("p").child("Some text").into_value())
//!     .into_value();
//!
//! assert_eq!(
//!     run(&node),
//!     r#"<div className="test" key="test-key"><p>Some text</p></div>"#
//! );
//! ```
//!
//! Other kinds in the namespace, and objects whose marker lies outside it, are
//! left to the generic object encoder.

use crate::encode::{Encoder, RecursionPath};
use crate::tag::MARKER_PROPERTY;
use crate::value::{Function, Object};
use crate::{ElementMarkers, PropertyMap, Symbol, Value};

/// Tag name used when the node's `type` field is not recognized.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

const CHILDREN: &str = "children";

// The fields of a node, copied out so no borrow is held while encoding.
struct ElementNode {
    element_type: Value,
    props: Vec<(String, Value)>,
    children: Value,
    key: Value,
    ref_value: Value,
}

impl ElementNode {
    fn read(node: &Object) -> Self {
        let field = |name: &str| node.get(name).cloned().unwrap_or_default();
        let (props, children) = match node.get("props").and_then(Value::as_object) {
            Some(props) => {
                let props = props.borrow();
                let entries = props
                    .properties()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                let children = props.get(CHILDREN).cloned().unwrap_or_default();
                (entries, children)
            }
            None => (Vec::new(), Value::Undefined),
        };
        ElementNode {
            element_type: field("type"),
            props,
            children,
            key: field("key"),
            ref_value: field("ref"),
        }
    }
}

/// Renders `value` as a tag if it is a node of the element kind.
pub(crate) fn encode_element(
    encoder: &Encoder<'_>,
    value: &Value,
    path: RecursionPath<'_>,
) -> Option<String> {
    let markers = encoder.options().element_markers.as_ref()?;
    let node = {
        let object = value.as_object()?.borrow();
        let kind = object.get(MARKER_PROPERTY)?.as_symbol()?.key_for()?;
        if !markers.in_namespace(kind) {
            return None;
        }
        if kind != markers.element {
            log::debug!("element kind {:?} is not rendered as a tag", kind);
            return None;
        }
        ElementNode::read(&object)
    };
    Some(render(encoder, &node, markers, path))
}

fn render(
    encoder: &Encoder<'_>,
    node: &ElementNode,
    markers: &ElementMarkers,
    path: RecursionPath<'_>,
) -> String {
    let name = type_name(&node.element_type, markers);
    let attributes = render_attributes(encoder, node, path);
    let children = render_children(encoder, &node.children, path);
    if children.is_empty() {
        format!("<{}{} />", name, attributes)
    } else {
        format!("<{}{}>{}</{}>", name, attributes, children, name)
    }
}

fn type_name(element_type: &Value, markers: &ElementMarkers) -> String {
    let name = match element_type {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Function(f) => f.name().map(str::to_string),
        Value::Symbol(s) if s.key_for() == Some(markers.fragment.as_str()) => {
            Some("Fragment".to_string())
        }
        _ => None,
    };
    name.unwrap_or_else(|| {
        log::debug!("unrecognized element type {}", element_type.type_tag());
        UNKNOWN_TYPE.to_string()
    })
}

fn render_attributes(encoder: &Encoder<'_>, node: &ElementNode, path: RecursionPath<'_>) -> String {
    let mut attributes: Vec<String> = node
        .props
        .iter()
        .filter(|(key, value)| key != CHILDREN && !value.is_undefined())
        .map(|(key, value)| render_attribute(encoder, key, value, path))
        .collect();
    if node.key.is_truthy() {
        attributes.push(render_attribute(encoder, "key", &node.key, path));
    }
    if node.ref_value.is_truthy() {
        attributes.push(render_attribute(encoder, "ref", &node.ref_value, path));
    }
    attributes
        .iter()
        .map(|attribute| format!(" {}", attribute))
        .collect()
}

fn render_attribute(
    encoder: &Encoder<'_>,
    key: &str,
    value: &Value,
    path: RecursionPath<'_>,
) -> String {
    match value {
        Value::String(s) => format!("{}=\"{}\"", key, s),
        other => format!("{}={{{}}}", key, encoder.encode(other, path)),
    }
}

fn render_children(encoder: &Encoder<'_>, children: &Value, path: RecursionPath<'_>) -> String {
    if !children.is_truthy() {
        return String::new();
    }
    match children {
        Value::String(text) => text.clone(),
        Value::Array(elements) => {
            let elements: Vec<Value> = elements.borrow().clone();
            elements.iter().map(|child| encoder.encode(child, path)).collect()
        }
        other => encoder.encode(other, path),
    }
}

/// Builder for element nodes.
///
/// One child is stored as `props.children` directly, several as an array, and
/// none leaves `children` out.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{run, Element, Value};
///
/// let node = Element::component("TestComponent")
///     .prop("str", "test")
///     .flag("bool")
///     .key("test-key")
///     .ref_value("test-ref")
///     .into_value();
///
/// assert_eq!(
///     run(&node),
///     r#"<TestComponent str="test" bool={true} key="test-key" ref="test-ref" />"#
/// );
/// ```
#[derive(Clone)]
pub struct Element {
    element_type: Value,
    props: PropertyMap,
    key: Value,
    ref_value: Value,
    children: Vec<Value>,
}

impl Element {
    /// A host tag such as `div`.
    pub fn new(tag: impl Into<String>) -> Self {
        Element::of_type(Value::String(tag.into()))
    }

    /// A component implemented by a function with the given name.
    pub fn component(name: impl Into<String>) -> Self {
        Element::of_type(Value::from(Function::sync(name)))
    }

    /// A fragment under the default markers.
    pub fn fragment() -> Self {
        Element::of_type(Value::Symbol(Symbol::for_key(
            ElementMarkers::default().fragment,
        )))
    }

    /// A node with an arbitrary `type` field.
    pub fn of_type(element_type: Value) -> Self {
        Element {
            element_type,
            props: PropertyMap::new(),
            key: Value::Null,
            ref_value: Value::Null,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name, value.into());
        self
    }

    /// A boolean prop given without a value, which means `true`.
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.prop(name, true)
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Value::String(key.into());
        self
    }

    #[must_use]
    pub fn ref_value(mut self, value: impl Into<Value>) -> Self {
        self.ref_value = value.into();
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Value>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builds the node under the default markers.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.into_value_with(&ElementMarkers::default())
    }

    /// Builds the node, tagging it with the element kind of `markers`.
    #[must_use]
    pub fn into_value_with(self, markers: &ElementMarkers) -> Value {
        let mut props = self.props;
        let mut children = self.children;
        match children.len() {
            0 => {}
            1 => {
                props.insert(CHILDREN, children.remove(0));
            }
            _ => {
                props.insert(CHILDREN, Value::array(children));
            }
        }
        let mut props_object = Object::new();
        *props_object.properties_mut() = props;

        Value::from(
            Object::new()
                .with(MARKER_PROPERTY, Symbol::for_key(markers.element.clone()))
                .with("type", self.element_type)
                .with("key", self.key)
                .with("ref", self.ref_value)
                .with("props", props_object),
        )
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        element.into_value()
    }
}
