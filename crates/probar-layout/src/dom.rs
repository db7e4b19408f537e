//! In-memory element tree.
//!
//! Stands in for a rendered document: every node carries the rectangle a
//! layout engine would report for it, so matchers can run without a browser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::LayoutElement;
use crate::geometry::Rect;
use crate::result::LayoutResult;
use crate::trigger::SyntheticEvent;

/// Tags that hold an editable value
pub const INPUT_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// Element node with its rendered geometry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDomNode")]
pub struct DomNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
    rect: Rect,
    client_rects: Option<Vec<Rect>>,
    children: Vec<DomNode>,
    focused: bool,
    #[serde(skip)]
    events: Vec<SyntheticEvent>,
}

/// Wire form of a [`DomNode`], normalized on the way in
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawDomNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
    rect: Rect,
    client_rects: Option<Vec<Rect>>,
    children: Vec<DomNode>,
    focused: bool,
}

impl From<RawDomNode> for DomNode {
    fn from(raw: RawDomNode) -> Self {
        let mut node = Self::new(raw.tag);
        if raw.value.is_some() {
            node.value = raw.value;
        }
        Self {
            attributes: raw.attributes,
            rect: raw.rect,
            client_rects: raw.client_rects,
            children: raw.children,
            focused: raw.focused,
            ..node
        }
    }
}

impl DomNode {
    /// Create an element; the tag is stored lower-cased
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        let value = INPUT_TAGS.contains(&tag.as_str()).then(String::new);
        Self {
            tag,
            value,
            ..Self::default()
        }
    }

    /// Build a tree from its JSON description
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`](crate::LayoutError::Json) if `json` is
    /// not a valid node description.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Shorthand for a `div`
    #[must_use]
    pub fn div() -> Self {
        Self::new("div")
    }

    /// Set an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set the `id` attribute
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attribute("id", id)
    }

    /// Set the rendered bounding rectangle
    #[must_use]
    pub const fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Set per-fragment client rectangles
    #[must_use]
    pub fn with_client_rects(mut self, rects: Vec<Rect>) -> Self {
        self.client_rects = Some(rects);
        self
    }

    /// Set the form value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Append a child
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Upper-cased tag name, as `tagName` reports it
    #[must_use]
    pub fn tag_name(&self) -> String {
        self.tag.to_ascii_uppercase()
    }

    /// Whether this element holds an editable value
    #[must_use]
    pub fn is_input(&self) -> bool {
        INPUT_TAGS.contains(&self.tag.as_str())
    }

    /// Attribute value
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// The `id` attribute
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Form value, `None` for elements that never had one
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the form value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Move the rendered box
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.client_rects = None;
    }

    /// Give this element focus
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Whether this element has focus
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Direct children
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Direct children, mutably
    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Append a child
    pub fn append_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Remove and return the child at `index`
    pub fn remove_child(&mut self, index: usize) -> Option<Self> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Record a dispatched event
    pub fn dispatch_event(&mut self, event: SyntheticEvent) {
        tracing::trace!(tag = %self.tag, event = %event.event_type, "dispatch");
        self.events.push(event);
    }

    /// Events dispatched on this element, oldest first
    #[must_use]
    pub fn events(&self) -> &[SyntheticEvent] {
        &self.events
    }

    /// All descendants in document order, excluding `self`
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant with the given `id`
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Self> {
        self.descendants().find(|node| node.id() == Some(id))
    }

    /// Index paths from `self` to every descendant matching `predicate`, in
    /// document order
    pub(crate) fn descendant_paths<F>(&self, predicate: &F) -> Vec<Vec<usize>>
    where
        F: Fn(&Self) -> bool,
    {
        let mut paths = Vec::new();
        let mut prefix = Vec::new();
        self.collect_paths(predicate, &mut prefix, &mut paths);
        paths
    }

    fn collect_paths<F>(&self, predicate: &F, prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>)
    where
        F: Fn(&Self) -> bool,
    {
        for (index, child) in self.children.iter().enumerate() {
            prefix.push(index);
            if predicate(child) {
                out.push(prefix.clone());
            }
            child.collect_paths(predicate, prefix, out);
            prefix.pop();
        }
    }

    /// Follow an index path
    pub(crate) fn at_path(&self, path: &[usize]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Follow an index path, mutably
    pub(crate) fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }
}

impl LayoutElement for DomNode {
    fn bounding_client_rect(&self) -> Rect {
        self.rect
    }

    fn client_rects(&self) -> Vec<Rect> {
        self.client_rects
            .clone()
            .unwrap_or_else(|| vec![self.rect])
    }
}

/// Pre-order iterator over a subtree
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a DomNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a DomNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tree() -> DomNode {
        DomNode::div()
            .with_id("root")
            .with_child(
                DomNode::div()
                    .with_id("a")
                    .with_child(DomNode::new("SPAN").with_id("a1"))
                    .with_child(DomNode::new("input").with_id("a2")),
            )
            .with_child(DomNode::div().with_id("b"))
    }

    mod node_tests {
        use super::*;

        #[test]
        fn test_tag_name_is_upper_case() {
            let node = DomNode::new("Div");
            assert_eq!(node.tag_name(), "DIV");
            assert!(!node.is_input());
        }

        #[test]
        fn test_input_elements_start_with_empty_value() {
            assert_eq!(DomNode::new("input").value(), Some(""));
            assert_eq!(DomNode::new("TEXTAREA").value(), Some(""));
            assert_eq!(DomNode::div().value(), None);
        }

        #[test]
        fn test_attributes() {
            let mut node = DomNode::div().with_attribute("data-automation-id", "x y");
            assert_eq!(node.attribute("data-automation-id"), Some("x y"));
            node.set_attribute("data-automation-id", "z");
            assert_eq!(node.attribute("data-automation-id"), Some("z"));
            assert_eq!(node.id(), None);
        }

        #[test]
        fn test_focus() {
            let mut node = DomNode::new("input");
            assert!(!node.is_focused());
            node.focus();
            assert!(node.is_focused());
        }

        #[test]
        fn test_remove_child() {
            let mut root = tree();
            assert!(root.remove_child(5).is_none());
            let removed = root.remove_child(1).unwrap();
            assert_eq!(removed.id(), Some("b"));
            assert_eq!(root.children().len(), 1);
        }
    }

    mod traversal_tests {
        use super::*;

        #[test]
        fn test_descendants_in_document_order() {
            let root = tree();
            let ids: Vec<_> = root.descendants().filter_map(DomNode::id).collect();
            assert_eq!(ids, vec!["a", "a1", "a2", "b"]);
        }

        #[test]
        fn test_find_by_id_skips_self() {
            let root = tree();
            assert!(root.find_by_id("root").is_none());
            assert_eq!(root.find_by_id("a2").unwrap().tag_name(), "INPUT");
        }

        #[test]
        fn test_paths() {
            let root = tree();
            let paths = root.descendant_paths(&|node: &DomNode| {
                node.id().is_some_and(|id| id.starts_with('a'))
            });
            assert_eq!(paths, vec![vec![0], vec![0, 0], vec![0, 1]]);
            assert_eq!(root.at_path(&[0, 1]).unwrap().id(), Some("a2"));
            assert!(root.at_path(&[3]).is_none());
        }

        #[test]
        fn test_path_mut() {
            let mut root = tree();
            root.at_path_mut(&[0, 1]).unwrap().set_value("typed");
            assert_eq!(root.find_by_id("a2").unwrap().value(), Some("typed"));
        }
    }

    mod geometry_tests {
        use super::*;

        #[test]
        fn test_layout_element() {
            let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
            let node = DomNode::div().with_rect(rect);
            assert_eq!(node.bounding_client_rect(), rect);
            assert_eq!(node.client_rects(), vec![rect]);
        }

        #[test]
        fn test_client_rects_override() {
            let node = DomNode::new("span")
                .with_rect(Rect::new(0.0, 0.0, 10.0, 10.0))
                .with_client_rects(vec![]);
            assert!(node.client_rects().is_empty());
        }

        #[test]
        fn test_set_rect_resets_fragments() {
            let mut node = DomNode::div().with_client_rects(vec![]);
            node.set_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
            assert_eq!(node.client_rects().len(), 1);
        }
    }

    #[test]
    fn test_deserialize_partial_tree() {
        let node: DomNode = serde_json::from_str(
            r#"{"tag": "div", "rect": {"left": 1, "top": 2, "width": 3, "height": 4},
                "children": [{"tag": "input", "value": "v"}]}"#,
        )
        .unwrap();
        assert_eq!(node.bounding_client_rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(node.children()[0].value(), Some("v"));
    }

    #[test]
    fn test_deserialize_normalizes_tag() {
        let node: DomNode = serde_json::from_str(r#"{"tag": "INPUT"}"#).unwrap();
        assert!(node.is_input());
        assert_eq!(node.tag_name(), "INPUT");
        assert_eq!(node.value(), Some(""));
        assert_eq!(node, DomNode::new("input"));
    }

    #[test]
    fn test_deserialized_input_accepts_change() {
        let mut node = DomNode::from_json(r#"{"tag": "Input"}"#).unwrap();
        crate::trigger::change(Some(&mut node), "typed").unwrap();
        assert_eq!(node.value(), Some("typed"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = DomNode::from_json(r#"{"tag": 3}"#).unwrap_err();
        assert!(matches!(err, crate::LayoutError::Json(_)));
    }
}
