//! Attribute-token element selection.
//!
//! A selector token matches an element when the element's selector
//! attribute, split on whitespace, contains the token (CSS `[attr~="token"]`).
//! Selector chains descend one level per token and must stay unambiguous at
//! every step.

use crate::dom::DomNode;
use crate::result::{LayoutError, LayoutResult};

/// Attribute consulted by [`select_dom`]
pub const DEFAULT_SELECTOR_ATTRIBUTE: &str = "data-automation-id";

/// Selects elements by a whitespace-separated token attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectDom {
    attribute: String,
}

impl Default for SelectDom {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTOR_ATTRIBUTE)
    }
}

impl SelectDom {
    /// Select by `attribute`
    #[must_use]
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// Attribute consulted
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Bind to a container
    #[must_use]
    pub fn bind<'a>(&'a self, container: &'a DomNode) -> Selector<'a> {
        Selector {
            select: self,
            container,
        }
    }

    fn matches(&self, node: &DomNode, token: &str) -> bool {
        node.attribute(&self.attribute)
            .is_some_and(|value| value.split_whitespace().any(|part| part == token))
    }

    /// Resolve a selector chain to an index path below `root`
    fn resolve_path(&self, root: &DomNode, selectors: &[&str]) -> LayoutResult<Option<Vec<usize>>> {
        let mut path = Vec::new();
        let mut scope = root;
        for &selector in selectors {
            let mut found = scope.descendant_paths(&|node: &DomNode| self.matches(node, selector));
            let relative = match found.len() {
                0 => return Ok(None),
                1 => found.remove(0),
                matches => {
                    return Err(LayoutError::AmbiguousSelector {
                        selector: selector.to_string(),
                        matches,
                    })
                }
            };
            let Some(next) = scope.at_path(&relative) else {
                return Ok(None);
            };
            scope = next;
            path.extend(relative);
        }
        Ok(Some(path))
    }

    /// Find the unique element reached by `selectors` below `root`.
    ///
    /// An empty chain selects nothing.
    ///
    /// # Errors
    ///
    /// [`LayoutError::AmbiguousSelector`] when any step matches more than one
    /// element.
    pub fn select<'a>(
        &self,
        root: &'a DomNode,
        selectors: &[&str],
    ) -> LayoutResult<Option<&'a DomNode>> {
        if selectors.is_empty() {
            return Ok(None);
        }
        Ok(self
            .resolve_path(root, selectors)?
            .and_then(|path| root.at_path(&path)))
    }

    /// Mutable counterpart of [`Self::select`], for triggering events
    ///
    /// # Errors
    ///
    /// See [`Self::select`].
    pub fn select_mut<'a>(
        &self,
        root: &'a mut DomNode,
        selectors: &[&str],
    ) -> LayoutResult<Option<&'a mut DomNode>> {
        if selectors.is_empty() {
            return Ok(None);
        }
        Ok(match self.resolve_path(root, selectors)? {
            Some(path) => root.at_path_mut(&path),
            None => None,
        })
    }
}

/// [`SelectDom`] bound to a container
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    select: &'a SelectDom,
    container: &'a DomNode,
}

impl<'a> Selector<'a> {
    /// See [`SelectDom::select`]
    ///
    /// # Errors
    ///
    /// [`LayoutError::AmbiguousSelector`] when a step is ambiguous.
    pub fn select(&self, selectors: &[&str]) -> LayoutResult<Option<&'a DomNode>> {
        self.select.select(self.container, selectors)
    }
}

/// Select below `container` by the default attribute
///
/// # Errors
///
/// [`LayoutError::AmbiguousSelector`] when a step is ambiguous.
pub fn select_dom<'a>(
    container: &'a DomNode,
    selectors: &[&str],
) -> LayoutResult<Option<&'a DomNode>> {
    SelectDom::default().select(container, selectors)
}
