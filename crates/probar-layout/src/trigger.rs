//! Synthetic events on [`DomNode`]s.

use serde::{Deserialize, Serialize};

use crate::dom::DomNode;
use crate::result::{LayoutError, LayoutResult};

/// Event construction flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventInit {
    /// Whether the event propagates to ancestors
    pub bubbles: bool,
    /// Whether the event can be cancelled
    pub cancelable: bool,
}

impl EventInit {
    /// Non-bubbling, cancelable; used for every event [`change`] fires
    pub const CHANGE_SEQUENCE: Self = Self {
        bubbles: false,
        cancelable: true,
    };

    /// Set bubbling
    #[must_use]
    pub const fn with_bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    /// Set cancelable
    #[must_use]
    pub const fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }
}

/// An event dispatched on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticEvent {
    /// Event type, e.g. `change`
    #[serde(rename = "type")]
    pub event_type: String,
    /// Whether the event propagates to ancestors
    pub bubbles: bool,
    /// Whether the event can be cancelled
    pub cancelable: bool,
}

impl SyntheticEvent {
    /// Create an event
    #[must_use]
    pub fn new(event_type: impl Into<String>, init: EventInit) -> Self {
        Self {
            event_type: event_type.into(),
            bubbles: init.bubbles,
            cancelable: init.cancelable,
        }
    }
}

/// Dispatch an event of `event_type` on `target`
pub fn event(target: &mut DomNode, event_type: &str, init: EventInit) {
    target.dispatch_event(SyntheticEvent::new(event_type, init));
}

/// Simulate a user changing a form control's value.
///
/// Focuses the element, dispatches `focus`, sets the value, then dispatches
/// `input` and `change`.
///
/// # Errors
///
/// [`LayoutError::NullTarget`] when `target` is `None`;
/// [`LayoutError::NonInputElement`] unless the target is an `input`,
/// `textarea` or `select`.
pub fn change(target: Option<&mut DomNode>, value: &str) -> LayoutResult<()> {
    let target = target.ok_or_else(|| LayoutError::NullTarget {
        event: "change".to_string(),
    })?;
    if !target.is_input() {
        return Err(LayoutError::NonInputElement {
            event: "change".to_string(),
            tag: target.tag_name(),
        });
    }

    target.focus();
    event(target, "focus", EventInit::CHANGE_SEQUENCE);
    target.set_value(value);
    event(target, "input", EventInit::CHANGE_SEQUENCE);
    event(target, "change", EventInit::CHANGE_SEQUENCE);
    tracing::debug!(tag = %target.tag_name(), value, "changed value");
    Ok(())
}
