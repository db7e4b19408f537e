//! Probar Layout: geometric assertions for rendered elements
//!
//! Matchers that check how elements are laid out relative to each other:
//! containment, alignment of edges or centers, left-to-right and
//! top-to-bottom sequences, and comparisons of box properties.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PROBAR LAYOUT                                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ expect()   │    │ Matchers   │    │ Layout     │            │
//! │   │ (fluent)   │───►│ (outcome + │───►│ Element    │            │
//! │   │            │    │  polarity) │    │ (boxes)    │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! │                           │                  ▲                  │
//! │                           ▼                  │                  │
//! │                     ┌────────────┐    ┌────────────┐            │
//! │                     │ Misalign-  │    │ DomNode /  │            │
//! │                     │ ment       │    │ Layout     │            │
//! │                     │ detector   │    │ Fixture    │            │
//! │                     └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use probar_layout::prelude::*;
//!
//! let fixture = LayoutFixture::parse("a---a b---b\na---a b---b").unwrap();
//! let (a, b) = (fixture.get('a').unwrap(), fixture.get('b').unwrap());
//!
//! expect_all(&[a, b])
//!     .to_be_vertically_aligned(VerticalAlignment::Top, 0.0)
//!     .unwrap();
//! expect_all(&[a, b])
//!     .to_be_in_horizontal_sequence(&SequenceOptions::new().with_distance(1.0))
//!     .unwrap();
//! expect(a).width().to_equal(b).unwrap();
//! ```

#![warn(missing_docs)]

mod direction;
mod dom;
mod element;
#[allow(clippy::missing_errors_doc)]
mod expect;
mod fixture;
mod geometry;
#[allow(clippy::missing_errors_doc)]
pub mod matchers;
mod misalignment;
mod result;
mod select;
pub mod trigger;
mod wait;

pub use direction::{Alignment, Direction, HorizontalAlignment, VerticalAlignment};
pub use dom::{Descendants, DomNode, INPUT_TAGS};
pub use element::{get_boundaries, LayoutElement, Operand};
pub use expect::{
    expect, expect_all, expect_optional, expect_value, ElementExpectation,
    ElementListExpectation, PresenceExpectation, Subject, ValueExpectation,
};
pub use fixture::{generate_map, Geometry, LayoutFixture, LayoutMap};
pub use geometry::{is_inside, is_outside, is_point_inside, BoxProperty, Point, Rect};
pub use matchers::{
    is_present, AlignmentOptions, MatchDetail, MatchOutcome, NumericComparison,
    SequenceOptions, DEFAULT_ALIGNMENT_TOLERANCE, DEFAULT_SEQUENCE_DISTANCE,
    DEFAULT_SEQUENCE_TOLERANCE,
};
pub use misalignment::{detect_misalignment, edge_map, EdgeMapItem};
pub use result::{LayoutError, LayoutResult};
pub use select::{select_dom, SelectDom, Selector, DEFAULT_SELECTOR_ATTRIBUTE};
pub use trigger::{EventInit, SyntheticEvent};
pub use wait::{
    wait_for, wait_for_dom, WaitOptions, WaitReport, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_WAIT_TIMEOUT_MS, FRAME_INTERVAL_MS,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::direction::*;
    pub use super::dom::*;
    pub use super::element::*;
    pub use super::expect::*;
    pub use super::fixture::*;
    pub use super::geometry::*;
    pub use super::matchers::{
        is_present, AlignmentOptions, MatchDetail, MatchOutcome, SequenceOptions,
    };
    pub use super::misalignment::detect_misalignment;
    pub use super::result::*;
    pub use super::select::*;
    pub use super::trigger;
    pub use super::wait::*;
}
