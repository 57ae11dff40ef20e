//! Inline markup - `<i>`, `<strong>` and `<span>` over plain text.
//!
//! # Example
//!
//! ```
//! use banner_timer::markup::{parse, Parsed, SpanStyle, StyledNode};
//!
//! let parsed = parse("<strong>a</strong>b").unwrap();
//! assert_eq!(
//!     parsed,
//!     Parsed::Nodes(vec![
//!         StyledNode::span(SpanStyle::Strong, vec![StyledNode::text("a")]),
//!         StyledNode::text("b"),
//!     ])
//! );
//! ```

mod node;
mod parser;

pub use node::{Parsed, SpanStyle, StyledNode};
pub use parser::{parse, MAX_NESTING};
