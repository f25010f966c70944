//! Lazy traversal over any node type.
//!
//! # Concepts
//!
//! ## Children accessor
//!
//! The crate never owns a tree. A tree is described by a function returning
//! the children of a node, in the order they should be visited. Nodes are
//! expected to be cheap to clone: references, indices, or reference-counted
//! pointers.
//!
//! ```
//! use ramify::Traversal;
//!
//! // An implicit tree: children of `n` are `2n+1` and `2n+2`, up to 6.
//! let children = |n: &u32| [2 * n + 1, 2 * n + 2].into_iter().filter(|c| *c <= 6);
//! let traversal = Traversal::new(children);
//!
//! let nodes: Vec<_> = traversal.traverse(0).map(|(node, _parent)| node).collect();
//! assert_eq!(nodes, [1, 3, 4, 2, 5, 6]);
//! ```
//!
//! ## Visits
//!
//! A traversal yields one item per visited node. The root itself is not
//! visited; every visit is a pair of a node and its parent, optionally
//! projected into some other value by a user-supplied projector.
//!
//! ## Laziness
//!
//! Traversals are [`Iterator`]s. Nothing happens until the first item is
//! requested, and the children of a node are requested no earlier than they
//! are needed, so infinite trees can be traversed as long as the consumer
//! stops pulling.
//!
//! ```
//! use ramify::{Walker, WalkOrder};
//!
//! // Every node has two children, forever.
//! let walker = Walker::new(|n: &u64| [2 * n, 2 * n + 1])
//!     .with_projector(|visit: &mut ramify::Visit<u64>| *visit.node());
//!
//! let first: Vec<_> = walker.walk_in(1, WalkOrder::BreadthFirst).take(6).collect();
//! assert_eq!(first, [2, 3, 4, 5, 6, 7]);
//! ```
//!
//! # Engines
//!
//! Two engines are provided. They differ in supported orders, default order,
//! and whether a subtree can be skipped.
//!
//! * [`Walker`]: breadth-first or depth-first (default). A projector receives
//!   a mutable [`Visit`] and may call [`Visit::skip_children`] to prune the
//!   subtree of the visited node.
//! * [`Traversal`]: breadth-first, pre-order (default), or post-order. A
//!   projector receives the node and its parent.
//!
//! Orders can also be selected by name. Unrecognized names select the
//! engine's default order.
//!
//! ```
//! use ramify::{Traversal, TraversalOrder};
//!
//! let traversal = Traversal::new(|n: &u8| if *n == 0 { vec![1, 2] } else { vec![] })
//!     .with_default_order(TraversalOrder::PostOrder);
//!
//! assert!(traversal.traverse_named(0, "no-such-order").eq(traversal.traverse(0)));
//! ```
//!
//! # Errors
//!
//! Children accessors returning `Result` are supported through the `try_*`
//! methods of the engines. The first error is yielded in place of the next
//! visit and ends the traversal. Panics in accessors or projectors propagate
//! to the caller of `next()`.
//!
//! # Features
//!
//! * `std` (default): implements [`std::error::Error`] for the error types.
//! * `serde`: implements `Serialize` and `Deserialize` for the order types,
//!   using their names.
//! * `tracing`: emits [`tracing`](https://docs.rs/tracing) events when a
//!   traversal starts, when an order name falls back to the default, and when
//!   a traversal is aborted by an error.
#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
// `clippy::missing_docs_in_private_items` implies `missing_docs`.
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod order;
pub mod traversal;
pub mod traverse;
pub mod visit;
pub mod walker;

pub use self::order::{ParseOrderError, TraversalOrder, WalkOrder};
pub use self::traversal::{Traversal, Traverse};
pub use self::visit::{Control, Visit};
pub use self::walker::{Walk, Walker};
