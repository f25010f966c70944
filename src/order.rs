//! Traversal orders and their string tokens.

use core::fmt;
use core::str::FromStr;

/// Order of a [`Walker`][`crate::Walker`] traversal.
///
/// Walks support skipping descendants of a visited node, so only orders where
/// a node is visited before its descendants are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WalkOrder {
    /// Level by level, token `"breadth-first"`.
    BreadthFirst,
    /// Parent before its subtree, token `"depth-first"`.
    #[default]
    DepthFirst,
}

impl WalkOrder {
    /// All walk orders.
    pub const ALL: [Self; 2] = [Self::BreadthFirst, Self::DepthFirst];

    /// Returns the order named by the given token, if any.
    ///
    /// ```
    /// use ramify::WalkOrder;
    ///
    /// assert_eq!(WalkOrder::from_token("breadth-first"), Some(WalkOrder::BreadthFirst));
    /// assert_eq!(WalkOrder::from_token("post-order"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.token() == token)
    }

    /// Returns the token of the order.
    #[inline]
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
        }
    }
}

impl fmt::Display for WalkOrder {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for WalkOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or(ParseOrderError { expected: WALK_TOKENS })
    }
}

/// Order of a [`Traversal`][`crate::Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TraversalOrder {
    /// Level by level, token `"breadth-first"`.
    BreadthFirst,
    /// Parent before its subtree, token `"pre-order"`.
    #[default]
    PreOrder,
    /// Parent after its subtree, token `"post-order"`.
    PostOrder,
}

impl TraversalOrder {
    /// All traversal orders.
    pub const ALL: [Self; 3] = [Self::BreadthFirst, Self::PreOrder, Self::PostOrder];

    /// Returns the order named by the given token, if any.
    ///
    /// ```
    /// use ramify::TraversalOrder;
    ///
    /// assert_eq!(TraversalOrder::from_token("post-order"), Some(TraversalOrder::PostOrder));
    /// assert_eq!(TraversalOrder::from_token("depth-first"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.token() == token)
    }

    /// Returns the token of the order.
    #[inline]
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::PreOrder => "pre-order",
            Self::PostOrder => "post-order",
        }
    }
}

impl fmt::Display for TraversalOrder {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or(ParseOrderError {
            expected: TRAVERSAL_TOKENS,
        })
    }
}

/// Tokens accepted by [`WalkOrder`].
const WALK_TOKENS: &[&str] = &["breadth-first", "depth-first"];

/// Tokens accepted by [`TraversalOrder`].
const TRAVERSAL_TOKENS: &[&str] = &["breadth-first", "pre-order", "post-order"];

/// An error for parsing an unrecognized order token.
///
/// Only strict parsing through [`FromStr`] fails. Engines resolve
/// unrecognized tokens to their default order instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrderError {
    /// Tokens the parsed order type accepts.
    expected: &'static [&'static str],
}

impl ParseOrderError {
    /// Returns the tokens that would have been accepted.
    #[inline]
    #[must_use]
    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

impl fmt::Display for ParseOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized traversal order, expected one of ")?;
        for (i, token) in self.expected.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{}`", token)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseOrderError {}
