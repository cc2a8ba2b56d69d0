//! Error types for the Kruskal stepper core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while loading a graph into a [`crate::Stepper`] or while
/// advancing it.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StepperError {
    /// The graph contained no nodes.
    #[error("cannot step through an MST for an empty graph")]
    EmptyGraph,
    /// Node identifiers must match their position in the node list.
    #[error("node at index {index} has id {id}; ids must be contiguous from zero")]
    NonContiguousNodeId {
        /// Position of the offending node in the supplied list.
        index: usize,
        /// Identifier carried by the node.
        id: usize,
    },
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by an edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge weight was negative, NaN, or infinite.
    #[error("edge ({from} - {to}) has a negative or non-finite weight")]
    InvalidWeight {
        /// First endpoint as supplied.
        from: usize,
        /// Second endpoint as supplied.
        to: usize,
    },
    /// An internal invariant was violated, indicating malformed state.
    #[error("stepper invariant violated: {invariant} (index {index}, bound {bound})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The index that violated the invariant.
        index: usize,
        /// Exclusive upper bound the index was checked against.
        bound: usize,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`StepperError`].
    enum StepperErrorCode for StepperError {
        /// The graph contained no nodes.
        EmptyGraph => EmptyGraph => "EMPTY_GRAPH",
        /// Node identifiers were not contiguous from zero.
        NonContiguousNodeId => NonContiguousNodeId { .. } => "NON_CONTIGUOUS_NODE_ID",
        /// An edge referenced a missing node.
        InvalidNodeId => InvalidNodeId { .. } => "INVALID_NODE_ID",
        /// An edge weight was negative or non-finite.
        InvalidWeight => InvalidWeight { .. } => "INVALID_WEIGHT",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "INVARIANT_VIOLATION",
    }
}

/// Convenient result alias for stepper operations.
pub type Result<T> = std::result::Result<T, StepperError>;
