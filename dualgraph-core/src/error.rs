//! Error types for the dualgraph core library.
//!
//! Defines the graph construction errors, the wrapper surfaced by the
//! algorithm engine, and a convenient result alias.

use thiserror::Error;

use crate::{
    graph::{Vertex, Weight},
    mst::{MstError, MstErrorCode},
    shortest_path::{PathError, PathErrorCode},
};

/// Generates a `#[non_exhaustive]` code enum with `as_str` and `Display`, and
/// a `code()` accessor on the error type it describes.
#[doc(hidden)]
#[macro_export]
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

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
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

/// An error produced while constructing or generating a [`crate::WeightedGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint was outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending endpoint.
        vertex: Vertex,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints of an edge were the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The vertex the loop was attached to.
        vertex: Vertex,
    },
    /// Weight `0` marks an absent edge in the matrix form and cannot be stored.
    #[error("edge ({left}, {right}) has weight 0, which encodes a missing edge")]
    ZeroWeight {
        /// First endpoint as provided.
        left: Vertex,
        /// Second endpoint as provided.
        right: Vertex,
    },
    /// A generated graph must have at least one vertex.
    #[error("a generated graph needs at least one vertex")]
    EmptyGraph,
    /// Density must be a finite percentage in `[0, 100]`.
    #[error("density {density} is outside the supported range [0, 100]")]
    InvalidDensity {
        /// The density percentage supplied by the caller.
        density: f64,
    },
    /// The `V x V` matrix for this many vertices cannot be allocated.
    #[error("a graph with {vertex_count} vertices does not fit in memory")]
    TooManyVertices {
        /// The requested vertex count.
        vertex_count: usize,
    },
    /// The random weight range must satisfy `1 <= low <= high`.
    #[error("weight range [{low}, {high}] must satisfy 1 <= low <= high")]
    InvalidWeightRange {
        /// Lower bound supplied by the caller.
        low: Weight,
        /// Upper bound supplied by the caller.
        high: Weight,
    },
}

crate::define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint was outside the vertex range.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// Both endpoints of an edge were the same vertex.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The edge carried the reserved weight `0`.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
        /// A generated graph must have at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// Density was not a percentage in `[0, 100]`.
        InvalidDensity => InvalidDensity { .. } => "GRAPH_INVALID_DENSITY",
        /// The vertex count was too large to allocate.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
        /// The random weight range was empty or not positive.
        InvalidWeightRange => InvalidWeightRange { .. } => "GRAPH_INVALID_WEIGHT_RANGE",
    }
}

/// An error produced while configuring a [`crate::Simulation`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// At least one repetition is required.
    #[error("the simulation needs at least one repetition")]
    NoRepetitions,
    /// The shortest-path source lies outside the generated graphs.
    #[error("source vertex {vertex} is out of range for graphs with {vertex_count} vertices")]
    InvalidSource {
        /// The requested source vertex.
        vertex: Vertex,
        /// Number of vertices in each generated graph.
        vertex_count: usize,
    },
    /// The generator parameters were rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

crate::define_error_codes! {
    /// Stable codes describing [`SimulationError`] variants.
    enum SimulationErrorCode for SimulationError {
        /// No repetitions were requested.
        NoRepetitions => NoRepetitions => "SIMULATION_NO_REPETITIONS",
        /// The source vertex was out of range.
        InvalidSource => InvalidSource { .. } => "SIMULATION_INVALID_SOURCE",
        /// The generator parameters were rejected.
        Graph => Graph { .. } => "SIMULATION_INVALID_GRAPH_PARAMS",
    }
}

/// Error type produced by [`crate::run_family`] and the simulation driver.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    /// Graph construction or generation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A spanning-tree algorithm rejected its input.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// A shortest-path algorithm rejected its input.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl EngineError {
    /// Returns the stable code string of the wrapped error.
    #[must_use]
    pub const fn code_str(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Mst(error) => error.code().as_str(),
            Self::Path(error) => error.code().as_str(),
        }
    }

    /// Retrieve the inner [`MstErrorCode`] when a spanning-tree run failed.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`PathErrorCode`] when a shortest-path run failed.
    #[must_use]
    pub const fn path_code(&self) -> Option<PathErrorCode> {
        match self {
            Self::Path(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by graph construction.
pub type Result<T> = core::result::Result<T, GraphError>;
