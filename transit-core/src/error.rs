//! Error taxonomy for graph queries and construction.
//!
//! "No path between two existing nodes" is not an error: the search engines
//! report it as `Ok(None)` and the shortest-path maps simply omit the target.

/// Error type for graph operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A query referenced a node that was never inserted.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// Edge cost is zero, negative, NaN or infinite.
    #[error("invalid weight {weight} on edge {from} -- {to}: weights must be positive and finite")]
    InvalidWeight { from: String, to: String, weight: f64 },

    /// Two consecutive path nodes are not adjacent.
    #[error("no edge between {from} and {to}")]
    MissingEdge { from: String, to: String },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Checks that an edge cost is usable by the shortest-path engine.
pub(crate) fn check_weight<N: std::fmt::Debug>(from: &N, to: &N, weight: f64) -> Result<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        })
    }
}
