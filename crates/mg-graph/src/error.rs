/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when building or loading a graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An edge references a node that is not in the graph (strict mode).
    #[error("edge endpoint \"{0}\" is not a node in the graph; add nodes before linking them")]
    MissingEndpoint(String),

    /// A document edge carries neither a node pair nor source/target fields.
    #[error("edge #{0} is missing endpoints: expected a two-element \"nodes\" list or \"source\"/\"target\" fields")]
    MalformedEdge(usize),

    /// The graph document could not be parsed or written as JSON.
    #[error("graph document error: {0}")]
    Json(#[from] serde_json::Error),
}
