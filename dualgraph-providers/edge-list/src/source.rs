//! Edge-list graph source.
use std::{fs, io::Read, path::Path};

use dualgraph_core::{WeightedGraph, Weight};
use tracing::{debug, instrument};

use crate::{errors::EdgeListError, tokens::Tokens};

/// A named graph loaded from an edge list.
///
/// The format is a token stream: the vertex count, the edge count, then one
/// `u v w` triple per edge. Line breaks carry no meaning and tokens after the
/// declared edges are ignored.
#[derive(Clone, Debug)]
pub struct EdgeListSource {
    name: String,
    graph: WeightedGraph,
}

impl EdgeListSource {
    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when the input cannot be read, is malformed,
    /// or describes an edge the graph rejects.
    ///
    /// # Examples
    /// ```
    /// use dualgraph_providers_edge_list::EdgeListSource;
    ///
    /// let source = EdgeListSource::try_from_reader("demo", "3 2\n0 1 4\n1 2 2\n".as_bytes())?;
    /// assert_eq!(source.name(), "demo");
    /// assert_eq!(source.graph().edge_count(), 2);
    /// # Ok::<(), dualgraph_providers_edge_list::EdgeListError>(())
    /// ```
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        mut reader: R,
    ) -> Result<Self, EdgeListError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::try_from_text(name.into(), &text)
    }

    /// Reads and parses the edge list stored at `path`.
    ///
    /// # Errors
    /// See [`EdgeListSource::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let text = fs::read_to_string(path)?;
        Self::try_from_text(name.into(), &text)
    }

    #[instrument(name = "edge_list.parse", skip(text), fields(bytes = text.len()), err)]
    fn try_from_text(name: String, text: &str) -> Result<Self, EdgeListError> {
        let mut tokens = Tokens::new(text);
        let (Some(vertex_count), Some(declared)) = (
            tokens.next_parsed::<usize>("a vertex count")?,
            tokens.next_parsed::<usize>("an edge count")?,
        ) else {
            return Err(EdgeListError::MissingHeader);
        };

        let mut graph = WeightedGraph::try_new(vertex_count)
            .map_err(|source| EdgeListError::InvalidHeader { source })?;
        for edge in 0..declared {
            let Some((left, right, weight)) = next_edge(&mut tokens)? else {
                return Err(EdgeListError::TruncatedEdges {
                    declared,
                    found: edge,
                });
            };
            graph
                .add_edge(left, right, weight)
                .map_err(|source| EdgeListError::Graph { edge, source })?;
        }

        debug!(
            vertices = vertex_count,
            edges = graph.edge_count(),
            "edge list loaded"
        );
        Ok(Self { name, graph })
    }

    /// Returns the source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Consumes the source and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> WeightedGraph {
        self.graph
    }
}

fn next_edge(tokens: &mut Tokens<'_>) -> Result<Option<(usize, usize, Weight)>, EdgeListError> {
    let Some(left) = tokens.next_parsed("a vertex index")? else {
        return Ok(None);
    };
    let Some(right) = tokens.next_parsed("a vertex index")? else {
        return Ok(None);
    };
    let Some(weight) = tokens.next_parsed("an integer weight")? else {
        return Ok(None);
    };
    Ok(Some((left, right, weight)))
}
