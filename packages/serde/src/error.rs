use nodepath_core::Node;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot deserialize {target} from a {kind} node: {source}")]
    Deserialize {
        target: &'static str,
        kind: &'static str,
        source: serde_json::Error,
    },

    #[error("Expected a map at the root, found {kind}")]
    NotAMap { kind: &'static str },
}

impl Error {
    pub(crate) fn not_a_map(node: &Node) -> Self {
        Error::NotAMap { kind: node.kind() }
    }
}
