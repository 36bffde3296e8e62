//! Walking a map tree along a dot path.

use nodepath_core::{resolve_index, DotPath, Map, Node, Segment};

/// Find the node a dot path points at.
///
/// A single-token path is a plain key lookup on `root`; no index syntax is
/// interpreted. Longer paths descend one token at a time, where a token
/// ending in `]` selects a list element. Every intermediate node must be a
/// map; the walk stops with `None` at the first missing key, non-map node or
/// bad index.
///
/// The final node may be `Node::Null`; callers converting it get `None`
/// from every built-in converter.
pub fn walk<'n>(root: &'n Map, path: &DotPath) -> Option<&'n Node> {
    let (last, parents) = path.tokens.split_last()?;
    if parents.is_empty() {
        return root.get(last);
    }

    let mut cursor: &'n Map = root;
    for token in parents {
        cursor = match step(cursor, token)? {
            Node::Map(map) => map,
            Node::Null
            | Node::Bool(_)
            | Node::Integer(_)
            | Node::Float(_)
            | Node::String(_)
            | Node::Array(_) => return None,
        };
    }

    step(cursor, last)
}

fn step<'n>(map: &'n Map, token: &str) -> Option<&'n Node> {
    match Segment::parse(token) {
        Segment::Key(key) => map.get(key),
        Segment::Indexed { key, index } => index_into(map, key, index),
        Segment::Malformed(token) => {
            log::warn!(
                "Malformed list index token {:?}, expected key[index]",
                token
            );
            None
        }
    }
}

/// Element `index` of the list stored under `key`.
///
/// Negative indices count from the end. `None` if `key` is missing, is not
/// a list, or `index` is out of bounds.
pub fn index_into<'n>(map: &'n Map, key: &str, index: i64) -> Option<&'n Node> {
    let list = match map.get(key)? {
        Node::Array(list) => list,
        other => {
            log::debug!("Cannot index into {} under key {:?}", other.kind(), key);
            return None;
        }
    };

    match resolve_index(list.len(), index) {
        Some(i) => list.get(i),
        None => {
            log::warn!(
                "List index out of bounds: [index: {}, size: {}]",
                index,
                list.len()
            );
            None
        }
    }
}
