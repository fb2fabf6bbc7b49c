use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Folders nested deeper than this are dropped while decoding.
pub const MAX_DEPTH: usize = 100;

/// A node of the browser's bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Folder { children: Vec<BookmarkNode> },
    Bookmark {
        name: String,
        url: String,
    },
}

/// A flattened bookmark leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    pub name: String,
    pub url: String,
}

/// Top level bookmark folders (`bookmark_bar`, `other`, `synced`, ...) in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roots {
    roots: Vec<(String, BookmarkNode)>,
}

/// Result of looking for the bookmarks file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkSource {
    Missing,
    Loaded(Roots),
}

impl BookmarkNode {
    /// Decode a node from the untyped document.
    ///
    /// Anything with a `children` array is a folder. Otherwise a node with
    /// `"type": "url"` and string `name` and `url` fields is a bookmark.
    /// Every other shape yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::decode(value, 0)
    }

    fn decode(value: &Value, depth: usize) -> Option<Self> {
        let obj = value.as_object()?;
        match obj.get("children") {
            Some(Value::Array(children)) => {
                if depth >= MAX_DEPTH {
                    let folder = obj.get("name").and_then(Value::as_str).unwrap_or_default();
                    warn!(folder, depth, "bookmark folder nested too deeply, skipping");
                    return None;
                }
                let children = children
                    .iter()
                    .filter_map(|child| Self::decode(child, depth + 1))
                    .collect();
                Some(BookmarkNode::Folder { children })
            }
            Some(_) => {
                debug!("skipping bookmark node with non-array children");
                None
            }
            None if obj.get("type").and_then(Value::as_str) == Some("url") => {
                let name = obj.get("name").and_then(Value::as_str);
                let url = obj.get("url").and_then(Value::as_str);
                match (name, url) {
                    (Some(name), Some(url)) => Some(BookmarkNode::Bookmark {
                        name: name.to_string(),
                        url: url.to_string(),
                    }),
                    _ => {
                        debug!("skipping url node without name or url");
                        None
                    }
                }
            }
            None => {
                debug!("skipping bookmark node that is neither folder nor url");
                None
            }
        }
    }
}

/// Collect every bookmark below `node` in depth-first order.
pub fn flatten(node: &BookmarkNode) -> Vec<BookmarkEntry> {
    let mut out = Vec::new();
    collect(node, &mut out);
    out
}

fn collect(node: &BookmarkNode, out: &mut Vec<BookmarkEntry>) {
    match node {
        BookmarkNode::Folder { children } => {
            for child in children {
                collect(child, out);
            }
        }
        BookmarkNode::Bookmark { name, url } => out.push(BookmarkEntry {
            name: name.clone(),
            url: url.clone(),
        }),
    }
}

impl Roots {
    /// Decode the `roots` object of a bookmarks document.
    pub fn from_value(doc: &Value) -> Result<Self> {
        let roots = doc
            .get("roots")
            .and_then(Value::as_object)
            .ok_or_else(|| anyhow!("bookmarks document has no `roots` object"))?;
        let roots = roots
            .iter()
            .filter_map(|(key, value)| {
                BookmarkNode::from_value(value).map(|node| (key.clone(), node))
            })
            .collect();
        Ok(Self { roots })
    }

    /// All bookmarks, root by root.
    pub fn entries(&self) -> Vec<BookmarkEntry> {
        self.roots.iter().flat_map(|(_, node)| flatten(node)).collect()
    }
}

/// Parse a bookmarks document.
///
/// `serde_json` normally refuses input nested deeper than 128 levels. That
/// limit is lifted here, with the stack grown on demand, so that overly deep
/// folders are pruned by [`MAX_DEPTH`] instead of failing the whole file.
pub fn parse(content: &str) -> Result<Roots> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let doc = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Roots::from_value(&doc)
}

/// Read and decode the bookmarks file at `path`.
///
/// A missing file is not an error; it yields [`BookmarkSource::Missing`].
pub fn load(path: &Path) -> Result<BookmarkSource> {
    if !path.exists() {
        debug!(path = %path.display(), "bookmarks file not found");
        return Ok(BookmarkSource::Missing);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let roots = parse(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(BookmarkSource::Loaded(roots))
}

/// Keep the entries whose name contains `query`, ignoring case.
pub fn filter(entries: Vec<BookmarkEntry>, query: &str) -> Vec<BookmarkEntry> {
    let query = query.to_lowercase();
    entries
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&query))
        .collect()
}
