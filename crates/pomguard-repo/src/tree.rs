//! Read-only arena of manifest nodes.
//!
//! Nodes refer to each other by index, so a version node can walk back to its
//! enclosing `<dependency>` without any shared ownership.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
enum NodeKind {
    Element(String),
    Text(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Parsed manifest. The root element is always the first node.
#[derive(Clone, Debug)]
pub struct ManifestTree {
    nodes: Vec<NodeData>,
}

impl ManifestTree {
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId(0),
        }
    }
}

/// Borrowed handle to one node of a [`ManifestTree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a ManifestTree,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    fn at(self, id: NodeId) -> Node<'a> {
        Node {
            tree: self.tree,
            id,
        }
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    /// Tag name for elements, `None` for text.
    pub fn tag_name(self) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element(name) => Some(name.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(self) -> Option<Node<'a>> {
        self.data().parent.map(|id| self.at(id))
    }

    pub fn children(self) -> impl Iterator<Item = Node<'a>> {
        self.data().children.iter().map(move |&id| self.at(id))
    }

    /// Child elements with the given tag name, in document order.
    pub fn children_named(self, name: &str) -> impl Iterator<Item = Node<'a>> {
        self.children()
            .filter(move |child| child.tag_name() == Some(name))
    }

    pub fn first_child_named(self, name: &str) -> Option<Node<'a>> {
        self.children_named(name).next()
    }

    /// Concatenated text of every descendant text node, untrimmed.
    pub fn text_content(self) -> String {
        let mut out = String::new();
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            let data = self.at(id).data();
            if let NodeKind::Text(text) = &data.kind {
                out.push_str(text);
            }
            stack.extend(data.children.iter().rev());
        }
        out
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.0)
            .field("tag", &self.tag_name())
            .finish()
    }
}

/// Structural problems found while assembling the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BuildError {
    MultipleRoots(String),
    TextOutsideRoot,
    UnexpectedClose(String),
    Unclosed(String),
    NoRoot,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MultipleRoots(name) => {
                write!(f, "second root element <{name}> after the document element")
            }
            BuildError::TextOutsideRoot => f.write_str("text outside the document element"),
            BuildError::UnexpectedClose(name) => write!(f, "unexpected closing tag </{name}>"),
            BuildError::Unclosed(name) => write!(f, "element <{name}> is never closed"),
            BuildError::NoRoot => f.write_str("document has no root element"),
        }
    }
}

/// Incremental builder fed by the XML reader.
///
/// Adjacent text fragments (text, CDATA, entity pieces) are coalesced into a
/// single text node.
#[derive(Debug, Default)]
pub(crate) struct TreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    pub(crate) fn open_element(&mut self, name: &str) -> Result<(), BuildError> {
        let parent = self.open.last().copied();
        if parent.is_none() && !self.nodes.is_empty() {
            return Err(BuildError::MultipleRoots(name.to_string()));
        }
        let id = self.push(NodeKind::Element(name.to_string()), parent);
        self.open.push(id);
        Ok(())
    }

    pub(crate) fn close_element(&mut self, name: &str) -> Result<(), BuildError> {
        let Some(id) = self.open.pop() else {
            return Err(BuildError::UnexpectedClose(name.to_string()));
        };
        match &self.nodes[id.0].kind {
            NodeKind::Element(open_name) if open_name == name => Ok(()),
            _ => Err(BuildError::UnexpectedClose(name.to_string())),
        }
    }

    pub(crate) fn text(&mut self, text: &str) -> Result<(), BuildError> {
        let Some(&parent) = self.open.last() else {
            // Whitespace around the document element (after the prolog, before EOF).
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(BuildError::TextOutsideRoot);
        };
        if text.is_empty() {
            return Ok(());
        }

        if let Some(&last) = self.nodes[parent.0].children.last()
            && let NodeKind::Text(existing) = &mut self.nodes[last.0].kind
        {
            existing.push_str(text);
            return Ok(());
        }
        self.push(NodeKind::Text(text.to_string()), Some(parent));
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<ManifestTree, BuildError> {
        if let Some(&id) = self.open.last() {
            let name = match &self.nodes[id.0].kind {
                NodeKind::Element(name) => name.clone(),
                NodeKind::Text(_) => String::new(),
            };
            return Err(BuildError::Unclosed(name));
        }
        if self.nodes.is_empty() {
            return Err(BuildError::NoRoot);
        }
        Ok(ManifestTree { nodes: self.nodes })
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }
}
