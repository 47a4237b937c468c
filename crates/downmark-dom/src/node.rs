//! The node capability trait and the owned-tree adapter.

use std::collections::HashMap;

/// Discriminates the two node kinds the converter cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element with a tag name, attributes, and children.
    Element,
    /// A bare text node.
    Text,
}

/// Opaque identity of a node within one parsed tree.
///
/// Assigned by whoever builds the tree; its only job is to key
/// side-tables such as [`ReplacementMap`](crate::ReplacementMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw identity value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Read-only capabilities the conversion passes need from a tree node.
///
/// Implemented by whatever tree the upstream HTML parser produces;
/// [`TreeNode`] is the bundled adapter.
pub trait DomNode: Sized {
    /// Node kind (element or text).
    fn kind(&self) -> NodeKind;

    /// Lowercase tag name for element nodes, `None` for text nodes.
    fn tag(&self) -> Option<&str>;

    /// Attribute value lookup.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Ordered child nodes.
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Identity within the owning tree.
    fn id(&self) -> NodeId;

    /// Whether this is an element node.
    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    /// Whether this is a bare text node.
    fn is_text(&self) -> bool {
        self.kind() == NodeKind::Text
    }
}

/// Owned tree node, the bundled [`DomNode`] adapter.
///
/// Stands in for the upstream HTML-parsing collaborator in tests and in
/// callers that build trees by hand. Identity defaults to
/// `NodeId::new(0)`; nodes that participate in a
/// [`ReplacementMap`](crate::ReplacementMap) need distinct ids via
/// [`with_id`](Self::with_id).
#[derive(Debug, Clone)]
pub struct TreeNode {
    kind: NodeKind,
    tag: String,
    text: String,
    attrs: HashMap<String, String>,
    children: Vec<TreeNode>,
    id: NodeId,
}

impl TreeNode {
    /// Create an element node with the given tag.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.into(),
            text: String::new(),
            attrs: HashMap::new(),
            children: Vec::new(),
            id: NodeId::new(0),
        }
    }

    /// Create a bare text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            tag: String::new(),
            text: content.into(),
            attrs: HashMap::new(),
            children: Vec::new(),
            id: NodeId::new(0),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Set the node's identity.
    #[must_use]
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    /// Text content for text nodes; empty for elements.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.text
    }
}

impl DomNode for TreeNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn tag(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Element => Some(&self.tag),
            NodeKind::Text => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    fn id(&self) -> NodeId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node_capabilities() {
        let node = TreeNode::element("td")
            .with_attr("style", "text-align: right")
            .with_id(NodeId::new(7));

        assert_eq!(node.kind(), NodeKind::Element);
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.tag(), Some("td"));
        assert_eq!(node.attribute("style"), Some("text-align: right"));
        assert_eq!(node.attribute("class"), None);
        assert_eq!(node.id(), NodeId::new(7));
    }

    #[test]
    fn test_text_node_has_no_tag() {
        let node = TreeNode::text("stray");

        assert_eq!(node.kind(), NodeKind::Text);
        assert!(node.is_text());
        assert_eq!(node.tag(), None);
        assert_eq!(node.content(), "stray");
    }

    #[test]
    fn test_children_preserve_order() {
        let row = TreeNode::element("tr").with_children(vec![
            TreeNode::element("td").with_id(NodeId::new(1)),
            TreeNode::element("td").with_id(NodeId::new(2)),
            TreeNode::element("td").with_id(NodeId::new(3)),
        ]);

        let ids: Vec<NodeId> = row.children().map(DomNode::id).collect();
        assert_eq!(ids, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_default_identity_is_zero() {
        assert_eq!(TreeNode::element("table").id(), NodeId::new(0));
    }
}
