use std::collections::HashMap;

use bnf_protocol::{NodeId, Symbol};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Directed;
use serde::Serialize;

use crate::error::SyntaxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Root,
    Rule { id: NodeId, symbol: Symbol },
    /// Raw text consumed by a terminal rule.
    Lexeme { of: NodeId, text: String },
    Rejection { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Expansion,
    Terminal,
    Rejection,
}

/// Child end of a [`DerivationEdge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "node", rename_all = "snake_case")]
pub enum EdgeTarget {
    Rule(NodeId),
    /// The lexeme leaf hanging off a terminal rule node.
    Lexeme(NodeId),
    Rejection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationEdge {
    pub parent: NodeId,
    pub child: EdgeTarget,
    pub label: String,
}

/// Labeled derivation tree of one sentence.
///
/// Node ids come from a single counter owned by the tree, so a fresh tree per
/// sentence restarts numbering at the root.
pub struct DerivationTree {
    graph: Graph<TreeNode, EdgeKind, Directed>,
    index_map: HashMap<NodeId, NodeIndex>,
    last_id: NodeId,
}

impl DerivationTree {
    pub fn new() -> Self {
        let mut graph = Graph::new();
        let root = graph.add_node(TreeNode::Root);

        let mut index_map = HashMap::new();
        index_map.insert(NodeId::ROOT, root);

        Self {
            graph,
            index_map,
            last_id: NodeId::ROOT,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Allocate a node for `symbol` under `parent`.
    pub fn expand(&mut self, parent: NodeId, symbol: Symbol) -> NodeId {
        self.last_id = self.last_id.next();
        let id = self.last_id;

        let idx = self.graph.add_node(TreeNode::Rule { id, symbol });
        self.index_map.insert(id, idx);
        self.graph.add_edge(self.index_of(parent), idx, EdgeKind::Expansion);

        id
    }

    /// Hang the consumed `text` off a terminal rule node.
    pub fn attach_lexeme(&mut self, node: NodeId, text: &str) {
        let leaf = self.graph.add_node(TreeNode::Lexeme {
            of: node,
            text: text.to_string(),
        });
        self.graph.add_edge(self.index_of(node), leaf, EdgeKind::Terminal);
    }

    /// Close the tree at the point of failure.
    pub fn reject(&mut self, at: NodeId, err: &SyntaxError) {
        let leaf = self.graph.add_node(TreeNode::Rejection {
            message: err.tree_label(),
        });
        self.graph.add_edge(self.index_of(at), leaf, EdgeKind::Rejection);
    }

    /// Number of rule nodes allocated so far, the root excluded.
    pub fn rule_count(&self) -> u32 {
        self.last_id.0
    }

    /// Edges in the order the parser recorded them.
    pub fn edges(&self) -> impl Iterator<Item = DerivationEdge> + '_ {
        self.graph.raw_edges().iter().map(|edge| {
            let parent = self.node_id(edge.source());
            let (child, label) = match &self.graph[edge.target()] {
                TreeNode::Rule { id, symbol } => (EdgeTarget::Rule(*id), symbol.label().to_string()),
                TreeNode::Lexeme { of, text } => (EdgeTarget::Lexeme(*of), text.clone()),
                TreeNode::Rejection { message } => (EdgeTarget::Rejection, message.clone()),
                TreeNode::Root => (EdgeTarget::Rule(NodeId::ROOT), String::new()),
            };
            DerivationEdge { parent, child, label }
        })
    }

    pub fn is_rejected(&self) -> bool {
        self.graph
            .raw_edges()
            .iter()
            .any(|e| e.weight == EdgeKind::Rejection)
    }

    /// Structural invariants: no cycles, and every expansion introduces a
    /// rule id greater than any seen before it.
    pub fn is_well_formed(&self) -> bool {
        if is_cyclic_directed(&self.graph) {
            return false;
        }

        let mut last = NodeId::ROOT;
        for edge in self.edges() {
            if let EdgeTarget::Rule(id) = edge.child {
                if id <= last {
                    return false;
                }
                last = id;
            }
        }
        true
    }

    fn index_of(&self, id: NodeId) -> NodeIndex {
        // Ids are only handed out by `expand`; in release builds a foreign id lands on the root.
        debug_assert!(self.index_map.contains_key(&id), "unknown node {id}");
        self.index_map
            .get(&id)
            .copied()
            .unwrap_or_else(|| NodeIndex::new(0))
    }

    fn node_id(&self, idx: NodeIndex) -> NodeId {
        match &self.graph[idx] {
            TreeNode::Rule { id, .. } => *id,
            TreeNode::Lexeme { of, .. } => *of,
            TreeNode::Root | TreeNode::Rejection { .. } => NodeId::ROOT,
        }
    }
}

impl Default for DerivationTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Span;
    use bnf_protocol::TokenCategory;

    #[test]
    fn test_ids_increase_from_root() {
        let mut tree = DerivationTree::new();
        let s = tree.expand(tree.root(), Symbol::Sentence);
        let np = tree.expand(s, Symbol::NounPhrase);
        let a = tree.expand(np, Symbol::Article);
        tree.attach_lexeme(a, "the");

        assert_eq!((s, np, a), (NodeId(1), NodeId(2), NodeId(3)));
        assert_eq!(tree.rule_count(), 3);
        assert!(tree.is_well_formed());
        assert!(!tree.is_rejected());

        let edges: Vec<_> = tree.edges().collect();
        assert_eq!(
            edges,
            vec![
                DerivationEdge { parent: NodeId(0), child: EdgeTarget::Rule(NodeId(1)), label: "<S>".into() },
                DerivationEdge { parent: NodeId(1), child: EdgeTarget::Rule(NodeId(2)), label: "<NP>".into() },
                DerivationEdge { parent: NodeId(2), child: EdgeTarget::Rule(NodeId(3)), label: "<A>".into() },
                DerivationEdge { parent: NodeId(3), child: EdgeTarget::Lexeme(NodeId(3)), label: "the".into() },
            ]
        );
    }

    #[test]
    fn test_reject_closes_tree() {
        let mut tree = DerivationTree::new();
        let s = tree.expand(tree.root(), Symbol::Sentence);
        let err = SyntaxError {
            expected: TokenCategory::Article,
            found: "dog".into(),
            at: s,
            span: Span::new(0, 3),
        };
        tree.reject(s, &err);

        assert!(tree.is_rejected());
        let last = tree.edges().last().map(|e| (e.parent, e.child));
        assert_eq!(last, Some((NodeId(1), EdgeTarget::Rejection)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown node 99")]
    fn test_expand_from_foreign_node_panics() {
        let mut tree = DerivationTree::new();
        tree.expand(NodeId(99), Symbol::Sentence);
    }
}
