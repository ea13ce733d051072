// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Nondeterministic finite-state automata
//!
//! Nodes are stored in an arena and addressed by an integer index ([NodeId])
//! that stays stable for the lifetime of the automaton. Removing a node
//! leaves a vacant slot, so edges and outstanding ids never need rewriting.
//! A name index maps the caller-chosen node identifiers to arena slots.
//!
//! Edges are kept in one ordered list. Parallel edges (same endpoints, same
//! or different labels) and self-loops are both legal: parallel edges encode
//! nondeterministic choice and self-loops encode repeatable sub-expressions.
//! The empty label denotes an epsilon transition.
//!
//! Node iteration follows arena order, which is insertion order. The
//! elimination engine relies on this to produce a deterministic expression
//! for a given construction sequence.
//!

use std::{collections::HashMap, fmt::Display};

/// Index of a node in the automaton's arena.
///
/// Ids are assigned in insertion order, starting from 0, and remain valid
/// after other nodes are removed.
pub type NodeId = usize;

///
/// Node of an automaton
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    // caller-chosen identifier, unique within one automaton
    name: String,
    /// Whether this node is an initial node
    pub is_initial: bool,
    /// Whether this node is a terminal (accepting) node
    pub is_terminal: bool,
}

///
/// Directed labeled edge between two nodes
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    label: String,
}

///
/// Nondeterministic finite-state automaton
///
/// Cloning an automaton yields an independent working copy: the arena and
/// the edge list are fresh containers, so flag updates and node removals on
/// the copy never touch the original. The conversion to a regular
/// expression always operates on such a copy.
///
#[derive(Debug, Clone, Default)]
pub struct Nfa {
    // arena of node records; None marks a removed node
    nodes: Vec<Option<Node>>,
    // name -> arena slot
    index: HashMap<String, NodeId>,
    // ordered edge list
    edges: Vec<Edge>,
}

impl Node {
    /// Identifier of this node
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Edge {
    /// Id of the source node
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Id of the target node
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Edge label (the empty string denotes an epsilon transition)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check whether this edge is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl Nfa {
    /// Create an empty automaton
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (live) nodes
    pub fn num_nodes(&self) -> usize {
        self.index.len()
    }

    /// Number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    ///
    /// Get the node registered under `name`, or create and register a fresh
    /// one with both flags cleared. Returns the node's id.
    ///
    pub fn get_or_create(&mut self, name: &str) -> NodeId {
        match self.index.get(name) {
            Some(&id) => id,
            None => {
                let id = self.nodes.len();
                self.nodes.push(Some(Node {
                    name: name.to_string(),
                    is_initial: false,
                    is_terminal: false,
                }));
                self.index.insert(name.to_string(), id);
                id
            }
        }
    }

    ///
    /// Add an edge from `src` to `dst` with the given label.
    ///
    /// Missing endpoint nodes are created on demand with both flags
    /// cleared. Always succeeds; duplicate edges are allowed.
    ///
    pub fn add_edge(&mut self, src: &str, dst: &str, label: &str) {
        let source = self.get_or_create(src);
        let target = self.get_or_create(dst);
        self.edges.push(Edge {
            source,
            target,
            label: label.to_string(),
        });
    }

    // Add an edge between two nodes that already exist, by id.
    // Used during elimination, where endpoints are known to be live.
    pub(crate) fn add_edge_by_id(&mut self, source: NodeId, target: NodeId, label: String) {
        debug_assert!(self.node(source).is_some());
        debug_assert!(self.node(target).is_some());
        self.edges.push(Edge {
            source,
            target,
            label,
        });
    }

    /// Get a node from its id (None if the id is stale or out of range)
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).and_then(|n| n.as_ref())
    }

    /// Get a mutable node from its id
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id).and_then(|n| n.as_mut())
    }

    /// Look up a node id by name
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Look up a node by name
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).and_then(move |id| self.node(id))
    }

    /// Look up a mutable node by name (to set its flags)
    pub fn node_by_name_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self.node_id(name) {
            Some(id) => self.node_mut(id),
            None => None,
        }
    }

    /// Flag the named node as initial, creating it if needed
    pub fn mark_initial(&mut self, name: &str) -> &mut Self {
        let id = self.get_or_create(name);
        if let Some(node) = self.node_mut(id) {
            node.is_initial = true;
        }
        self
    }

    /// Flag the named node as terminal, creating it if needed
    pub fn mark_terminal(&mut self, name: &str) -> &mut Self {
        let id = self.get_or_create(name);
        if let Some(node) = self.node_mut(id) {
            node.is_terminal = true;
        }
        self
    }

    /// Iterator over the live nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, n)| n.as_ref().map(|node| (id, node)))
    }

    /// All edges, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    ///
    /// Iterator over the edges into the node registered under `name`
    /// (i.e., where edge.target resolves to that node), in edge-list order.
    /// Empty if no node is registered under `name`.
    ///
    pub fn edges_in<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Edge> {
        let id = self.node_id(name);
        self.edges.iter().filter(move |e| Some(e.target) == id)
    }

    ///
    /// Iterator over the edges out of the node registered under `name`
    /// (i.e., where edge.source resolves to that node), in edge-list order.
    ///
    pub fn edges_out<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Edge> {
        let id = self.node_id(name);
        self.edges.iter().filter(move |e| Some(e.source) == id)
    }

    ///
    /// Remove the node registered under `name` together with every edge
    /// incident to it (as source or target). No-op if `name` is not
    /// registered.
    ///
    pub fn remove_node(&mut self, name: &str) {
        if let Some(id) = self.index.remove(name) {
            self.nodes[id] = None;
            self.edges.retain(|e| e.source != id && e.target != id);
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

impl Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} nodes", self.num_nodes())?;
        write!(f, "initial node(s):")?;
        for (_, node) in self.nodes().filter(|(_, n)| n.is_initial) {
            write!(f, " {}", node)?;
        }
        writeln!(f)?;
        write!(f, "terminal node(s):")?;
        for (_, node) in self.nodes().filter(|(_, n)| n.is_terminal) {
            write!(f, " {}", node)?;
        }
        writeln!(f)?;
        writeln!(f, "transitions:")?;
        for e in &self.edges {
            // endpoints of a stored edge are always live
            let src = self.node(e.source).ok_or(std::fmt::Error)?;
            let dst = self.node(e.target).ok_or(std::fmt::Error)?;
            writeln!(f, "  {} --{:?}--> {}", src, e.label, dst)?;
        }
        Ok(())
    }
}
