// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Conversion of an automaton to a regular expression by state elimination
//!
//! The conversion works on a clone of the caller's automaton. It first
//! normalizes the clone to a single-initial/single-terminal form by adding
//! two reserved nodes wired with epsilon edges, then removes interior nodes
//! one at a time. Removing a node folds its self-loops into a Kleene-star
//! label and bridges every proper inbound/outbound edge pair, so every path
//! through the node survives as a direct edge. Once only the two reserved
//! nodes remain, the labels of the surviving edges joined as an alternation
//! are the resulting expression.
//!
//! Nodes are eliminated in insertion order, so the textual form of the
//! result is deterministic for a given construction sequence. The accepted
//! language does not depend on the order.
//!
//! An optional step observer is invoked at checkpoints (`"start"`,
//! `"create-initial-terminal"`, and `"remove-node-<name>"` once per
//! eliminated node) with a snapshot of the working automaton. Observers can
//! render or log intermediate states; an observer failure aborts the whole
//! conversion.
//!

use crate::{
    automata::{Nfa, NodeId},
    combinators::{kleene_star, or_join},
    errors::{Error, ObserverError},
};

/// Reserved name of the synthetic initial node added during normalization.
pub const INITIAL_NODE_NAME: &str = "__initial__";

/// Reserved name of the synthetic terminal node added during normalization.
pub const TERMINAL_NODE_NAME: &str = "__terminal__";

/// Observer invoked with a snapshot of the working automaton and the
/// checkpoint name. Returning an error aborts the conversion.
pub type StepObserver<'a> = &'a mut dyn FnMut(&Nfa, &str) -> Result<(), ObserverError>;

///
/// Configuration for [to_regex_with_config]
///
#[derive(Default)]
pub struct ConvertConfig<'a> {
    /// Optional observer called at every conversion checkpoint
    pub step_observer: Option<StepObserver<'a>>,
}

impl std::fmt::Debug for ConvertConfig<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvertConfig")
            .field("step_observer", &self.step_observer.is_some())
            .finish()
    }
}

///
/// Convert an automaton to a regular expression using state elimination
/// (see also [to_regex_with_config]).
///
/// The caller's automaton is never mutated and can be reused afterwards.
///
/// # Errors
///
/// - [Error::EmptyAutomaton] if the automaton has no nodes
/// - [Error::NoInitialNode] if no node is flagged initial
/// - [Error::NoTerminalNode] if no node is flagged terminal
/// - [Error::NoPath] if no path connects an initial node to a terminal node
///
pub fn to_regex(nfa: &Nfa) -> Result<String, Error> {
    to_regex_with_config(nfa, ConvertConfig::default())
}

///
/// Convert an automaton to a regular expression using state elimination,
/// with configuration parameters defined by [ConvertConfig].
///
/// # Errors
///
/// In addition to the errors of [to_regex], fails with [Error::Observer]
/// if the configured step observer reports an error at any checkpoint. No
/// partial result is returned in that case.
///
pub fn to_regex_with_config(nfa: &Nfa, mut config: ConvertConfig<'_>) -> Result<String, Error> {
    if nfa.num_nodes() == 0 {
        return Err(Error::EmptyAutomaton);
    }

    let mut nfa = nfa.clone();
    notify(&mut config, &nfa, "start")?;

    normalize(&mut nfa)?;
    notify(&mut config, &nfa, "create-initial-terminal")?;

    // Iteratively remove every node other than the two reserved ones.
    // The node count strictly decreases, so this terminates.
    while nfa.num_nodes() > 2 {
        let names: Vec<String> = nfa
            .nodes()
            .map(|(_, node)| node.name().to_string())
            .collect();
        for name in names {
            if name == INITIAL_NODE_NAME || name == TERMINAL_NODE_NAME {
                continue;
            }
            eliminate_node(&mut nfa, &name);
            let checkpoint = format!("remove-node-{}", name);
            notify(&mut config, &nfa, &checkpoint)?;
        }
    }

    finalize(&nfa)
}

// Invoke the observer, if any, wrapping its error with the checkpoint name
fn notify(config: &mut ConvertConfig<'_>, nfa: &Nfa, checkpoint: &str) -> Result<(), Error> {
    match config.step_observer.as_mut() {
        Some(observer) => observer(nfa, checkpoint).map_err(|source| Error::Observer {
            checkpoint: checkpoint.to_string(),
            source,
        }),
        None => Ok(()),
    }
}

//
// Reduce the automaton to a single initial and a single terminal node.
//
// Every originally-initial node gets an epsilon edge from the reserved
// initial node and its flags cleared; symmetrically for terminal nodes.
// Clearing only touches the working copy's arena records, so automata
// sharing the same construction history are unaffected.
//
fn normalize(nfa: &mut Nfa) -> Result<(), Error> {
    let initial_names: Vec<String> = nfa
        .nodes()
        .filter(|(_, node)| node.is_initial)
        .map(|(_, node)| node.name().to_string())
        .collect();
    let terminal_names: Vec<String> = nfa
        .nodes()
        .filter(|(_, node)| node.is_terminal)
        .map(|(_, node)| node.name().to_string())
        .collect();

    if initial_names.is_empty() {
        return Err(Error::NoInitialNode);
    }
    if terminal_names.is_empty() {
        return Err(Error::NoTerminalNode);
    }

    for name in &initial_names {
        nfa.add_edge(INITIAL_NODE_NAME, name, "");
        clear_flags(nfa, name);
    }
    for name in &terminal_names {
        nfa.add_edge(name, TERMINAL_NODE_NAME, "");
        clear_flags(nfa, name);
    }

    nfa.mark_initial(INITIAL_NODE_NAME);
    nfa.mark_terminal(TERMINAL_NODE_NAME);
    Ok(())
}

fn clear_flags(nfa: &mut Nfa, name: &str) {
    if let Some(node) = nfa.node_by_name_mut(name) {
        node.is_initial = false;
        node.is_terminal = false;
    }
}

//
// Remove one node, preserving every path through it.
//
// Self-loop labels fold into a single Kleene-starred segment placed between
// each proper inbound and outbound label pair. The `bare` flag is set when
// two or more self-loops exist, because or_join has then already
// parenthesized the alternation.
//
fn eliminate_node(nfa: &mut Nfa, name: &str) {
    let loop_labels: Vec<String> = nfa
        .edges_in(name)
        .filter(|e| e.is_self_loop())
        .map(|e| e.label().to_string())
        .collect();
    let loop_label = kleene_star(&or_join(&loop_labels), loop_labels.len() > 1);

    let in_edges: Vec<(NodeId, String)> = nfa
        .edges_in(name)
        .filter(|e| !e.is_self_loop())
        .map(|e| (e.source(), e.label().to_string()))
        .collect();
    let out_edges: Vec<(NodeId, String)> = nfa
        .edges_out(name)
        .filter(|e| !e.is_self_loop())
        .map(|e| (e.target(), e.label().to_string()))
        .collect();

    for (source, in_label) in &in_edges {
        for (target, out_label) in &out_edges {
            let label = format!("{}{}{}", in_label, loop_label, out_label);
            nfa.add_edge_by_id(*source, *target, label);
        }
    }

    nfa.remove_node(name);
}

//
// Collect the final expression from the edges that survived elimination.
// By construction they all run from the reserved initial node to the
// reserved terminal node; if none is left, the automaton had no path from
// an initial to a terminal node.
//
fn finalize(nfa: &Nfa) -> Result<String, Error> {
    let mut has_path = false;
    let mut labels = Vec::with_capacity(nfa.num_edges());
    for edge in nfa.edges() {
        let initial = nfa.node(edge.source()).is_some_and(|n| n.is_initial);
        let terminal = nfa.node(edge.target()).is_some_and(|n| n.is_terminal);
        if initial && terminal {
            has_path = true;
        }
        labels.push(edge.label().to_string());
    }
    if !has_path {
        return Err(Error::NoPath);
    }
    Ok(or_join(&labels))
}
