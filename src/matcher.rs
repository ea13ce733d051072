// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Reference simulator for automaton membership queries
//!
//! The simulator tracks the set of active nodes while consuming one input
//! symbol at a time. It advances only on edges whose label equals the
//! consumed symbol exactly: edges with the empty label are never taken, so
//! no epsilon-closure is performed. This keeps the simulator a literal
//! reference implementation; it is used to cross-check the expressions
//! produced by [elimination](crate::elimination).
//!

use std::collections::HashSet;

use crate::automata::{Nfa, NodeId};

///
/// Check whether the automaton accepts `input`.
///
/// The active set starts as all nodes flagged initial. Each `char` of
/// `input` maps the active set to the union of the targets of outbound
/// edges labeled with exactly that symbol. After the whole input is
/// consumed, the automaton accepts iff some active node is flagged
/// terminal. An empty active set can never recover, so it short-circuits
/// to `false`.
///
/// This function never errors; inputs that leave the automaton with no
/// active node simply do not match.
///
pub fn matches(nfa: &Nfa, input: &str) -> bool {
    let mut active: HashSet<NodeId> = nfa
        .nodes()
        .filter(|(_, node)| node.is_initial)
        .map(|(id, _)| id)
        .collect();

    let mut buf = [0u8; 4];
    for c in input.chars() {
        if active.is_empty() {
            return false;
        }
        let symbol: &str = c.encode_utf8(&mut buf);
        active = nfa
            .edges()
            .iter()
            .filter(|e| active.contains(&e.source()) && e.label() == symbol)
            .map(|e| e.target())
            .collect();
    }

    active
        .iter()
        .any(|&id| nfa.node(id).is_some_and(|node| node.is_terminal))
}
