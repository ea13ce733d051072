// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Error codes
//!

use thiserror::Error;

/// Error type returned by the observer callback.
///
/// Observers are free to fail with any error type; the conversion wraps it
/// in [Error::Observer] together with the checkpoint name.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

///
/// Errors produced by the conversion of an automaton to a regular expression
///
#[derive(Debug, Error)]
pub enum Error {
    /// The automaton given to the conversion has no nodes at all.
    ///
    /// There is nothing to normalize or eliminate, so the conversion
    /// rejects such an automaton up front rather than reporting a missing
    /// initial node.
    #[error("automaton has no nodes")]
    EmptyAutomaton,

    /// No node of the automaton is flagged initial.
    #[error("automaton has no initial node(s)")]
    NoInitialNode,

    /// No node of the automaton is flagged terminal.
    #[error("automaton has no terminal node(s)")]
    NoTerminalNode,

    /// After eliminating all interior nodes, no edge connects the initial
    /// node to the terminal node.
    ///
    /// This is only knowable once the full elimination has run, but it is
    /// still reported as an ordinary error value.
    #[error("automaton has no path between initial and terminal node(s)")]
    NoPath,

    /// The step observer reported a failure at the named checkpoint.
    ///
    /// The conversion is aborted; no partial result is produced.
    #[error("step observer for {checkpoint:?} returned an error: {source}")]
    Observer {
        /// Checkpoint at which the observer failed
        checkpoint: String,
        /// The observer's error
        #[source]
        source: ObserverError,
    },
}
