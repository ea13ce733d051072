// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Conversion of nondeterministic finite automata to regular expressions
//!
//! # Overview
//!
//! This crate converts a nondeterministic finite automaton (NFA) into an
//! equivalent regular expression using the classical state-elimination
//! technique.
//!
//! The [automata](crate::automata) module implements the automaton model: a
//! graph of named nodes with initial/terminal flags and labeled edges, where
//! parallel edges and self-loops are legal and the empty label denotes an
//! epsilon transition.
//!
//! The [elimination](crate::elimination) module implements the conversion.
//! It normalizes a working copy of the automaton to a single-initial/
//! single-terminal form and then removes interior nodes one at a time,
//! folding self-loops into Kleene stars and joining parallel paths into
//! alternations (see [combinators](crate::combinators)). An optional step
//! observer receives a snapshot of the working automaton at every
//! checkpoint, which lets callers render or log intermediate states.
//!
//! The [matcher](crate::matcher) module provides a reference simulator for
//! membership queries, used to verify that a produced expression accepts
//! the same language as the automaton it came from. The simulator performs
//! no epsilon-closure: it only advances on exact single-symbol labels.
//!
//! ```
//! use nfa2regex::{automata::Nfa, elimination::to_regex};
//!
//! let mut nfa = Nfa::new();
//! nfa.add_edge("1", "2", "a");
//! nfa.add_edge("2", "2", "x");
//! nfa.add_edge("2", "3", "b");
//! nfa.mark_initial("1").mark_terminal("3");
//!
//! assert_eq!(to_regex(&nfa).unwrap(), "ax*b");
//! ```
//!
//! The conversion does not minimize or simplify the produced expression and
//! does not guarantee a canonical or shortest form.
//!

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod automata;
pub mod combinators;
pub mod elimination;
pub mod errors;
pub mod matcher;
