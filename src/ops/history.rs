// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Elbow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Elbow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linear undo/redo history.
//!
//! Actions own their payloads, so whatever happens to the live target after a push cannot
//! change what an undo or redo will do. There are no branching timelines: a push discards
//! everything that was undone.

use std::collections::VecDeque;

use log::trace;
use serde::{Deserialize, Serialize};

/// An undoable unit of work against some target state.
pub trait Reversible {
    type Target;
    type Error;

    fn apply(&self, target: &mut Self::Target) -> Result<(), Self::Error>;
    fn reverse(&self, target: &mut Self::Target) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History<A> {
    past: Vec<A>,
    /// Undone actions; the front is the next one to redo.
    future: VecDeque<A>,
}

impl<A> Default for History<A> {
    fn default() -> Self {
        Self { past: Vec::new(), future: VecDeque::new() }
    }
}

impl<A> History<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn undo_available(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn redo_available(&self) -> bool {
        !self.future.is_empty()
    }

    /// Executed actions, oldest first.
    pub fn past(&self) -> &[A] {
        &self.past
    }

    /// Undone actions, next redo first.
    pub fn future(&self) -> impl ExactSizeIterator<Item = &A> + '_ {
        self.future.iter()
    }

    /// Forgets both stacks without running any action.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl<A: Reversible> History<A> {
    /// Applies `action` and records it, discarding any redo future.
    ///
    /// If the action fails, nothing is recorded and the history is left untouched.
    pub fn push(&mut self, target: &mut A::Target, action: A) -> Result<(), A::Error> {
        action.apply(target)?;
        self.past.push(action);
        if !self.future.is_empty() {
            trace!("[history] push discards {} redo entries", self.future.len());
        }
        self.future.clear();
        Ok(())
    }

    /// Reverses the most recent action. Returns `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self, target: &mut A::Target) -> Result<bool, A::Error> {
        let Some(action) = self.past.pop() else {
            return Ok(false);
        };
        if let Err(err) = action.reverse(target) {
            self.past.push(action);
            return Err(err);
        }
        self.future.push_front(action);
        trace!("[history] undo: past={} future={}", self.past.len(), self.future.len());
        Ok(true)
    }

    /// Re-applies the most recently undone action. Returns `Ok(false)` when there is nothing
    /// to redo.
    pub fn redo(&mut self, target: &mut A::Target) -> Result<bool, A::Error> {
        let Some(action) = self.future.pop_front() else {
            return Ok(false);
        };
        if let Err(err) = action.apply(target) {
            self.future.push_front(action);
            return Err(err);
        }
        self.past.push(action);
        trace!("[history] redo: past={} future={}", self.past.len(), self.future.len());
        Ok(true)
    }
}
