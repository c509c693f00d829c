// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-publish walk over a retriever's listeners

use super::Multicaster;
use crate::error::MulticastError;
use crate::event::EventDescriptor;
use crate::listener::{same_listener, Listener};
use crate::retrieval::Retriever;
use std::sync::Arc;

/// Yields direct listeners first, then named listeners resolved one at a time
///
/// A name is resolved only when the walk reaches it, then matched against the
/// event. Resolved listeners that are the same object as one already yielded
/// are skipped.
pub(super) struct Candidates<'a> {
    multicaster: &'a Multicaster,
    retriever: &'a Retriever,
    descriptor: EventDescriptor,
    direct: usize,
    named: usize,
    yielded: Vec<Arc<dyn Listener>>,
}

impl<'a> Candidates<'a> {
    pub(super) fn new(
        multicaster: &'a Multicaster,
        retriever: &'a Retriever,
        descriptor: EventDescriptor,
    ) -> Self {
        Self {
            multicaster,
            retriever,
            descriptor,
            direct: 0,
            named: 0,
            yielded: Vec::with_capacity(retriever.listeners().len()),
        }
    }

    fn already_yielded(&self, listener: &dyn Listener) -> bool {
        self.yielded
            .iter()
            .any(|seen| same_listener(seen.as_ref(), listener))
    }
}

impl Iterator for Candidates<'_> {
    type Item = Result<Arc<dyn Listener>, MulticastError>;

    fn next(&mut self) -> Option<Self::Item> {
        let retriever = self.retriever;

        if let Some(listener) = retriever.listeners().get(self.direct) {
            self.direct += 1;
            self.yielded.push(Arc::clone(listener));
            return Some(Ok(Arc::clone(listener)));
        }

        while let Some(name) = retriever.names().get(self.named) {
            self.named += 1;
            let listener = match self.multicaster.resolve(name) {
                Ok(listener) => listener,
                Err(e) => return Some(Err(e)),
            };
            if self.already_yielded(listener.as_ref()) {
                tracing::trace!(listener = %name, "skipping listener already delivered");
                continue;
            }
            if !self.multicaster.matcher.supports(
                listener.as_ref(),
                self.descriptor.event_type(),
                self.descriptor.source_type(),
            ) {
                continue;
            }
            self.yielded.push(Arc::clone(&listener));
            return Some(Ok(listener));
        }

        None
    }
}
