// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Event loop tying the session to timers, the engine and the host page.

use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, Aborted, LocalBoxFuture};
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace};

use super::debounce::Debouncer;
use super::engine::{EngineLoader, LazyEngine};
use super::session::{Effect, SearchSession, SearchTicket, SessionState, WidgetEvent};
use super::ClientConfig;
use crate::corpus::Document;
use crate::Result;

/// The page around the widget.
pub trait WidgetHost {
    /// Client-side route change to `href`.
    fn navigate(&self, href: &str);

    fn focus_input(&self) {}

    fn blur_input(&self) {}
}

impl<F: Fn(&str)> WidgetHost for F {
    fn navigate(&self, href: &str) {
        self(href)
    }
}

type Completion = (u64, std::result::Result<Result<Vec<Document>>, Aborted>);

type Resolution = LocalBoxFuture<'static, Result<()>>;

/// Drive the engine resolution in `slot` to completion, then empty the slot.
/// Pends forever while the slot is empty. Dropping the returned future leaves
/// the resolution in the slot, untouched.
async fn settle(slot: &mut Option<Resolution>) -> Result<()> {
    match slot.as_mut() {
        Some(resolution) => {
            let outcome = resolution.await;
            *slot = None;
            outcome
        }
        None => std::future::pending().await,
    }
}

/// A mounted search widget.
///
/// Runs on the current task: [`run`](Self::run) consumes the widget and
/// returns once the event sender is dropped, which is how the widget is
/// unmounted. Timers and in-flight searches die with it.
///
/// Loading the engine module is not part of any search: superseded searches
/// are aborted, but the one resolution keeps running and the latest search
/// waiting on it starts once it lands.
pub struct SearchWidget<L: EngineLoader, H: WidgetHost> {
    session: SearchSession,
    engine: Rc<LazyEngine<L>>,
    host: H,
    max_results: usize,
    debounce: Debouncer,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Completion>>,
    abort_handles: Vec<AbortHandle>,
    resolving: Option<Resolution>,
    /// Search to start once `resolving` lands.
    waiting: Option<SearchTicket>,
    state_tx: watch::Sender<SessionState>,
}

impl<L, H> SearchWidget<L, H>
where
    L: EngineLoader + 'static,
    H: WidgetHost,
{
    pub fn new(config: ClientConfig, loader: L, host: H) -> Self {
        let (state_tx, _) = watch::channel(SessionState::default());
        Self {
            session: SearchSession::new(),
            engine: Rc::new(LazyEngine::new(loader, config.module_url)),
            host,
            max_results: config.max_results,
            debounce: Debouncer::new(config.debounce),
            in_flight: FuturesUnordered::new(),
            abort_handles: Vec::new(),
            resolving: None,
            waiting: None,
            state_tx,
        }
    }

    /// State after every handled event, timer or completion.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<WidgetEvent>) {
        loop {
            tokio::select! {
                biased;

                event = events.recv() => match event {
                    Some(event) => {
                        trace!(?event, "widget event");
                        let effects = self.session.handle(event);
                        self.apply(effects);
                    }
                    None => break,
                },
                () = self.debounce.expired() => {
                    let effects = self.session.debounce_elapsed(self.engine.is_resolved());
                    self.apply(effects);
                }
                resolved = settle(&mut self.resolving) => self.on_resolved(resolved),
                Some((seq, outcome)) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    if let Ok(result) = outcome {
                        if !self.session.complete(seq, result) {
                            debug!("dropped stale search #{}", seq);
                        }
                    }
                }
            }
            self.state_tx.send_replace(self.session.state().clone());
        }

        for handle in self.abort_handles.drain(..) {
            handle.abort();
        }
        debug!("search widget unmounted");
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RestartDebounce => self.debounce.restart(),
                Effect::CancelDebounce => self.debounce.cancel(),
                Effect::AbortSearches => {
                    for handle in self.abort_handles.drain(..) {
                        handle.abort();
                    }
                    self.waiting = None;
                }
                Effect::Search(ticket) if self.engine.is_resolved() => self.start_search(ticket),
                Effect::Search(ticket) => {
                    debug!("search #{} waits for the engine module", ticket.seq);
                    self.waiting = Some(ticket);
                    if self.resolving.is_none() {
                        let engine = Rc::clone(&self.engine);
                        self.resolving =
                            Some(async move { engine.resolve().await.map(|_| ()) }.boxed_local());
                    }
                }
                Effect::Navigate(href) => self.host.navigate(&href),
                Effect::FocusInput => self.host.focus_input(),
                Effect::BlurInput => self.host.blur_input(),
            }
        }
    }

    fn on_resolved(&mut self, resolved: Result<()>) {
        match resolved {
            Ok(()) => {
                self.session.engine_resolved();
                if let Some(ticket) = self.waiting.take() {
                    self.start_search(ticket);
                }
            }
            // Not cached by the engine; the next search loads again.
            Err(e) => match self.waiting.take() {
                Some(ticket) => {
                    self.session.complete(ticket.seq, Err(e));
                }
                None => debug!("engine module failed to load: {}", e),
            },
        }
    }

    /// Start a query against the resolved engine. Only the query is abortable.
    fn start_search(&mut self, ticket: SearchTicket) {
        let SearchTicket { seq, query } = ticket;
        debug!("search #{} for {:?}", seq, query);

        let engine = Rc::clone(&self.engine);
        let limit = self.max_results;
        let (handle, registration) = AbortHandle::new_pair();
        let search = Abortable::new(
            async move { engine.query(&query, limit).await },
            registration,
        );

        self.abort_handles.push(handle);
        self.in_flight
            .push(async move { (seq, search.await) }.boxed_local());
    }
}
