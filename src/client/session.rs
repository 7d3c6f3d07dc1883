// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search widget state, without any I/O.
//!
//! [`SearchSession`] takes UI events and returns [`Effect`]s for the driver to
//! carry out (start a timer, run a query, navigate). Keeping the transitions
//! pure means keyboard handling and stale-result rules are tested without a
//! runtime or a clock.
//!
//! # Ordering
//!
//! Every issued search gets the next sequence number. Only a completion whose
//! number matches the latest issued search is applied, so a slow early query
//! can never overwrite a faster later one. Clearing the query, Escape, outside
//! clicks and navigation bump the sequence too, which retires whatever is
//! still in flight.

use tracing::error;

use crate::corpus::Document;
use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No query, or the dropdown was dismissed.
    #[default]
    Idle,
    /// Debounce timer running.
    Pending,
    /// Engine resolution and/or query in flight.
    Loading,
    /// Results rendered (possibly none).
    Open,
}

/// What the widget renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub query: String,
    pub is_open: bool,
    /// Index into `results`, `None` when nothing is selected.
    pub active_index: Option<usize>,
    /// The engine module is still being fetched for a pending search. Clears
    /// once the module resolves, before the query itself has answered.
    pub is_loading: bool,
    pub results: Vec<Document>,
    pub focused: bool,
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// Ctrl+K / Cmd+K.
    pub fn is_focus_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && matches!(self.key, Key::Char('k' | 'K'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The input's full text after an edit.
    Input(String),
    /// Any keydown on the page. Arrow keys and Enter only act while the
    /// input has focus.
    KeyDown(KeyPress),
    /// Pointer pressed somewhere; `inside` is whether it hit the widget root.
    PointerDown { inside: bool },
    Hover(usize),
    /// Click on a result row.
    Select(usize),
    Focus,
    Blur,
}

/// One issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RestartDebounce,
    CancelDebounce,
    /// Stop everything in flight; its results would be discarded anyway.
    AbortSearches,
    Search(SearchTicket),
    Navigate(String),
    FocusInput,
    BlurInput,
}

#[derive(Debug, Default)]
pub struct SearchSession {
    state: SessionState,
    pending: bool,
    latest_seq: u64,
    in_flight: bool,
    /// Text of the latest issued search.
    issued_query: String,
    /// Text whose search produced `state.results`.
    results_query: String,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn handle(&mut self, event: WidgetEvent) -> Vec<Effect> {
        let effects = match event {
            WidgetEvent::Input(text) => self.on_input(text),
            WidgetEvent::KeyDown(press) => self.on_key(press),
            WidgetEvent::PointerDown { inside: false } => {
                self.state.is_open = false;
                self.retire()
            }
            WidgetEvent::PointerDown { inside: true } => Vec::new(),
            WidgetEvent::Hover(index) => {
                if self.state.is_open && index < self.state.results.len() {
                    self.state.active_index = Some(index);
                }
                Vec::new()
            }
            WidgetEvent::Select(index) => self.navigate(index),
            WidgetEvent::Focus => self.on_focus(),
            WidgetEvent::Blur => {
                self.state.focused = false;
                Vec::new()
            }
        };
        self.refresh_phase();
        effects
    }

    /// The debounce timer survived. Issue a search for the current text.
    ///
    /// `engine_ready` says whether the query function is already resolved;
    /// if not, the session is loading until [`engine_resolved`](Self::engine_resolved)
    /// or the search completes.
    pub fn debounce_elapsed(&mut self, engine_ready: bool) -> Vec<Effect> {
        self.pending = false;
        if is_blank(&self.state.query) {
            self.refresh_phase();
            return Vec::new();
        }

        self.latest_seq += 1;
        self.in_flight = true;
        self.issued_query = self.state.query.clone();
        self.state.is_open = true;
        self.state.active_index = None;
        self.state.is_loading = !engine_ready;
        self.refresh_phase();

        vec![
            Effect::AbortSearches,
            Effect::Search(SearchTicket {
                seq: self.latest_seq,
                query: self.state.query.clone(),
            }),
        ]
    }

    /// The engine module finished loading.
    pub fn engine_resolved(&mut self) {
        self.state.is_loading = false;
        self.refresh_phase();
    }

    /// Whether `seq` is the search whose results would still be applied.
    pub fn is_current(&self, seq: u64) -> bool {
        self.in_flight && seq == self.latest_seq
    }

    /// A search finished. Returns whether it was applied; completions of
    /// superseded searches are dropped.
    pub fn complete(&mut self, seq: u64, outcome: Result<Vec<Document>>) -> bool {
        if !self.is_current(seq) {
            return false;
        }

        self.in_flight = false;
        self.results_query = self.issued_query.clone();
        self.state.is_loading = false;
        self.state.results = match outcome {
            Ok(results) => results,
            Err(e) => {
                error!("search error: {}", e);
                Vec::new()
            }
        };
        if self
            .state
            .active_index
            .is_some_and(|i| i >= self.state.results.len())
        {
            self.state.active_index = None;
        }
        self.refresh_phase();
        true
    }

    fn on_input(&mut self, text: String) -> Vec<Effect> {
        if text == self.state.query {
            return Vec::new();
        }
        self.state.query = text;

        if is_blank(&self.state.query) {
            self.state.results.clear();
            self.results_query.clear();
            self.state.is_open = false;
            self.state.active_index = None;
            return self.retire();
        }

        self.pending = true;
        vec![Effect::RestartDebounce]
    }

    /// Reopen only with results for the text in the input. Results left over
    /// from an earlier text (its search was cancelled by Escape or an outside
    /// click) are not shown; the current text is searched again instead.
    fn on_focus(&mut self) -> Vec<Effect> {
        self.state.focused = true;
        if is_blank(&self.state.query) {
            return Vec::new();
        }

        if self.results_query == self.state.query {
            if !self.state.results.is_empty() {
                self.state.is_open = true;
            }
            Vec::new()
        } else if !self.pending && !self.in_flight {
            self.pending = true;
            vec![Effect::RestartDebounce]
        } else {
            Vec::new()
        }
    }

    fn on_key(&mut self, press: KeyPress) -> Vec<Effect> {
        if press.is_focus_shortcut() {
            self.state.focused = true;
            return vec![Effect::FocusInput];
        }

        if press.key == Key::Escape {
            self.state.is_open = false;
            self.state.focused = false;
            let mut effects = self.retire();
            effects.push(Effect::BlurInput);
            return effects;
        }

        let len = self.state.results.len();
        if !self.state.focused || !self.state.is_open || len == 0 {
            return Vec::new();
        }

        match press.key {
            Key::ArrowDown => {
                self.state.active_index = match self.state.active_index {
                    Some(i) if i + 1 < len => Some(i + 1),
                    _ => Some(0),
                };
                Vec::new()
            }
            Key::ArrowUp => {
                self.state.active_index = match self.state.active_index {
                    Some(i) if i > 0 => Some(i - 1),
                    _ => Some(len - 1),
                };
                Vec::new()
            }
            Key::Enter => match self.state.active_index {
                Some(i) => self.navigate(i),
                None => Vec::new(),
            },
            Key::Char(_) | Key::Escape => Vec::new(),
        }
    }

    fn navigate(&mut self, index: usize) -> Vec<Effect> {
        let Some(result) = self.state.results.get(index) else {
            return Vec::new();
        };
        let href = result.href.clone();

        self.state.query.clear();
        self.state.results.clear();
        self.results_query.clear();
        self.state.is_open = false;
        self.state.active_index = None;
        let mut effects = self.retire();
        effects.push(Effect::Navigate(href));
        effects
    }

    /// Drop the pending timer and supersede any in-flight search.
    fn retire(&mut self) -> Vec<Effect> {
        self.pending = false;
        if self.in_flight {
            self.latest_seq += 1;
            self.in_flight = false;
        }
        self.state.is_loading = false;
        vec![Effect::CancelDebounce, Effect::AbortSearches]
    }

    fn refresh_phase(&mut self) {
        self.state.phase = if is_blank(&self.state.query) {
            Phase::Idle
        } else if self.pending {
            Phase::Pending
        } else if self.in_flight {
            Phase::Loading
        } else if self.state.is_open {
            Phase::Open
        } else {
            Phase::Idle
        };
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
