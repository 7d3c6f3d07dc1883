// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Restartable one-shot timer.

use std::pin::Pin;
use std::time::Duration;

use tokio::time::{sleep, Instant, Sleep};

/// Fires once `delay` after the most recent [`restart`](Self::restart).
///
/// [`expired`](Self::expired) is cancel-safe: dropping it inside a
/// `select!` keeps the deadline armed.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Pin<Box<Sleep>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn restart(&mut self) {
        let at = Instant::now() + self.delay;
        match self.deadline.as_mut() {
            Some(timer) => timer.as_mut().reset(at),
            None => self.deadline = Some(Box::pin(sleep(self.delay))),
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolves when the armed deadline passes. Never resolves while disarmed.
    pub async fn expired(&mut self) {
        match self.deadline.as_mut() {
            Some(timer) => {
                timer.as_mut().await;
                self.deadline = None;
            }
            None => std::future::pending().await,
        }
    }
}
