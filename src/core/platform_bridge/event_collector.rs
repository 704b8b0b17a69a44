//=========================================================================
// Event Collector
//=========================================================================
//
// Gathers one tick's worth of platform input on the logic thread.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_until(deadline) → events → TickControl
//
// The collector waits on the channel until the tick's deadline instead of
// sleeping, so a close request ends the loop immediately and input that
// arrives mid-tick is picked up without an extra idle delay. Platform
// batches are flattened in arrival order; within a batch, discrete events
// come before the cursor state.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

/// Platform messages taken per tick before the rest wait for the next one.
const MAX_MESSAGES_PER_TICK: usize = 100;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
    presses: usize,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::new(),
            presses: 0,
        }
    }

    /// Accumulates platform input until `deadline`.
    ///
    /// Returns early with [`TickControl::Exit`] when the window closes or
    /// the platform side hangs up. A deadline already in the past still
    /// takes whatever is queued.
    pub(crate) fn collect_until(&mut self, deadline: Instant) -> TickControl {
        let mut received = 0;

        while received < MAX_MESSAGES_PER_TICK {
            match self.receiver.recv_deadline(deadline) {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    self.presses += discrete
                        .iter()
                        .filter(|event| matches!(event, InputEvent::PointerDown { .. }))
                        .count();
                    self.events.extend(discrete);
                    self.events.extend(continuous);
                    received += 1;
                }
                Ok(PlatformEvent::WindowClosed) | Err(RecvTimeoutError::Disconnected) => {
                    return TickControl::Exit;
                }
                Err(RecvTimeoutError::Timeout) => return TickControl::Continue,
            }
        }

        warn!(
            target: "engine",
            "Input backlog: {} platform messages this tick, deferring the rest",
            received
        );
        TickControl::Continue
    }

    /// Hands over the tick's events and starts a new batch.
    pub(crate) fn take_events(&mut self) -> Vec<InputEvent> {
        if self.presses > 0 {
            trace!(target: "input", "{} pointer press(es) this tick", self.presses);
        }
        self.presses = 0;
        std::mem::take(&mut self.events)
    }

    /// Pointer presses collected since the last [`take_events`](Self::take_events).
    #[cfg(test)]
    pub(crate) fn presses(&self) -> usize {
        self.presses
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
