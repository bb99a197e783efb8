//! Live world settings with change notification.
//!
//! [`WorldSettings`] owns the current [`WorldParameters`] and pushes a
//! [`ConfigEvent`] to every subscriber whenever an accepted update actually
//! changes them. Subscribers receive events over unbounded crossbeam channels
//! and drain them at their own pace.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::error::ConfigError;
use crate::params::WorldParameters;

/// Notification sent by [`WorldSettings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigEvent {
    /// The world parameters were changed to the contained value.
    WorldChanged(WorldParameters),
    /// A manual regeneration was requested (e.g. a key press).
    RegenerateRequested,
}

/// Owner of the live world parameters.
pub struct WorldSettings {
    current: WorldParameters,
    subscribers: Vec<Sender<ConfigEvent>>,
}

impl WorldSettings {
    /// Create settings holding `initial`, which must already be valid.
    pub fn new(initial: WorldParameters) -> Result<Self, ConfigError> {
        initial.validate()?;
        Ok(Self {
            current: initial,
            subscribers: Vec::new(),
        })
    }

    /// The current parameters.
    pub fn current(&self) -> WorldParameters {
        self.current
    }

    /// Register a new listener. Events sent before this call are not replayed.
    pub fn subscribe(&mut self) -> Receiver<ConfigEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replace the current parameters.
    ///
    /// Invalid parameters are rejected and leave the settings untouched.
    /// Returns `Ok(true)` if the value changed and an event was sent.
    pub fn update(&mut self, params: WorldParameters) -> Result<bool, ConfigError> {
        params.validate()?;
        if params == self.current {
            return Ok(false);
        }
        log::debug!("World parameters changed: {:?} -> {:?}", self.current, params);
        self.current = params;
        self.broadcast(ConfigEvent::WorldChanged(params));
        Ok(true)
    }

    /// Apply `edit` to a copy of the current parameters and submit the result.
    pub fn modify(
        &mut self,
        edit: impl FnOnce(&mut WorldParameters),
    ) -> Result<bool, ConfigError> {
        let mut params = self.current;
        edit(&mut params);
        self.update(params)
    }

    /// Ask every subscriber to regenerate with the current parameters.
    pub fn request_regeneration(&mut self) {
        self.broadcast(ConfigEvent::RegenerateRequested);
    }

    fn broadcast(&mut self, event: ConfigEvent) {
        // Receivers that were dropped are pruned.
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
