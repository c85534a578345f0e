//! Registry of every player instance on a page.
//!
//! Instances registered before the provider API is ready stay pending and
//! are created when [`InstanceRegistry::on_provider_ready`] fans out. A
//! failing instance never affects its siblings.

use std::time::Instant;

use crate::controller::{PlaybackController, UiHost, ERROR_PREFIX};
use crate::error::{BootstrapError, PlayerError};
use crate::provider::{LoadStatus, ProviderBootstrap, ProviderFactory, ScriptLoader};
use crate::segment::{PlayerConfig, PollSettings};

/// A placement whose configuration was rejected. Its host still shows the
/// error, but no controller exists for it.
pub struct RejectedPlacement<U> {
    pub instance_id: String,
    pub video_id: String,
    pub error: PlayerError,
    pub ui: U,
}

pub struct InstanceRegistry<'b, U: UiHost> {
    bootstrap: &'b ProviderBootstrap,
    factory: Box<dyn ProviderFactory>,
    settings: PollSettings,
    instances: Vec<PlaybackController<U>>,
    rejected: Vec<RejectedPlacement<U>>,
    next_id: u64,
}

impl<'b, U: UiHost> InstanceRegistry<'b, U> {
    pub fn new(
        bootstrap: &'b ProviderBootstrap,
        factory: Box<dyn ProviderFactory>,
        settings: PollSettings,
    ) -> Self {
        Self {
            bootstrap,
            factory,
            settings,
            instances: Vec::new(),
            rejected: Vec::new(),
            next_id: 0,
        }
    }

    /// Request the provider script through `loader`.
    pub fn load_provider(
        &self,
        loader: &mut dyn ScriptLoader,
    ) -> Result<LoadStatus, BootstrapError> {
        self.bootstrap.ensure_loaded(loader)
    }

    /// Add a placement and return its instance id.
    ///
    /// An invalid configuration is shown on `ui` and the placement is kept
    /// only in [`Self::rejected`]. When the provider is already ready the
    /// player is created right away.
    pub fn register(
        &mut self,
        video_id: &str,
        start_time: f64,
        end_time: Option<f64>,
        mut ui: U,
    ) -> Result<String, PlayerError> {
        self.next_id += 1;
        let instance_id = format!("player-instance-{}", self.next_id);

        let config = match PlayerConfig::new(video_id, start_time, end_time) {
            Ok(config) => config,
            Err(e) => {
                let error = PlayerError::from(e);
                tracing::error!(instance = %instance_id, error = %error, "invalid player configuration");
                ui.show_error(&format!("{}{}", ERROR_PREFIX, error));
                ui.set_controls_visible(false);
                self.rejected.push(RejectedPlacement {
                    instance_id,
                    video_id: video_id.to_string(),
                    error: error.clone(),
                    ui,
                });
                return Err(error);
            }
        };

        let mut controller = PlaybackController::new(&instance_id, config, ui, self.settings);
        if self.bootstrap.is_ready() {
            // Creation failures are also shown on the instance itself
            if let Err(e) = controller.create_player(self.factory.as_ref()) {
                tracing::warn!(instance = %instance_id, error = %e, "player creation failed");
            }
        }
        self.instances.push(controller);
        Ok(instance_id)
    }

    /// The provider signalled readiness: create every pending player.
    ///
    /// Returns the number of players created by this call.
    pub fn on_provider_ready(&mut self) -> usize {
        self.bootstrap.mark_ready();
        tracing::debug!(instances = self.instances.len(), "creating pending players");

        let mut created = 0;
        for controller in self.instances.iter_mut() {
            if controller.has_player()
                || controller.failure().is_some()
                || controller.is_destroyed()
            {
                continue;
            }
            match controller.create_player(self.factory.as_ref()) {
                Ok(()) => created += 1,
                Err(e) => {
                    tracing::warn!(instance = controller.instance_id(), error = %e, "player creation failed")
                }
            }
        }
        created
    }

    /// Pump every instance once.
    pub fn pump_all(&mut self, now: Instant) {
        for controller in self.instances.iter_mut() {
            controller.pump(now);
        }
    }

    /// Earliest timer deadline across all instances.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.instances
            .iter()
            .filter_map(|c| c.next_deadline())
            .min()
    }

    pub fn get(&self, instance_id: &str) -> Option<&PlaybackController<U>> {
        self.instances
            .iter()
            .find(|c| c.instance_id() == instance_id)
    }

    pub fn get_mut(&mut self, instance_id: &str) -> Option<&mut PlaybackController<U>> {
        self.instances
            .iter_mut()
            .find(|c| c.instance_id() == instance_id)
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut PlaybackController<U>> {
        self.instances.get_mut(index)
    }

    /// Destroy and drop one instance.
    pub fn remove(&mut self, instance_id: &str) -> Option<PlaybackController<U>> {
        let index = self
            .instances
            .iter()
            .position(|c| c.instance_id() == instance_id)?;
        let mut controller = self.instances.remove(index);
        controller.destroy();
        Some(controller)
    }

    /// Destroy every instance.
    pub fn destroy_all(&mut self) {
        for controller in self.instances.iter_mut() {
            controller.destroy();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaybackController<U>> {
        self.instances.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlaybackController<U>> {
        self.instances.iter_mut()
    }

    pub fn rejected(&self) -> &[RejectedPlacement<U>] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
