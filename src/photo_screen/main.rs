use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::error::ScreenError;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::photo_library::interface::PhotoLibrary;
use crate::photo_screen::core::{init, transition, Effect, Event, Phase, State};
use crate::photo_screen::render::render;
use crate::photo_screen::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct PhotoScreen {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
    run_effect: RunEffect,
}

impl PhotoScreen {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        photo_library: Arc<dyn PhotoLibrary + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
    ) -> Self {
        let logger = logger.with_namespace("photo_screen");
        let run_effect = RunEffect::new(
            logger.clone(),
            device_camera,
            photo_library,
            image_classifier,
            device_display.clone(),
        );

        Self {
            config,
            logger,
            device_display,
            run_effect,
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (event_sender, event_receiver) = channel();
        self.run_with_channel(event_sender, event_receiver)
    }

    /// The calling thread becomes the only thread that touches screen state.
    pub fn run_with_channel(
        &self,
        event_sender: Sender<Event>,
        event_receiver: Receiver<Event>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let transition_config = self.config.clone();
        let transition_logger = self.logger.clone();
        let render_config = self.config.clone();
        let device_display = self.device_display.clone();
        let run_effect = self.run_effect.clone();
        let exit_logger = self.logger.clone();

        let machine = StateMachine::new(
            init(&self.config),
            move |state: State, event: Event| {
                let _ = transition_logger.info(&format!(
                    "\nold phase:\n\t{:?}\n\nevent:\n\t{:?}",
                    state.phase, event
                ));
                let (new_state, effects) = transition(&transition_config, state, event);
                let _ = transition_logger.info(&format!(
                    "\nnew phase:\n\t{:?}\n\nlabel:\n\t{:?}\n\neffects:\n\t{:?}",
                    new_state.phase, new_state.label, effects
                ));
                (new_state, effects)
            },
            move |state: &State| {
                let view = render(&render_config, state);
                device_display
                    .lock()
                    .map_err(|_| ScreenError::LockPoisoned("display"))?
                    .render(&view)
            },
            move |effect: Effect, sender: Sender<Event>| run_effect.run_effect(effect, sender),
            move |state: &State| match &state.phase {
                Phase::Exited => {
                    let _ = exit_logger.info("Exiting");
                    Some(Ok(()))
                }
                Phase::Failed { message } => {
                    let _ = exit_logger.error(message);
                    Some(Err(ScreenError::Unrecoverable(message.clone()).into()))
                }
                _ => None,
            },
        );

        machine.run_with_channel(event_sender, event_receiver)
    }
}
