use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::photo_library::interface::PhotoLibrary;
use crate::photo_screen::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    photo_library: Arc<dyn PhotoLibrary + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        photo_library: Arc<dyn PhotoLibrary + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send>>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("run_effect"),
            device_camera,
            photo_library,
            image_classifier,
            device_display,
        }
    }

    /// Runs on a worker thread. The outcome goes back as an event.
    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeInput => {
                let subscribed = match self.device_display.lock() {
                    Ok(mut display) => display.subscribe(event_sender),
                    Err(_) => Err("display lock poisoned".into()),
                };
                if let Err(e) = subscribed {
                    let _ = self
                        .logger
                        .error(&format!("Failed to subscribe to input: {}", e));
                }
            }
            Effect::CaptureFromCamera => {
                if !self.device_camera.is_available() {
                    let _ = self.logger.info("Camera is not available");
                    let _ = event_sender.send(Event::CameraUnavailable);
                    return;
                }
                let captured = self.device_camera.capture_image();
                let _ = event_sender.send(Event::ImageAcquired(captured));
            }
            Effect::ListLibrary => {
                let entries = self.photo_library.list();
                let _ = event_sender.send(Event::LibraryListed(entries));
            }
            Effect::LoadFromLibrary { entry } => {
                let loaded = self.photo_library.load(&entry);
                let _ = event_sender.send(Event::ImageAcquired(loaded));
            }
            Effect::Classify { image } => {
                let classifications = self.image_classifier.classify(&image);
                if let Err(e) = &classifications {
                    let _ = self
                        .logger
                        .error(&format!("Failed to classify {}: {}", image.name, e));
                }
                let _ = event_sender.send(Event::ClassifyDone(classifications));
            }
        }
    }
}
