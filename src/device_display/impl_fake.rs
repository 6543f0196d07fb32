use crate::device_display::interface::DeviceDisplay;
use crate::photo_screen::core::Event;
use crate::photo_screen::render::ScreenView;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Records every rendered view.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    views: Arc<Mutex<Vec<ScreenView>>>,
    subscribed: Arc<Mutex<bool>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<ScreenView> {
        self.views.lock().unwrap().clone()
    }

    pub fn last_view(&self) -> Option<ScreenView> {
        self.views.lock().unwrap().last().cloned()
    }

    pub fn is_subscribed(&self) -> bool {
        *self.subscribed.lock().unwrap()
    }

    /// Polls until the latest view matches, or gives up after `timeout`.
    pub fn wait_for(
        &self,
        timeout: Duration,
        predicate: impl Fn(&ScreenView) -> bool,
    ) -> Option<ScreenView> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Some(view) = self.last_view() {
                if predicate(&view) {
                    return Some(view);
                }
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        None
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn subscribe(&mut self, _events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.subscribed.lock().map_err(|_| "display lock poisoned")? = true;
        Ok(())
    }

    fn render(&mut self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.views
            .lock()
            .map_err(|_| "display lock poisoned")?
            .push(view.clone());
        Ok(())
    }
}
