use crate::photo_screen::core::Event;
use crate::photo_screen::render::ScreenView;
use std::error::Error;
use std::sync::mpsc::Sender;

/// Draws the screen and turns user input into screen events.
pub trait DeviceDisplay: Send {
    /// Start forwarding user input to `events`.
    fn subscribe(&mut self, events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn render(&mut self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>>;
}
