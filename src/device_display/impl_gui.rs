use crate::device_display::interface::DeviceDisplay;
use crate::error::ScreenError;
use crate::photo_screen::core::Event;
use crate::photo_screen::render::{Prompt, ScreenView};
use image::DynamicImage;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

const PREVIEW_MAX_SIDE: u32 = 512;

#[derive(Default)]
struct Shared {
    view: Option<ScreenView>,
    events: Option<Sender<Event>>,
    ctx: Option<egui::Context>,
}

/// Window side of the GUI display. Must run on the main thread.
pub struct PhotoWindow {
    shared: Arc<Mutex<Shared>>,
    preview: Option<(Arc<DynamicImage>, egui::TextureHandle)>,
}

impl PhotoWindow {
    fn update_preview(&mut self, ctx: &egui::Context, view: &ScreenView) {
        let Some(selected) = &view.preview else {
            self.preview = None;
            return;
        };

        let is_current = self
            .preview
            .as_ref()
            .map(|(image, _)| Arc::ptr_eq(image, &selected.image))
            .unwrap_or(false);
        if is_current {
            return;
        }

        let thumbnail = selected
            .oriented()
            .thumbnail(PREVIEW_MAX_SIDE, PREVIEW_MAX_SIDE)
            .to_rgba8();
        let size = [thumbnail.width() as usize, thumbnail.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, thumbnail.as_raw());
        let texture = ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR);

        self.preview = Some((selected.image.clone(), texture));
    }

    fn send(&self, event: Event) {
        if let Ok(shared) = self.shared.lock() {
            if let Some(events) = &shared.events {
                let _ = events.send(event);
            }
        }
    }

    /// Blocks until the window is closed, then asks the screen to quit.
    pub fn run(self, title: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let shared = self.shared.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 640.0])
                .with_title(title),
            ..Default::default()
        };

        let result = eframe::run_native(title, options, Box::new(|_cc| Box::new(self)));

        if let Ok(shared) = shared.lock() {
            if let Some(events) = &shared.events {
                let _ = events.send(Event::Quit);
            }
        }

        result.map_err(|e| e.to_string().into())
    }
}

impl eframe::App for PhotoWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = match self.shared.lock() {
            Ok(mut shared) => {
                if shared.ctx.is_none() {
                    shared.ctx = Some(ctx.clone());
                }
                shared.view.clone()
            }
            Err(_) => None,
        };
        let Some(view) = view else {
            return;
        };

        self.update_preview(ctx, &view);

        let mut clicked = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(&view.title);
                ui.add_space(12.0);

                let pick = egui::Button::new(egui::RichText::new("Pick").size(18.0))
                    .rounding(5.0)
                    .min_size(egui::vec2(120.0, 36.0));
                if ui.add_enabled(view.pick_enabled, pick).clicked() {
                    clicked.push(Event::PickTapped);
                }

                ui.add_space(12.0);
                match &self.preview {
                    Some((_, texture)) => {
                        let sized = egui::load::SizedTexture::new(texture.id(), texture.size_vec2());
                        ui.add(egui::Image::new(sized).max_size(egui::vec2(400.0, 400.0)));
                    }
                    None => {
                        ui.label(egui::RichText::new("No photo selected").weak());
                    }
                }

                ui.add_space(12.0);
                ui.label(egui::RichText::new(&view.result_text).size(18.0));

                if let Some(notice) = &view.notice {
                    ui.add_space(6.0);
                    ui.colored_label(egui::Color32::from_rgb(200, 120, 0), notice);
                }
            });
        });

        match &view.prompt {
            Some(Prompt::ChooseSource {
                title,
                message,
                options,
            }) => {
                egui::Window::new(title.as_str())
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(message.as_str());
                        ui.add_space(8.0);
                        for (label, choice) in options {
                            if ui.button(label.as_str()).clicked() {
                                clicked.push(Event::SourceChosen(*choice));
                            }
                        }
                    });
            }
            Some(Prompt::Library { entries }) => {
                egui::Window::new("Photo Library")
                    .collapsible(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical()
                            .max_height(360.0)
                            .show(ui, |ui| {
                                for (index, name) in entries.iter().enumerate() {
                                    if ui.button(name.as_str()).clicked() {
                                        clicked.push(Event::LibraryEntryChosen(index));
                                    }
                                }
                            });
                        ui.separator();
                        if ui.button("Cancel").clicked() {
                            clicked.push(Event::LibraryCancelled);
                        }
                    });
            }
            None => {}
        }

        for event in clicked {
            self.send(event);
        }
    }
}

/// Screen side of the GUI display: views are handed to the window through
/// shared state and the window is asked to repaint.
pub struct DeviceDisplayGui {
    shared: Arc<Mutex<Shared>>,
}

impl DeviceDisplayGui {
    pub fn new() -> (Self, PhotoWindow) {
        let shared = Arc::new(Mutex::new(Shared::default()));
        let window = PhotoWindow {
            shared: shared.clone(),
            preview: None,
        };
        (Self { shared }, window)
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn subscribe(&mut self, events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| ScreenError::LockPoisoned("display"))?;
        shared.events = Some(events);
        Ok(())
    }

    fn render(&mut self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| ScreenError::LockPoisoned("display"))?;
        shared.view = Some(view.clone());
        if let Some(ctx) = &shared.ctx {
            ctx.request_repaint();
        }
        Ok(())
    }
}
