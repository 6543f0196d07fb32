use crate::config::Config;
use crate::photo_screen::core::{Phase, SourceChoice, State};
use crate::selected_image::{ImageSourceKind, SelectedImage};

#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    ChooseSource {
        title: String,
        message: String,
        options: Vec<(String, SourceChoice)>,
    },
    Library {
        entries: Vec<String>,
    },
}

/// Everything a display needs to draw one frame of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub title: String,
    pub preview: Option<SelectedImage>,
    pub result_text: String,
    pub notice: Option<String>,
    pub pick_enabled: bool,
    pub prompt: Option<Prompt>,
}

pub fn source_prompt() -> Prompt {
    Prompt::ChooseSource {
        title: "Browse Attachment".to_string(),
        message: "Choose A Source".to_string(),
        options: vec![
            ("Camera".to_string(), SourceChoice::Camera),
            ("Photo Library".to_string(), SourceChoice::PhotoLibrary),
            ("Cancel".to_string(), SourceChoice::Cancel),
        ],
    }
}

pub fn render(config: &Config, state: &State) -> ScreenView {
    let mut view = ScreenView {
        title: config.window_title.clone(),
        preview: state.image.clone(),
        result_text: state.label.clone(),
        notice: state.notice.clone(),
        pick_enabled: false,
        prompt: None,
    };

    match &state.phase {
        Phase::Idle => {
            view.pick_enabled = true;
        }
        Phase::ChoosingSource => {
            view.prompt = Some(source_prompt());
        }
        Phase::AcquiringImage(ImageSourceKind::Camera) => {
            view.notice = Some("Opening camera...".to_string());
        }
        Phase::AcquiringImage(ImageSourceKind::PhotoLibrary) => {
            view.notice = Some("Opening photo library...".to_string());
        }
        Phase::BrowsingLibrary { entries } => {
            view.prompt = Some(Prompt::Library {
                entries: entries.iter().map(|e| e.name.clone()).collect(),
            });
        }
        Phase::Analyzing => {}
        Phase::Exited => {
            view.notice = Some("Goodbye".to_string());
        }
        Phase::Failed { message } => {
            view.result_text = format!("Error: {}", message);
        }
    }

    view
}
