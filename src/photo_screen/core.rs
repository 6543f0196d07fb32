use crate::config::Config;
use crate::error::ClassifierError;
use crate::image_classifier::interface::Classification;
use crate::photo_library::interface::LibraryEntry;
use crate::photo_screen::format::{describe_outcome, ANALYZING, CAMERA_UNAVAILABLE};
use crate::selected_image::{ImageSourceKind, SelectedImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChoice {
    Camera,
    PhotoLibrary,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    ChoosingSource,
    AcquiringImage(ImageSourceKind),
    BrowsingLibrary { entries: Vec<LibraryEntry> },
    Analyzing,
    Exited,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub phase: Phase,
    pub image: Option<SelectedImage>,
    pub label: String,
    pub notice: Option<String>,
}

#[derive(Debug)]
pub enum Event {
    PickTapped,
    SourceChosen(SourceChoice),
    CameraUnavailable,
    LibraryListed(Result<Vec<LibraryEntry>, Box<dyn std::error::Error + Send + Sync>>),
    LibraryEntryChosen(usize),
    LibraryCancelled,
    ImageAcquired(Result<SelectedImage, Box<dyn std::error::Error + Send + Sync>>),
    ClassifyDone(Result<Vec<Classification>, ClassifierError>),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeInput,
    CaptureFromCamera,
    ListLibrary,
    LoadFromLibrary { entry: LibraryEntry },
    Classify { image: SelectedImage },
}

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    (
        State {
            phase: Phase::Idle,
            image: None,
            label: config.initial_label.clone(),
            notice: None,
        },
        vec![Effect::SubscribeInput],
    )
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    let State {
        phase,
        image,
        label,
        notice,
    } = state;

    match (phase, event) {
        (phase @ (Phase::Exited | Phase::Failed { .. }), _) => (
            State {
                phase,
                image,
                label,
                notice,
            },
            vec![],
        ),

        (_, Event::Quit) => (
            State {
                phase: Phase::Exited,
                image,
                label,
                notice,
            },
            vec![],
        ),

        // Source prompt
        (Phase::Idle, Event::PickTapped) => (
            State {
                phase: Phase::ChoosingSource,
                image,
                label,
                notice: None,
            },
            vec![],
        ),
        (Phase::ChoosingSource, Event::SourceChosen(choice)) => {
            let (phase, effects) = match choice {
                SourceChoice::Cancel => (Phase::Idle, vec![]),
                SourceChoice::Camera => (
                    Phase::AcquiringImage(ImageSourceKind::Camera),
                    vec![Effect::CaptureFromCamera],
                ),
                SourceChoice::PhotoLibrary => (
                    Phase::AcquiringImage(ImageSourceKind::PhotoLibrary),
                    vec![Effect::ListLibrary],
                ),
            };
            (
                State {
                    phase,
                    image,
                    label,
                    notice,
                },
                effects,
            )
        }

        // Camera
        (Phase::AcquiringImage(ImageSourceKind::Camera), Event::CameraUnavailable) => (
            State {
                phase: Phase::Idle,
                image,
                label,
                notice: Some(CAMERA_UNAVAILABLE.to_string()),
            },
            vec![],
        ),

        // Photo library
        (
            Phase::AcquiringImage(ImageSourceKind::PhotoLibrary),
            Event::LibraryListed(Ok(entries)),
        ) => {
            if entries.is_empty() {
                (
                    State {
                        phase: Phase::Idle,
                        image,
                        label,
                        notice: Some("Photo library is empty".to_string()),
                    },
                    vec![],
                )
            } else {
                (
                    State {
                        phase: Phase::BrowsingLibrary { entries },
                        image,
                        label,
                        notice,
                    },
                    vec![],
                )
            }
        }
        (
            Phase::AcquiringImage(ImageSourceKind::PhotoLibrary),
            Event::LibraryListed(Err(error)),
        ) => (
            State {
                phase: Phase::Idle,
                image,
                label,
                notice: Some(format!("Unable to open photo library: {}", error)),
            },
            vec![],
        ),
        (Phase::BrowsingLibrary { entries }, Event::LibraryEntryChosen(index)) => {
            match entries.get(index).cloned() {
                Some(entry) => (
                    State {
                        phase: Phase::AcquiringImage(ImageSourceKind::PhotoLibrary),
                        image,
                        label,
                        notice,
                    },
                    vec![Effect::LoadFromLibrary { entry }],
                ),
                None => (
                    State {
                        phase: Phase::BrowsingLibrary { entries },
                        image,
                        label,
                        notice,
                    },
                    vec![],
                ),
            }
        }
        (Phase::BrowsingLibrary { .. }, Event::LibraryCancelled) => (
            State {
                phase: Phase::Idle,
                image,
                label,
                notice,
            },
            vec![],
        ),

        // Image in hand
        (Phase::AcquiringImage(_), Event::ImageAcquired(Ok(selected))) => (
            State {
                phase: Phase::Analyzing,
                image: Some(selected.clone()),
                label: ANALYZING.to_string(),
                notice: None,
            },
            vec![Effect::Classify { image: selected }],
        ),
        (Phase::AcquiringImage(source), Event::ImageAcquired(Err(error))) => (
            State {
                phase: Phase::Idle,
                image,
                label,
                notice: Some(format!("Unable to load image from {}: {}", source, error)),
            },
            vec![],
        ),

        // Classification
        (Phase::Analyzing, Event::ClassifyDone(Err(error))) if error.is_unrecoverable() => (
            State {
                phase: Phase::Failed {
                    message: error.to_string(),
                },
                image,
                label,
                notice,
            },
            vec![],
        ),
        (Phase::Analyzing, Event::ClassifyDone(outcome)) => (
            State {
                phase: Phase::Idle,
                image,
                label: describe_outcome(config, &outcome),
                notice,
            },
            vec![],
        ),

        (phase, _) => (
            State {
                phase,
                image,
                label,
                notice,
            },
            vec![],
        ),
    }
}
