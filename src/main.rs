use clap::Parser;
use cli::Args;
use config::{CameraKind, ClassifierKind, Config, DisplayKind};
use device_camera::impl_capture_folder::DeviceCameraCaptureFolder;
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use image_classifier::impl_fake::{FakeOutcome, ImageClassifierFake};
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use photo_library::impl_file_system::PhotoLibraryFileSystem;
use photo_screen::main::PhotoScreen;
use std::sync::{Arc, Mutex};

mod cli;
mod config;
mod device_camera;
mod device_display;
mod error;
mod image_classifier;
mod library;
mod photo_library;
mod photo_screen;
mod selected_image;

fn build_image_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>> {
    match config.classifier {
        ClassifierKind::Onnx => Ok(Arc::new(ImageClassifierTractOnnx::new(
            config.model.clone(),
            logger,
        )?)),
        ClassifierKind::Fake => Ok(Arc::new(ImageClassifierFake::new(
            logger,
            FakeOutcome::Random {
                seed: config.fake_seed,
            },
        ))),
    }
}

fn build_device_camera(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn DeviceCamera + Send + Sync> {
    match config.camera {
        CameraKind::Fake => Arc::new(DeviceCameraFake::new(logger, true)),
        CameraKind::Folder => Arc::new(DeviceCameraCaptureFolder::new(
            config.camera_dir.clone(),
            logger,
        )),
        CameraKind::None => Arc::new(DeviceCameraFake::new(logger, false)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Args::parse().into_config();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier = build_image_classifier(&config, logger.clone())?;

    let device_camera = build_device_camera(&config, logger.clone());

    let photo_library = Arc::new(PhotoLibraryFileSystem::new(
        config.library_dir.clone(),
        logger.clone(),
    ));

    match config.display {
        DisplayKind::Console => {
            let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));
            let screen = PhotoScreen::new(
                config,
                logger,
                device_camera,
                photo_library,
                image_classifier,
                device_display,
            );
            screen.run()
        }
        DisplayKind::Gui => {
            let (device_display, window) = DeviceDisplayGui::new();
            let title = config.window_title.clone();
            let screen = PhotoScreen::new(
                config,
                logger,
                device_camera,
                photo_library,
                image_classifier,
                Arc::new(Mutex::new(device_display)),
            );

            let screen_thread = std::thread::spawn(move || screen.run());

            window.run(&title)?;

            screen_thread
                .join()
                .map_err(|_| "photo screen thread panicked")?
        }
    }
}
