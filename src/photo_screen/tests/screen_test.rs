use crate::image_classifier::impl_fake::FakeOutcome;
use crate::photo_library::impl_fake::PhotoLibraryFake;
use crate::photo_screen::core::{Event, SourceChoice};
use crate::photo_screen::render::Prompt;
use crate::photo_screen::tests::fixture::{beer_results, Fixture};
use crate::selected_image::ImageSourceKind;

#[test]
fn test_pick_from_library_and_classify() {
    let f = Fixture::with_library();
    let running = f.start();

    f.wait_for(|view| view.pick_enabled);
    running.send(Event::PickTapped);
    running.send(Event::SourceChosen(SourceChoice::PhotoLibrary));

    f.wait_for(|view| matches!(view.prompt, Some(Prompt::Library { .. })));
    running.send(Event::LibraryEntryChosen(0));

    let view = f.wait_for(|view| view.result_text == "(0.90) lager | (0.08) stout");
    let preview = view.preview.unwrap();
    assert_eq!(preview.name, "pint.jpg");
    assert_eq!(preview.source, ImageSourceKind::PhotoLibrary);
    assert!(view.pick_enabled);

    assert!(f
        .device_display
        .views()
        .iter()
        .any(|v| v.result_text == "Analyzing..."));
    assert!(f.device_display.is_subscribed());

    running.quit().unwrap();
}

#[test]
fn test_capture_from_camera_and_classify() {
    let f = Fixture::new(
        true,
        PhotoLibraryFake::new(vec![]),
        FakeOutcome::Fixed(beer_results()),
    );
    let running = f.start();

    running.send(Event::PickTapped);
    running.send(Event::SourceChosen(SourceChoice::Camera));

    let view = f.wait_for(|view| view.result_text == "(0.90) lager | (0.08) stout");
    assert_eq!(view.preview.unwrap().source, ImageSourceKind::Camera);

    running.quit().unwrap();
}

#[test]
fn test_unavailable_camera_leaves_screen_unchanged() {
    let f = Fixture::new(
        false,
        PhotoLibraryFake::new(vec![]),
        FakeOutcome::Fixed(beer_results()),
    );
    let running = f.start();

    running.send(Event::PickTapped);
    running.send(Event::SourceChosen(SourceChoice::Camera));

    let view = f.wait_for(|view| view.notice.as_deref() == Some("Camera is not available"));
    assert!(view.preview.is_none());
    assert_eq!(view.result_text, f.config.initial_label);
    assert!(view.pick_enabled);

    running.quit().unwrap();
}

#[test]
fn test_classifier_failure_is_shown() {
    let f = Fixture::new(
        true,
        PhotoLibraryFake::new(vec![]),
        FakeOutcome::Fail("model crashed".to_string()),
    );
    let running = f.start();

    running.send(Event::PickTapped);
    running.send(Event::SourceChosen(SourceChoice::Camera));

    let view = f.wait_for(|view| view.result_text.starts_with("Unable to analyze image."));
    assert!(view.result_text.contains("model crashed"));

    running.quit().unwrap();
}

#[test]
fn test_conversion_failure_stops_screen() {
    let f = Fixture::new(
        true,
        PhotoLibraryFake::new(vec![]),
        FakeOutcome::Unconvertible,
    );
    let running = f.start();

    running.send(Event::PickTapped);
    running.send(Event::SourceChosen(SourceChoice::Camera));

    let result = running.handle.join().unwrap();

    let error = result.unwrap_err();
    assert!(error.to_string().contains("unable to convert image"));
    let last = f.device_display.last_view().unwrap();
    assert!(last.result_text.starts_with("Error:"));
}

#[test]
fn test_broken_library_shows_notice() {
    let f = Fixture::new(
        true,
        PhotoLibraryFake::failing("disk unplugged"),
        FakeOutcome::Fixed(beer_results()),
    );
    let running = f.start();

    running.send(Event::PickTapped);
    running.send(Event::SourceChosen(SourceChoice::PhotoLibrary));

    let view = f.wait_for(|view| {
        view.notice
            .as_deref()
            .map(|n| n.contains("disk unplugged"))
            .unwrap_or(false)
    });
    assert!(view.pick_enabled);

    running.quit().unwrap();
}
