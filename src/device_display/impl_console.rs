use crate::device_display::interface::DeviceDisplay;
use crate::photo_screen::core::{Event, SourceChoice};
use crate::photo_screen::render::{Prompt, ScreenView};
use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::Sender;

const PANEL_WIDTH: usize = 48;

pub struct DeviceDisplayConsole {
    last_frame: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_frame: vec![] }
    }
}

/// Maps a typed command to a screen event.
pub fn parse_command(line: &str) -> Option<Event> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();

    match command.as_str() {
        "pick" | "p" => Some(Event::PickTapped),
        "camera" => Some(Event::SourceChosen(SourceChoice::Camera)),
        "library" => Some(Event::SourceChosen(SourceChoice::PhotoLibrary)),
        "cancel" | "c" => Some(Event::SourceChosen(SourceChoice::Cancel)),
        "back" => Some(Event::LibraryCancelled),
        "open" | "o" => {
            let number: usize = words.next()?.parse().ok()?;
            number.checked_sub(1).map(Event::LibraryEntryChosen)
        }
        "quit" | "q" | "exit" => Some(Event::Quit),
        _ => None,
    }
}

fn boxed_line(text: &str) -> String {
    let truncated: String = text.chars().take(PANEL_WIDTH).collect();
    let padding = PANEL_WIDTH - truncated.chars().count();
    format!("│{}{}│", truncated, " ".repeat(padding))
}

pub fn render_lines(view: &ScreenView) -> Vec<String> {
    let border = "─".repeat(PANEL_WIDTH);
    let mut lines = vec![format!("┌{}┐", border), boxed_line(&view.title)];

    lines.push(format!("├{}┤", border));
    match &view.preview {
        Some(image) => {
            let (width, height) = image.oriented_dimensions();
            lines.push(boxed_line(&format!(
                "[{} {}x{} from {}]",
                image.name, width, height, image.source
            )));
        }
        None => lines.push(boxed_line("[no image]")),
    }
    for text_line in view.result_text.lines() {
        lines.push(boxed_line(text_line));
    }
    if let Some(notice) = &view.notice {
        lines.push(boxed_line(&format!("! {}", notice)));
    }
    lines.push(format!("└{}┘", border));

    match &view.prompt {
        Some(Prompt::ChooseSource {
            title,
            message,
            options,
        }) => {
            lines.push(format!("{}: {}", title, message));
            let hints: Vec<String> = options
                .iter()
                .map(|(label, choice)| {
                    let command = match choice {
                        SourceChoice::Camera => "camera",
                        SourceChoice::PhotoLibrary => "library",
                        SourceChoice::Cancel => "cancel",
                    };
                    format!("[{}] {}", command, label)
                })
                .collect();
            lines.push(hints.join("  "));
        }
        Some(Prompt::Library { entries }) => {
            lines.push("Photo Library".to_string());
            for (index, name) in entries.iter().enumerate() {
                lines.push(format!("  {:>3}. {}", index + 1, name));
            }
            lines.push("[open <n>] choose  [back] cancel".to_string());
        }
        None if view.pick_enabled => lines.push("[pick] choose a photo  [quit] exit".to_string()),
        None => {}
    }

    lines
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn subscribe(&mut self, events: Sender<Event>) -> Result<(), Box<dyn Error + Send + Sync>> {
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match parse_command(&line) {
                    Some(event) => {
                        if events.send(event).is_err() {
                            return;
                        }
                    }
                    None => println!("Unknown command: {}", line.trim()),
                }
            }
            let _ = events.send(Event::Quit);
        });
        Ok(())
    }

    fn render(&mut self, view: &ScreenView) -> Result<(), Box<dyn Error + Send + Sync>> {
        let frame = render_lines(view);
        if frame == self.last_frame {
            return Ok(());
        }
        for line in &frame {
            println!("{}", line);
        }
        self.last_frame = frame;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo_screen::render::source_prompt;

    fn view() -> ScreenView {
        ScreenView {
            title: "Photo Classifier".to_string(),
            preview: None,
            result_text: "(0.93) lager | (0.05) stout".to_string(),
            notice: None,
            pick_enabled: true,
            prompt: None,
        }
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_command("pick"), Some(Event::PickTapped)));
        assert!(matches!(
            parse_command(" Camera "),
            Some(Event::SourceChosen(SourceChoice::Camera))
        ));
        assert!(matches!(
            parse_command("cancel"),
            Some(Event::SourceChosen(SourceChoice::Cancel))
        ));
        assert!(matches!(
            parse_command("open 2"),
            Some(Event::LibraryEntryChosen(1))
        ));
        assert!(parse_command("open 0").is_none());
        assert!(parse_command("open x").is_none());
        assert!(parse_command("").is_none());
        assert!(parse_command("dance").is_none());
        assert!(matches!(parse_command("q"), Some(Event::Quit)));
    }

    #[test]
    fn test_lines_are_boxed_to_panel_width() {
        let lines = render_lines(&view());

        let boxed: Vec<&String> = lines.iter().filter(|l| l.starts_with('│')).collect();
        assert!(boxed
            .iter()
            .all(|l| l.chars().count() == PANEL_WIDTH + 2));
        assert!(lines.iter().any(|l| l.contains("(0.93) lager | (0.05) stout")));
        assert!(lines.iter().any(|l| l.contains("[no image]")));
    }

    #[test]
    fn test_multiline_result_splits() {
        let mut view = view();
        view.result_text = "Unable to analyze image.\nclassification failed: boom".to_string();

        let lines = render_lines(&view);

        assert!(lines.contains(&boxed_line("Unable to analyze image.")));
        assert!(lines.contains(&boxed_line("classification failed: boom")));
    }

    #[test]
    fn test_source_prompt_lists_commands() {
        let mut view = view();
        view.pick_enabled = false;
        view.prompt = Some(source_prompt());

        let lines = render_lines(&view);

        assert!(lines.contains(&"Browse Attachment: Choose A Source".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.contains("[camera] Camera") && l.contains("[cancel] Cancel")));
    }
}
