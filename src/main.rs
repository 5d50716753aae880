use iced::widget::{button, column, container, pick_list, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Declare the sorter module
mod sorter;

use sorter::RunReport;

/// Selectable designer counts. The engine validates the lower bound itself;
/// the pick list is what enforces the upper bound of 15.
const DESIGNER_CHOICES: [u8; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// Main application state
struct SplitImg {
    /// Number of designer folders to split into
    designer_count: u8,
    /// Whether a batch is currently running (Run is disabled meanwhile)
    running: bool,
    /// Status line shown to the user
    status: String,
    /// Count line shown to the user
    count_line: String,
    /// Elapsed-time line shown to the user
    time_line: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a designer count from the dropdown
    DesignerCountPicked(u8),
    /// User clicked the "Run" button
    Run,
    /// Background batch completed (or failed fatally)
    RunComplete(Result<RunReport, String>),
}

impl SplitImg {
    fn new() -> (Self, Task<Message>) {
        info!("SplitImg initialized");

        (
            SplitImg {
                designer_count: 1,
                running: false,
                status: "Status: Idle".to_string(),
                count_line: "Images Processed: 0".to_string(),
                time_line: "Time Taken: 0.00 seconds".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DesignerCountPicked(count) => {
                self.designer_count = count;
                Task::none()
            }
            Message::Run => {
                // Re-entrant triggering is blocked while a batch runs
                if self.running {
                    return Task::none();
                }

                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Source Folder")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.running = true;
                    self.status = "Status: In Progress".to_string();

                    return Task::perform(
                        sorter::run_batch(folder_path, self.designer_count as usize),
                        Message::RunComplete,
                    );
                }

                self.status = "Status: Idle (no folder selected)".to_string();
                Task::none()
            }
            Message::RunComplete(result) => {
                self.running = false;

                match result {
                    Ok(report) => {
                        self.status = "Status: Idle".to_string();
                        self.count_line = format!("Images Processed: {}", report.processed);
                        self.time_line =
                            format!("Time Taken: {:.2} seconds", report.elapsed_secs);
                    }
                    Err(e) => {
                        self.status = format!("Status: Failed ({e})");
                    }
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let run_button = button("Run")
            .padding(10)
            .on_press_maybe((!self.running).then_some(Message::Run));

        let content: Column<Message> = column![
            text("SplitImg").size(36),
            text("Select the number of Designers").size(14),
            pick_list(
                DESIGNER_CHOICES,
                Some(self.designer_count),
                Message::DesignerCountPicked,
            ),
            run_button,
            text(&self.status).size(16),
            text(&self.count_line).size(16),
            text(&self.time_line).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    iced::application("SplitImg", SplitImg::update, SplitImg::view)
        .theme(SplitImg::theme)
        .window_size(iced::Size::new(500.0, 600.0))
        .centered()
        .run_with(SplitImg::new)
}
