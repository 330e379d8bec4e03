// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, content, legend)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the top title bar
// - landing: Renders the landing screen (scan / generate buttons)
// - generator: Renders the text editor, the QR code and its action row
// - scanner: Renders the camera status, preview and decoded result
// - buttons: Renders a row of selectable buttons
// - legend: Renders hotkey legend
// - dialogs: Renders the image path prompt
// - toast: Renders toast notifications (brief pop-up messages)

pub mod buttons;
pub mod dialogs;
pub mod generator;
pub mod header;
pub mod landing;
pub mod layout;
pub mod legend;
pub mod render;
pub mod scanner;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
