use crate::App;
use ratatui::Frame;

use super::{dialogs, generator, header, landing, layout, legend, scanner, toast};
use qrkit::Screen;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let legend_state = legend::LegendState::from_model(&app.model);
    let legend_height = legend::calculate_legend_height(size.width, legend_state);
    let layout_info = layout::calculate_layout(size, legend_height);

    header::render_header(f, layout_info.header_area, app.model.screen);

    match app.model.screen {
        Screen::Landing => landing::render_landing(f, layout_info.content_area, app.model.landing),
        Screen::Generator => generator::render_generator(
            f,
            layout_info.content_area,
            &app.model.generator,
            app.qr_image.as_mut(),
            app.model.ui.image_font_size,
        ),
        Screen::Scanner => scanner::render_scanner(
            f,
            layout_info.content_area,
            &app.model.scanner,
            app.preview.as_mut(),
        ),
    }

    legend::render_legend(f, layout_info.legend_area, legend_state);

    // Modal dialogs on top of the screen
    if let Some(prompt) = &app.model.ui.path_prompt {
        dialogs::render_path_prompt(f, prompt);
    }

    // Render toast notification (on top of everything)
    if let Some(message) = app.model.ui.toast_text() {
        toast::render_toast(f, size, message);
    }
}
