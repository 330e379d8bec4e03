use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use std::{fs::OpenOptions, io, path::PathBuf, sync::Mutex};
use tokio::sync::mpsc;

use qrkit::config::{self, Config, QrRenderMode};
use qrkit::model::{GeneratorModel, Model, Screen};
use qrkit::services::{self, CommandDesktop, ScanController, ScanEvent, ScanSettings};

mod app;
mod handlers;
mod ui;

/// QR code toolkit for the terminal: generate and scan QR codes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/qrkit-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Screen to start on: landing, generate or scan
    #[arg(long)]
    screen: Option<String>,

    /// Prefill the generator with this text
    #[arg(long)]
    text: Option<String>,
}

fn debug_log_path() -> PathBuf {
    std::env::temp_dir().join("qrkit-debug.log")
}

/// Install the file logger when `--debug` is given; otherwise tracing stays a no-op
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("qrkit=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::debug!("Debug mode enabled");
    Ok(())
}

/// Rendered QR image for the graphics protocol, keyed by the payload it shows
pub struct QrImage {
    pub payload: String,
    pub protocol: StatefulProtocol,
}

pub struct App {
    pub model: Model,

    config: Config,
    controller: ScanController,
    scan_rx: mpsc::UnboundedReceiver<ScanEvent>,
    desktop: CommandDesktop,

    image_picker: Option<Picker>,

    /// Graphics-protocol rendering of the current QR code
    qr_image: Option<QrImage>,

    /// Latest camera frame when the live preview is on
    preview: Option<StatefulProtocol>,
}

impl App {
    fn new(config: Config, generator_text: Option<String>) -> Self {
        let (controller, scan_rx) =
            ScanController::new(services::default_backend(), ScanSettings::from(&config));
        let desktop = CommandDesktop::from_config(&config);

        let mut model = Model::new(config.vim_mode);
        if let Some(text) = generator_text {
            model.generator = GeneratorModel::with_text(&text);
        }

        let wants_graphics =
            config.qr_render == QrRenderMode::Image || config.camera_preview;
        let image_picker = if wants_graphics {
            let picker = create_picker(&config.image_protocol);
            model.ui.image_font_size = Some(picker.font_size());
            Some(picker)
        } else {
            tracing::debug!("Terminal graphics not requested, using text rendering");
            None
        };

        Self {
            model,
            config,
            controller,
            scan_rx,
            desktop,
            image_picker,
            qr_image: None,
            preview: None,
        }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key).await
    }
}

/// Detect the terminal's graphics support, honouring an explicit protocol
fn create_picker(protocol: &str) -> Picker {
    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("Image rendering: failed to detect terminal: {}", e);
            Picker::from_fontsize((8, 16))
        }
    };

    let font_size = picker.font_size();
    tracing::debug!("Image font size: {}x{}", font_size.0, font_size.1);

    match protocol.to_lowercase().as_str() {
        "auto" => tracing::debug!("Image rendering: auto-detected protocol"),
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => tracing::debug!(
            "Image rendering: unknown protocol '{}', using auto-detect",
            unknown
        ),
    }
    picker
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Determine config file path; running without one uses defaults
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            tracing::debug!("Loading config from: {}", path.display());
            Config::load(&path)?
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let start_screen = match args.screen.as_deref() {
        Some(name) => name.parse::<Screen>()?,
        None => Screen::Landing,
    };
    let start_screen = if args.text.is_some() && start_screen == Screen::Landing {
        Screen::Generator
    } else {
        start_screen
    };

    // Setup terminal (graphics detection needs raw mode)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize app
    let mut app = App::new(config, args.text);
    app.navigate(start_screen).await;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Release the camera whatever the exit path
    app.controller.shutdown().await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Clear terminal to remove leftover graphics after a screen change
        if app.model.ui.graphics_cleanup {
            terminal.clear()?;
            app.model.ui.graphics_cleanup = false;
        }

        // Keep the graphics rendering in step with the payload
        app.sync_qr_image();

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process scan worker events (non-blocking)
        while let Ok(event) = app.scan_rx.try_recv() {
            app.handle_scan_event(event).await;
        }

        // Poll at most 250ms so decode results show up promptly
        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }
    }

    Ok(())
}
