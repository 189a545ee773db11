//! InfiniteSight image viewer GUI application
//!
//! This module provides an interactive desktop image viewer using the egui
//! framework. The viewer features:
//! - Asynchronous image loading that never blocks the UI thread, with a
//!   progress indicator and superseding of rapid re-requests
//! - Pan and zoom of the displayed image (drag, Ctrl+wheel, pinch)

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Drag-and-drop of image files onto the window
//! - An info panel with basic file metadata
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - State components for the image, view transform, and status
//! - `ui/` - UI panel rendering and layout
//! - `utils/` - Utility functions for formatting and file types

use eframe::egui;
use std::path::PathBuf;

mod app;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use insight::LoadSupervisor;
use ui::panel_manager::PanelManager;

/// Process-wide startup configuration for the viewer window.
struct ViewerConfig {
    /// Window title
    title: &'static str,
    /// Initial window size in points
    window_size: [f32; 2],
    /// Optional image to load on the first frame
    initial_file: Option<PathBuf>,
}

impl ViewerConfig {
    /// Builds the configuration from process arguments.
    fn from_args() -> Self {
        Self {
            title: "InfiniteSight - Modern Image Viewer",
            window_size: [1400.0, 900.0],
            initial_file: std::env::args().nth(1).map(PathBuf::from),
        }
    }
}

/// Main application entry point that initializes and launches the viewer GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("insight=info".parse().unwrap()),
        )
        .init();

    let config = ViewerConfig::from_args();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title),
        ..Default::default()
    };

    eframe::run_native(
        config.title,
        options,
        Box::new(move |cc| Ok(Box::new(InsightViewerApp::new(cc, config)))),
    )
}

/// The main image viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles load workflows and drop handling
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct InsightViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous image load supervisor
    supervisor: LoadSupervisor,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl InsightViewerApp {
    /// Creates a new viewer instance with preferences loaded from persistent
    /// storage. Optionally accepts an initial file path to load on startup.
    fn new(cc: &eframe::CreationContext, config: ViewerConfig) -> Self {
        let prefs = SettingsCoordinator::load_prefs(cc.storage);

        // Workers ping the event loop after each notification so progress
        // keeps painting while a load is in flight.
        let mut supervisor = LoadSupervisor::new();
        let repaint_ctx = cc.egui_ctx.clone();
        supervisor.set_repaint_hook(move || repaint_ctx.request_repaint());

        Self {
            state: AppState::with_prefs(prefs),
            supervisor,
            pending_file_load: config.initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: ui::panel_manager::PanelInteraction) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_image(&mut self.state, &mut self.supervisor, path);
            }
        }
    }
}

impl eframe::App for InsightViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_prefs(storage, &self.state.prefs);
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Apply drained load notifications (progress, accept, error)
    /// 2. Accept files dropped on the window
    /// 3. Load the initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::apply_load_events(&mut self.state, &mut self.supervisor, ctx);

        ApplicationCoordinator::handle_dropped_files(&mut self.state, &mut self.supervisor, ctx);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_image(&mut self.state, &mut self.supervisor, path);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
