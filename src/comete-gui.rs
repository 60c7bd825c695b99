//! Comète desktop application
//!
//! An educational viewer for the great periods of history, with a quiz and
//! account settings, built with the egui framework.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators (interactions, theme, settings, window title)
//! - `state/` - GUI-only state (navigation, quiz session)
//! - `ui/` - Page and panel rendering
//!
//! Preferences, translations, the period catalog and the quiz rules live in
//! the `comete` library.

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, PageTitleCoordinator, SettingsCoordinator, ThemeCoordinator};
use comete::{
    JsonFileProfileStore, Language, MemoryProfileStore, PreferencesController, ProfileStore,
    SharedThemeProvider, ThemeProvider, ToastQueue,
};
use ui::panel_manager::PanelManager;

const DEFAULT_LOG_FILTER: &str = "comete=info,comete_gui=info";

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "comete-gui", version, about = "Comète : voyagez à travers le temps")]
struct Args {
    /// Interface language for this session (fr, en, es)
    #[arg(long)]
    lang: Option<Language>,

    /// Directory holding profile.json (defaults to the platform data directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep the profile in memory only; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Log filter, e.g. "comete=debug" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Picks the profile store from the command line.
fn open_profile_store(args: &Args) -> Box<dyn ProfileStore> {
    if args.ephemeral {
        tracing::info!("ephemeral session, profile kept in memory");
        return Box::new(MemoryProfileStore::new());
    }
    if let Some(dir) = &args.data_dir {
        return Box::new(JsonFileProfileStore::in_dir(dir));
    }
    match JsonFileProfileStore::in_default_location() {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "profile store");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "falling back to in-memory profile store");
            Box::new(MemoryProfileStore::new())
        }
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    if let Err(errors) = comete::i18n::validate() {
        for error in &errors {
            tracing::error!(%error, "translation problem");
        }
        anyhow::bail!("{} translation problem(s) found", errors.len());
    }
    let periods = comete::catalog::periods()?;
    tracing::info!(periods = periods.len(), "starting Comète");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Comète"),
        ..Default::default()
    };

    eframe::run_native(
        "Comète",
        options,
        Box::new(move |cc| Ok(Box::new(CometeApp::new(cc, args, periods)))),
    )
    .map_err(|e| anyhow::anyhow!("window system error: {e}"))
}

/// The Comète application: state plus the per-frame coordination.
struct CometeApp {
    state: AppState,
}

impl CometeApp {
    /// Creates the app, restoring theme and session settings from eframe storage.
    fn new(cc: &eframe::CreationContext, args: Args, periods: &'static [comete::catalog::Period]) -> Self {
        let theme_provider = SharedThemeProvider::new(ThemeCoordinator::load_theme_from_storage(cc.storage));
        let toasts = ToastQueue::new();

        let (mut prefs, display) = PreferencesController::new(
            open_profile_store(&args),
            Box::new(toasts.clone()),
            Box::new(theme_provider.clone()),
        );

        let (appearance, notifications) = SettingsCoordinator::load_session(cc.storage);
        prefs.restore_session(appearance, notifications);

        if let Some(language) = args.lang {
            prefs.set_language(language);
        }

        let state = AppState::new(prefs, display, theme_provider, toasts, periods);
        ThemeCoordinator::install_palettes(&cc.egui_ctx, &state);

        Self { state }
    }
}

impl eframe::App for CometeApp {
    /// Called when the app is being shut down, and periodically by eframe.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme_provider.theme());
        SettingsCoordinator::save_session(storage, &self.state.prefs);
    }

    /// Main update loop:
    /// 1. Apply theme and text scale if they changed
    /// 2. Update the window title
    /// 3. Render all panels via PanelManager
    /// 4. Hand the frame's interaction to the ApplicationCoordinator
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &mut self.state);
        PageTitleCoordinator::update_title(ctx, &mut self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &self.state) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
            ctx.request_repaint();
        }
    }
}
