// EssaySort - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Headless batch runs (any --export-* option)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use essaysort::app;

pub use essaysort::core;
pub use essaysort::platform;
pub use essaysort::ui;
pub use essaysort::util;

use clap::Parser;
use std::path::PathBuf;

/// Windows fallback fonts for the toolbar and dialog glyphs: the theme
/// toggle icons (sun and crescent moon), the status-bar warning sign and
/// the About window's book icon.
#[cfg(target_os = "windows")]
const GLYPH_FONTS: &[(&str, &str)] = &[
    ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
    ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
];

/// Register Windows emoji fonts behind egui's built-in proportional fonts.
///
/// The egui defaults stay first, so text rendering is unchanged; the
/// Segoe fonts only fill in glyphs such as the theme icons
/// (`THEME_ICON_DARK`, `THEME_ICON_LIGHT`) when the built-ins lack them.
/// Other platforms keep the egui defaults.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();
        let mut added = Vec::new();

        for (name, path) in GLYPH_FONTS {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    added.push(*name);
                }
                Err(e) => {
                    tracing::debug!(font = name, error = %e, "Glyph font unavailable");
                }
            }
        }

        if added.is_empty() {
            tracing::warn!("No Windows emoji font found; theme icons use the built-in glyphs");
            return;
        }

        if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
            proportional.extend(added.iter().map(|name| (*name).to_owned()));
        }
        ctx.set_fonts(fonts);
        tracing::debug!(fonts = ?added, "Glyph fonts registered");
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// EssaySort - sorts essay-topic links into themed sections.
///
/// Opens an HTML page whose `#source` element lists topic links, sorts
/// them into descriptive, narrative and expository sections, and shows
/// them with filter, search and theme controls. Any --export-* option
/// runs without a window and writes the result instead.
#[derive(Parser, Debug)]
#[command(name = "EssaySort", version, about)]
struct Cli {
    /// HTML page containing the topic links. Without one the window opens
    /// empty; use File > Open Page.
    page: Option<PathBuf>,

    /// Base URL used to resolve relative link targets.
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Initial filter: all, descriptive, narrative or expository.
    #[arg(short = 'f', long = "filter")]
    filter: Option<String>,

    /// Initial search query.
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Write the rendered page as HTML and exit.
    #[arg(long = "export-html")]
    export_html: Option<PathBuf>,

    /// Write the sorted topics as JSON and exit.
    #[arg(long = "export-json")]
    export_json: Option<PathBuf>,

    /// Write the sorted topics as CSV and exit.
    #[arg(long = "export-csv")]
    export_csv: Option<PathBuf>,

    /// Treat the environment as preferring a dark colour scheme.
    #[arg(long = "prefers-dark")]
    prefers_dark: bool,

    /// Keep the theme choice in memory only.
    #[arg(long = "no-persist")]
    no_persist: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn fail(message: impl std::fmt::Display) -> ! {
    tracing::error!("{message}");
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "EssaySort starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let filter = match cli.filter.as_deref().map(|raw| {
        core::model::FilterKey::parse(raw).ok_or_else(|| format!("unknown filter '{raw}'"))
    }) {
        Some(Ok(key)) => Some(key),
        Some(Err(e)) => fail(e),
        None => None,
    };

    let base_url = match cli.base_url.as_deref().map(platform::source::parse_base_url) {
        Some(Ok(url)) => Some(url),
        Some(Err(e)) => fail(e),
        None => None,
    };

    let store: Box<dyn core::theme::PreferenceStore> = if cli.no_persist {
        Box::new(core::theme::MemoryPreferenceStore::default())
    } else {
        Box::new(platform::prefs::FilePreferenceStore::open(
            &platform_paths.preferences_file(),
        ))
    };

    let request = app::batch::BatchRequest {
        filter,
        search: cli.search.clone(),
        html: cli.export_html.clone(),
        json: cli.export_json.clone(),
        csv: cli.export_csv.clone(),
    };

    if request.has_exports() {
        let Some(page) = cli.page.as_deref() else {
            fail("a page is required when exporting");
        };
        let prefers_dark = cli.prefers_dark.then_some(true);
        let mut state = app::state::AppState::new(config, store, prefers_dark, cli.debug);
        state.base_url = base_url;
        state.warnings = config_warnings;
        if let Err(e) = state.open_page(page) {
            fail(e);
        }
        match app::batch::run(&mut state, &request) {
            Ok(report) => {
                println!("Sorted {} topics.", report.topics);
                if let Some(matches) = report.matches {
                    println!("{matches} matching topics.");
                }
                for path in &report.written {
                    println!("Wrote {}", path.display());
                }
            }
            Err(e) => fail(e),
        }
        return;
    }

    tracing::info!("Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    let cli_prefers_dark = cli.prefers_dark;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);

            let prefers_dark = if cli_prefers_dark {
                Some(true)
            } else {
                cc.egui_ctx.system_theme().map(|t| t == egui::Theme::Dark)
            };
            let mut state = app::state::AppState::new(config, store, prefers_dark, cli.debug);
            state.base_url = base_url;
            state.warnings = config_warnings;

            if let Some(ref page) = cli.page {
                // Failures are logged and shown in the status bar.
                if state.open_page(page).is_ok() {
                    app::batch::apply_view(&mut state, &request);
                }
            }

            Ok(Box::new(gui::EssaySortApp::new(&cc.egui_ctx, state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch EssaySort GUI: {e}");
        std::process::exit(1);
    }
}
