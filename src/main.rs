use action_editor::config::{load_action, save_action, AppConfig};
use action_editor::ui::ActionEditorHost;
use action_editor_core::{ActionConfig, EditorContext, EditorRegistry, Translations};
use clap::Parser;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use log::{error, info, warn};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

const APP_ID: &str = "org.action_editor.ActionEditor";

/// action-editor - Structured editor for automation script actions
#[derive(Parser, Debug, Clone)]
#[command(name = "action-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Action JSON file to edit. Edits are written back to it.
    #[arg(value_name = "ACTION_FILE")]
    action_file: Option<PathBuf>,

    /// Action type to edit (detected from the file when omitted)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    action_type: Option<String>,

    /// Show the editor read-only
    #[arg(long)]
    disabled: bool,

    /// JSON file with translation overrides
    #[arg(long, value_name = "FILE")]
    translations: Option<PathBuf>,

    /// Print the default config of the action type as JSON and exit
    #[arg(long)]
    print_default: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Everything build_ui needs, resolved before GTK starts
struct Startup {
    cli: Cli,
    registry: EditorRegistry,
    translations: Translations,
    action_type: String,
    action: ActionConfig,
    action_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Allow RUST_LOG to override CLI setting
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let registry = EditorRegistry::with_defaults();

    if cli.print_default {
        let action_type = cli.action_type.as_deref().unwrap_or("delay");
        match registry
            .default_config(action_type)
            .map_err(anyhow::Error::from)
            .and_then(|config| Ok(serde_json::to_string_pretty(&config)?))
        {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let startup = match prepare(cli, registry) {
        Ok(startup) => Rc::new(startup),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_ui(app, &startup));

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["action-editor"]);
}

/// Resolve translations, action type and the initial action config
fn prepare(cli: Cli, registry: EditorRegistry) -> anyhow::Result<Startup> {
    let app_config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let translations = match cli
        .translations
        .clone()
        .or_else(|| app_config.translations_path.clone())
    {
        Some(path) => Translations::load_from_path(&path).unwrap_or_else(|e| {
            warn!("Failed to load translations from {}: {}", path.display(), e);
            Translations::new()
        }),
        None => Translations::new(),
    };

    // Reopen the previous session's file when none is given
    let action_file = cli.action_file.clone().or_else(|| {
        app_config
            .last_action_file
            .clone()
            .filter(|path| path.exists())
    });

    let loaded = match &action_file {
        Some(path) if path.exists() => {
            let action = load_action(path)?;
            info!("Loaded action from {}", path.display());
            Some(action)
        }
        _ => None,
    };

    let action_type = match (&cli.action_type, &loaded) {
        (Some(action_type), _) => action_type.clone(),
        (None, Some(action)) => registry
            .detect_type(action)
            .ok_or_else(|| anyhow::anyhow!("Could not detect the action type of the file"))?
            .to_string(),
        (None, None) => "delay".to_string(),
    };

    let action = match loaded {
        Some(action) => action,
        None => registry.default_config(&action_type)?,
    };

    Ok(Startup {
        cli,
        registry,
        translations,
        action_type,
        action,
        action_file,
    })
}

fn build_ui(app: &Application, startup: &Rc<Startup>) {
    info!("Building UI");

    let app_config = Rc::new(RefCell::new(AppConfig::load().unwrap_or_default()));

    let context = EditorContext::new(Rc::new(startup.translations.clone()));
    let host = match ActionEditorHost::new(
        &startup.registry,
        &startup.action_type,
        context,
        startup.action.clone(),
        startup.cli.disabled,
    ) {
        Ok(host) => Rc::new(host),
        Err(e) => {
            error!("Cannot create editor: {}", e);
            app.quit();
            return;
        }
    };

    let action_file = startup.action_file.clone();
    host.set_on_value_changed(move |action| {
        println!("{}", action.to_value());
        if let Some(path) = &action_file {
            if let Err(e) = save_action(path, action) {
                warn!("Failed to save action to {}: {}", path.display(), e);
            }
        }
    });

    let window = {
        let cfg = app_config.borrow();
        ApplicationWindow::builder()
            .application(app)
            .title(format!("Edit {} action", startup.action_type))
            .default_width(cfg.window.width)
            .default_height(cfg.window.height)
            .build()
    };
    window.set_child(Some(host.widget()));

    let app_config_for_close = app_config.clone();
    let host_for_close = host.clone();
    let action_file = startup.action_file.clone();
    let translations_path = startup.cli.translations.clone();
    window.connect_close_request(move |window| {
        host_for_close.cleanup();

        let mut cfg = app_config_for_close.borrow_mut();
        cfg.window.width = window.default_width();
        cfg.window.height = window.default_height();
        if action_file.is_some() {
            cfg.last_action_file = action_file.clone();
        }
        if translations_path.is_some() {
            cfg.translations_path = translations_path.clone();
        }
        match cfg.save() {
            Ok(()) => info!("Configuration saved successfully"),
            Err(e) => warn!("Failed to save configuration: {}", e),
        }
        glib::Propagation::Proceed
    });

    window.present();
}
