//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::render::{print_messages, render_text_list, render_tree};
use super::setup::{Cli, Commands, FieldArgs};
use super::terminal::TerminalFrontend;
use clap::Parser;
use directories::ProjectDirs;
use flightres::api::{AppPaths, ConfigAction, ReservationsApi};
use flightres::config::AppConfig;
use flightres::error::{ReservationError, Result};
use flightres::model::{local_now, ReservationId};
use flightres::screens::create::CreateScreen;
use flightres::screens::form::{FormFields, FormInput};
use flightres::screens::validation::validate;
use flightres::screens::ScreenSettings;
use flightres::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: ReservationsApi<FileStore>,
    config: AppConfig,
}

impl AppContext {
    fn settings(&self) -> ScreenSettings {
        ScreenSettings {
            rules: self.config.temporal_rules,
            clock: local_now,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Ui) => handle_ui(&mut ctx),
        Some(Commands::Reserve { fields }) => handle_reserve(&mut ctx, fields),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Destinations) => handle_destinations(&ctx),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
    }
}

/// Logs go to stderr; stdout is reserved for rendered output.
/// `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = AppConfig::load(&data_dir)?;
    let api = ReservationsApi::new(FileStore::new(data_dir.clone()), AppPaths { data_dir });
    Ok(AppContext { api, config })
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "flightres", "flightres")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ReservationError::Config(
                "Could not determine a data directory; pass --data-dir".to_string(),
            )
        })
}

fn handle_ui(ctx: &mut AppContext) -> Result<()> {
    ctx.api.ensure_destinations(&ctx.config)?;
    let mut screen = CreateScreen::open(&ctx.api, ctx.settings())?;
    let mut ui = TerminalFrontend::stdio();
    screen.run(&mut ctx.api, &mut ui)
}

fn handle_reserve(ctx: &mut AppContext, args: FieldArgs) -> Result<()> {
    ctx.api.ensure_destinations(&ctx.config)?;
    let mut fields = FormFields::build(ctx.api.retrieve_destinations()?);
    apply_field_args(&mut fields, args)?;
    check_form(ctx, &fields)?;

    let result = ctx
        .api
        .create_reservation(fields.values().to_fields(), None)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: ReservationId, args: FieldArgs) -> Result<()> {
    ctx.api.ensure_destinations(&ctx.config)?;
    let tree = ctx.api.retrieve_reservations()?;
    let row = tree
        .by_id(id)
        .map(|r| r.row.clone())
        .ok_or(ReservationError::NotFound(id))?;

    let mut fields = FormFields::build(ctx.api.retrieve_destinations()?);
    fields.populate(&row);
    apply_field_args(&mut fields, args)?;
    check_form(ctx, &fields)?;

    let result = ctx
        .api
        .update_reservation(id, fields.values().to_fields(), None)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_reservations()?;
    print!(
        "{}",
        render_tree(&ctx.api.retrieve_column_names(), &result.tree)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_destinations(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_destinations()?;
    print!(
        "{}",
        render_text_list(
            &result.destinations,
            "No destinations. Run `flightres init` to add the configured ones."
        )
    );
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: ReservationId) -> Result<()> {
    let result = ctx.api.delete_reservation(id, None)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    info!(data_dir = %ctx.api.paths().data_dir.display(), "store initialized");
    print_messages(&result.messages);
    Ok(())
}

/// Applies the given flags on top of the form's current values.
fn apply_field_args(fields: &mut FormFields, args: FieldArgs) -> Result<()> {
    if let Some(destination) = args.destination {
        if !fields.select_destination(&destination) {
            return Err(ReservationError::Validation(format!(
                "Unknown destination: {}",
                destination
            )));
        }
    }

    let inputs = [
        args.name.map(FormInput::Name),
        args.passport.map(FormInput::PassportNumber),
        args.gender.map(FormInput::Gender),
        args.departure.map(FormInput::Departure),
        args.arrival.map(FormInput::Arrival),
    ];
    for input in inputs.into_iter().flatten() {
        fields.apply(input);
    }
    Ok(())
}

/// Runs the form predicate; a rejected form becomes a `Validation` error
/// carrying the same message the interactive screens show.
fn check_form(ctx: &AppContext, fields: &FormFields) -> Result<()> {
    let validation = validate(fields.values(), local_now(), ctx.config.temporal_rules);
    if validation.is_valid {
        Ok(())
    } else {
        Err(ReservationError::Validation(validation.message))
    }
}
