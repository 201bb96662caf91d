//! Command selection and context wiring.
//!
//! This module is the only place that assembles the full application context:
//! parsed arguments, the API loaded from the resolved data directory, and the
//! layered configuration. Handlers receive the context and never touch
//! process-level concerns themselves.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cardzapp::api::CardzApi;
use cardzapp::config::CardzConfig;
use cardzapp::store::FsBackend;

use super::handlers::{self, AppContext};
use super::render;
use super::setup::{Cli, Commands, DesignCommands, LinkCommands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_override = cli
        .data
        .clone()
        .or_else(|| std::env::var_os("CARDZ_DATA").map(PathBuf::from));
    let backend = FsBackend::resolve(data_override)?;
    let (api, startup_messages) = CardzApi::load(backend)?;
    let config = CardzConfig::load()?;

    render::messages(&startup_messages);

    let mut ctx = AppContext {
        api,
        config,
        json: cli.json,
    };

    // Naked `cardz` shows the card
    let Some(command) = cli.command else {
        return handlers::show(&ctx);
    };

    match command {
        Commands::Show => handlers::show(&ctx),
        Commands::Set { field, value, clear } => handlers::set(&mut ctx, field, value, clear),
        Commands::Link { action } => match action {
            LinkCommands::Add { kind, value, message } => {
                handlers::link_add(&mut ctx, kind, value, message)
            }
            LinkCommands::Set { index, value, message } => {
                handlers::link_set(&mut ctx, index, value, message)
            }
            LinkCommands::Rm { index } => handlers::link_rm(&mut ctx, index),
            LinkCommands::List => handlers::link_list(&ctx),
            LinkCommands::Qr { index } => handlers::link_qr(&ctx, index),
        },
        Commands::Design { action } => match action {
            DesignCommands::Set { attr, value } => handlers::design_set(&mut ctx, attr, &value),
            DesignCommands::Colors => handlers::design_colors(),
        },
        Commands::Qr => handlers::card_qr(&ctx),
        Commands::Pdf { out } => handlers::pdf(&ctx, out),
        Commands::Backup => handlers::backup(&ctx),
        Commands::Restore { yes } => handlers::restore(&mut ctx, yes),
        Commands::Reset { yes } => handlers::reset(&mut ctx, yes),
        Commands::Config => handlers::config(&ctx),
    }
}
