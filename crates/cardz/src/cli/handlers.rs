//! One handler per CLI command. Handlers own the user-facing side effects the
//! core refuses to do: writing export payloads to disk, confirmation prompts,
//! and choosing between human and JSON rendering.

use std::fs;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use cardzapp::api::CardzApi;
use cardzapp::backup::FolderBackup;
use cardzapp::config::CardzConfig;
use cardzapp::model::LinkKind;
use cardzapp::store::FsBackend;

use super::render;
use super::setup::{DesignAttrArg, FieldArg};

pub struct AppContext {
    pub api: CardzApi<FsBackend>,
    pub config: CardzConfig,
    pub json: bool,
}

pub fn show(ctx: &AppContext) -> Result<()> {
    if ctx.json {
        println!("{}", ctx.api.record_json()?);
        return Ok(());
    }
    render::card_preview(ctx.api.record());
    Ok(())
}

pub fn set(ctx: &mut AppContext, field: FieldArg, value: Option<String>, clear: bool) -> Result<()> {
    let result = match field.content_field() {
        Some(content_field) => {
            let Some(text) = value else {
                bail!("a value is required for this field");
            };
            ctx.api.set_content(content_field, &text)?
        }
        None => {
            // Avatar: either a new reference or an explicit clear
            match (value, clear) {
                (Some(uri), false) => ctx.api.set_avatar(Some(uri))?,
                (None, true) => ctx.api.set_avatar(None)?,
                (Some(_), true) => bail!("pass either a value or --clear, not both"),
                (None, false) => bail!("pass an image reference, or --clear to unset"),
            }
        }
    };
    render::messages(&result.messages);
    Ok(())
}

pub fn link_add(
    ctx: &mut AppContext,
    kind: String,
    value: Option<String>,
    message: Option<String>,
) -> Result<()> {
    let result = ctx.api.add_link(LinkKind::from(kind))?;
    render::messages(&result.messages);

    // Convenience: an initial value/message on the same command line
    if value.is_some() || message.is_some() {
        let index = ctx.api.record().links.len();
        let result = ctx
            .api
            .update_link(index, value.as_deref(), message.as_deref())?;
        render::messages(&result.messages);
    }
    Ok(())
}

pub fn link_set(
    ctx: &mut AppContext,
    index: usize,
    value: Option<String>,
    message: Option<String>,
) -> Result<()> {
    let result = ctx
        .api
        .update_link(index, value.as_deref(), message.as_deref())?;
    render::messages(&result.messages);
    Ok(())
}

pub fn link_rm(ctx: &mut AppContext, index: usize) -> Result<()> {
    let result = ctx.api.remove_link(index)?;
    render::messages(&result.messages);
    Ok(())
}

pub fn link_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_links();
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result.listed_links)?);
        return Ok(());
    }
    render::links(&result.listed_links);
    render::messages(&result.messages);
    Ok(())
}

pub fn link_qr(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.link_qr(index)?;
    render::payloads(&result.payloads);
    Ok(())
}

pub fn card_qr(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.card_qr();
    render::payloads(&result.payloads);
    Ok(())
}

pub fn design_set(ctx: &mut AppContext, attr: DesignAttrArg, value: &str) -> Result<()> {
    let result = ctx.api.set_design(attr.into(), value)?;
    render::messages(&result.messages);
    Ok(())
}

pub fn design_colors() -> Result<()> {
    render::preset_colors();
    Ok(())
}

pub fn pdf(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_pdf();
    render::messages(&result.messages);

    let dir = out
        .or_else(|| ctx.config.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    for payload in &result.payloads {
        let name = payload
            .suggested_filename
            .as_deref()
            .unwrap_or("card.html");
        let path = dir.join(name);
        fs::write(&path, &payload.content)
            .with_context(|| format!("could not write {}", path.display()))?;
        println!("Exported to {}", path.display());
    }
    Ok(())
}

pub fn backup(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.backup(&backup_service(&ctx.config)?)?;
    render::messages(&result.messages);
    Ok(())
}

pub fn restore(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !confirm(
        "Overwrite your current card with the backup from the drive folder?",
        yes,
    )? {
        println!("Restore cancelled.");
        return Ok(());
    }
    let service = backup_service(&ctx.config)?;
    let result = ctx.api.restore(&service)?;
    render::messages(&result.messages);
    Ok(())
}

pub fn reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !confirm("Reset the card to the starter template?", yes)? {
        println!("Reset cancelled.");
        return Ok(());
    }
    let result = ctx.api.reset()?;
    render::messages(&result.messages);
    Ok(())
}

pub fn config(ctx: &AppContext) -> Result<()> {
    println!("card file   {}", ctx.api.data_path()?.display());
    match &ctx.config.backup_dir {
        Some(dir) => println!("backup dir  {}", dir.display()),
        None => println!("backup dir  (unset — set CARDZ_BACKUP_DIR or backup_dir in cardz.toml)"),
    }
    println!("backup file {}", ctx.config.backup_file);
    match &ctx.config.export_dir {
        Some(dir) => println!("export dir  {}", dir.display()),
        None => println!("export dir  (current directory)"),
    }
    Ok(())
}

fn backup_service(config: &CardzConfig) -> Result<FolderBackup> {
    let Some(target) = config.backup_target() else {
        bail!(
            "no backup folder configured; set backup_dir in cardz.toml \
             or the CARDZ_BACKUP_DIR environment variable"
        );
    };
    Ok(FolderBackup::new(target))
}

fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        bail!("confirmation required; re-run with --yes");
    }

    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
