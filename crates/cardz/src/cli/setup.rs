use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cardzapp::commands::content::ContentField;
use cardzapp::commands::design::DesignAttr;

#[derive(Parser, Debug)]
#[command(
    name = "cardz",
    bin_name = "cardz",
    version,
    disable_help_subcommand = true,
    after_help = "Your card lives in one local file and is saved after every change.\nRun `cardz config` to see where."
)]
#[command(about = "Create, style and share a digital business card", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (also: CARDZ_DATA)
    #[arg(long, global = true, help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print machine-readable JSON where supported
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the card preview (default when no command is given)
    Show,

    /// Set a text field or the avatar image reference
    Set {
        field: FieldArg,
        /// The new value; omit with `--clear` to unset the avatar
        value: Option<String>,
        /// Clear the avatar (only valid for `avatar`)
        #[arg(long)]
        clear: bool,
    },

    /// Manage contact links
    Link {
        #[command(subcommand)]
        action: LinkCommands,
    },

    /// Adjust the card design
    Design {
        #[command(subcommand)]
        action: DesignCommands,
    },

    /// Print the QR payload for the whole card
    Qr,

    /// Export the print payload for a PDF of the card
    Pdf {
        /// Directory the payload file is written to
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Back the card up to the configured drive folder
    Backup,

    /// Replace the card with the drive backup
    Restore {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Reset the card to the starter template
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show resolved configuration and data paths
    Config,
}

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Add a link (email, phone, website, linkedin, github, whatsapp, instagram)
    Add {
        kind: String,
        /// Initial value (username, number, address or URL)
        value: Option<String>,
        /// Pre-filled chat message (whatsapp)
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Update a link's value and/or message by its index
    Set {
        index: usize,
        value: Option<String>,
        /// Pre-filled chat message (whatsapp)
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Remove a link by its index
    Rm { index: usize },
    /// List links with their canonical URIs
    List,
    /// Print the QR payload for one link
    Qr { index: usize },
}

#[derive(Subcommand, Debug)]
pub enum DesignCommands {
    /// Set a design attribute
    Set { attr: DesignAttrArg, value: String },
    /// List the curated preset colors
    Colors,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FieldArg {
    Name,
    Title,
    Bio,
    Avatar,
}

impl FieldArg {
    /// The content field this argument maps to; `None` for the avatar, which
    /// has its own set/clear handling.
    pub fn content_field(&self) -> Option<ContentField> {
        match self {
            FieldArg::Name => Some(ContentField::Name),
            FieldArg::Title => Some(ContentField::Title),
            FieldArg::Bio => Some(ContentField::Bio),
            FieldArg::Avatar => None,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DesignAttrArg {
    ThemeColor,
    CardColor,
    NameColor,
    TitleColor,
    BioColor,
    NameSize,
    TitleSize,
    BioSize,
    Padding,
    Font,
    Layout,
}

impl From<DesignAttrArg> for DesignAttr {
    fn from(arg: DesignAttrArg) -> Self {
        match arg {
            DesignAttrArg::ThemeColor => DesignAttr::ThemeColor,
            DesignAttrArg::CardColor => DesignAttr::CardColor,
            DesignAttrArg::NameColor => DesignAttr::NameColor,
            DesignAttrArg::TitleColor => DesignAttr::TitleColor,
            DesignAttrArg::BioColor => DesignAttr::BioColor,
            DesignAttrArg::NameSize => DesignAttr::NameSize,
            DesignAttrArg::TitleSize => DesignAttr::TitleSize,
            DesignAttrArg::BioSize => DesignAttr::BioSize,
            DesignAttrArg::Padding => DesignAttr::Padding,
            DesignAttrArg::Font => DesignAttr::Font,
            DesignAttrArg::Layout => DesignAttr::Layout,
        }
    }
}
