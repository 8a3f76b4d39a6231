//! Command-line surface of the importer.
use clap::{Args, Parser, Subcommand, ValueEnum};
use pmd_importer_pipeline::mapper::ListingFieldSet;
use pmd_importer_shared::types::EntityKind;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "pmd-importer")]
#[command(about = "Migrates PhpMyDirectory listings, categories and users into WordPress")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import one legacy table, or all of them
    Convert {
        #[command(subcommand)]
        target: ConvertTarget,
    },
    /// Serve the three-step import wizard over HTTP
    Serve {
        /// Address to listen on (default: WIZARD_ADDR)
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConvertTarget {
    /// Import the listings table as GeoDirectory places
    Listing {
        #[command(flatten)]
        options: ConvertOptions,
        /// Which place detail fields to write
        #[arg(long, value_enum, default_value_t = FieldSetArg::Wizard)]
        field_set: FieldSetArg,
    },
    /// Import the categories table as place categories
    Category {
        #[command(flatten)]
        options: ConvertOptions,
    },
    /// Import the users table as WordPress users
    User {
        #[command(flatten)]
        options: ConvertOptions,
    },
    /// Import users, categories and listings, in that order
    All {
        #[command(flatten)]
        options: ConvertOptions,
        /// Which place detail fields to write
        #[arg(long, value_enum, default_value_t = FieldSetArg::Wizard)]
        field_set: FieldSetArg,
    },
}

impl ConvertTarget {
    /// The entity kind to import, `None` for `all`.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            ConvertTarget::Listing { .. } => Some(EntityKind::Listing),
            ConvertTarget::Category { .. } => Some(EntityKind::Category),
            ConvertTarget::User { .. } => Some(EntityKind::User),
            ConvertTarget::All { .. } => None,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        match self {
            ConvertTarget::Listing { options, .. }
            | ConvertTarget::Category { options }
            | ConvertTarget::User { options }
            | ConvertTarget::All { options, .. } => options,
        }
    }

    pub fn field_set(&self) -> ListingFieldSet {
        match self {
            ConvertTarget::Listing { field_set, .. } | ConvertTarget::All { field_set, .. } => {
                (*field_set).into()
            }
            _ => ListingFieldSet::default(),
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ConvertOptions {
    /// Drop the legacy table after the import. A bare flag means `success`.
    #[arg(
        long,
        value_enum,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "success"
    )]
    pub removetable: Option<RemoveTable>,
}

/// When `--removetable` drops the legacy table.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveTable {
    /// Only after an import that finished without error
    Success,
    /// After the run, whatever its outcome
    Error,
}

impl RemoveTable {
    /// Whether the table goes, given the import's outcome.
    pub fn should_drop(self, import_succeeded: bool) -> bool {
        match self {
            RemoveTable::Success => import_succeeded,
            RemoveTable::Error => true,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSetArg {
    Wizard,
    Command,
}

impl From<FieldSetArg> for ListingFieldSet {
    fn from(value: FieldSetArg) -> Self {
        match value {
            FieldSetArg::Wizard => ListingFieldSet::Wizard,
            FieldSetArg::Command => ListingFieldSet::Command,
        }
    }
}
