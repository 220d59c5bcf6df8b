//! Bulk file naming.
//!
//! The SWC project publishes static snapshot exports of each entity table
//! alongside the REST API. File basenames are fixed per entity; the
//! extension follows the configured [`BulkFileFormat`].

use std::collections::BTreeMap;
use std::fmt;

/// File format for bulk entity exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkFileFormat {
    /// Comma-separated values, the widest-compatibility default
    #[default]
    Csv,
    /// Apache Parquet columnar format
    Parquet,
}

impl BulkFileFormat {
    /// Parse a format name, case-insensitively.
    ///
    /// Anything other than "parquet" resolves to [`BulkFileFormat::Csv`].
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("parquet") {
            BulkFileFormat::Parquet
        } else {
            BulkFileFormat::Csv
        }
    }

    /// File extension for this format, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            BulkFileFormat::Csv => "csv",
            BulkFileFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for BulkFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Entity tables with a published bulk export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BulkEntity {
    Players,
    Leagues,
    Performances,
    Teams,
    TeamPlayers,
}

impl BulkEntity {
    /// Every entity with a bulk export.
    pub const ALL: [BulkEntity; 5] = [
        BulkEntity::Players,
        BulkEntity::Leagues,
        BulkEntity::Performances,
        BulkEntity::Teams,
        BulkEntity::TeamPlayers,
    ];

    /// File basename for this entity, without extension.
    pub fn basename(self) -> &'static str {
        match self {
            BulkEntity::Players => "player_data",
            BulkEntity::Leagues => "league_data",
            BulkEntity::Performances => "performance_data",
            BulkEntity::Teams => "team_data",
            BulkEntity::TeamPlayers => "team_player_data",
        }
    }
}

/// Build the entity -> filename table for the given format.
///
/// The key set is fixed: every entity in [`BulkEntity::ALL`] gets exactly
/// one entry, and only the extension varies with `format`.
pub fn bulk_file_names(format: BulkFileFormat) -> BTreeMap<BulkEntity, String> {
    BulkEntity::ALL
        .iter()
        .map(|entity| {
            let file_name = format!("{}.{}", entity.basename(), format.extension());
            (*entity, file_name)
        })
        .collect()
}
