//! Error types for migrations and fixture loading.

use std::fmt;
use std::path::PathBuf;

use dynamotest_model::DynamoDBError;

/// The step of [`crate::DynamoTester::load_fixtures`] that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixturePhase {
    /// Reading fixture documents.
    Load,
    /// Parsing fixture documents.
    Decode,
    /// Creating the tables the fixtures target.
    Migrate,
    /// Dropping and recreating those tables.
    Clean,
    /// The final batch write.
    Write,
}

impl FixturePhase {
    /// Returns the phase name used in error messages and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Decode => "decode",
            Self::Migrate => "migrate",
            Self::Clean => "clean",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for FixturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while provisioning tables or loading fixtures.
#[derive(Debug, thiserror::Error)]
pub enum DynamoTestError {
    /// A definitions directory could not be listed.
    #[error("cannot list definitions in {}", dir.display())]
    ListDefinitions {
        /// Directory that was listed.
        dir: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A definition file could not be read.
    #[error("cannot read definition {}", path.display())]
    ReadDefinition {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A migration document is not a valid `CreateTable` request.
    #[error("cannot decode migration definition")]
    DecodeMigration(#[source] serde_json::Error),

    /// A fixture document is malformed.
    #[error("cannot decode fixture document")]
    DecodeFixture(#[source] serde_json::Error),

    /// The migration cache could not be populated.
    #[error("cannot load migration definitions")]
    LoadDefinitions(#[source] Box<DynamoTestError>),

    /// The store refused to create a table for a reason other than it
    /// already existing.
    #[error("cannot create table {logical} ({physical})")]
    CreateTable {
        /// Name used in the migration file.
        logical: String,
        /// Name sent to the store.
        physical: String,
        /// Store failure.
        source: DynamoDBError,
    },

    /// The store refused to delete a table that exists.
    #[error("cannot delete table {table}")]
    DeleteTable {
        /// Physical table name.
        table: String,
        /// Store failure.
        source: DynamoDBError,
    },

    /// A table was dropped but could not be created again.
    #[error("cannot recreate table {table}")]
    RecreateTable {
        /// Physical table name.
        table: String,
        /// Store failure.
        source: DynamoDBError,
    },

    /// A fixture load failed; `phase` names the step.
    #[error("fixtures: {phase} failed")]
    Fixtures {
        /// Step that failed.
        phase: FixturePhase,
        /// What went wrong in that step.
        source: Box<DynamoTestError>,
    },

    /// Any other store failure.
    #[error(transparent)]
    Store(#[from] DynamoDBError),
}

impl DynamoTestError {
    pub(crate) fn in_phase(phase: FixturePhase) -> impl FnOnce(Self) -> Self {
        move |source| Self::Fixtures {
            phase,
            source: Box::new(source),
        }
    }

    /// The fixture phase this error was raised in, if any.
    #[must_use]
    pub fn phase(&self) -> Option<FixturePhase> {
        match self {
            Self::Fixtures { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// The store error at the root of this error, if any.
    #[must_use]
    pub fn store_error(&self) -> Option<&DynamoDBError> {
        match self {
            Self::CreateTable { source, .. }
            | Self::DeleteTable { source, .. }
            | Self::RecreateTable { source, .. }
            | Self::Store(source) => Some(source),
            Self::LoadDefinitions(inner) | Self::Fixtures { source: inner, .. } => {
                inner.store_error()
            }
            _ => None,
        }
    }
}

/// Convenience result type for dynamotest operations.
pub type DynamoTestResult<T> = Result<T, DynamoTestError>;
