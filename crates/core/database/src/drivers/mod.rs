mod reference;

pub use reference::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Use the in-memory database
    Reference,
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Reference implementation
    Reference(ReferenceDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    pub async fn connect(self) -> Result<Database, String> {
        Ok(match self {
            DatabaseInfo::Auto | DatabaseInfo::Reference => {
                Database::Reference(Default::default())
            }
        })
    }
}
