mod reports;

pub use reports::*;

use crate::{Database, ReferenceDb};

pub trait AbstractDatabase: Sync + Send + reports::AbstractReports {}

impl AbstractDatabase for ReferenceDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(reference) => reference,
        }
    }
}
