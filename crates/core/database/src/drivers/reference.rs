use std::collections::HashMap;
use std::sync::Arc;

use futures::lock::Mutex;

use crate::Report;

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
    }
);
