use std::sync::Arc;

use crate::domain::StudentInfo;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub profile: Arc<StudentInfo>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, profile: StudentInfo) -> Self {
        Self {
            storage,
            profile: Arc::new(profile),
        }
    }
}
