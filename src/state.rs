use crate::api::PlacesClient;
use std::path::PathBuf;
use std::sync::Arc;

pub struct ServerState {
    pub(crate) client: Arc<dyn PlacesClient>,
    pub(crate) public_dir: PathBuf,
}

impl ServerState {
    pub fn new(client: Arc<dyn PlacesClient>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            public_dir: public_dir.into(),
        }
    }
}
