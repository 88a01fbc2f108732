use resume_analyzer::{AnalysisService, UploadStore};

/// Shared by every handler. Both members are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisService,
    pub uploads: UploadStore,
}
