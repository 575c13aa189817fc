use crate::error::ValidationError;
use crate::models::{ApiResponse, ImageSearch, ImageSearchResponse, SearchEngine, Validate};
use crate::services::{ImageService, UploadFile};
use crate::state::{ReactiveState, RequestSlot, RunOutcome, SearchHistory, SubscriptionId};

/// Búsqueda inversa de imágenes por URL o por archivo
#[derive(Clone)]
pub struct ImageStore {
    service: ImageService,
    pub url_search_results: RequestSlot<ApiResponse<ImageSearchResponse>>,
    pub file_search_results: RequestSlot<ApiResponse<ImageSearchResponse>>,
    pub search_history: SearchHistory<ImageSearchResponse>,
    upload_progress: ReactiveState<u8>,
}

impl ImageStore {
    pub fn new(service: ImageService) -> Self {
        Self {
            service,
            url_search_results: RequestSlot::new("image.url"),
            file_search_results: RequestSlot::new("image.file"),
            search_history: SearchHistory::new(),
            upload_progress: ReactiveState::new(0),
        }
    }

    pub fn upload_progress(&self) -> u8 {
        self.upload_progress.get()
    }

    pub fn set_upload_progress(&self, progress: u8) {
        self.upload_progress.set(progress.min(100));
    }

    pub fn subscribe_progress(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.upload_progress.subscribe(callback)
    }

    pub async fn search_by_url(
        &self,
        image_url: &str,
        engines: &[SearchEngine],
    ) -> Result<(), ValidationError> {
        let search = ImageSearch::by_url(image_url, engines);
        search.validate()?;
        let outcome = self
            .url_search_results
            .run(
                async {
                    self.service
                        .search_by_url(image_url, &search.engines)
                        .await?
                        .into_result()
                },
                "URL search failed",
            )
            .await;
        self.record(outcome);
        Ok(())
    }

    /// `upload_progress`: 0 al empezar, 100 si sale bien, 0 si falla
    pub async fn search_by_file(
        &self,
        file: UploadFile,
        engines: &[SearchEngine],
        on_progress: Option<&dyn Fn(u8)>,
    ) -> Result<(), ValidationError> {
        let search = ImageSearch::by_file(file, engines);
        search.validate()?;
        let ImageSearch {
            image_file: Some(file),
            engines,
            ..
        } = search
        else {
            return Err(ValidationError::new("imageFile", "Image file is required"));
        };

        self.set_upload_progress(0);
        let report = |progress: u8| {
            self.set_upload_progress(progress);
            if let Some(callback) = on_progress {
                callback(progress);
            }
        };

        let outcome = self
            .file_search_results
            .run(
                async {
                    self.service
                        .search_by_file(file, &engines, Some(&report))
                        .await?
                        .into_result()
                },
                "File search failed",
            )
            .await;

        match &outcome {
            RunOutcome::Success(_) => self.set_upload_progress(100),
            RunOutcome::Failed(_) => self.set_upload_progress(0),
            // Abortada por clear/cancel: el slot ya no carga
            RunOutcome::Superseded if !self.file_search_results.is_loading() => {
                self.set_upload_progress(0)
            }
            RunOutcome::Superseded => {}
        }
        self.record(outcome);
        Ok(())
    }

    fn record(&self, outcome: RunOutcome<ApiResponse<ImageSearchResponse>>) {
        if let RunOutcome::Success(ApiResponse { data: Some(response), .. }) = outcome {
            self.search_history.push(response);
        }
    }

    pub fn clear_url_results(&self) {
        self.url_search_results.clear();
    }

    pub fn clear_file_results(&self) {
        self.file_search_results.clear();
        self.set_upload_progress(0);
    }

    /// Aborta el upload en curso y deja el progreso a 0
    pub fn cancel_file_search(&self) -> bool {
        let cancelled = self.file_search_results.cancel();
        self.set_upload_progress(0);
        cancelled
    }

    pub fn clear_errors(&self) {
        self.url_search_results.clear_error();
        self.file_search_results.clear_error();
    }
}
