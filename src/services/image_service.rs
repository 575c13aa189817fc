use crate::error::ApiError;
use crate::models::{Ack, ApiResponse, ImageSearch, ImageSearchResponse, SearchEngine};
use crate::services::api_client::ApiClient;
use crate::services::transport::UploadFile;
use crate::utils::endpoints::image;
use crate::utils::path_segment;

#[derive(Clone)]
pub struct ImageService {
    client: ApiClient,
}

impl ImageService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Sin motores: Google
    pub async fn search_by_url(
        &self,
        image_url: &str,
        engines: &[SearchEngine],
    ) -> Result<ApiResponse<ImageSearchResponse>, ApiError> {
        let search = ImageSearch::by_url(image_url, engines);
        self.client.post(image::SEARCH, &search).await
    }

    /// Multipart: `file` + `engines` (JSON array)
    pub async fn search_by_file(
        &self,
        file: UploadFile,
        engines: &[SearchEngine],
        on_progress: Option<&dyn Fn(u8)>,
    ) -> Result<ApiResponse<ImageSearchResponse>, ApiError> {
        let engines = if engines.is_empty() {
            vec![SearchEngine::default()]
        } else {
            engines.to_vec()
        };
        let engines =
            serde_json::to_string(&engines).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.client
            .upload(
                image::UPLOAD,
                file,
                vec![("engines".to_string(), engines)],
                on_progress,
            )
            .await
    }

    pub async fn get_search_results(
        &self,
        search_id: &str,
    ) -> Result<ApiResponse<ImageSearchResponse>, ApiError> {
        self.client
            .get(&format!("{}/{}", image::RESULTS, path_segment(search_id)))
            .await
    }

    pub async fn delete_search_results(&self, search_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("{}/{}", image::RESULTS, path_segment(search_id)))
            .await
    }
}
