use crate::error::ApiError;
use crate::models::{
    Ack, ApiResponse, CourtCase, CourtSearch, GovernmentSearchResult, RecordsQuery, VehicleInfo,
    VehicleSearch,
};
use crate::services::api_client::ApiClient;
use crate::utils::endpoints::government;
use crate::utils::path_segment;

#[derive(Clone)]
pub struct GovernmentService {
    client: ApiClient,
}

impl GovernmentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn search_vehicle(
        &self,
        request: &VehicleSearch,
    ) -> Result<ApiResponse<GovernmentSearchResult>, ApiError> {
        self.client.post(government::VEHICLE, request).await
    }

    pub async fn search_court_cases(
        &self,
        request: &CourtSearch,
    ) -> Result<ApiResponse<GovernmentSearchResult>, ApiError> {
        self.client.post(government::COURT, request).await
    }

    pub async fn get_vehicle_details(
        &self,
        vehicle_number: &str,
    ) -> Result<ApiResponse<VehicleInfo>, ApiError> {
        self.client
            .get(&format!("{}/{}", government::VEHICLE, path_segment(vehicle_number)))
            .await
    }

    pub async fn get_case_details(
        &self,
        case_number: &str,
    ) -> Result<ApiResponse<CourtCase>, ApiError> {
        self.client
            .get(&format!("{}/{}", government::COURT, path_segment(case_number)))
            .await
    }

    pub async fn get_records(
        &self,
        query: &RecordsQuery,
    ) -> Result<ApiResponse<Vec<GovernmentSearchResult>>, ApiError> {
        self.client
            .get_with_query(government::RECORDS, &query.to_query())
            .await
    }

    pub async fn delete_record(&self, record_id: &str) -> Result<Ack, ApiError> {
        self.client
            .delete(&format!("{}/{}", government::RECORDS, path_segment(record_id)))
            .await
    }
}
