use crate::error::ValidationError;
use crate::models::{
    ApiResponse, CourtSearch, GovernmentSearchResult, RecordsQuery, Validate, VehicleSearch,
};
use crate::services::GovernmentService;
use crate::state::RequestSlot;

/// Registros públicos: vehículos, casos judiciales y búsqueda general
#[derive(Clone)]
pub struct GovernmentStore {
    service: GovernmentService,
    pub vehicle_results: RequestSlot<ApiResponse<GovernmentSearchResult>>,
    pub court_results: RequestSlot<ApiResponse<GovernmentSearchResult>>,
    pub records_results: RequestSlot<ApiResponse<Vec<GovernmentSearchResult>>>,
}

impl GovernmentStore {
    pub fn new(service: GovernmentService) -> Self {
        Self {
            service,
            vehicle_results: RequestSlot::new("government.vehicle"),
            court_results: RequestSlot::new("government.court"),
            records_results: RequestSlot::new("government.records"),
        }
    }

    pub async fn search_vehicle(&self, request: &VehicleSearch) -> Result<(), ValidationError> {
        request.validate()?;
        self.vehicle_results
            .run(
                async { self.service.search_vehicle(request).await?.into_result() },
                "Vehicle search failed",
            )
            .await;
        Ok(())
    }

    pub async fn search_court(&self, request: &CourtSearch) -> Result<(), ValidationError> {
        request.validate()?;
        self.court_results
            .run(
                async { self.service.search_court_cases(request).await?.into_result() },
                "Court search failed",
            )
            .await;
        Ok(())
    }

    /// Sin esquema en cliente: el filtro viaja tal cual en la query
    pub async fn search_records(&self, query: &RecordsQuery) {
        self.records_results
            .run(
                async { self.service.get_records(query).await?.into_result() },
                "Records search failed",
            )
            .await;
    }

    pub fn clear_vehicle_results(&self) {
        self.vehicle_results.clear();
    }

    pub fn clear_court_results(&self) {
        self.court_results.clear();
    }

    pub fn clear_records_results(&self) {
        self.records_results.clear();
    }

    pub fn clear_errors(&self) {
        self.vehicle_results.clear_error();
        self.court_results.clear_error();
        self.records_results.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GovernmentRecords, RecordType};
    use crate::services::token_storage::MemoryTokenStorage;
    use crate::testing::{client_with, envelope, StubTransport};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn store(stub: &Rc<StubTransport>) -> GovernmentStore {
        GovernmentStore::new(GovernmentService::new(client_with(stub, &MemoryTokenStorage::new())))
    }

    #[test]
    fn test_vehicle_search_parses_vehicle_results() {
        let stub = StubTransport::new();
        stub.reply_json(
            200,
            envelope(json!({
                "searchId": "v-1",
                "searchType": "vehicle",
                "query": "MH12AB1234",
                "results": [{
                    "registrationNumber": "MH12AB1234",
                    "ownerName": "A. Sharma",
                    "address": "Pune",
                    "registrationDate": "2019-04-01",
                    "fuelType": "Petrol",
                    "vehicleClass": "LMV",
                    "maker": "Maruti",
                    "model": "Swift",
                    "engineNumber": "E1",
                    "chassisNumber": "C1",
                    "registrationAuthority": "Pune RTO",
                    "status": "active"
                }],
                "totalResults": 1
            })),
        );
        let store = store(&stub);

        block_on(store.search_vehicle(&VehicleSearch {
            vehicle_number: "MH12AB1234".to_string(),
            state: None,
        }))
        .unwrap();

        let result = store.vehicle_results.data().unwrap().data.unwrap();
        assert!(matches!(result.results, GovernmentRecords::Vehicles(ref v) if v[0].maker == "Maruti"));
    }

    #[test]
    fn test_invalid_plate_never_reaches_network() {
        let stub = StubTransport::new();
        let store = store(&stub);

        let err = block_on(store.search_vehicle(&VehicleSearch {
            vehicle_number: "123".to_string(),
            state: None,
        }))
        .unwrap_err();

        assert_eq!(err.field, "vehicleNumber");
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_records_failure_message() {
        let stub = StubTransport::new();
        stub.reply_raw(404, "not found");
        let store = store(&stub);

        block_on(store.search_records(&RecordsQuery {
            name: "Sharma".to_string(),
            record_type: RecordType::Court,
            ..RecordsQuery::default()
        }));

        assert_eq!(store.records_results.error().as_deref(), Some("HTTP 404: not found"));
        store.clear_errors();
        assert!(store.records_results.snapshot().is_idle());
    }
}
