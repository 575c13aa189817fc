use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSearch {
    pub vehicle_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSearch {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Vehicle,
    #[default]
    Court,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Vehicle => "vehicle",
            RecordType::Court => "court",
        }
    }
}

/// Búsqueda en registros públicos, se envía como query string
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordsQuery {
    pub name: String,
    pub record_type: RecordType,
    pub include_property: bool,
    pub include_business: bool,
    pub include_voter_registration: bool,
}

impl RecordsQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("type", self.record_type.as_str().to_string())];
        if !self.name.trim().is_empty() {
            query.push(("name", self.name.trim().to_string()));
        }
        let flags = [
            ("includeProperty", self.include_property),
            ("includeBusiness", self.include_business),
            ("includeVoterRegistration", self.include_voter_registration),
        ];
        query.extend(
            flags
                .into_iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(key, _)| (key, "true".to_string())),
        );
        query
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Suspended,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub registration_number: String,
    pub owner_name: String,
    #[serde(default)]
    pub father_name: Option<String>,
    pub address: String,
    pub registration_date: String,
    pub fuel_type: String,
    pub vehicle_class: String,
    pub maker: String,
    pub model: String,
    pub engine_number: String,
    pub chassis_number: String,
    pub registration_authority: String,
    #[serde(default)]
    pub fitness_valid_upto: Option<String>,
    #[serde(default)]
    pub insurance_valid_upto: Option<String>,
    #[serde(default)]
    pub tax_valid_upto: Option<String>,
    #[serde(default)]
    pub permit_valid_upto: Option<String>,
    pub status: VehicleStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourtOrder {
    pub date: String,
    pub order: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtCase {
    pub case_number: String,
    pub case_type: String,
    pub case_status: String,
    pub court_name: String,
    pub judge: String,
    pub filing_date: String,
    #[serde(default)]
    pub next_hearing: Option<String>,
    pub petitioner: String,
    pub respondent: String,
    pub case_details: String,
    #[serde(default)]
    pub orders: Vec<CourtOrder>,
}

/// Los resultados son vehículos o casos según `search_type`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GovernmentRecords {
    Vehicles(Vec<VehicleInfo>),
    Courts(Vec<CourtCase>),
}

impl Default for GovernmentRecords {
    fn default() -> Self {
        GovernmentRecords::Vehicles(Vec::new())
    }
}

impl GovernmentRecords {
    pub fn len(&self) -> usize {
        match self {
            GovernmentRecords::Vehicles(v) => v.len(),
            GovernmentRecords::Courts(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GovernmentSearchResult {
    pub search_id: String,
    pub search_type: RecordType,
    pub query: String,
    pub results: GovernmentRecords,
    pub total_results: u64,
    pub search_time: f64,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_court_results_parse_as_courts() {
        let result: GovernmentSearchResult = serde_json::from_value(json!({
            "searchId": "g-1",
            "searchType": "court",
            "query": "Sharma",
            "results": [{
                "caseNumber": "CS/12/2021",
                "caseType": "Civil",
                "caseStatus": "Pending",
                "courtName": "District Court",
                "judge": "R. Iyer",
                "filingDate": "2021-03-02",
                "petitioner": "A. Sharma",
                "respondent": "B. Rao",
                "caseDetails": "Property dispute"
            }],
            "totalResults": 1
        }))
        .unwrap();

        assert_eq!(result.search_type, RecordType::Court);
        assert!(matches!(result.results, GovernmentRecords::Courts(ref c) if c.len() == 1));
    }

    #[test]
    fn test_records_query_only_sends_enabled_flags() {
        let query = RecordsQuery {
            name: " Sharma ".to_string(),
            record_type: RecordType::Court,
            include_business: true,
            ..RecordsQuery::default()
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("type", "court".to_string()),
                ("name", "Sharma".to_string()),
                ("includeBusiness", "true".to_string()),
            ]
        );
    }
}
