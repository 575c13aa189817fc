use serde::{Deserialize, Serialize};

/// Request de análisis de un email
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAnalysis {
    pub email: String,
    pub check_breaches: bool,
    pub check_domain: bool,
    pub check_social: bool,
}

impl EmailAnalysis {
    /// Brechas y dominio activados, redes sociales no
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            check_breaches: true,
            check_domain: true,
            check_social: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainSummary {
    pub name: String,
    pub registrar: Option<String>,
    pub creation_date: Option<String>,
    pub mx_records: Vec<String>,
    pub spf_record: Option<String>,
    pub dmarc_record: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breach {
    pub name: String,
    pub domain: String,
    pub breach_date: String,
    pub data_classes: Vec<String>,
    pub description: String,
    pub verified: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialAccount {
    pub platform: String,
    pub username: String,
    pub profile_url: String,
    pub verified: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reputation {
    Good,
    Suspicious,
    Malicious,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailAnalysisResult {
    pub email: String,
    pub is_valid: bool,
    pub deliverable: bool,
    pub disposable: bool,
    pub domain: DomainSummary,
    pub breaches: Vec<Breach>,
    pub social_accounts: Vec<SocialAccount>,
    /// 0 - 100
    pub risk_score: f64,
    pub reputation: Reputation,
    pub last_seen: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainContacts {
    pub registrant: Option<String>,
    pub admin: Option<String>,
    pub tech: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainInfo {
    pub domain: String,
    pub registrar: String,
    pub registration_date: String,
    pub expiration_date: String,
    pub name_servers: Vec<String>,
    pub contacts: DomainContacts,
    pub status: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailValidation {
    pub is_valid: bool,
    pub deliverable: bool,
    pub disposable: bool,
}

#[derive(Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub email: &'a str,
}
