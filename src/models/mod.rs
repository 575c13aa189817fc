pub mod api;
pub mod auth;
pub mod darkweb;
pub mod email;
pub mod government;
pub mod image;
pub mod news;
pub mod social;
pub mod validation;

pub use api::{Ack, ApiResponse};
pub use auth::{LoginRequest, LoginResponse, Role, Session, UserPatch, UserProfile};
pub use darkweb::{
    CreateMonitorRequest, DarkWebMonitor, DarkWebResult, DarkWebSearch, DarkWebSearchResponse,
    KeywordAction, KeywordSearch, MonitorUpdate, TimeRange,
};
pub use email::{DomainInfo, EmailAnalysis, EmailAnalysisResult, EmailValidation, Breach, Reputation};
pub use government::{
    CourtCase, CourtSearch, GovernmentRecords, GovernmentSearchResult, RecordType, RecordsQuery,
    VehicleInfo, VehicleSearch,
};
pub use image::{ImageSearch, ImageSearchResponse, ImageSearchResult, SearchEngine};
pub use news::{
    MonitorHandle, NewsAnalysis, NewsAnalysisResult, NewsEntity, NewsMonitorOptions, Language,
};
pub use social::{IdentifierType, Platform, SocialMediaSearch, SocialProfile, SocialSearchResult};
pub use validation::Validate;
