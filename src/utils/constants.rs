/// URL base de la API
/// Configurada en tiempo de compilación (API_BASE_URL, ver build.rs):
/// - Desarrollo: http://localhost:3000/api (por defecto)
pub const DEFAULT_API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Clave del token bearer en localStorage
pub const STORAGE_KEY_AUTH_TOKEN: &str = "auth_token";

/// Timeout fijo de cada request
pub const DEFAULT_TIMEOUT_SECONDS: u32 = 30;

/// Entradas máximas del historial de cada store
pub const HISTORY_LIMIT: usize = 10;

/// Rutas de la aplicación
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const SERVICES: &str = "/services";
}

/// Endpoints de la API, relativos a la URL base
pub mod endpoints {
    pub mod auth {
        pub const PREFIX: &str = "/auth/";
        pub const LOGIN: &str = "/auth/login";
        pub const ME: &str = "/auth/me";
    }

    pub mod news {
        pub const ANALYZE: &str = "/news/analyze";
        pub const ENTITIES: &str = "/news/entities";
        pub const MONITOR: &str = "/news/monitor";
    }

    pub mod image {
        pub const SEARCH: &str = "/image/search";
        pub const UPLOAD: &str = "/image/upload";
        pub const RESULTS: &str = "/image/results";
    }

    pub mod social {
        pub const SCRAPE: &str = "/social/scrape";
        pub const PROFILES: &str = "/social/profiles";
        pub const SEARCH: &str = "/social/search";
    }

    pub mod government {
        pub const VEHICLE: &str = "/government/vehicle";
        pub const COURT: &str = "/government/court";
        pub const RECORDS: &str = "/government/records";
    }

    pub mod email {
        pub const ANALYZE: &str = "/email/analyze";
        pub const BREACH_CHECK: &str = "/email/breach-check";
        pub const DOMAIN_INFO: &str = "/email/domain-info";
    }

    pub mod darkweb {
        pub const SEARCH: &str = "/darkweb/search";
        pub const MONITOR: &str = "/darkweb/monitor";
        pub const KEYWORDS: &str = "/darkweb/keywords";
    }
}
