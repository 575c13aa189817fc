// ============================================================================
// ROUTING - Tabla de rutas y guardia de autenticación
// ============================================================================

use crate::models::Session;
use crate::utils::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    News,
    Image,
    Social,
    Government,
    Email,
    DarkWeb,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::News,
        ServiceKind::Image,
        ServiceKind::Social,
        ServiceKind::Government,
        ServiceKind::Email,
        ServiceKind::DarkWeb,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ServiceKind::News => "news",
            ServiceKind::Image => "image",
            ServiceKind::Social => "social",
            ServiceKind::Government => "government",
            ServiceKind::Email => "email",
            ServiceKind::DarkWeb => "darkweb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::News => "News Analysis",
            ServiceKind::Image => "Image Search",
            ServiceKind::Social => "Social Media",
            ServiceKind::Government => "Government Records",
            ServiceKind::Email => "Email Analysis",
            ServiceKind::DarkWeb => "Dark Web Monitoring",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Dashboard,
    Services,
    Service(ServiceKind),
    NotFound(String),
}

impl Route {
    /// Ignora query, fragment y la barra final
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            p if p == routes::LOGIN => Route::Login,
            p if p == routes::DASHBOARD => Route::Dashboard,
            p if p == routes::SERVICES => Route::Services,
            p => p
                .strip_prefix(routes::SERVICES)
                .and_then(|rest| rest.strip_prefix('/'))
                .and_then(ServiceKind::from_slug)
                .map(Route::Service)
                .unwrap_or_else(|| Route::NotFound(p.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => routes::HOME.to_string(),
            Route::Login => routes::LOGIN.to_string(),
            Route::Dashboard => routes::DASHBOARD.to_string(),
            Route::Services => routes::SERVICES.to_string(),
            Route::Service(kind) => format!("{}/{}", routes::SERVICES, kind.slug()),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Services | Route::Service(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// La sesión todavía se está resolviendo
    Wait,
    Redirect(String),
}

/// Decide si la sesión puede entrar en `route`
pub fn guard(session: &Session, route: &Route, login_route: &str) -> RouteDecision {
    if *route == Route::Login && session.is_authenticated {
        return RouteDecision::Redirect(routes::DASHBOARD.to_string());
    }
    if !route.requires_auth() {
        return RouteDecision::Allow;
    }
    if session.is_loading {
        RouteDecision::Wait
    } else if session.is_authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(login_route.to_string())
    }
}

/// Cambio de página fuera del control del store
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("❌ window no disponible, no se puede navegar a {}", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("❌ Error navegando a {}: {:?}", path, e);
        }
    }
}
