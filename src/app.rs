// ============================================================================
// APP - Composición de cliente, sesión y stores
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::routing::{Navigator, Route, RouteDecision};
use crate::services::{
    ApiClient, AuthService, DarkWebService, EmailService, GovernmentService, ImageService,
    NewsService, SocialService, TokenStorage, Transport, UnauthorizedHandler,
};
use crate::state::{AuthContext, SessionHandle};
use crate::stores::{
    DarkWebStore, EmailStore, GovernmentStore, ImageStore, NewsStore, SocialStore,
};
use crate::utils::endpoints::auth;

/// Ante un 401 fuera de /auth/: cerrar sesión y volver al login
pub struct LoginRedirect {
    handle: SessionHandle,
    navigator: Rc<dyn Navigator>,
    login_route: String,
}

impl LoginRedirect {
    pub fn new(handle: SessionHandle, navigator: Rc<dyn Navigator>, login_route: &str) -> Self {
        Self {
            handle,
            navigator,
            login_route: login_route.to_string(),
        }
    }
}

impl UnauthorizedHandler for LoginRedirect {
    fn on_unauthorized(&self, path: &str) {
        // Los errores de login los gestiona AuthContext
        if path.starts_with(auth::PREFIX) {
            return;
        }
        log::warn!("🔒 401 en {}, redirigiendo a {}", path, self.login_route);
        self.handle.logout();
        self.navigator.navigate(&self.login_route);
    }
}

/// Un store por servicio de investigación
#[derive(Clone)]
pub struct Stores {
    pub news: NewsStore,
    pub image: ImageStore,
    pub social: SocialStore,
    pub government: GovernmentStore,
    pub email: EmailStore,
    pub darkweb: DarkWebStore,
}

impl Stores {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            news: NewsStore::new(NewsService::new(client.clone())),
            image: ImageStore::new(ImageService::new(client.clone())),
            social: SocialStore::new(SocialService::new(client.clone())),
            government: GovernmentStore::new(GovernmentService::new(client.clone())),
            email: EmailStore::new(EmailService::new(client.clone())),
            darkweb: DarkWebStore::new(DarkWebService::new(client.clone())),
        }
    }
}

/// Aplicación principal
#[derive(Clone)]
pub struct App {
    config: AppConfig,
    client: ApiClient,
    auth: AuthContext,
    stores: Stores,
    navigator: Rc<dyn Navigator>,
}

impl App {
    /// Monta la app con dependencias explícitas (transporte, tokens, navegación)
    pub fn with_parts(
        config: AppConfig,
        transport: Rc<dyn Transport>,
        tokens: Rc<dyn TokenStorage>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let client = ApiClient::new(config.base_url(), transport, tokens.clone());
        let auth = AuthContext::new(AuthService::new(client.clone()), tokens, &config.login_route);
        client.set_unauthorized_handler(Rc::new(LoginRedirect::new(
            auth.handle(),
            navigator.clone(),
            &config.login_route,
        )));
        let stores = Stores::new(&client);

        log::info!("🧩 App montada contra {}", client.base_url());
        Self {
            config,
            client,
            auth,
            stores,
            navigator,
        }
    }

    /// App del navegador: fetch + localStorage + location
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, crate::error::ConfigError> {
        use crate::config::CONFIG;
        use crate::routing::BrowserNavigator;
        use crate::services::{FetchTransport, LocalTokenStorage};

        CONFIG.validate()?;
        Ok(Self::with_parts(
            CONFIG.clone(),
            Rc::new(FetchTransport::new(CONFIG.network_timeout_seconds)),
            Rc::new(LocalTokenStorage::new()),
            Rc::new(BrowserNavigator),
        ))
    }

    /// Resuelve la sesión guardada al arrancar
    pub async fn start(&self) {
        log::info!("🚀 {} v{}", self.config.app_name, self.config.app_version);
        self.auth.refresh_auth().await;
    }

    /// Aplica el guard de rutas; si hay redirección, navega
    pub fn navigate(&self, path: &str) -> RouteDecision {
        let route = Route::parse(path);
        let decision = self.auth.guard(&route);
        match &decision {
            RouteDecision::Redirect(target) => {
                log::info!("↪️ {} -> {}", path, target);
                self.navigator.navigate(target);
            }
            RouteDecision::Wait => log::debug!("⏳ Esperando sesión para {}", path),
            RouteDecision::Allow => {}
        }
        decision
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }
}
