// ============================================================================
// AUTH STATE - Sesión del usuario y contexto de autenticación
// ============================================================================

use std::rc::Rc;

use super::reactivity::{ReactiveState, SubscriptionId};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, Session, UserPatch, UserProfile};
use crate::routing::{self, Route, RouteDecision};
use crate::services::{AuthService, TokenStorage};

/// Sesión observable + token persistido. Es lo único que necesita la
/// política de 401 para expulsar al usuario.
#[derive(Clone)]
pub struct SessionHandle {
    session: ReactiveState<Session>,
    tokens: Rc<dyn TokenStorage>,
}

impl SessionHandle {
    pub fn new(tokens: Rc<dyn TokenStorage>) -> Self {
        Self {
            session: ReactiveState::new(Session::loading()),
            tokens,
        }
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.session.subscribe(callback)
    }

    /// Borra el token y deja la sesión anónima. No falla nunca.
    pub fn logout(&self) {
        self.tokens.clear();
        self.session.set(Session::anonymous());
        log::info!("👋 Sesión cerrada");
    }

    fn set(&self, session: Session) {
        self.session.set(session);
    }

    fn update(&self, updater: impl FnOnce(&mut Session)) {
        self.session.update(updater);
    }
}

/// Contexto de autenticación de la aplicación
#[derive(Clone)]
pub struct AuthContext {
    handle: SessionHandle,
    service: AuthService,
    tokens: Rc<dyn TokenStorage>,
    login_route: String,
}

impl AuthContext {
    pub fn new(service: AuthService, tokens: Rc<dyn TokenStorage>, login_route: &str) -> Self {
        Self {
            handle: SessionHandle::new(tokens.clone()),
            service,
            tokens,
            login_route: login_route.to_string(),
        }
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    pub fn session(&self) -> Session {
        self.handle.session()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session().user
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.session().is_loading
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.handle.subscribe(callback)
    }

    /// Login con email y password; guarda el token si sale bien
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        self.handle.update(|s| s.is_loading = true);

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.service.login(&request).await {
            Ok(LoginResponse { user, token }) => {
                self.tokens.set(&token);
                log::info!("✅ Login correcto: {}", user.email);
                self.handle.set(Session::authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                log::warn!("❌ Login fallido para {}: {}", email, e);
                self.handle.update(|s| s.is_loading = false);
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        self.handle.logout();
    }

    /// Revalida el token guardado contra el servidor. El perfil del
    /// servidor reemplaza al local (se pierden los `update_user` previos).
    pub async fn refresh_auth(&self) {
        if self.tokens.get().is_none() {
            log::info!("🔓 Sin token guardado");
            self.handle.update(|s| s.is_loading = false);
            return;
        }

        // Mientras /auth/me está en vuelo el guard responde Wait
        self.handle.update(|s| s.is_loading = true);
        match self.service.me().await {
            Ok(user) => {
                log::info!("🔄 Sesión restaurada: {}", user.email);
                self.handle.set(Session::authenticated(user));
            }
            Err(e) => {
                log::warn!("⚠️ Token inválido, cerrando sesión: {}", e);
                self.logout();
            }
        }
    }

    /// Merge local del perfil; sin usuario no hace nada
    pub fn update_user(&self, patch: UserPatch) {
        if self.session().user.is_none() {
            return;
        }
        self.handle.update(|s| {
            if let Some(user) = s.user.as_mut() {
                user.apply(patch);
            }
        });
    }

    pub fn guard(&self, route: &Route) -> RouteDecision {
        routing::guard(&self.session(), route, &self.login_route)
    }
}
