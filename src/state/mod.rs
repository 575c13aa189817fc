// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod auth_state;
pub mod history;
pub mod reactivity;
pub mod request_state;

pub use auth_state::*;
pub use history::*;
pub use reactivity::*;
pub use request_state::*;
