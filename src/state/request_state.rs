// ============================================================================
// REQUEST STATE - Un slot {data, is_loading, error} por acción de un store
// ============================================================================
// Idle -> Loading -> (Success | Failed) -> Idle (clear)
// Solo la última llamada iniciada en un slot puede aplicar su resultado; la
// anterior se aborta al empezar la nueva.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use super::reactivity::{ReactiveState, SubscriptionId};
use crate::error::ApiError;

/// Snapshot observable de un slot. `is_loading` y `error` nunca a la vez.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> RequestState<T> {
    pub fn idle() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.data.is_none() && !self.is_loading && self.error.is_none()
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Turno de una llamada dentro de su slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Resultado de `RequestSlot::run` visto por el store
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome<T> {
    Success(T),
    Failed(String),
    /// Otra llamada (o un clear/cancel) tomó el slot: no se aplicó nada
    Superseded,
}

impl<T> RunOutcome<T> {
    pub fn success(self) -> Option<T> {
        match self {
            RunOutcome::Success(data) => Some(data),
            _ => None,
        }
    }
}

#[derive(Default)]
struct SlotControl {
    seq: u64,
    in_flight: Option<AbortHandle>,
}

pub struct RequestSlot<T> {
    name: &'static str,
    state: ReactiveState<RequestState<T>>,
    control: Rc<RefCell<SlotControl>>,
}

impl<T> Clone for RequestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            state: self.state.clone(),
            control: self.control.clone(),
        }
    }
}

impl<T: Clone + 'static> RequestSlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: ReactiveState::new(RequestState::idle()),
            control: Rc::new(RefCell::new(SlotControl::default())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn snapshot(&self) -> RequestState<T> {
        self.state.get()
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id)
    }

    /// Idle -> Loading. Aborta la llamada anterior si seguía en vuelo.
    pub fn begin(&self) -> (Ticket, AbortRegistration) {
        let (handle, registration) = AbortHandle::new_pair();
        let ticket = {
            let mut control = self.control.borrow_mut();
            control.seq += 1;
            if let Some(previous) = control.in_flight.replace(handle) {
                log::debug!("⏹️ [{}] llamada anterior abortada", self.name);
                previous.abort();
            }
            Ticket(control.seq)
        };
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });
        (ticket, registration)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.control.borrow().seq == ticket.0
    }

    /// Loading -> Success. `false` si el ticket ya no es el último.
    pub fn succeed(&self, ticket: Ticket, data: T) -> bool {
        if !self.release(ticket) {
            log::debug!("⏭️ [{}] resultado descartado (llamada obsoleta)", self.name);
            return false;
        }
        self.state.update(|s| {
            s.data = Some(data);
            s.is_loading = false;
            s.error = None;
        });
        true
    }

    /// Loading -> Failed. Los datos anteriores se conservan.
    pub fn fail(&self, ticket: Ticket, message: String) -> bool {
        if !self.release(ticket) {
            log::debug!("⏭️ [{}] error descartado (llamada obsoleta)", self.name);
            return false;
        }
        self.state.update(|s| {
            s.is_loading = false;
            s.error = Some(message);
        });
        true
    }

    /// Vuelve a Idle; una llamada en vuelo ya no podrá escribir
    pub fn clear(&self) {
        self.invalidate();
        self.state.set(RequestState::idle());
    }

    pub fn clear_error(&self) {
        if self.state.with(|s| s.error.is_some()) {
            self.state.update(|s| s.error = None);
        }
    }

    /// Aborta la llamada en vuelo. `true` si había una.
    pub fn cancel(&self) -> bool {
        let cancelled = self.invalidate();
        if cancelled {
            log::info!("⏹️ [{}] llamada cancelada", self.name);
            self.state.update(|s| s.is_loading = false);
        }
        cancelled
    }

    /// Ejecuta una llamada completa sobre el slot; los errores se quedan en
    /// el slot como texto (`fallback` si el error no tiene mensaje)
    pub async fn run<F>(&self, call: F, fallback: &str) -> RunOutcome<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let (ticket, registration) = self.begin();
        match Abortable::new(call, registration).await {
            Err(_aborted) => RunOutcome::Superseded,
            Ok(Ok(data)) => {
                if self.succeed(ticket, data.clone()) {
                    RunOutcome::Success(data)
                } else {
                    RunOutcome::Superseded
                }
            }
            Ok(Err(error)) => {
                let message = error.user_message(fallback);
                log::warn!("❌ [{}] {}", self.name, message);
                if self.fail(ticket, message.clone()) {
                    RunOutcome::Failed(message)
                } else {
                    RunOutcome::Superseded
                }
            }
        }
    }

    fn release(&self, ticket: Ticket) -> bool {
        let mut control = self.control.borrow_mut();
        if control.seq != ticket.0 {
            return false;
        }
        control.in_flight = None;
        true
    }

    fn invalidate(&self) -> bool {
        let mut control = self.control.borrow_mut();
        control.seq += 1;
        match control.in_flight.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;

    #[test]
    fn test_success_transition() {
        let slot: RequestSlot<u32> = RequestSlot::new("test");
        let (ticket, _) = slot.begin();
        assert!(slot.is_loading());

        assert!(slot.succeed(ticket, 7));
        assert_eq!(
            slot.snapshot(),
            RequestState {
                data: Some(7),
                is_loading: false,
                error: None
            }
        );
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let slot: RequestSlot<u32> = RequestSlot::new("test");
        let (ticket, _) = slot.begin();
        slot.succeed(ticket, 1);

        let (ticket, _) = slot.begin();
        assert_eq!(slot.error(), None);
        slot.fail(ticket, "boom".to_string());

        let state = slot.snapshot();
        assert_eq!(state.data, Some(1));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_only_latest_ticket_applies() {
        let slot: RequestSlot<&str> = RequestSlot::new("test");
        let (first, _) = slot.begin();
        let (second, _) = slot.begin();

        assert!(slot.succeed(second, "second"));
        assert!(!slot.succeed(first, "first"));
        assert!(!slot.fail(first, "late".to_string()));

        let state = slot.snapshot();
        assert_eq!(state.data, Some("second"));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_clear_invalidates_in_flight_call() {
        let slot: RequestSlot<u32> = RequestSlot::new("test");
        let (ticket, _) = slot.begin();
        slot.clear();

        assert!(!slot.succeed(ticket, 3));
        assert!(slot.snapshot().is_idle());
    }

    #[test]
    fn test_run_maps_error_with_fallback() {
        let slot: RequestSlot<u32> = RequestSlot::new("test");
        let outcome = block_on(slot.run(
            async { Err(ApiError::Application(String::new())) },
            "Analysis failed",
        ));

        assert_eq!(outcome, RunOutcome::Failed("Analysis failed".to_string()));
        assert_eq!(slot.error().as_deref(), Some("Analysis failed"));
    }

    #[test]
    fn test_run_reports_transport_message() {
        let slot: RequestSlot<u32> = RequestSlot::new("test");
        block_on(slot.run(
            async { Err(TransportError::Network("offline".to_string()).into()) },
            "Analysis failed",
        ));
        assert_eq!(slot.error().as_deref(), Some("Network error: offline"));
    }

    #[test]
    fn test_new_call_aborts_previous_and_cancel_stops_loading() {
        let slot: RequestSlot<u32> = RequestSlot::new("test");
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (tx_first, rx_first) = oneshot::channel::<u32>();
        let (_tx_second, rx_second) = oneshot::channel::<u32>();
        let first_outcome = Rc::new(RefCell::new(None));

        let first_slot = slot.clone();
        let sink = first_outcome.clone();
        spawner
            .spawn_local(async move {
                let outcome = first_slot
                    .run(async { Ok(rx_first.await.unwrap_or(0)) }, "failed")
                    .await;
                *sink.borrow_mut() = Some(outcome);
            })
            .unwrap();
        pool.run_until_stalled();

        let second_slot = slot.clone();
        spawner
            .spawn_local(async move {
                second_slot
                    .run(async { Ok(rx_second.await.unwrap_or(0)) }, "failed")
                    .await;
            })
            .unwrap();
        pool.run_until_stalled();

        assert_eq!(*first_outcome.borrow(), Some(RunOutcome::Superseded));
        assert!(tx_first.send(1).is_err());
        assert!(slot.is_loading());

        assert!(slot.cancel());
        pool.run_until_stalled();
        assert!(!slot.is_loading());
        assert_eq!(slot.data(), None);
        assert!(!slot.cancel());
    }

    #[test]
    fn test_every_transition_notifies() {
        let slot: RequestSlot<u32> = RequestSlot::new("test");
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        slot.subscribe(move || counter.set(counter.get() + 1));

        let (ticket, _) = slot.begin();
        slot.succeed(ticket, 1);
        slot.clear();

        assert_eq!(hits.get(), 3);
    }
}
