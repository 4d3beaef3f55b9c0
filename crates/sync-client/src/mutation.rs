//! Per-call mutation state for reservation writes.
//!
//! Each handle wraps one network round trip with a loading flag scoped to
//! that call, the last error message, and (for create/update) the most
//! recently returned record. Failures surface as `None` from the call and
//! an error message on the handle; nothing retries automatically.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::{ApiClient, ClientError};
use crate::types::{CreateReservationParams, Reservation, UpdateReservationParams};

/// Transport surface needed by the mutation handles.
///
/// Production uses [`ApiClient`]; tests substitute deterministic stubs.
#[async_trait]
pub trait ReservationTransport: Send + Sync {
    /// Create a reservation.
    async fn create(&self, params: &CreateReservationParams) -> Result<Reservation, ClientError>;

    /// Partially update a reservation.
    async fn update(
        &self,
        reservation_id: i32,
        params: &UpdateReservationParams,
    ) -> Result<Reservation, ClientError>;

    /// Delete a reservation.
    async fn delete(&self, reservation_id: i32) -> Result<(), ClientError>;
}

#[async_trait]
impl ReservationTransport for ApiClient {
    async fn create(&self, params: &CreateReservationParams) -> Result<Reservation, ClientError> {
        self.create_reservation(params).await
    }

    async fn update(
        &self,
        reservation_id: i32,
        params: &UpdateReservationParams,
    ) -> Result<Reservation, ClientError> {
        self.update_reservation(reservation_id, params).await
    }

    async fn delete(&self, reservation_id: i32) -> Result<(), ClientError> {
        self.delete_reservation(reservation_id).await
    }
}

#[derive(Default)]
struct MutationState {
    is_loading: bool,
    error: Option<String>,
    record: Option<Reservation>,
}

fn begin(state: &Mutex<MutationState>) {
    let mut state = state.lock().expect("mutation state poisoned");
    state.is_loading = true;
    state.error = None;
    state.record = None;
}

fn settle(
    state: &Mutex<MutationState>,
    result: Result<Reservation, ClientError>,
) -> Option<Reservation> {
    let mut state = state.lock().expect("mutation state poisoned");
    state.is_loading = false;
    match result {
        Ok(record) => {
            state.record = Some(record.clone());
            Some(record)
        }
        Err(err) => {
            state.error = Some(err.to_string());
            None
        }
    }
}

/// Create-reservation call state.
pub struct CreateReservation {
    transport: Arc<dyn ReservationTransport>,
    state: Mutex<MutationState>,
}

impl CreateReservation {
    /// Create a handle backed by the API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self::from_transport(Arc::new(client))
    }

    fn from_transport(transport: Arc<dyn ReservationTransport>) -> Self {
        Self {
            transport,
            state: Mutex::new(MutationState::default()),
        }
    }

    /// Perform the create. Returns the created record, or `None` with the
    /// error captured on the handle.
    pub async fn call(&self, params: &CreateReservationParams) -> Option<Reservation> {
        begin(&self.state);
        let result = self.transport.create(params).await;
        settle(&self.state, result)
    }

    /// True while a call is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().expect("mutation state poisoned").is_loading
    }

    /// The last call's error message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state
            .lock()
            .expect("mutation state poisoned")
            .error
            .clone()
    }

    /// The most recently created record.
    #[must_use]
    pub fn created(&self) -> Option<Reservation> {
        self.state
            .lock()
            .expect("mutation state poisoned")
            .record
            .clone()
    }

    /// Clear the captured error.
    pub fn reset_error(&self) {
        self.state.lock().expect("mutation state poisoned").error = None;
    }
}

/// Update-reservation call state.
pub struct UpdateReservation {
    transport: Arc<dyn ReservationTransport>,
    state: Mutex<MutationState>,
}

impl UpdateReservation {
    /// Create a handle backed by the API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self::from_transport(Arc::new(client))
    }

    fn from_transport(transport: Arc<dyn ReservationTransport>) -> Self {
        Self {
            transport,
            state: Mutex::new(MutationState::default()),
        }
    }

    /// Perform the update. Returns the updated record, or `None` with the
    /// error captured on the handle.
    pub async fn call(
        &self,
        reservation_id: i32,
        params: &UpdateReservationParams,
    ) -> Option<Reservation> {
        begin(&self.state);
        let result = self.transport.update(reservation_id, params).await;
        settle(&self.state, result)
    }

    /// True while a call is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().expect("mutation state poisoned").is_loading
    }

    /// The last call's error message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state
            .lock()
            .expect("mutation state poisoned")
            .error
            .clone()
    }

    /// The most recently updated record.
    #[must_use]
    pub fn updated(&self) -> Option<Reservation> {
        self.state
            .lock()
            .expect("mutation state poisoned")
            .record
            .clone()
    }

    /// Clear the captured error.
    pub fn reset_error(&self) {
        self.state.lock().expect("mutation state poisoned").error = None;
    }
}

#[derive(Default)]
struct DeleteState {
    is_deleting: bool,
    error: Option<String>,
}

/// Delete-reservation call state.
pub struct DeleteReservation {
    transport: Arc<dyn ReservationTransport>,
    state: Mutex<DeleteState>,
}

impl DeleteReservation {
    /// Create a handle backed by the API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self::from_transport(Arc::new(client))
    }

    fn from_transport(transport: Arc<dyn ReservationTransport>) -> Self {
        Self {
            transport,
            state: Mutex::new(DeleteState::default()),
        }
    }

    /// Perform the delete, invoking `on_success` only after a successful
    /// response. Returns whether the delete succeeded.
    pub async fn call_with<F>(&self, reservation_id: i32, on_success: F) -> bool
    where
        F: FnOnce(),
    {
        {
            let mut state = self.state.lock().expect("delete state poisoned");
            state.is_deleting = true;
            state.error = None;
        }

        let result = self.transport.delete(reservation_id).await;

        let mut state = self.state.lock().expect("delete state poisoned");
        state.is_deleting = false;
        match result {
            Ok(()) => {
                drop(state);
                on_success();
                true
            }
            Err(err) => {
                state.error = Some(err.to_string());
                false
            }
        }
    }

    /// Perform the delete with no success callback.
    pub async fn call(&self, reservation_id: i32) -> bool {
        self.call_with(reservation_id, || {}).await
    }

    /// True while a call is in flight.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.state.lock().expect("delete state poisoned").is_deleting
    }

    /// The last call's error message.
    #[must_use]
    pub fn delete_error(&self) -> Option<String> {
        self.state
            .lock()
            .expect("delete state poisoned")
            .error
            .clone()
    }
}
