use crate::errors::{InvoflowError, InvoflowResult};

/// Shared fetch-lifecycle state for every store: the latest data, a
/// loading flag that is true only while a fetch is in flight, and the last
/// failure, cleared at the start of each new attempt. The failure is kept
/// as the original error so callers can still see its status code and
/// recoverability.
///
/// Overlapping fetches are not cancelled; instead every fetch takes a
/// monotonically increasing ticket and a completed fetch is applied only if
/// its ticket is still the newest issued. A slow superseded response can
/// therefore never overwrite a newer one.
#[derive(Debug)]
pub struct StoreState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<InvoflowError>,
    issued: u64,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            issued: 0,
        }
    }
}

impl<T> StoreState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fetch: clears the previous error, raises `loading` and
    /// returns the ticket the result must present on completion.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        self.issued
    }

    /// Apply a completed fetch. Returns false (and changes nothing) when a
    /// newer fetch was issued after this ticket.
    pub fn finish(&mut self, ticket: u64, result: InvoflowResult<T>) -> bool {
        if ticket < self.issued {
            log::debug!("⏭️ Discarding stale response (ticket {} superseded by {})", ticket, self.issued);
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
        true
    }
}
