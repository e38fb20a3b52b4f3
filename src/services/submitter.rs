//! Submission orchestration - demo simulation or one outbound POST.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::config::{Destination, SubmitterConfig, TransportMode};
use crate::domain::ReservationRequest;
use crate::error::{ReservationError, Result};
use crate::repositories::http::{HttpTransport, Transport};
use crate::status::SubmissionOutcome;

/// Clears the in-flight flag when dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct Submitter<T = HttpTransport> {
    config: SubmitterConfig,
    transport: T,
    in_flight: AtomicBool,
}

impl Submitter<HttpTransport> {
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(config: SubmitterConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Submitter<T> {
    pub fn with_transport(config: SubmitterConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit one reservation. Only one submission runs at a time; a call
    /// made while another is in flight fails immediately.
    pub async fn submit(&self, request: &ReservationRequest) -> SubmissionOutcome {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            warn!("submission rejected, another one is in flight");
            return SubmissionOutcome::failure(&ReservationError::SubmissionInProgress);
        };

        match self.send(request).await {
            Ok(()) => SubmissionOutcome::success(),
            Err(e) => {
                warn!(error = %e, "reservation submission failed");
                SubmissionOutcome::failure(&e)
            }
        }
    }

    async fn send(&self, request: &ReservationRequest) -> Result {
        let url = match &self.config.destination {
            Destination::Unconfigured => {
                info!(?request, "demo mode, simulating reservation submission");
                tokio::time::sleep(self.config.demo_delay).await;
                return Ok(());
            }
            Destination::Endpoint(url) => url,
        };

        let body = request.to_json()?;
        let status = self.transport.post_json(url, body).await?;
        debug!(status, mode = ?self.config.transport_mode, "reservation endpoint responded");

        match self.config.transport_mode {
            TransportMode::FireAndForget => Ok(()),
            TransportMode::Checked if (200..300).contains(&status) => Ok(()),
            TransportMode::Checked => Err(ReservationError::ServerRejected { status }),
        }
    }
}
