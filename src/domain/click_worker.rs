//! Background worker applying click events to the store.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewVisit;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;

/// Consumes click events until the channel closes.
///
/// For each event the worker bumps the link's click counter and appends a
/// visit record. A `NotFound` from the counter update means the link was
/// deleted between redirect and processing; the event is discarded. Other
/// failures are logged and skipped, so a single bad event never stalls the
/// queue.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    links: Arc<dyn LinkRepository>,
    visits: Arc<dyn VisitRepository>,
) {
    while let Some(event) = rx.recv().await {
        match links.increment_clicks(&event.code).await {
            Ok(link) => {
                let visit = NewVisit {
                    link_id: link.id,
                    caller_ip: event.caller_ip,
                };
                if let Err(e) = visits.record(visit).await {
                    warn!(code = %event.code, error = %e, "Failed to record visit");
                }
            }
            Err(AppError::NotFound { .. }) => {
                debug!(code = %event.code, "Click for deleted link, dropping");
            }
            Err(e) => {
                warn!(code = %event.code, error = %e, "Failed to increment clicks");
            }
        }
    }

    debug!("Click worker shutting down, channel closed");
}
