use std::sync::Mutex;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::{
    domain::entities::validation_outcome::{ObservableStatus, ValidationOutcome},
    errors::PurchaseFlowError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// `None` for store lifecycle statuses and for purchases that never
    /// referenced a product.
    pub transaction_id: Option<String>,
    pub status: ObservableStatus,
}

/// Wherever status updates end up: a UI label, a channel, a log.
pub trait StatusSink: Send {
    fn emit(&mut self, update: StatusUpdate);
}

impl StatusSink for Vec<StatusUpdate> {
    fn emit(&mut self, update: StatusUpdate) {
        self.push(update);
    }
}

/// Forwards every update to an unbounded tokio channel.
pub struct ChannelStatusSink {
    sender: UnboundedSender<StatusUpdate>,
}

impl ChannelStatusSink {
    pub fn channel() -> (Self, UnboundedReceiver<StatusUpdate>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl StatusSink for ChannelStatusSink {
    fn emit(&mut self, update: StatusUpdate) {
        if self.sender.send(update).is_err() {
            tracing::debug!("status receiver dropped, update discarded");
        }
    }
}

/// Turns terminal outcomes into statuses and writes them to the sink one at
/// a time, no matter how many purchase events complete concurrently.
pub struct ResultReporter<S: StatusSink> {
    sink: Mutex<S>,
}

impl<S: StatusSink> ResultReporter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn report(
        &self,
        transaction_id: Option<&str>,
        outcome: &Result<ValidationOutcome, PurchaseFlowError>,
    ) -> ObservableStatus {
        let status = ObservableStatus::from_outcome(outcome);
        self.emit(transaction_id, status.clone());
        status
    }

    pub fn emit(&self, transaction_id: Option<&str>, status: ObservableStatus) {
        match &status {
            ObservableStatus::Validated => {
                tracing::info!(?transaction_id, "validation successful")
            }
            ObservableStatus::Rejected(reason) => {
                tracing::warn!(?transaction_id, %reason, "validation rejected")
            }
            ObservableStatus::Failed(error) => {
                tracing::error!(?transaction_id, %error, "validation failed")
            }
            ObservableStatus::Ignored(reason) => {
                tracing::warn!(?transaction_id, ?reason, "purchase ignored")
            }
            ObservableStatus::InitializeFailed(_) | ObservableStatus::PurchaseFailed { .. } => {
                tracing::warn!(%status, "store callback")
            }
        }
        let update = StatusUpdate {
            transaction_id: transaction_id.map(str::to_string),
            status,
        };
        // Poisoning only means an earlier sink call panicked; keep emitting.
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sink.emit(update);
    }

    pub fn into_sink(self) -> S {
        self.sink
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;
    use crate::{
        domain::entities::validation_outcome::IgnoreReason,
        errors::{DecodeError, TransportError},
    };

    #[test]
    fn emits_exactly_one_update_per_report() {
        let reporter = ResultReporter::new(Vec::<StatusUpdate>::new());
        let status = reporter.report(Some("T1"), &Err(DecodeError::EmptyReceipt.into()));
        assert_eq!(status, ObservableStatus::Ignored(IgnoreReason::NoReceipt));

        let updates = reporter.into_sink();
        assert_eq!(
            updates,
            vec![StatusUpdate {
                transaction_id: Some("T1".to_string()),
                status: ObservableStatus::Ignored(IgnoreReason::NoReceipt),
            }]
        );
    }

    #[test]
    fn concurrent_reports_are_not_lost() {
        let reporter = Arc::new(ResultReporter::new(Vec::<StatusUpdate>::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let reporter = Arc::clone(&reporter);
                thread::spawn(move || {
                    let outcome = if i % 2 == 0 {
                        Ok(ValidationOutcome::Success)
                    } else {
                        Err(TransportError::AuthorityUnreachable("timeout".into()).into())
                    };
                    reporter.report(Some(format!("T{i}").as_str()), &outcome);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut updates = Arc::try_unwrap(reporter).ok().unwrap().into_sink();
        updates.sort_by(|a, b| a.transaction_id.cmp(&b.transaction_id));
        assert_eq!(updates.len(), 8);
        assert_eq!(updates[0].status, ObservableStatus::Validated);
        assert_eq!(
            updates[1].status.to_string(),
            "failed: validation authority unreachable: timeout"
        );
    }

    #[tokio::test]
    async fn channel_sink_forwards_updates() {
        let (sink, mut receiver) = ChannelStatusSink::channel();
        let reporter = ResultReporter::new(sink);
        reporter.emit(None, ObservableStatus::InitializeFailed("AppNotKnown".into()));

        let update = receiver.recv().await.unwrap();
        assert_eq!(update.transaction_id, None);
        assert_eq!(update.status.to_string(), "initialize failed: AppNotKnown");
    }

    #[test]
    fn channel_sink_tolerates_dropped_receiver() {
        let (sink, receiver) = ChannelStatusSink::channel();
        drop(receiver);
        ResultReporter::new(sink).report(None, &Ok(ValidationOutcome::Success));
    }
}
