//! Deadline annotator implementation.
//!
//! Annotation calls have no cancellation contract of their own. The
//! [`DeadlineAnnotator`] runs the wrapped annotator on a worker thread and
//! waits for the result for at most the configured duration. When the
//! deadline expires the caller gets an annotation error immediately; the
//! worker keeps running to completion in the background and its result is
//! discarded.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;

use crate::analysis::annotator::Annotator;
use crate::analysis::token::AnnotatedToken;
use crate::error::{PreprocessError, Result};

/// An annotator that bounds the wall-clock time of another annotator.
#[derive(Clone)]
pub struct DeadlineAnnotator {
    inner: Arc<dyn Annotator>,
    deadline: Duration,
}

impl DeadlineAnnotator {
    /// Wrap `inner` so every call returns within `deadline`.
    pub fn new(inner: Arc<dyn Annotator>, deadline: Duration) -> Result<Self> {
        if deadline.is_zero() {
            return Err(PreprocessError::configuration(
                "annotation deadline must be greater than zero",
            ));
        }
        Ok(DeadlineAnnotator { inner, deadline })
    }

    /// Get the deadline.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Get the wrapped annotator.
    pub fn inner(&self) -> &Arc<dyn Annotator> {
        &self.inner
    }
}

impl Annotator for DeadlineAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>> {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        let inner = Arc::clone(&self.inner);
        let text = text.to_string();

        thread::Builder::new()
            .name("textprep-annotate".to_string())
            .spawn(move || {
                // The receiver is gone if the deadline already expired.
                let _ = sender.send(inner.annotate(&text));
            })
            .map_err(|e| {
                PreprocessError::annotation(format!("failed to spawn annotation worker: {e}"))
            })?;

        match receiver.recv_timeout(self.deadline) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                log::warn!(
                    "annotator '{}' exceeded deadline of {:?}",
                    self.inner.name(),
                    self.deadline
                );
                Err(PreprocessError::timeout(format!(
                    "annotator '{}' did not finish within {:?}",
                    self.inner.name(),
                    self.deadline
                )))
            }
            Err(RecvTimeoutError::Disconnected) => Err(PreprocessError::annotation(format!(
                "annotator '{}' worker exited without a result",
                self.inner.name()
            ))),
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
