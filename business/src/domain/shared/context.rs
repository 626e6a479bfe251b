use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use super::value_objects::UserId;

/// Reason a guarded call was abandoned before it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupted {
    Cancelled,
    DeadlineExceeded,
}

/// Cancels every [`RequestContext`] cloned from the one it was created with.
///
/// The HTTP server does not create one: poem drops a handler's future when
/// the client disconnects, which drops any in-flight storage call with it.
/// The handle is for callers that drive use cases outside a request, such as
/// background jobs or tests, and need to stop them explicitly.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

/// Per-request state handed explicitly to every use case.
///
/// Carries the caller identity resolved by the authenticator (`None` for
/// anonymous requests), an optional deadline and an optional cancellation
/// signal. Nothing here is shared between requests.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    user_id: Option<UserId>,
    deadline: Option<Instant>,
    cancelled: Option<watch::Receiver<bool>>,
}

impl RequestContext {
    pub fn new(user_id: Option<UserId>) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<UserId>) -> Self {
        Self::new(Some(user_id.into()))
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attaches a cancellation signal and returns the handle that fires it.
    pub fn cancellable(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancelled = Some(receiver);
        (
            self,
            CancelHandle {
                sender: Arc::new(sender),
            },
        )
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.as_ref().is_some_and(|rx| *rx.borrow())
    }

    pub fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Starts `call` and drives it to completion unless the request is
    /// cancelled or its deadline passes first. Nothing is started when the
    /// context is already interrupted. An abandoned future is dropped, which
    /// aborts whatever I/O it had in flight.
    pub async fn run<F, Fut>(&self, call: F) -> Result<Fut::Output, Interrupted>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        if self.is_cancelled() {
            return Err(Interrupted::Cancelled);
        }
        if self.is_expired() {
            return Err(Interrupted::DeadlineExceeded);
        }

        tokio::select! {
            biased;
            _ = wait_cancelled(self.cancelled.clone()) => Err(Interrupted::Cancelled),
            _ = wait_deadline(self.deadline) => Err(Interrupted::DeadlineExceeded),
            output = call() => Ok(output),
        }
    }
}

async fn wait_cancelled(receiver: Option<watch::Receiver<bool>>) {
    let Some(mut receiver) = receiver else {
        return std::future::pending().await;
    };
    // A dropped handle can never cancel.
    if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
        std::future::pending::<()>().await;
    }
}

async fn wait_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
