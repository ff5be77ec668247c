use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

use crate::{Error, Result};

/// Per-call deadline and cancellation.
///
/// A `Context` is cheap to clone. Every clone observes the same cancellation
/// token, so one [`CancelHandle`] can abort several calls at once.
#[derive(Debug, Clone, Default)]
pub struct Context {
    timeout: Option<Duration>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Aborts every call made with the [`Context`] it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl Context {
    /// A context with no deadline that can never be cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attaches a fresh cancellation token, replacing any previous one.
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancel = Some(receiver);
        (self, CancelHandle { sender })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, |rx| *rx.borrow())
    }

    async fn cancelled(&self) {
        let Some(rx) = &self.cancel else {
            return std::future::pending().await;
        };
        let mut rx = rx.clone();
        while !*rx.borrow_and_update() {
            // Handle dropped without cancelling: nothing can cancel us anymore.
            if rx.changed().await.is_err() {
                return std::future::pending().await;
            }
        }
    }

    /// Drives `fut` to completion unless the context is cancelled or its
    /// deadline expires first. A context cancelled before the call starts
    /// fails immediately.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output>
    where
        F: Future,
    {
        let bounded = async {
            match self.timeout {
                Some(timeout) => tokio::time::timeout(timeout, fut)
                    .await
                    .map_err(|_| Error::TimedOut(timeout)),
                None => Ok(fut.await),
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(Error::Cancelled),
            out = bounded => out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn background_context_runs_to_completion() {
        let ctx = Context::background();
        assert_eq!(ctx.run(async { 7 }).await.unwrap(), 7);
    }

    #[test]
    fn builder_sets_timeout_and_token() {
        assert_eq!(Context::background().timeout(), None);

        let (ctx, handle) = Context::background()
            .with_timeout(Duration::from_secs(3))
            .with_cancel();
        assert_eq!(ctx.timeout(), Some(Duration::from_secs(3)));
        assert!(!handle.is_cancelled());
        assert!(!ctx.is_cancelled());

        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(ctx.clone().is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_before_start_fails_immediately() {
        let (ctx, handle) = Context::background().with_cancel();
        handle.cancel();
        assert!(ctx.is_cancelled());
        let res = ctx.run(async { 7 }).await;
        assert!(matches!(res, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn cancel_aborts_pending_call() {
        let (ctx, handle) = Context::background().with_cancel();
        let pending = ctx.run(std::future::pending::<()>());
        let cancel = async {
            tokio::task::yield_now().await;
            handle.cancel();
        };
        let (res, _) = tokio::join!(pending, cancel);
        assert!(matches!(res, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn dropped_handle_never_cancels() {
        let (ctx, handle) = Context::background().with_cancel();
        drop(handle);
        assert_eq!(ctx.run(async { "done" }).await.unwrap(), "done");
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_expires() {
        let ctx = Context::background().with_timeout(Duration::from_millis(50));
        let res = ctx.run(tokio::time::sleep(Duration::from_secs(5))).await;
        assert!(matches!(res, Err(Error::TimedOut(d)) if d == Duration::from_millis(50)));
    }
}
