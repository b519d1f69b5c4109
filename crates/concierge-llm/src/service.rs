//! Completion service trait and the test double.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use concierge_core::error::ConciergeError;

/// Service for generating a single bounded completion.
///
/// Implementations take the fixed system context plus the raw (not
/// lower-cased) user text and return the model's reply text. Every failure
/// mode, network, auth, quota, malformed response, comes back as
/// `Err(ConciergeError::Completion(..))`; callers decide how to present it.
pub trait CompletionService: Send + Sync {
    /// Request a completion for the given system context and user text.
    fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> impl std::future::Future<Output = Result<String, ConciergeError>> + Send;
}

/// Object-safe version of [`CompletionService`] for dynamic dispatch.
///
/// Because `CompletionService::complete` returns `impl Future` it is not
/// object-safe. This trait uses a boxed future instead, allowing
/// `Box<dyn DynCompletionService>` to be stored in structs without generics.
///
/// A blanket implementation is provided so that every `CompletionService`
/// automatically implements `DynCompletionService`.
pub trait DynCompletionService: Send + Sync {
    /// Request a completion (boxed future).
    fn complete_boxed<'a>(
        &'a self,
        system_prompt: &'a str,
        user_text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<String, ConciergeError>> + Send + 'a>,
    >;
}

/// Blanket impl: any `CompletionService` automatically implements
/// `DynCompletionService`.
impl<T: CompletionService> DynCompletionService for T {
    fn complete_boxed<'a>(
        &'a self,
        system_prompt: &'a str,
        user_text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<String, ConciergeError>> + Send + 'a>,
    > {
        Box::pin(self.complete(system_prompt, user_text))
    }
}

// ---------------------------------------------------------------------------
// MockCompletion - deterministic replies and forced failures for testing
// ---------------------------------------------------------------------------

/// Mock completion service with a canned reply, an echo mode, or a forced
/// failure.
///
/// Counts invocations so tests can assert the fallback is consulted exactly
/// once per unmatched message and never for rule hits. Echo mode returns the
/// user text verbatim, which lets tests check what the fallback actually
/// received.
#[derive(Debug, Default)]
pub struct MockCompletion {
    reply: Mutex<Option<String>>,
    fail: Mutex<bool>,
    calls: AtomicUsize,
}

impl MockCompletion {
    /// Create a mock that answers every request with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Mutex::new(Some(reply.into())),
            fail: Mutex::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that answers every request with the user text itself.
    pub fn echoing() -> Self {
        Self {
            reply: Mutex::new(None),
            fail: Mutex::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose every request fails, simulating a remote-service
    /// outage.
    pub fn failing() -> Self {
        Self {
            reply: Mutex::new(None),
            fail: Mutex::new(true),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion requests made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CompletionService for MockCompletion {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_text: &str,
    ) -> Result<String, ConciergeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fail = *self.fail.lock().unwrap();
        if fail {
            return Err(ConciergeError::Completion(format!(
                "simulated remote failure for: {}",
                user_text
            )));
        }
        match self.reply.lock().unwrap().as_ref() {
            Some(reply) => Ok(reply.clone()),
            None => Ok(user_text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replies() {
        let mock = MockCompletion::replying("canned answer");
        let reply = mock.complete("system", "user question").await.unwrap();
        assert_eq!(reply, "canned answer");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockCompletion::failing();
        let result = mock.complete("system", "user question").await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConciergeError::Completion(_)
        ));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_echoes_user_text() {
        let mock = MockCompletion::echoing();
        let reply = mock.complete("system", "Raw User TEXT").await.unwrap();
        assert_eq!(reply, "Raw User TEXT");
    }

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let mock = MockCompletion::replying("x");
        for _ in 0..3 {
            mock.complete("s", "u").await.unwrap();
        }
        assert_eq!(mock.calls(), 3);
    }

    #[tokio::test]
    async fn test_dyn_dispatch_through_box() {
        let boxed: Box<dyn DynCompletionService> = Box::new(MockCompletion::replying("via box"));
        let reply = boxed.complete_boxed("system", "user").await.unwrap();
        assert_eq!(reply, "via box");
    }
}
