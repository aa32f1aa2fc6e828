//! Retrying client — wraps any [`ChatClient`] with a flat retry policy.
//!
//! A failed call is retried after a fixed delay until the attempt budget is
//! spent.  There is no backoff growth and no jitter.  Once every attempt has
//! failed the last error is returned inside [`LlmError::Exhausted`].

use std::time::Duration;

use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::llm::client::{ChatClient, ChatMessage, LlmError};

// ---------------------------------------------------------------------------
// RetryingClient
// ---------------------------------------------------------------------------

/// A transparent wrapper around any [`ChatClient`] that retries failures.
///
/// # Example
/// ```rust
/// use vocab_tutor::config::LlmConfig;
/// use vocab_tutor::llm::{ApiClient, RetryingClient};
///
/// let config = LlmConfig::default();
/// let client = RetryingClient::from_config(ApiClient::from_config(&config), &config);
/// assert_eq!(client.attempts(), 3);
/// ```
pub struct RetryingClient<C: ChatClient> {
    inner: C,
    attempts: u32,
    delay: Duration,
}

impl<C: ChatClient> RetryingClient<C> {
    /// Wrap `inner`.  `attempts` counts the first try; zero is treated as one.
    pub fn new(inner: C, attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
            delay,
        }
    }

    /// Wrap `inner` using `retry_attempts` / `retry_delay_ms` from config.
    pub fn from_config(inner: C, config: &LlmConfig) -> Self {
        Self::new(inner, config.retry_attempts, config.retry_delay())
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Return a reference to the wrapped client.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: ChatClient> ChatClient for RetryingClient<C> {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let mut attempt = 1;
        loop {
            match self.inner.complete(messages).await {
                Ok(reply) => return Ok(reply),
                Err(err) if attempt < self.attempts => {
                    log::warn!(
                        "LLM call failed (attempt {attempt}/{}): {err}; retrying in {:?}",
                        self.attempts,
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    log::error!("LLM call failed after {} attempts: {err}", self.attempts);
                    return Err(LlmError::Exhausted {
                        attempts: self.attempts,
                        last: Box::new(err),
                    });
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Fails the first `failures` calls with a timeout, then answers "ok".
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
    }

    impl Flaky {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatClient for Flaky {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err(LlmError::Timeout)
            } else {
                Ok("ok".into())
            }
        }
    }

    fn messages() -> Vec<ChatMessage> {
        vec![ChatMessage::user("hello")]
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn first_success_makes_one_call() {
        let client = RetryingClient::new(Flaky::new(0), 3, Duration::ZERO);
        assert_eq!(client.complete(&messages()).await.unwrap(), "ok");
        assert_eq!(client.inner().calls(), 1);
    }

    #[tokio::test]
    async fn recovers_on_last_attempt() {
        let client = RetryingClient::new(Flaky::new(2), 3, Duration::ZERO);
        assert_eq!(client.complete(&messages()).await.unwrap(), "ok");
        assert_eq!(client.inner().calls(), 3);
    }

    #[tokio::test]
    async fn exhausts_after_exact_attempt_count() {
        let client = RetryingClient::new(Flaky::new(10), 3, Duration::ZERO);
        let err = client.complete(&messages()).await.unwrap_err();

        assert_eq!(client.inner().calls(), 3);
        match err {
            LlmError::Exhausted { attempts, last } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last, LlmError::Timeout));
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let client = RetryingClient::new(Flaky::new(0), 0, Duration::ZERO);
        assert_eq!(client.attempts(), 1);
        assert!(client.complete(&messages()).await.is_ok());
    }

    #[tokio::test]
    async fn waits_between_attempts() {
        let delay = Duration::from_millis(20);
        let client = RetryingClient::new(Flaky::new(2), 3, delay);

        let started = std::time::Instant::now();
        client.complete(&messages()).await.unwrap();

        assert!(started.elapsed() >= delay * 2);
    }

    #[test]
    fn retrying_client_is_object_safe() {
        let _: Box<dyn ChatClient> =
            Box::new(RetryingClient::new(Flaky::new(0), 3, Duration::ZERO));
    }
}
