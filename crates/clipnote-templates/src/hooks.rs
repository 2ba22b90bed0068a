//! Deferred post-execution hooks.
//!
//! Front-matter edits wait until the host has finished expanding the
//! current template, when the metadata block is safe to touch. The caller
//! of the entry points owns a [`HookQueue`]; the scripts defer closures
//! into it and the caller drains it once the main flow has returned.

use futures::future::BoxFuture;
use tokio::sync::Mutex;

use clipnote_core::Result;

type Hook = Box<dyn FnOnce() -> BoxFuture<'static, Result<()>> + Send>;

/// Callback queue drained after template expansion completes.
#[derive(Default)]
pub struct HookQueue {
    pending: Mutex<Vec<Hook>>,
}

impl HookQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a hook to run after the main flow returns.
    pub async fn defer<F>(&self, hook: F)
    where
        F: FnOnce() -> BoxFuture<'static, Result<()>> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;
        pending.push(Box::new(hook));
        log::debug!("Deferred hook queued ({} pending)", pending.len());
    }

    /// Number of queued hooks.
    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pending.lock().await.is_empty()
    }

    /// Drain the queue and run every hook in defer order.
    ///
    /// A failing hook is logged and does not stop the ones after it.
    pub async fn run_all(&self) {
        let hooks: Vec<Hook> = {
            let mut pending = self.pending.lock().await;
            pending.drain(..).collect()
        };

        for hook in hooks {
            if let Err(e) = hook().await {
                log::error!("Deferred hook failed: {}", e);
            }
        }
    }
}
