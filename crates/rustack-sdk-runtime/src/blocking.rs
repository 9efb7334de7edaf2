//! Synchronous execution of async invocations.

use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::error::TransportError;

/// A private current-thread runtime for blocking clients.
///
/// [`block_on`](Self::block_on) returns the future's output unchanged, so a
/// blocking call surfaces exactly the typed fault the async call produced.
/// It must not be called from inside another async runtime.
#[derive(Debug)]
pub struct BlockingRuntime {
    runtime: Runtime,
}

impl BlockingRuntime {
    /// Start the runtime.
    pub fn new() -> Result<Self, TransportError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime })
    }

    /// Drive `future` to completion on this thread.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
