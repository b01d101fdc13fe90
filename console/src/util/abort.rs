//! Cancellation handle for in-flight fetches.

/// Wraps a browser `AbortController`; inert outside the browser.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
}

impl AbortHandle {
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { controller: web_sys::AbortController::new().ok() }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(web_sys::AbortController::signal)
    }

    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}
