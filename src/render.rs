//! Seams between the action and the external card renderers.
//!
//! A renderer receives a [`CardRequest`] and a response sink it writes the
//! finished SVG into. [`CaptureResponse`] is the sink the runner hands out: it
//! swallows header calls and keeps the emitted body so it can be written to disk.

use tracing::{debug, warn};

use crate::card::{CardRequest, CardType};
use crate::error::RenderError;

/// Response-shaped sink a renderer emits its output through.
pub trait CardResponse {
    /// Record a response header. Renderers may call this any number of times.
    fn set_header(&mut self, name: &str, value: &str);

    /// Emit the rendered body, returning it back to the caller.
    fn send(&mut self, body: String) -> &str;
}

/// An external rendering capability for one card type.
pub trait CardRenderer {
    fn render(
        &self,
        request: &CardRequest,
        response: &mut dyn CardResponse,
    ) -> Result<(), RenderError>;
}

impl<F> CardRenderer for F
where
    F: Fn(&CardRequest, &mut dyn CardResponse) -> Result<(), RenderError>,
{
    fn render(
        &self,
        request: &CardRequest,
        response: &mut dyn CardResponse,
    ) -> Result<(), RenderError> {
        (self)(request, response)
    }
}

/// Fixed table from card type to the renderer that handles it.
pub trait CardHandlers {
    fn handler(&self, card: CardType) -> &dyn CardRenderer;
}

/// Single-assignment capture of a renderer's output.
///
/// Repeated `send` calls are tolerated: the last body wins and the repeat is
/// logged.
#[derive(Debug, Default)]
pub struct CaptureResponse {
    body: Option<String>,
    sends: usize,
}

impl CaptureResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the renderer called `send`.
    pub fn send_count(&self) -> usize {
        self.sends
    }

    /// Consume the capture, yielding the body if a non-empty one was sent.
    pub fn into_output(self) -> Option<String> {
        self.body.filter(|body| !body.is_empty())
    }
}

impl CardResponse for CaptureResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        debug!(name, value, "ignoring renderer header");
    }

    fn send(&mut self, body: String) -> &str {
        self.sends += 1;
        if self.sends > 1 {
            warn!(
                sends = self.sends,
                "card renderer emitted output more than once; keeping the last"
            );
        }
        self.body.insert(body).as_str()
    }
}
