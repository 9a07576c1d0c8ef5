//! Core library for rendering readme stat cards into SVG files.
//!
//! Rendering itself is delegated to external [`CardRenderer`]s; this crate
//! parses user options, validates them per card type, dispatches to the right
//! renderer and persists the captured output.

mod card;
mod error;
pub mod http;
mod options;
mod render;
mod runner;

pub use card::{CardRequest, CardType, validate_card_options};
pub use error::{ActionError, RenderError};
pub use http::{HttpHandlers, HttpRenderer};
pub use options::{Options, RawOptionValue, normalize_options, parse_options};
pub use render::{CaptureResponse, CardHandlers, CardRenderer, CardResponse};
pub use runner::{DEFAULT_OUTPUT_DIR, RunInputs, RunOutcome, run_card};
