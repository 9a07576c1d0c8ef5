//! Single-pass card pipeline: resolve, parse, validate, render, persist.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::card::{CardRequest, CardType};
use crate::error::ActionError;
use crate::options::parse_options;
use crate::render::{CaptureResponse, CardHandlers};

/// Directory cards are written under when no explicit path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "profile";

/// Raw inputs for one invocation, as supplied by the host runtime.
#[derive(Debug, Clone, Default)]
pub struct RunInputs {
    pub card: Option<String>,
    pub options: Option<String>,
    pub path: Option<String>,
    /// Identity used when `username` is not supplied.
    pub fallback_username: Option<String>,
}

/// Result of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub card: CardType,
    /// Output path as requested, relative to the working directory when defaulted.
    pub path: PathBuf,
    /// Absolute location the card was written to.
    pub written: PathBuf,
}

/// Execute the pipeline against `handlers`, resolving relative paths from `workdir`.
pub fn run_card(
    inputs: &RunInputs,
    handlers: &dyn CardHandlers,
    workdir: &Path,
) -> Result<RunOutcome, ActionError> {
    let card_input = non_blank(inputs.card.as_deref()).ok_or(ActionError::MissingInput("card"))?;
    let card: CardType = card_input.parse()?;
    let handler = handlers.handler(card);

    let query = parse_options(inputs.options.as_deref())?;
    let request = CardRequest::validated(card, query, non_blank(inputs.fallback_username.as_deref()))?;

    let path = match non_blank(inputs.path.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => Path::new(DEFAULT_OUTPUT_DIR).join(card.file_name()),
    };
    let written = workdir.join(&path);
    if let Some(parent) = written.parent() {
        fs::create_dir_all(parent).map_err(|source| ActionError::Io {
            action: "create output directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    debug!(card = %card, query = ?request.query, "invoking card renderer");
    let mut capture = CaptureResponse::new();
    handler.render(&request, &mut capture)?;
    let svg = capture.into_output().ok_or(ActionError::EmptyOutput)?;

    fs::write(&written, svg).map_err(|source| ActionError::Io {
        action: "write",
        path: written.clone(),
        source,
    })?;
    info!("Wrote {}", written.display());

    Ok(RunOutcome {
        card,
        path,
        written,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::render::{CardRenderer, CardResponse};

    struct Fixed;

    impl CardRenderer for Fixed {
        fn render(
            &self,
            _request: &CardRequest,
            response: &mut dyn CardResponse,
        ) -> Result<(), RenderError> {
            response.send("<svg/>".to_string());
            Ok(())
        }
    }

    impl CardHandlers for Fixed {
        fn handler(&self, _card: CardType) -> &dyn CardRenderer {
            self
        }
    }

    #[test]
    fn non_blank_trims_and_filters() {
        assert_eq!(non_blank(Some("  stats ")), Some("stats"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn missing_card_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = RunInputs {
            card: Some(" ".to_string()),
            ..RunInputs::default()
        };
        let err = run_card(&inputs, &Fixed, dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Input required and not supplied: card");
    }

    #[test]
    fn unsupported_card_fails_before_parsing_options() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = RunInputs {
            card: Some("Repo".to_string()),
            options: Some("{bad json".to_string()),
            ..RunInputs::default()
        };
        let err = run_card(&inputs, &Fixed, dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported card type: repo");
        assert!(!dir.path().join(DEFAULT_OUTPUT_DIR).exists());
    }

    #[test]
    fn blank_path_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = RunInputs {
            card: Some("wakatime".to_string()),
            options: Some("username=MNZ".to_string()),
            path: Some(String::new()),
            ..RunInputs::default()
        };
        let outcome = run_card(&inputs, &Fixed, dir.path()).unwrap();
        assert_eq!(outcome.path, PathBuf::from("profile/wakatime.svg"));
        assert_eq!(outcome.written, dir.path().join("profile/wakatime.svg"));
    }
}
