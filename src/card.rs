use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::ActionError;
use crate::options::Options;

/// The closed set of cards the action knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Stats,
    TopLangs,
    Pin,
    Wakatime,
    Gist,
}

impl CardType {
    pub const ALL: [CardType; 5] = [
        CardType::Stats,
        CardType::TopLangs,
        CardType::Pin,
        CardType::Wakatime,
        CardType::Gist,
    ];

    /// Identifier used on the command line and in default file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Stats => "stats",
            CardType::TopLangs => "top-langs",
            CardType::Pin => "pin",
            CardType::Wakatime => "wakatime",
            CardType::Gist => "gist",
        }
    }

    /// Option that must be present for this card to render.
    pub fn required_field(&self) -> &'static str {
        match self {
            CardType::Stats | CardType::TopLangs | CardType::Wakatime => "username",
            CardType::Pin => "repo",
            CardType::Gist => "id",
        }
    }

    /// Default output file name, e.g. `top-langs.svg`.
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.as_str())
    }
}

impl FromStr for CardType {
    type Err = ActionError;

    /// Resolve a card identifier (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lname = s.trim().to_ascii_lowercase();
        CardType::ALL
            .into_iter()
            .find(|card| card.as_str() == lname)
            .ok_or(ActionError::UnsupportedCard(lname))
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card type paired with its validated options, built fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub card: CardType,
    pub query: Options,
}

impl CardRequest {
    /// Apply the username fallback and required-field policy, then freeze the request.
    pub fn validated(
        card: CardType,
        mut query: Options,
        fallback_username: Option<&str>,
    ) -> Result<Self, ActionError> {
        validate_card_options(card, &mut query, fallback_username)?;
        Ok(Self { card, query })
    }
}

/// Enforce per-card required options, defaulting `username` from the fallback identity.
pub fn validate_card_options(
    card: CardType,
    query: &mut Options,
    fallback_username: Option<&str>,
) -> Result<(), ActionError> {
    if !has_value(query, "username") {
        if let Some(owner) = fallback_username.filter(|o| !o.is_empty()) {
            query.insert("username".to_string(), owner.to_string());
            warn!(username = owner, "username not provided; defaulting to repository owner.");
        }
    }

    let field = card.required_field();
    if !has_value(query, field) {
        return Err(ActionError::Validation(format!(
            "{field} is required for the {card} card."
        )));
    }
    Ok(())
}

fn has_value(query: &Options, key: &str) -> bool {
    query.get(key).is_some_and(|v| !v.is_empty())
}
