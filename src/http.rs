//! Default renderers backed by a github-readme-stats compatible card service.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::card::{CardRequest, CardType};
use crate::error::RenderError;
use crate::render::{CardHandlers, CardRenderer, CardResponse};

pub const DEFAULT_BASE_URL: &str = "https://github-readme-stats.vercel.app";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Service path serving the given card.
pub fn endpoint(card: CardType) -> &'static str {
    match card {
        CardType::Stats => "/api",
        CardType::TopLangs => "/api/top-langs",
        CardType::Pin => "/api/pin",
        CardType::Wakatime => "/api/wakatime",
        CardType::Gist => "/api/gist",
    }
}

/// Renders one card type by issuing a GET to the card service.
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    client: Client,
    url: String,
}

impl HttpRenderer {
    pub fn new(client: Client, base_url: &str, card: CardType) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            client,
            url: format!("{}{}", base, endpoint(card)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CardRenderer for HttpRenderer {
    fn render(
        &self,
        request: &CardRequest,
        response: &mut dyn CardResponse,
    ) -> Result<(), RenderError> {
        debug!(url = %self.url, card = %request.card, "requesting card");
        let resp = self
            .client
            .get(&self.url)
            .query(&request.query)
            .send()
            .map_err(|e| RenderError::Transport(e.to_string()))?;

        let status = resp.status();
        for (name, value) in resp.headers() {
            if let Ok(value) = value.to_str() {
                response.set_header(name.as_str(), value);
            }
        }
        let body = resp
            .text()
            .map_err(|e| RenderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(RenderError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response.send(body);
        Ok(())
    }
}

/// Dispatch table of HTTP renderers, one per card type.
#[derive(Debug, Clone)]
pub struct HttpHandlers {
    stats: HttpRenderer,
    top_langs: HttpRenderer,
    pin: HttpRenderer,
    wakatime: HttpRenderer,
    gist: HttpRenderer,
}

impl HttpHandlers {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RenderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RenderError::Transport(e.to_string()))?;
        let renderer = |card| HttpRenderer::new(client.clone(), base_url, card);
        Ok(Self {
            stats: renderer(CardType::Stats),
            top_langs: renderer(CardType::TopLangs),
            pin: renderer(CardType::Pin),
            wakatime: renderer(CardType::Wakatime),
            gist: renderer(CardType::Gist),
        })
    }
}

impl CardHandlers for HttpHandlers {
    fn handler(&self, card: CardType) -> &dyn CardRenderer {
        match card {
            CardType::Stats => &self.stats,
            CardType::TopLangs => &self.top_langs,
            CardType::Pin => &self.pin,
            CardType::Wakatime => &self.wakatime,
            CardType::Gist => &self.gist,
        }
    }
}
