//! Orchestration of the three LLM-backed interactions: build the prompt,
//! make the single call, hand the reply to the parser.
//!
//! A failed call surfaces as an error without touching any stored state;
//! a reply the parser cannot use comes back as `Ok(None)` so the caller can
//! tell a parse miss from a transport failure.

use crate::error::Result;
use crate::llm::client::{GroqClient, DEFAULT_MODEL};
use crate::parser;
use crate::prompts;
use crate::schema::{CuttingQuote, CuttingRequest, PricingRequest, Prospect};
use log::{info, warn};

pub struct SalesAssistant {
    client: GroqClient,
    model: String,
}

impl SalesAssistant {
    pub fn new(client: GroqClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Searches for prospects in a region. `Ok(None)` means the model
    /// replied but no prospect tuple could be extracted. On success the
    /// caller replaces the stored prospect set wholesale.
    pub async fn find_prospects(&self, region: &str) -> Result<Option<Vec<Prospect>>> {
        let prompt = prompts::prospect_search_prompt(region);
        let reply = self.client.chat(&self.model, &prompt).await?;

        match parser::parse_prospects(&reply) {
            Some(prospects) => {
                info!("Extracted {} prospects for region '{}'", prospects.len(), region);
                Ok(Some(prospects))
            }
            None => {
                warn!("Prospect search reply for '{}' contained no extractable data", region);
                Ok(None)
            }
        }
    }

    /// Asks for a market-price report. The reply is displayed verbatim by
    /// the presentation layer; no extraction is applied.
    pub async fn market_price_report(&self, request: &PricingRequest) -> Result<String> {
        let prompt = prompts::pricing_prompt(request);
        self.client.chat(&self.model, &prompt).await
    }

    /// Requests a cutting quote and extracts the unit price. `Ok(None)`
    /// means no price was found in the reply; no order total exists then.
    /// Returns the raw reply too, so the cost analysis can be shown.
    pub async fn cutting_quote(
        &self,
        request: CuttingRequest,
    ) -> Result<(String, Option<CuttingQuote>)> {
        let prompt = prompts::cutting_prompt(&request);
        let reply = self.client.chat(&self.model, &prompt).await?;

        let quote = parser::quote_from_response(request, &reply);
        if quote.is_none() {
            warn!("Cutting-quote reply contained no extractable unit price");
        }
        Ok((reply, quote))
    }
}
