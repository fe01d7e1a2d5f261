//! News claim verification tool.
//!
//! The analysis is a fixed template: the claim is quoted back with a low
//! credibility assessment. A live fact-checking backend would replace
//! [`VerifyNewsTool::analyze`] without touching the tool contract.

use std::sync::Arc;

use tracing::info;

use crate::domains::tools::error::RegistryError;
use crate::domains::tools::handlers::{HandlerResult, ToolHandler, ToolParams};
use crate::domains::tools::registry::Tool;
use crate::domains::tools::schema::{ParamType, ParameterSpec};

/// Fact-checks a headline or claim supplied by the user.
#[derive(Debug, Clone, Default)]
pub struct VerifyNewsTool;

impl VerifyNewsTool {
    /// Tool name as listed in the manifest.
    pub const NAME: &'static str = "verify";

    pub const ENDPOINT: &'static str = "/verify_news";

    pub const DESCRIPTION: &'static str = "Fact-checks a news headline or a claim.";

    pub const USE_WHEN: &'static str =
        "The user wants to verify, fact-check, or know if a piece of news is fake or real.";

    pub const CLAIM_PARAM: &'static str = "claim";

    /// Create the Tool definition for the registry.
    pub fn to_tool() -> Result<Tool, RegistryError> {
        Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::ENDPOINT,
            Arc::new(Self),
        )
        .with_use_when(Self::USE_WHEN)
        .with_parameter(ParameterSpec::required(
            Self::CLAIM_PARAM,
            ParamType::String,
            "The suspicious news headline or claim to be verified.",
        ))
    }

    /// Build the analysis text for `claim`.
    pub fn analyze(claim: &str) -> String {
        format!(
            "\nRegarding the claim: \"{claim}\"\n\n\
             Our analysis suggests the following:\n\
             - **Credibility Score:** Low\n\
             - **Source Analysis:** We could not find this claim reported by major, reputable \
             news outlets (like BBC, Reuters, Associated Press).\n\
             - **Recommendation:** This claim has the characteristics of misinformation. \
             Please be cautious and avoid sharing it until it is confirmed by trusted sources.\n"
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for VerifyNewsTool {
    async fn call(&self, params: &ToolParams) -> HandlerResult {
        let claim = params.required_str(Self::CLAIM_PARAM)?;
        info!("Verification request received for claim: '{}'", claim);
        Ok(Self::analyze(claim))
    }
}
