//! Configuration for the Azure pronunciation-assessment client.

/// Recognition language. The practice flow is English-only.
pub const ASSESSMENT_LANGUAGE: &str = "en-US";

/// Azure assessment configuration.
///
/// The subscription key is tied to the region it was issued in; both come
/// from the Azure Portal (Speech resource, "Keys and Endpoint").
#[derive(Debug, Clone)]
pub struct AzureAssessmentConfig {
    /// Azure Speech subscription key (`Ocp-Apim-Subscription-Key` header).
    pub subscription_key: String,
    /// Azure region the Speech resource is deployed in, e.g. "eastus".
    pub region: String,
    /// Recognition language.
    pub language: String,
    /// Full endpoint override. When set, `region` is ignored; used by
    /// tests to point at a mock server.
    pub endpoint: Option<String>,
}

impl Default for AzureAssessmentConfig {
    fn default() -> Self {
        Self {
            subscription_key: String::new(),
            region: String::new(),
            language: ASSESSMENT_LANGUAGE.to_string(),
            endpoint: None,
        }
    }
}

impl AzureAssessmentConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.subscription_key.is_empty() {
            return Err("Azure Speech subscription key is required".to_string());
        }
        if self.region.is_empty() && self.endpoint.is_none() {
            return Err("Azure Speech region is required".to_string());
        }
        Ok(())
    }

    /// Short-audio recognition URL for the configured region, detailed
    /// output format.
    pub fn recognition_url(&self) -> String {
        let base = match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!(
                "https://{}.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1",
                self.region
            ),
        };
        format!("{base}?language={}&format=detailed", self.language)
    }
}
