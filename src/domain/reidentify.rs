use serde::{Deserialize, Serialize};

/// One `content:reidentify` invocation against Cloud DLP.
///
/// Constructed fresh per invocation and immutable once sent. The key
/// material has already been unwrapped from its base64 transport form;
/// it is still KMS-encrypted and opaque to this code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReidentifyRequest {
    pub project_id: String,
    pub text: String,
    pub crypto_key_name: String,
    pub key_material: Vec<u8>,
    pub surrogate_type: Option<String>,
    pub alphabet: FfxAlphabet,
}

impl ReidentifyRequest {
    pub fn parent(&self) -> String {
        format!("projects/{}", self.project_id)
    }
}

/// Character set the FPE transformation operated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FfxAlphabet {
    Numeric,
    Hexadecimal,
    UpperCaseAlphaNumeric,
    AlphaNumeric,
}

/// The re-identified text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReidentifiedContent {
    pub value: String,
}
