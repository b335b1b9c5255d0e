use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::domain::{FfxAlphabet, ReidentifiedContent, ReidentifyRequest};
use crate::error::Result;
use crate::ports::ReidentifyClient;

/// Cloud DLP v2 REST adapter.
pub struct GoogleDlpClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl GoogleDlpClient {
    pub fn new(credentials: Credentials, endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: super::http_client()?,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    fn body_for(request: &ReidentifyRequest) -> ReidentifyBody<'_> {
        let surrogate = request
            .surrogate_type
            .as_deref()
            .map(|name| InfoType { name });

        ReidentifyBody {
            reidentify_config: DeidentifyConfig {
                info_type_transformations: InfoTypeTransformations {
                    transformations: vec![InfoTypeTransformation {
                        primitive_transformation: PrimitiveTransformation {
                            crypto_replace_ffx_fpe_config: CryptoReplaceFfxFpeConfig {
                                crypto_key: CryptoKey {
                                    kms_wrapped: KmsWrappedCryptoKey {
                                        wrapped_key: BASE64.encode(&request.key_material),
                                        crypto_key_name: &request.crypto_key_name,
                                    },
                                },
                                common_alphabet: request.alphabet,
                                surrogate_info_type: surrogate,
                            },
                        },
                    }],
                },
            },
            inspect_config: surrogate.map(|info_type| InspectConfig {
                custom_info_types: vec![CustomInfoType {
                    info_type,
                    surrogate_type: SurrogateType {},
                }],
            }),
            item: ContentItem {
                value: &request.text,
            },
        }
    }
}

#[async_trait]
impl ReidentifyClient for GoogleDlpClient {
    async fn reidentify(&self, request: &ReidentifyRequest) -> Result<ReidentifiedContent> {
        let url = format!(
            "{}/v2/{}/content:reidentify",
            self.endpoint,
            request.parent()
        );
        tracing::debug!(%url, "calling content:reidentify");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credentials.token())
            .json(&Self::body_for(request))
            .send()
            .await?;
        let response = super::expect_success("dlp", response).await?;

        let wire: ReidentifyResponse = response.json().await?;
        Ok(ReidentifiedContent {
            value: wire.item.value,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReidentifyBody<'a> {
    reidentify_config: DeidentifyConfig<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inspect_config: Option<InspectConfig<'a>>,
    item: ContentItem<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeidentifyConfig<'a> {
    info_type_transformations: InfoTypeTransformations<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoTypeTransformations<'a> {
    transformations: Vec<InfoTypeTransformation<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoTypeTransformation<'a> {
    primitive_transformation: PrimitiveTransformation<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrimitiveTransformation<'a> {
    crypto_replace_ffx_fpe_config: CryptoReplaceFfxFpeConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CryptoReplaceFfxFpeConfig<'a> {
    crypto_key: CryptoKey<'a>,
    common_alphabet: FfxAlphabet,
    #[serde(skip_serializing_if = "Option::is_none")]
    surrogate_info_type: Option<InfoType<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CryptoKey<'a> {
    kms_wrapped: KmsWrappedCryptoKey<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KmsWrappedCryptoKey<'a> {
    wrapped_key: String,
    crypto_key_name: &'a str,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
struct InfoType<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectConfig<'a> {
    custom_info_types: Vec<CustomInfoType<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomInfoType<'a> {
    info_type: InfoType<'a>,
    surrogate_type: SurrogateType,
}

#[derive(Serialize)]
struct SurrogateType {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentItem<'a> {
    value: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReidentifyResponse {
    item: ResponseItem,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ResponseItem {
    value: String,
}
