//! TMT response types.

use serde::{Deserialize, Serialize};
use tencentcloud_codec::impl_unflatten;

// ---------------------------------------------------------------------------
// Speech translation
// ---------------------------------------------------------------------------

/// Response of `SpeechTranslate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpeechTranslateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_uuid: Option<String>,

    /// `1` once the utterance is fully recognized, `0` while in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognize_status: Option<i64>,

    /// Recognized source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,

    /// Translated text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_text: Option<String>,

    /// Sequence number of the fragment this result answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Sequence number of the voice activity segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vad_seq: Option<i64>,

    pub request_id: String,
}

// ---------------------------------------------------------------------------
// Text translation
// ---------------------------------------------------------------------------

/// Response of `TextTranslate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextTranslateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub request_id: String,
}

/// Response of `LanguageDetect`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageDetectResponse {
    /// Detected language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    pub request_id: String,
}

impl_unflatten! {
    SpeechTranslateResponse {
        session_uuid: "SessionUuid" => field,
        recognize_status: "RecognizeStatus" => field,
        source_text: "SourceText" => field,
        target_text: "TargetText" => field,
        seq: "Seq" => field,
        source: "Source" => field,
        target: "Target" => field,
        vad_seq: "VadSeq" => field,
        request_id: "RequestId" => required,
    }
    TextTranslateResponse {
        target_text: "TargetText" => field,
        source: "Source" => field,
        target: "Target" => field,
        request_id: "RequestId" => required,
    }
    LanguageDetectResponse {
        lang: "Lang" => field,
        request_id: "RequestId" => required,
    }
}
