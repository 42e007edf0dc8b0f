//! TMT request types.
//!
//! Field order follows the remote API documentation; the flattened form of a
//! request lists its set fields in exactly this order.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Speech translation
// ---------------------------------------------------------------------------

/// Request for `SpeechTranslate`.
///
/// Audio is sent in fragments; every fragment of one utterance carries the same
/// `SessionUuid`, an increasing `Seq`, and `IsEnd = 1` on the last one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpeechTranslateRequest {
    /// Session identifier shared by every fragment of one utterance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_uuid: Option<String>,

    /// Source language, e.g. `zh`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Target language, e.g. `en`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Audio encoding: `83886080` for pcm, `83886082` for speex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_format: Option<i64>,

    /// Zero-based fragment sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// `1` on the last fragment, `0` otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_end: Option<i64>,

    /// Base64-encoded audio fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Project id; `0` is the default project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    /// Recognition mode, e.g. `bvad`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

// ---------------------------------------------------------------------------
// Text translation
// ---------------------------------------------------------------------------

/// Request for `TextTranslate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextTranslateRequest {
    /// Text to translate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,

    /// Source language, or `auto`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Target language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    /// Substring to leave untranslated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untranslated_text: Option<String>,
}

/// Request for `LanguageDetect`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageDetectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}
