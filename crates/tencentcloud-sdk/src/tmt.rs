//! Machine translation (TMT) client.

pub use tencentcloud_tmt_model::input::*;
pub use tencentcloud_tmt_model::output::*;
pub use tencentcloud_tmt_model::{API_VERSION, DESCRIPTOR, SERVICE, TmtOperation};

use crate::macros::service_client;

service_client! {
    /// Client for the TMT `2018-03-21` API.
    TmtClient {
        descriptor: DESCRIPTOR,
        operation: TmtOperation,
    }

    /// Translate one audio fragment of a spoken utterance.
    speech_translate => SpeechTranslate(SpeechTranslateRequest) -> SpeechTranslateResponse;
    /// Translate a text.
    text_translate => TextTranslate(TextTranslateRequest) -> TextTranslateResponse;
    /// Detect the language of a text.
    language_detect => LanguageDetect(LanguageDetectRequest) -> LanguageDetectResponse;
}
