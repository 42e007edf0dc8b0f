//! IAI request types, one per operation.
//!
//! Images are passed either inline (`Image`, base64) or by reference (`Url`).

use serde::{Deserialize, Serialize};

use crate::types::{GroupExDescriptionInfo, PersonExDescriptionInfo};

// ---------------------------------------------------------------------------
// Face analysis
// ---------------------------------------------------------------------------

/// Request for `DetectFace`.
///
/// Exactly one of `Image` and `Url` should be set; `Url` wins when both are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFaceRequest {
    /// Maximum number of faces to return, `1`-`120`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_face_num: Option<u64>,

    /// Smallest face side in pixels, `34` or more.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_face_size: Option<u64>,

    /// Base64-encoded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// `1` to return `FaceAttributesInfo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_face_attributes: Option<u64>,

    /// `1` to return `FaceQualityInfo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_quality_detection: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

/// Request for `AnalyzeFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyzeFaceRequest {
    /// `0` analyzes the largest face only, `1` every face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

/// Request for `CompareFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompareFaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_a: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_b: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_a: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_b: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,

    /// `0`-`4`; higher values reject lower-quality images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<u64>,
}

/// Request for `DetectLiveFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLiveFaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

// ---------------------------------------------------------------------------
// Group management
// ---------------------------------------------------------------------------

/// Request for `CreateGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Up to five custom description field names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ex_descriptions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
}

/// Request for `DeleteGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Request for `GetGroupList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    /// Page size, at most `1000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Request for `ModifyGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ex_description_infos: Option<Vec<GroupExDescriptionInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

// ---------------------------------------------------------------------------
// Person management
// ---------------------------------------------------------------------------

/// Request for `CreatePerson`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_ex_description_infos: Option<Vec<PersonExDescriptionInfo>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Rejects the person when a similar face already exists; `0` disables the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_person_control: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<u64>,
}

/// Request for `DeletePerson`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePersonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
}

/// Request for `DeletePersonFromGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePersonFromGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Request for `GetPersonList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Request for `GetPersonListNum`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonListNumRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Request for `GetPersonBaseInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonBaseInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
}

/// Request for `GetPersonGroupInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonGroupInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Request for `ModifyPersonBaseInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyPersonBaseInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,
}

/// Request for `ModifyPersonGroupInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyPersonGroupInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_ex_description_infos: Option<Vec<PersonExDescriptionInfo>>,
}

/// Request for `CopyPerson`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyPersonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,

    /// Groups to copy the person into, at most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Face management
// ---------------------------------------------------------------------------

/// Request for `CreateFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,

    /// Up to five base64-encoded images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,

    /// Faces scoring below this against the person's existing faces are rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<u64>,
}

/// Request for `DeleteFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Search and verification
// ---------------------------------------------------------------------------

/// Request for `SearchFaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_face_num: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_face_size: Option<u64>,

    /// Candidates returned per face, `1`-`100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_person_num: Option<u64>,

    /// `1` to return person names and groups with each candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_person_info: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_match_threshold: Option<f64>,
}

/// Request for `VerifyFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyFaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<u64>,
}
