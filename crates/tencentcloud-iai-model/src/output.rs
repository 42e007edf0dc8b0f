//! IAI response types, one per operation.

use serde::{Deserialize, Serialize};
use tencentcloud_codec::impl_unflatten;

use crate::types::{
    FaceInfo, FaceRect, FaceShape, GroupInfo, PersonGroupInfo, PersonInfo, SearchResult,
};

// ---------------------------------------------------------------------------
// Face analysis
// ---------------------------------------------------------------------------

/// Response of `DetectFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectFaceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_infos: Option<Vec<FaceInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    pub request_id: String,
}

/// Response of `AnalyzeFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyzeFaceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_shape_set: Option<Vec<FaceShape>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    pub request_id: String,
}

/// Response of `CompareFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompareFaceResponse {
    /// Similarity, `0`-`100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,

    pub request_id: String,
}

/// Response of `DetectLiveFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLiveFaceResponse {
    /// Liveness score, `0`-`100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_liveness: Option<bool>,

    pub request_id: String,
}

// ---------------------------------------------------------------------------
// Group management
// ---------------------------------------------------------------------------

/// Response of `CreateGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    pub request_id: String,
}

/// Response of `DeleteGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGroupResponse {
    pub request_id: String,
}

/// Response of `GetGroupList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_infos: Option<Vec<GroupInfo>>,

    /// Total number of groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_num: Option<u64>,

    pub request_id: String,
}

/// Response of `ModifyGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyGroupResponse {
    pub request_id: String,
}

// ---------------------------------------------------------------------------
// Person management
// ---------------------------------------------------------------------------

/// Response of `CreatePerson`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePersonResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_rect: Option<FaceRect>,

    /// Set when `UniquePersonControl` found a similar person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_person_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,

    pub request_id: String,
}

/// Response of `DeletePerson`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePersonResponse {
    pub request_id: String,
}

/// Response of `DeletePersonFromGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePersonFromGroupResponse {
    pub request_id: String,
}

/// Response of `GetPersonList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_infos: Option<Vec<PersonInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    pub request_id: String,
}

/// Response of `GetPersonListNum`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonListNumResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_num: Option<u64>,
    pub request_id: String,
}

/// Response of `GetPersonBaseInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonBaseInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<String>>,
    pub request_id: String,
}

/// Response of `GetPersonGroupInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPersonGroupInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_group_infos: Option<Vec<PersonGroupInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    pub request_id: String,
}

/// Response of `ModifyPersonBaseInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyPersonBaseInfoResponse {
    pub request_id: String,
}

/// Response of `ModifyPersonGroupInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyPersonGroupInfoResponse {
    pub request_id: String,
}

/// Response of `CopyPerson`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyPersonResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_group_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_group_ids: Option<Vec<String>>,
    pub request_id: String,
}

// ---------------------------------------------------------------------------
// Face management
// ---------------------------------------------------------------------------

/// Response of `CreateFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFaceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_face_num: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_face_ids: Option<Vec<String>>,

    /// One code per submitted image, `0` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ret_code: Option<Vec<i64>>,

    /// Indexes of the images that were added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_indexes: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_face_rects: Option<Vec<FaceRect>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,

    pub request_id: String,
}

/// Response of `DeleteFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFaceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_deleted_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suc_face_ids: Option<Vec<String>>,
    pub request_id: String,
}

// ---------------------------------------------------------------------------
// Search and verification
// ---------------------------------------------------------------------------

/// Response of `SearchFaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchFacesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,

    /// Number of faces searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_num: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,

    pub request_id: String,
}

/// Response of `VerifyFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyFaceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_match: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,
    pub request_id: String,
}

impl_unflatten! {
    DetectFaceResponse {
        image_width: "ImageWidth" => field,
        image_height: "ImageHeight" => field,
        face_infos: "FaceInfos" => nested_list,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    AnalyzeFaceResponse {
        image_width: "ImageWidth" => field,
        image_height: "ImageHeight" => field,
        face_shape_set: "FaceShapeSet" => nested_list,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    CompareFaceResponse {
        score: "Score" => field,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    DetectLiveFaceResponse {
        score: "Score" => field,
        face_model_version: "FaceModelVersion" => field,
        is_liveness: "IsLiveness" => field,
        request_id: "RequestId" => required,
    }
    CreateGroupResponse {
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    DeleteGroupResponse {
        request_id: "RequestId" => required,
    }
    GetGroupListResponse {
        group_infos: "GroupInfos" => nested_list,
        group_num: "GroupNum" => field,
        request_id: "RequestId" => required,
    }
    ModifyGroupResponse {
        request_id: "RequestId" => required,
    }
    CreatePersonResponse {
        face_id: "FaceId" => field,
        face_rect: "FaceRect" => nested,
        similar_person_id: "SimilarPersonId" => field,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    DeletePersonResponse {
        request_id: "RequestId" => required,
    }
    DeletePersonFromGroupResponse {
        request_id: "RequestId" => required,
    }
    GetPersonListResponse {
        person_infos: "PersonInfos" => nested_list,
        person_num: "PersonNum" => field,
        face_num: "FaceNum" => field,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    GetPersonListNumResponse {
        person_num: "PersonNum" => field,
        face_num: "FaceNum" => field,
        request_id: "RequestId" => required,
    }
    GetPersonBaseInfoResponse {
        person_name: "PersonName" => field,
        gender: "Gender" => field,
        face_ids: "FaceIds" => field,
        request_id: "RequestId" => required,
    }
    GetPersonGroupInfoResponse {
        person_group_infos: "PersonGroupInfos" => nested_list,
        group_num: "GroupNum" => field,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    ModifyPersonBaseInfoResponse {
        request_id: "RequestId" => required,
    }
    ModifyPersonGroupInfoResponse {
        request_id: "RequestId" => required,
    }
    CopyPersonResponse {
        suc_group_num: "SucGroupNum" => field,
        suc_group_ids: "SucGroupIds" => field,
        request_id: "RequestId" => required,
    }
    CreateFaceResponse {
        suc_face_num: "SucFaceNum" => field,
        suc_face_ids: "SucFaceIds" => field,
        ret_code: "RetCode" => field,
        suc_indexes: "SucIndexes" => field,
        suc_face_rects: "SucFaceRects" => nested_list,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    DeleteFaceResponse {
        suc_deleted_num: "SucDeletedNum" => field,
        suc_face_ids: "SucFaceIds" => field,
        request_id: "RequestId" => required,
    }
    SearchFacesResponse {
        results: "Results" => nested_list,
        face_num: "FaceNum" => field,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
    VerifyFaceResponse {
        score: "Score" => field,
        is_match: "IsMatch" => field,
        face_model_version: "FaceModelVersion" => field,
        request_id: "RequestId" => required,
    }
}
