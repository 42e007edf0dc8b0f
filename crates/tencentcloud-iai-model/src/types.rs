//! Nested IAI types shared by requests and responses.

use serde::{Deserialize, Serialize};
use tencentcloud_codec::impl_unflatten;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A landmark coordinate in image pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Point {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

/// Bounding box of a detected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceRect {
    /// Left edge in pixels; may be negative for faces cut off by the border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,

    /// Top edge in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

/// Facial landmarks of one face, grouped by feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceShape {
    /// 21 points along the face outline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_profile: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_eye: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_eye: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_eye_brow: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_eye_brow: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouth: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_pupil: Option<Vec<Point>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_pupil: Option<Vec<Point>>,
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Hair attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceHairAttributesInfo {
    /// `0` bald, `1` short, `2` long.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,

    /// `0` with bangs, `1` without.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bang: Option<i64>,

    /// `0` black, `1` golden, `2` brown, `3` grey.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,
}

/// Attributes of a detected face. Only populated when requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceAttributesInfo {
    /// `0`-`49` female, `50`-`100` male.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,

    /// `0` neutral to `100` laughing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass: Option<bool>,

    /// Head pitch in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beauty: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hat: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<FaceHairAttributesInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_open: Option<bool>,
}

/// Per-feature visibility scores, `0`-`100`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceQualityCompleteness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nose: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheek: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chin: Option<i64>,
}

/// Image quality of a detected face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceQualityInfo {
    /// Overall quality, `0`-`100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completeness: Option<FaceQualityCompleteness>,
}

/// One face found by `DetectFace`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_attributes_info: Option<FaceAttributesInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_quality_info: Option<FaceQualityInfo>,
}

// ---------------------------------------------------------------------------
// Groups and persons
// ---------------------------------------------------------------------------

/// A face library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Names of the custom description fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ex_descriptions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_model_version: Option<String>,

    /// Creation time in milliseconds since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<u64>,
}

/// New name for one custom description field of a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupExDescriptionInfo {
    /// Zero-based index of the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ex_description_index: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ex_description: Option<String>,
}

/// A person stored in a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,

    /// `0` unset, `1` male, `2` female.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_ex_descriptions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<u64>,
}

/// Value of one custom description field for a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonExDescriptionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_ex_description_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_ex_description: Option<String>,
}

/// Membership of a person in one group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonGroupInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_ex_descriptions: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A person matching a searched face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_id: Option<String>,

    /// Similarity, `0`-`100`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Only returned when person info was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_group_infos: Option<Vec<PersonGroupInfo>>,
}

/// Search outcome for one face of the input image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_rect: Option<FaceRect>,

    /// `0` when the face was searched, an error code otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ret_code: Option<i64>,
}

impl_unflatten! {
    Point {
        x: "X" => field,
        y: "Y" => field,
    }
    FaceRect {
        x: "X" => field,
        y: "Y" => field,
        width: "Width" => field,
        height: "Height" => field,
    }
    FaceShape {
        face_profile: "FaceProfile" => nested_list,
        left_eye: "LeftEye" => nested_list,
        right_eye: "RightEye" => nested_list,
        left_eye_brow: "LeftEyeBrow" => nested_list,
        right_eye_brow: "RightEyeBrow" => nested_list,
        mouth: "Mouth" => nested_list,
        nose: "Nose" => nested_list,
        left_pupil: "LeftPupil" => nested_list,
        right_pupil: "RightPupil" => nested_list,
    }
    FaceHairAttributesInfo {
        length: "Length" => field,
        bang: "Bang" => field,
        color: "Color" => field,
    }
    FaceAttributesInfo {
        gender: "Gender" => field,
        age: "Age" => field,
        expression: "Expression" => field,
        glass: "Glass" => field,
        pitch: "Pitch" => field,
        yaw: "Yaw" => field,
        roll: "Roll" => field,
        beauty: "Beauty" => field,
        hat: "Hat" => field,
        mask: "Mask" => field,
        hair: "Hair" => nested,
        eye_open: "EyeOpen" => field,
    }
    FaceQualityCompleteness {
        eyebrow: "Eyebrow" => field,
        eye: "Eye" => field,
        nose: "Nose" => field,
        cheek: "Cheek" => field,
        mouth: "Mouth" => field,
        chin: "Chin" => field,
    }
    FaceQualityInfo {
        score: "Score" => field,
        sharpness: "Sharpness" => field,
        brightness: "Brightness" => field,
        completeness: "Completeness" => nested,
    }
    FaceInfo {
        x: "X" => field,
        y: "Y" => field,
        width: "Width" => field,
        height: "Height" => field,
        face_attributes_info: "FaceAttributesInfo" => nested,
        face_quality_info: "FaceQualityInfo" => nested,
    }
    GroupInfo {
        group_name: "GroupName" => field,
        group_id: "GroupId" => field,
        group_ex_descriptions: "GroupExDescriptions" => field,
        tag: "Tag" => field,
        face_model_version: "FaceModelVersion" => field,
        creation_timestamp: "CreationTimestamp" => field,
    }
    GroupExDescriptionInfo {
        group_ex_description_index: "GroupExDescriptionIndex" => field,
        group_ex_description: "GroupExDescription" => field,
    }
    PersonInfo {
        person_name: "PersonName" => field,
        person_id: "PersonId" => field,
        gender: "Gender" => field,
        person_ex_descriptions: "PersonExDescriptions" => field,
        face_ids: "FaceIds" => field,
        creation_timestamp: "CreationTimestamp" => field,
    }
    PersonExDescriptionInfo {
        person_ex_description_index: "PersonExDescriptionIndex" => field,
        person_ex_description: "PersonExDescription" => field,
    }
    PersonGroupInfo {
        group_id: "GroupId" => field,
        person_ex_descriptions: "PersonExDescriptions" => field,
    }
    Candidate {
        person_id: "PersonId" => field,
        face_id: "FaceId" => field,
        score: "Score" => field,
        person_name: "PersonName" => field,
        gender: "Gender" => field,
        person_group_infos: "PersonGroupInfos" => nested_list,
    }
    SearchResult {
        candidates: "Candidates" => nested_list,
        face_rect: "FaceRect" => nested,
        ret_code: "RetCode" => field,
    }
}
