//! IAI operation enum.

use std::fmt;

/// All supported IAI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IaiOperation {
    // Face analysis
    /// Detect faces in an image, with optional attributes and quality.
    DetectFace,
    /// Locate the facial landmarks of the faces in an image.
    AnalyzeFace,
    /// Score the similarity of the largest faces of two images.
    CompareFace,
    /// Score whether a face image was taken of a live person.
    DetectLiveFace,

    // Group management
    /// Create a face library.
    CreateGroup,
    /// Delete a face library with all persons that belong to no other library.
    DeleteGroup,
    /// List face libraries.
    GetGroupList,
    /// Rename a face library or its custom description fields.
    ModifyGroup,

    // Person management
    /// Create a person in a library from one face image.
    CreatePerson,
    /// Delete a person from every library.
    DeletePerson,
    /// Remove a person from one library.
    DeletePersonFromGroup,
    /// List the persons of a library.
    GetPersonList,
    /// Count the persons and faces of a library.
    GetPersonListNum,
    /// Get the name, gender and face ids of a person.
    GetPersonBaseInfo,
    /// List the libraries a person belongs to.
    GetPersonGroupInfo,
    /// Change the name or gender of a person.
    ModifyPersonBaseInfo,
    /// Change the custom description fields of a person in a library.
    ModifyPersonGroupInfo,
    /// Add an existing person to more libraries.
    CopyPerson,

    // Face management
    /// Add face images to a person.
    CreateFace,
    /// Remove face images from a person.
    DeleteFace,

    // Search and verification
    /// Search libraries for the persons most similar to the faces in an image.
    SearchFaces,
    /// Check whether an image shows a given person.
    VerifyFace,
}

impl IaiOperation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 22] = [
        Self::DetectFace,
        Self::AnalyzeFace,
        Self::CompareFace,
        Self::DetectLiveFace,
        Self::CreateGroup,
        Self::DeleteGroup,
        Self::GetGroupList,
        Self::ModifyGroup,
        Self::CreatePerson,
        Self::DeletePerson,
        Self::DeletePersonFromGroup,
        Self::GetPersonList,
        Self::GetPersonListNum,
        Self::GetPersonBaseInfo,
        Self::GetPersonGroupInfo,
        Self::ModifyPersonBaseInfo,
        Self::ModifyPersonGroupInfo,
        Self::CopyPerson,
        Self::CreateFace,
        Self::DeleteFace,
        Self::SearchFaces,
        Self::VerifyFace,
    ];

    /// Returns the remote action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DetectFace => "DetectFace",
            Self::AnalyzeFace => "AnalyzeFace",
            Self::CompareFace => "CompareFace",
            Self::DetectLiveFace => "DetectLiveFace",
            Self::CreateGroup => "CreateGroup",
            Self::DeleteGroup => "DeleteGroup",
            Self::GetGroupList => "GetGroupList",
            Self::ModifyGroup => "ModifyGroup",
            Self::CreatePerson => "CreatePerson",
            Self::DeletePerson => "DeletePerson",
            Self::DeletePersonFromGroup => "DeletePersonFromGroup",
            Self::GetPersonList => "GetPersonList",
            Self::GetPersonListNum => "GetPersonListNum",
            Self::GetPersonBaseInfo => "GetPersonBaseInfo",
            Self::GetPersonGroupInfo => "GetPersonGroupInfo",
            Self::ModifyPersonBaseInfo => "ModifyPersonBaseInfo",
            Self::ModifyPersonGroupInfo => "ModifyPersonGroupInfo",
            Self::CopyPerson => "CopyPerson",
            Self::CreateFace => "CreateFace",
            Self::DeleteFace => "DeleteFace",
            Self::SearchFaces => "SearchFaces",
            Self::VerifyFace => "VerifyFace",
        }
    }

    /// Parse a remote action name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DetectFace" => Some(Self::DetectFace),
            "AnalyzeFace" => Some(Self::AnalyzeFace),
            "CompareFace" => Some(Self::CompareFace),
            "DetectLiveFace" => Some(Self::DetectLiveFace),
            "CreateGroup" => Some(Self::CreateGroup),
            "DeleteGroup" => Some(Self::DeleteGroup),
            "GetGroupList" => Some(Self::GetGroupList),
            "ModifyGroup" => Some(Self::ModifyGroup),
            "CreatePerson" => Some(Self::CreatePerson),
            "DeletePerson" => Some(Self::DeletePerson),
            "DeletePersonFromGroup" => Some(Self::DeletePersonFromGroup),
            "GetPersonList" => Some(Self::GetPersonList),
            "GetPersonListNum" => Some(Self::GetPersonListNum),
            "GetPersonBaseInfo" => Some(Self::GetPersonBaseInfo),
            "GetPersonGroupInfo" => Some(Self::GetPersonGroupInfo),
            "ModifyPersonBaseInfo" => Some(Self::ModifyPersonBaseInfo),
            "ModifyPersonGroupInfo" => Some(Self::ModifyPersonGroupInfo),
            "CopyPerson" => Some(Self::CopyPerson),
            "CreateFace" => Some(Self::CreateFace),
            "DeleteFace" => Some(Self::DeleteFace),
            "SearchFaces" => Some(Self::SearchFaces),
            "VerifyFace" => Some(Self::VerifyFace),
            _ => None,
        }
    }
}

impl fmt::Display for IaiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
