//! Face recognition (IAI) client.

pub use tencentcloud_iai_model::input::*;
pub use tencentcloud_iai_model::output::*;
pub use tencentcloud_iai_model::types::*;
pub use tencentcloud_iai_model::{API_VERSION, DESCRIPTOR, IaiOperation, SERVICE};

use crate::macros::service_client;

service_client! {
    /// Client for the IAI `2018-03-01` API.
    IaiClient {
        descriptor: DESCRIPTOR,
        operation: IaiOperation,
    }

    // Face analysis
    /// Detect faces in an image and optionally return their attributes and quality.
    detect_face => DetectFace(DetectFaceRequest) -> DetectFaceResponse;
    /// Locate the facial landmarks of the faces in an image.
    analyze_face => AnalyzeFace(AnalyzeFaceRequest) -> AnalyzeFaceResponse;
    /// Score the similarity of the largest faces of two images.
    compare_face => CompareFace(CompareFaceRequest) -> CompareFaceResponse;
    /// Score whether an image was taken of a live person.
    detect_live_face => DetectLiveFace(DetectLiveFaceRequest) -> DetectLiveFaceResponse;

    // Group management
    /// Create a face library.
    create_group => CreateGroup(CreateGroupRequest) -> CreateGroupResponse;
    /// Delete a face library. Persons left in no library are deleted too.
    delete_group => DeleteGroup(DeleteGroupRequest) -> DeleteGroupResponse;
    /// List face libraries.
    get_group_list => GetGroupList(GetGroupListRequest) -> GetGroupListResponse;
    /// Rename a face library or its custom description fields.
    modify_group => ModifyGroup(ModifyGroupRequest) -> ModifyGroupResponse;

    // Person management
    /// Create a person in a library from one face image.
    create_person => CreatePerson(CreatePersonRequest) -> CreatePersonResponse;
    /// Delete a person from every library.
    delete_person => DeletePerson(DeletePersonRequest) -> DeletePersonResponse;
    /// Remove a person from one library.
    delete_person_from_group =>
        DeletePersonFromGroup(DeletePersonFromGroupRequest) -> DeletePersonFromGroupResponse;
    /// List the persons of a library.
    get_person_list => GetPersonList(GetPersonListRequest) -> GetPersonListResponse;
    /// Count the persons and faces of a library.
    get_person_list_num => GetPersonListNum(GetPersonListNumRequest) -> GetPersonListNumResponse;
    /// Get the name, gender and face ids of a person.
    get_person_base_info =>
        GetPersonBaseInfo(GetPersonBaseInfoRequest) -> GetPersonBaseInfoResponse;
    /// List the libraries a person belongs to.
    get_person_group_info =>
        GetPersonGroupInfo(GetPersonGroupInfoRequest) -> GetPersonGroupInfoResponse;
    /// Change the name or gender of a person.
    modify_person_base_info =>
        ModifyPersonBaseInfo(ModifyPersonBaseInfoRequest) -> ModifyPersonBaseInfoResponse;
    /// Change the custom description fields of a person in one library.
    modify_person_group_info =>
        ModifyPersonGroupInfo(ModifyPersonGroupInfoRequest) -> ModifyPersonGroupInfoResponse;
    /// Add an existing person to more libraries.
    copy_person => CopyPerson(CopyPersonRequest) -> CopyPersonResponse;

    // Face management
    /// Add face images to a person.
    create_face => CreateFace(CreateFaceRequest) -> CreateFaceResponse;
    /// Remove face images from a person.
    delete_face => DeleteFace(DeleteFaceRequest) -> DeleteFaceResponse;

    // Search and verification
    /// Search libraries for the persons most similar to the faces in an image.
    search_faces => SearchFaces(SearchFacesRequest) -> SearchFacesResponse;
    /// Check whether an image shows a given person.
    verify_face => VerifyFace(VerifyFaceRequest) -> VerifyFaceResponse;
}
