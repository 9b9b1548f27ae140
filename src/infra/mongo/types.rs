use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// One stored recipe document. The fields the search engine inspects are
/// typed; everything else the document carries rides along in `extra` and
/// is returned to clients verbatim.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    // Entries may be null or blank, standing for an unfilled slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Option<String>>>,
    #[serde(rename = "prepTime", default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(rename = "cookTime", default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<HashMap<String, Vec<String>>>,
    #[serde(flatten)]
    pub extra: Document,
}

// Clients receive the identifier as its hex string, never as a native oid.
fn serialize_oid_as_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
