//! Where each kind of object lives in the bucket.
//!
//! Results are stored once under `results/` and copied under the owner's
//! prefix so a history listing is a single prefix scan.

use uuid::Uuid;

use crate::models::owner::OwnerTag;

pub const QUESTIONNAIRES_PREFIX: &str = "questionnaires/";

pub fn questionnaire(id: Uuid) -> String {
    format!("questionnaires/{id}.json")
}

pub fn result(id: Uuid) -> String {
    format!("results/{id}.json")
}

pub fn owner_results_prefix(owner: &OwnerTag) -> String {
    format!("owners/{owner}/results/")
}

pub fn owner_result(owner: &OwnerTag, id: Uuid) -> String {
    format!("owners/{owner}/results/{id}.json")
}

pub const RESOURCES_PREFIX: &str = "resources/";

pub fn resource(id: Uuid) -> String {
    format!("resources/{id}.json")
}
