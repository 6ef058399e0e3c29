use uuid::Uuid;

use mindcheck_core::models::owner::OwnerTag;
use mindcheck_core::storage_keys;

#[test]
fn result_keys() {
    let id = Uuid::new_v4();
    let owner: OwnerTag = "anon_abc".parse().unwrap();

    assert_eq!(storage_keys::result(id), format!("results/{id}.json"));
    assert_eq!(
        storage_keys::owner_result(&owner, id),
        format!("owners/anon_abc/results/{id}.json")
    );
    assert!(storage_keys::owner_result(&owner, id).starts_with(&storage_keys::owner_results_prefix(&owner)));
}

#[test]
fn catalog_keys_share_their_prefix() {
    let id = Uuid::new_v4();
    assert!(storage_keys::questionnaire(id).starts_with(storage_keys::QUESTIONNAIRES_PREFIX));
    assert!(storage_keys::resource(id).starts_with(storage_keys::RESOURCES_PREFIX));
}
