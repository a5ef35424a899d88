use realty_client::entities::{register_all, Agent, Office};
use realty_client::{
    Action, Completion, OperationKind, Outcome, ReadOnly, Status, Store, StoreError,
};
use serde::{Deserialize, Serialize};

/// Claims the "agents" tag with a different record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Impostor {
    id: u64,
}

realty_client::impl_resource!(Impostor, "agents", "Impostor", id: u64, ReadOnly);

/// A resource nobody registers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Unlisted {
    id: u64,
}

realty_client::impl_resource!(Unlisted, "unlisted", "Unlisted", id: u64, ReadOnly);

fn office(id: u64) -> Office {
    Office {
        id,
        name: format!("Office {id}"),
        address: "1 Marina".into(),
        phone: None,
        image: None,
    }
}

#[test]
fn actions_route_by_resource_tag() {
    let store = register_all(Store::new());

    let op = store.begin::<Office>(OperationKind::List, None);
    store
        .dispatch(Action::new::<Office>(Outcome::Succeeded {
            op,
            completion: Completion::Listed(vec![office(1), office(2)]),
            message: None,
        }))
        .unwrap();

    let counts = store.counts().unwrap();
    assert!(counts.contains(&("offices", 2)));
    assert!(counts.contains(&("agents", 0)));
    assert_eq!(store.status("agents").unwrap(), Status::Idle);
}

#[test]
fn unknown_tag_is_an_error() {
    let store = Store::new().register::<Agent>();
    let op = store.begin::<Unlisted>(OperationKind::List, None);

    let err = store
        .dispatch_outcome::<Unlisted>(Outcome::Requested { op })
        .unwrap_err();

    assert_eq!(err, StoreError::UnknownResource("unlisted".into()));
    assert!(matches!(
        store.status("unlisted"),
        Err(StoreError::UnknownResource(_))
    ));
}

#[test]
fn mismatched_payload_is_rejected_without_state_change() {
    let store = Store::new().register::<Agent>();
    let op = store.begin::<Impostor>(OperationKind::List, None);

    let err = store
        .dispatch_outcome::<Impostor>(Outcome::Requested { op })
        .unwrap_err();

    assert_eq!(err, StoreError::TypeMismatch("agents"));
    assert_eq!(store.status("agents").unwrap(), Status::Idle);
    assert!(matches!(
        store.select::<Impostor, _>(|c| c.len()),
        Err(StoreError::TypeMismatch("agents"))
    ));
}

#[test]
fn registering_twice_keeps_the_first_container() {
    let store = Store::new().register::<Office>();
    let op = store.begin::<Office>(OperationKind::Create, None);
    store
        .dispatch_outcome::<Office>(Outcome::Succeeded {
            op,
            completion: Completion::Created(office(3)),
            message: None,
        })
        .unwrap();

    assert_eq!(store.add::<Office>(), Ok(false));
    assert_eq!(store.select::<Office, _>(|c| c.len()).unwrap(), 1);
}

#[test]
fn sequence_numbers_increase_across_resources() {
    let store = register_all(Store::new());
    let a = store.begin::<Office>(OperationKind::List, None);
    let b = store.begin::<Agent>(OperationKind::Delete, Some("4".into()));

    assert!(b.seq > a.seq);
    assert_eq!(b.to_string(), format!("agents.delete#{}(4)", b.seq));
}
