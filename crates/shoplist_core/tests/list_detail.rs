use shoplist_core::{
    builtin_users, DetailSession, Handoff, IdAllocation, Item, Outcome, Route, ShoppingList, User,
    VisibilityFilter, DEFAULT_LIST_NAME,
};

fn owner() -> User {
    builtin_users()[0].clone()
}

fn guest() -> User {
    builtin_users()[1].clone()
}

fn two_item_list() -> ShoppingList {
    let mut list = ShoppingList::new(5, "Weekly");
    list.items = vec![Item::new(1, "Bread"), Item::new(2, "Eggs")];
    list.members = vec!["Bob".to_string()];
    list
}

fn session_for(list: ShoppingList) -> DetailSession {
    DetailSession::from_handoff(
        Some(Handoff::new(list, Some(owner()))),
        IdAllocation::CountPlusOne,
    )
}

#[test]
fn fallback_session_exposes_default_list() {
    let session = DetailSession::from_handoff(None, IdAllocation::CountPlusOne);
    assert_eq!(session.name(), DEFAULT_LIST_NAME);
    assert_eq!(session.items().len(), 3);
    assert!(!session.items()[0].resolved);
    assert!(!session.items()[1].resolved);
    assert!(session.items()[2].resolved);

    let archived = session.items_filtered(VisibilityFilter::Archived);
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].id, 3);
    assert_eq!(session.items_filtered(VisibilityFilter::Active).len(), 2);
}

#[test]
fn add_item_on_two_item_list_assigns_id_three() {
    let mut session = session_for(two_item_list());
    assert_eq!(session.add_item(&owner(), "Milk"), Outcome::Applied(3));
    let milk = session.items().last().expect("milk appended");
    assert_eq!(milk.name, "Milk");
    assert!(!milk.resolved);
}

#[test]
fn guest_owner_only_calls_change_nothing() {
    let guest = guest();
    let mut session = session_for(two_item_list());
    let before = session.clone();

    assert_eq!(session.rename_list(&guest, "Hijacked"), Outcome::Denied);
    assert_eq!(session.remove_item(&guest, 1), Outcome::Denied);
    assert_eq!(session.remove_member(&guest, "Bob"), Outcome::Denied);
    assert_eq!(session.add_member(&guest, "Mallory"), Outcome::Denied);
    assert_eq!(session, before);
}

#[test]
fn guest_may_add_and_toggle_items() {
    let guest = guest();
    let mut session = session_for(two_item_list());

    assert_eq!(session.add_item(&guest, "Juice"), Outcome::Applied(3));
    assert_eq!(session.toggle_resolved(&guest, 1), Outcome::Applied(()));
    assert!(session.items()[0].resolved);
}

#[test]
fn owner_add_then_remove_member_round_trips() {
    let owner = owner();
    let mut session = session_for(two_item_list());
    let before = session.members().to_vec();

    assert!(session.add_member(&owner, "Alice").is_applied());
    assert_eq!(session.members().len(), before.len() + 1);
    assert!(session.remove_member(&owner, "Alice").is_applied());
    assert_eq!(session.members(), before.as_slice());
}

#[test]
fn owner_rename_and_remove_item() {
    let owner = owner();
    let mut session = session_for(two_item_list());

    assert!(session.rename_list(&owner, "Renamed").is_applied());
    assert_eq!(session.name(), "Renamed");
    assert!(session.remove_item(&owner, 1).is_applied());
    assert_eq!(session.items(), [Item::new(2, "Eggs")]);
}

#[test]
fn toggling_item_filter_is_lossless() {
    let owner = owner();
    let mut session = session_for(two_item_list());
    session.toggle_resolved(&owner, 2);
    let before = session.items().to_vec();

    for _ in 0..3 {
        session.set_filter(session.filter().toggled());
    }
    assert_eq!(session.filter(), VisibilityFilter::Archived);
    assert_eq!(session.visible_items().len(), 1);
    session.set_filter(VisibilityFilter::Active);
    assert_eq!(session.visible_items().len(), 1);
    assert_eq!(session.items(), before.as_slice());
}

#[test]
fn leave_signals_collection_for_guest_only() {
    let session = session_for(two_item_list());
    assert_eq!(session.leave(&guest()), Outcome::Applied(Route::Collection));
    assert_eq!(session.leave(&owner()), Outcome::Denied);
    assert_eq!(session.members(), ["Bob"]);
}
