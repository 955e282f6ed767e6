use super::*;

fn three_users() -> Vec<User> {
    seed_users().into_iter().take(3).collect()
}

fn ada() -> UserForm {
    UserForm {
        name: "Ada".into(),
        email: "ada@x.com".into(),
        role: Role::User,
        status: Status::Active,
        department: "Eng".into(),
        join_date: None,
    }
}

// =============================================================================
// Role / Status
// =============================================================================

#[test]
fn role_parse_round_trips_labels() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse("all"), None);
}

#[test]
fn status_parse_round_trips_labels() {
    for status in Status::ALL {
        assert_eq!(Status::parse(status.as_str()), Some(status));
    }
    assert_eq!(Status::parse("Deleted"), None);
}

#[test]
fn user_serializes_with_camel_case_and_labels() {
    let json = serde_json::to_value(&seed_users()[0]).unwrap();
    assert_eq!(json["joinDate"], "2023-01-15");
    assert_eq!(json["role"], "Admin");
    assert_eq!(json["status"], "Active");
}

#[test]
fn user_form_defaults_role_and_status() {
    let form: UserForm = serde_json::from_str(r#"{"name":"Ada","email":"ada@x.com","department":"Eng"}"#).unwrap();
    assert_eq!(form.role, Role::User);
    assert_eq!(form.status, Status::Active);
    assert!(form.join_date.is_none());
}

// =============================================================================
// Filter
// =============================================================================

#[test]
fn default_filter_returns_everything_in_order() {
    let users = seed_users();
    let filter = DirectoryFilter::default();
    let result = filter_users(&users, &filter);
    assert_eq!(result.len(), users.len());
    assert!(result.iter().zip(users.iter()).all(|(a, b)| *a == b));
    assert!(!filter.is_active());
}

#[test]
fn search_without_match_is_empty() {
    let users = seed_users();
    let filter = DirectoryFilter { search: "zzz-no-such-user".into(), ..DirectoryFilter::default() };
    assert!(filter_users(&users, &filter).is_empty());
}

#[test]
fn search_is_case_insensitive_over_name_and_email() {
    let users = seed_users();
    let by_name = DirectoryFilter { search: "JANE".into(), ..DirectoryFilter::default() };
    let hits = filter_users(&users, &by_name);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jane Smith");

    let by_email = DirectoryFilter { search: "Gallagher@".into(), ..DirectoryFilter::default() };
    assert_eq!(filter_users(&users, &by_email)[0].id, "8");
}

#[test]
fn criteria_are_conjunctive() {
    let users = seed_users();
    let filter = DirectoryFilter {
        search: String::new(),
        role: Some(Role::Editor),
        status: Some(Status::Active),
        department: Some("Marketing".into()),
    };
    let ids: Vec<&str> = filter_users(&users, &filter).iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "6"]);
    assert!(filter.is_active());

    let narrower = DirectoryFilter { search: "diana".into(), ..filter };
    let ids: Vec<&str> = filter_users(&users, &narrower).iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["6"]);
}

#[test]
fn department_is_exact_match() {
    let users = seed_users();
    let filter = DirectoryFilter { department: Some("engineering".into()), ..DirectoryFilter::default() };
    assert!(filter_users(&users, &filter).is_empty());
}

#[test]
fn status_filter_preserves_order() {
    let users = seed_users();
    let filter = DirectoryFilter { status: Some(Status::Pending), ..DirectoryFilter::default() };
    let ids: Vec<&str> = filter_users(&users, &filter).iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "7"]);
}

#[test]
fn matches_agrees_with_filter_users() {
    let users = seed_users();
    let filter = DirectoryFilter { search: "SON".into(), role: Some(Role::User), ..DirectoryFilter::default() };
    let expected: Vec<&User> = users.iter().filter(|u| filter.matches(u)).collect();
    assert_eq!(filter_users(&users, &filter), expected);
}

// =============================================================================
// CRUD
// =============================================================================

#[test]
fn add_to_three_element_collection_gets_id_four() {
    let mut dir = UserDirectory::new(three_users());
    let user = dir.add(ada()).unwrap();
    assert_eq!(dir.len(), 4);
    assert_eq!(user.id, "4");
    assert_eq!(user.name, "Ada");
    assert_eq!(dir.users().last(), Some(&user));
}

#[test]
fn add_without_join_date_uses_today() {
    let mut dir = UserDirectory::new(Vec::new());
    let user = dir.add(ada()).unwrap();
    assert_eq!(user.join_date.len(), 10);
    assert_eq!(user.join_date.as_bytes()[4], b'-');
}

#[test]
fn add_then_delete_restores_content() {
    let mut dir = UserDirectory::seeded();
    let before = dir.users().to_vec();
    let added = dir.add(ada()).unwrap();
    dir.delete(&added.id).unwrap();
    assert_eq!(dir.users(), before.as_slice());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut dir = UserDirectory::new(three_users());
    dir.delete("2").unwrap();
    let first = dir.add(ada()).unwrap();
    let second = dir.add(ada()).unwrap();
    assert_eq!(first.id, "4");
    assert_eq!(second.id, "5");

    dir.delete("5").unwrap();
    let third = dir.add(ada()).unwrap();
    assert_eq!(third.id, "6");
}

#[test]
fn counter_starts_past_largest_numeric_id() {
    let mut users = three_users();
    users[2].id = "40".into();
    let mut dir = UserDirectory::new(users);
    assert_eq!(dir.add(ada()).unwrap().id, "41");
}

#[test]
fn add_rejects_invalid_form() {
    let mut dir = UserDirectory::new(three_users());
    let form = UserForm { email: "not-an-email".into(), ..ada() };
    let Err(DirectoryError::Invalid(errors)) = dir.add(form) else {
        panic!("expected invalid form");
    };
    assert_eq!(errors["email"], "Invalid email format");
    assert_eq!(dir.len(), 3);
}

#[test]
fn update_replaces_matching_record_and_keeps_join_date() {
    let mut dir = UserDirectory::seeded();
    let form = UserForm { name: "Johnny Doe".into(), role: Role::Viewer, ..ada() };
    let updated = dir.update("1", form).unwrap();
    assert_eq!(updated.id, "1");
    assert_eq!(updated.name, "Johnny Doe");
    assert_eq!(updated.role, Role::Viewer);
    assert_eq!(updated.join_date, "2023-01-15");
    assert_eq!(dir.get("1"), Some(&updated));
    assert_eq!(dir.len(), 8);
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut dir = UserDirectory::seeded();
    assert!(matches!(dir.update("999", ada()), Err(DirectoryError::NotFound(id)) if id == "999"));
}

#[test]
fn replace_swaps_record_by_id() {
    let mut dir = UserDirectory::seeded();
    let mut user = dir.get("3").unwrap().clone();
    user.status = Status::Active;
    dir.replace(user.clone()).unwrap();
    assert_eq!(dir.users()[2], user);
}

#[test]
fn delete_unknown_id_is_not_found() {
    let mut dir = UserDirectory::seeded();
    assert!(matches!(dir.delete("nope"), Err(DirectoryError::NotFound(_))));
    assert_eq!(dir.len(), 8);
}

// =============================================================================
// Derived views
// =============================================================================

#[test]
fn departments_are_distinct_in_first_seen_order() {
    let dir = UserDirectory::seeded();
    assert_eq!(dir.departments(), vec!["Engineering", "Marketing", "Sales", "Support", "Operations"]);
}

#[test]
fn stats_count_by_status() {
    let dir = UserDirectory::seeded();
    assert_eq!(dir.stats(), DirectoryStats { total: 8, active: 5, pending: 2, inactive: 1 });
}

#[test]
fn empty_directory() {
    let dir = UserDirectory::new(Vec::new());
    assert!(dir.is_empty());
    assert!(dir.departments().is_empty());
    assert_eq!(dir.stats().total, 0);
}
