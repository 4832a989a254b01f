use super::*;

fn user(email: &str, role: Role) -> User {
    User { id: "u".to_owned(), name: "n".to_owned(), email: email.to_owned(), role }
}

#[test]
fn public_listing_hides_pending_and_rejected() {
    let store = ProjectStore::seeded();
    let ids: Vec<_> = store.public_listing().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
}

#[test]
fn filter_by_query_matches_title_or_summary() {
    let store = ProjectStore::seeded();
    let by_title = ProjectFilter { query: "العيادات".to_owned(), category: None };
    assert_eq!(store.filter(&by_title).iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["2"]);

    let by_summary = ProjectFilter { query: " الحرفيين ".to_owned(), category: None };
    assert_eq!(store.filter(&by_summary).len(), 1);
}

#[test]
fn filter_by_category_is_exact() {
    let store = ProjectStore::seeded();
    let health = ProjectFilter { query: String::new(), category: Some("صحة".to_owned()) };
    // The rejected health project stays hidden.
    assert_eq!(store.filter(&health).iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
}

#[test]
fn empty_filter_returns_public_listing() {
    let store = ProjectStore::seeded();
    assert_eq!(store.filter(&ProjectFilter::default()), store.public_listing());
}

#[test]
fn categories_are_distinct_in_catalogue_order() {
    let store = ProjectStore::seeded();
    assert_eq!(
        store.categories(),
        vec!["تعليم", "صحة", "زراعة", "تجارة إلكترونية", "طاقة"]
    );
}

#[test]
fn raised_and_progress() {
    let store = ProjectStore::seeded();
    let first = store.get("1").unwrap();
    assert_eq!(first.raised(), 65_000);
    assert_eq!(first.progress_percent(), 43);
    assert_eq!(store.get("2").unwrap().progress_percent(), 100);
    assert_eq!(store.get("3").unwrap().progress_percent(), 0);
}

#[test]
fn progress_is_capped_and_handles_zero_goal() {
    let mut over = ProjectStore::seeded().get("4").unwrap().clone();
    over.pledges.push(Pledge { sponsor_email: "x@example.com".to_owned(), amount: 1_000_000 });
    assert_eq!(over.progress_percent(), 100);
    over.funding_goal = 0;
    assert_eq!(over.progress_percent(), 100);
}

#[test]
fn owned_and_backed_queries() {
    let store = ProjectStore::seeded();
    let owned: Vec<_> = store.owned_by("startup@example.com").iter().map(|p| p.id.as_str()).collect();
    assert_eq!(owned, vec!["1", "3"]);
    let backed: Vec<_> = store.backed_by("sponsor@example.com").iter().map(|p| p.id.as_str()).collect();
    assert_eq!(backed, vec!["1", "2"]);
    assert!(store.backed_by("nobody@example.com").is_empty());
}

#[test]
fn set_status_moves_pending_project() {
    let mut store = ProjectStore::seeded();
    assert_eq!(store.pending().len(), 2);
    store.set_status("3", ProjectStatus::Approved).unwrap();
    assert_eq!(store.get("3").unwrap().status, ProjectStatus::Approved);
    assert_eq!(store.pending().len(), 1);
    assert!(store.public_listing().iter().any(|p| p.id == "3"));
}

#[test]
fn set_status_unknown_project_errors() {
    let mut store = ProjectStore::seeded();
    assert_eq!(
        store.set_status("99", ProjectStatus::Rejected),
        Err(ProjectError::NotFound("99".to_owned()))
    );
}

#[test]
fn set_status_rejects_reviewed_projects() {
    let mut store = ProjectStore::seeded();
    assert_eq!(store.get("2").unwrap().status, ProjectStatus::Funded);
    assert_eq!(
        store.set_status("2", ProjectStatus::Rejected),
        Err(ProjectError::NotPending("2".to_owned()))
    );
    assert_eq!(store.get("2").unwrap().status, ProjectStatus::Funded);

    store.set_status("3", ProjectStatus::Rejected).unwrap();
    assert_eq!(
        store.set_status("3", ProjectStatus::Approved),
        Err(ProjectError::NotPending("3".to_owned()))
    );
}

#[test]
fn set_status_accepts_only_review_decisions() {
    let mut store = ProjectStore::seeded();
    let before = store.summary();
    for status in [ProjectStatus::Pending, ProjectStatus::Funded] {
        assert_eq!(store.set_status("2", status), Err(ProjectError::InvalidDecision(status)));
        assert_eq!(store.set_status("3", status), Err(ProjectError::InvalidDecision(status)));
    }
    assert_eq!(store.summary(), before);
    assert!(store.public_listing().iter().any(|p| p.id == "2"));
}

#[test]
fn contracts_follow_role_visibility() {
    let store = ProjectStore::seeded();

    let startup = store.contracts_for(&user("startup@example.com", Role::Startup));
    assert_eq!(startup.len(), 2);
    assert!(startup.iter().all(|c| c.owner_email == "startup@example.com"));

    let sponsor = store.contracts_for(&user("sponsor@example.com", Role::Sponsor));
    assert_eq!(sponsor.iter().map(|c| c.amount).sum::<u64>(), 160_000);
    assert!(sponsor.iter().all(|c| c.sponsor_email == "sponsor@example.com"));

    assert_eq!(store.contracts_for(&user("admin@example.com", Role::Admin)).len(), 5);
    assert!(store.contracts_for(&user("x@example.com", Role::Public)).is_empty());
}

#[test]
fn summary_counts_statuses_and_totals() {
    let summary = ProjectStore::seeded().summary();
    assert_eq!(
        summary,
        CatalogueSummary {
            pending: 2,
            approved: 2,
            funded: 1,
            rejected: 1,
            total_goal: 1_360_000,
            total_raised: 280_000,
        }
    );
}

#[test]
fn category_totals_sum_raised_amounts() {
    let totals = ProjectStore::seeded().category_totals();
    assert_eq!(totals[0], ("تعليم".to_owned(), 65_000));
    assert_eq!(totals[1], ("صحة".to_owned(), 200_000));
    assert_eq!(totals.iter().map(|(_, v)| v).sum::<u64>(), 280_000);
}

#[test]
fn status_labels_and_visibility() {
    assert!(ProjectStatus::Funded.is_public());
    assert!(!ProjectStatus::Pending.is_public());
    assert_eq!(ProjectStatus::Rejected.label(), "مرفوض");
}
