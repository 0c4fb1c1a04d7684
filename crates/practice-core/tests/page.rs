use std::collections::BTreeSet;

use practice_core::{ManifestError, PageAffordances, PageId, PageManifest, page::ids};

#[test]
fn every_manifest_has_unique_ids() {
    for page in PageId::ALL {
        PageManifest::for_page(page)
            .check()
            .unwrap_or_else(|err| panic!("{page}: {err}"));
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let manifest = PageManifest {
        page: PageId::Login,
        test_ids: &["login-email", "login-email"],
    };
    assert_eq!(
        manifest.check(),
        Err(ManifestError::DuplicateTestId {
            page: PageId::Login,
            id: "login-email".into()
        })
    );
}

#[test]
fn page_ids_round_trip_through_their_names() {
    for page in PageId::ALL {
        assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
    }
    assert!(matches!(
        "checkout".parse::<PageId>(),
        Err(ManifestError::UnknownPage(_))
    ));
}

#[test]
fn login_manifest_lists_the_documented_controls() {
    let manifest = PageManifest::for_page(PageId::Login);
    assert!(manifest.contains(ids::LOGIN_EMAIL));
    assert!(manifest.contains(ids::LOGIN_PASSWORD));
    assert!(manifest.contains(ids::LOGIN_SUBMIT));
    assert!(!manifest.contains(ids::FORM_SUBMIT));
}

#[test]
fn ids_are_not_shared_between_pages() {
    let mut seen = BTreeSet::new();
    for page in PageId::ALL {
        for id in PageManifest::for_page(page).test_ids {
            assert!(seen.insert(*id), "{id} appears on more than one page");
        }
    }
}

#[test]
fn affordances_default_missing_keys() {
    let affordances: PageAffordances =
        serde_json::from_str(r#"{"sortable_columns":["name"]}"#).expect("affordances");
    assert!(affordances.search);
    assert!(!affordances.pagination);
    assert_eq!(affordances.page_size.get(), 5);
    assert!(affordances.is_sortable("name"));
    assert!(!affordances.is_sortable("age"));
}
