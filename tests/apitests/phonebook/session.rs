use serial_test::serial;

use yellowpage::{
    configuration as cfg,
    DraftContact,
    Phonebook,
};

const BASE_URL: &str = "http://localhost:8080/v1/graphql";

fn open_session(dir: &str) -> Phonebook {
    let cfg = cfg::Builder::new()
        .with_api_url(BASE_URL)
        .with_data_dir(&super::super::working_path(dir))
        .build()
        .unwrap();

    Phonebook::new(&cfg).unwrap()
}

#[ignore]
#[tokio::test]
#[serial]
async fn test_load_page_partitions() {
    let mut book = open_session("apitests.tmp");

    let page = book.load_page().await.unwrap();
    assert!(page.remaining().len() <= 10);

    if let Some(first) = page.remaining().first() {
        let id = first.id();
        assert_eq!(book.toggle_favorite(id), true);
        assert_eq!(book.page(), 1);

        let page = book.load_page().await.unwrap();
        assert!(page.favorites().iter().any(|c| c.id() == id));
        assert!(page.remaining().iter().all(|c| c.id() != id));

        assert_eq!(book.toggle_favorite(id), false);
    }
}

#[ignore]
#[tokio::test]
#[serial]
async fn test_save_rejects_duplicate_draft() {
    let book = open_session("apitests.tmp");

    let mut draft = DraftContact::new();
    draft.set_first_name("Apitest");
    draft.set_last_name("Duplicate");
    draft.set_number(0, "555");

    let first = book.save(&mut draft).await.unwrap();
    assert_eq!(first.is_some(), true);

    // Same name pair again: the gate blocks it and stamps the draft.
    let mut dup = DraftContact::new();
    dup.set_first_name("Apitest");
    dup.set_last_name("Duplicate");

    let second = book.save(&mut dup).await.unwrap();
    assert_eq!(second.is_none(), true);
    assert_eq!(dup.error().is_some(), true);

    _ = book.remove(first.unwrap().id()).await;
}
