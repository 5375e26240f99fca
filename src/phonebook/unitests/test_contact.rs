use crate::phonebook::contact::{Contact, ContactBuilder, ContactId};

#[test]
fn test_builder() {
    let result = ContactBuilder::new(ContactId::new(1))
        .with_first_name("Wahyu")
        .with_last_name("Adit")
        .with_created("2023-11-05T09:01:07.16625+00:00")
        .with_phone("11333355555577777777")
        .build();

    assert_eq!(result.is_ok(), true);

    let contact = result.unwrap();
    assert_eq!(contact.id(), ContactId::new(1));
    assert_eq!(contact.first_name(), "Wahyu");
    assert_eq!(contact.last_name(), "Adit");
    assert_eq!(contact.display_name(), "Wahyu Adit");
    assert_eq!(contact.phones().len(), 1);
    assert_eq!(contact.primary_number(), Some("11333355555577777777"));
}

#[test]
fn test_builder_requires_first_name() {
    let result = ContactBuilder::new(ContactId::new(1))
        .with_last_name("Adit")
        .build();
    assert_eq!(result.is_err(), true);
}

#[test]
fn test_display_name_with_empty_last_name() {
    let contact = ContactBuilder::new(ContactId::new(2))
        .with_first_name("Mary")
        .build()
        .unwrap();
    assert_eq!(contact.display_name(), "Mary");
    assert_eq!(contact.primary_number(), None);
}

#[test]
fn test_created_display() {
    let contact = ContactBuilder::new(ContactId::new(3))
        .with_first_name("Ann")
        .with_created("2023-11-05T09:01:07.16625+00:00")
        .build()
        .unwrap();
    assert_eq!(contact.created_display(), "November 5, 2023");

    let odd = ContactBuilder::new(ContactId::new(4))
        .with_first_name("Ann")
        .with_created("yesterday")
        .build()
        .unwrap();
    assert_eq!(odd.created_display(), "yesterday");
}

#[test]
fn test_contact_id_text_round_trip() {
    let id: ContactId = "42".parse().unwrap();
    assert_eq!(id, ContactId::new(42));
    assert_eq!(id.to_string(), "42");

    let bad = "forty-two".parse::<ContactId>();
    assert_eq!(bad.is_err(), true);
}

#[test]
fn test_deserialize_wire_shape() {
    // The exact shape the GraphQL store returns for one contact.
    let data = r#"{
        "created_at": "2023-11-05T12:00:00Z",
        "first_name": "Iskandar",
        "id": 2,
        "last_name": "Putra",
        "phones": [
            { "number": "9876543210" },
            { "number": "11333355555577777777" }
        ]
    }"#;

    let contact: Contact = serde_json::from_str(data).unwrap();
    assert_eq!(contact.id(), ContactId::new(2));
    assert_eq!(contact.display_name(), "Iskandar Putra");
    assert_eq!(contact.phones().len(), 2);

    // Phone numbers stay opaque text; this one would overflow an integer.
    assert_eq!(contact.phones()[1].number(), "11333355555577777777");
}
