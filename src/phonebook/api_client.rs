use reqwest::Client;
use serde::{Serialize, Deserialize};
use serde_json::{json, Value};
use url::Url;

use crate::{
    Error,
    error::Result,
};

use super::{
    contact::{Contact, ContactChange, ContactId},
    filter::ContactFilter,
};

const GET_CONTACT_LIST: &str = r#"
query GetContactList($where: contact_bool_exp, $limit: Int, $offset: Int) {
    contact(where: $where, limit: $limit, offset: $offset) {
        created_at
        first_name
        id
        last_name
        phones {
            number
        }
    }
}"#;

const GET_CONTACT_DETAIL: &str = r#"
query GetContactDetail($id: Int!) {
    contact_by_pk(id: $id) {
        created_at
        first_name
        id
        last_name
        phones {
            number
        }
    }
}"#;

const ADD_CONTACT_WITH_PHONES: &str = r#"
mutation AddContactWithPhones($first_name: String!, $last_name: String!, $phones: [phone_insert_input!]!) {
    insert_contact(objects: {
        first_name: $first_name
        last_name: $last_name
        phones: { data: $phones }
    }) {
        returning {
            created_at
            first_name
            id
            last_name
            phones {
                number
            }
        }
    }
}"#;

const EDIT_CONTACT_BY_ID: &str = r#"
mutation EditContactById($id: Int!, $_set: contact_set_input) {
    update_contact_by_pk(pk_columns: { id: $id }, _set: $_set) {
        created_at
        first_name
        id
        last_name
        phones {
            number
        }
    }
}"#;

const DELETE_CONTACT_BY_ID: &str = r#"
mutation DeleteContactById($id: Int!) {
    delete_contact_by_pk(id: $id) {
        first_name
        last_name
        id
    }
}"#;

/// Thin pass-through client for the hosted GraphQL contact store. Every
/// operation is a single request with no client-side timeout, retry, or
/// cancellation; the store guarantees each mutation is all-or-nothing.
pub struct APIClient {
    base_url: Url,
    client:   Client,
}

impl APIClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client:   Client::builder().build()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute(&self, query: &'static str, variables: Value) -> Result<Value> {
        #[derive(Serialize)]
        struct RequestData {
            query: &'static str,
            variables: Value,
        }

        #[derive(Deserialize)]
        struct GqlError {
            message: String,
        }

        #[derive(Deserialize)]
        struct ResponseData {
            data: Option<Value>,
            errors: Option<Vec<GqlError>>,
        }

        let data = RequestData { query, variables };
        let rsp = self.client.post(self.base_url.clone())
            .json(&data)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        let rsp = match rsp.error_for_status() {
            Ok(_res) => { _res },
            Err(e) => {
                return Err(Error::Network(format!("Http error: invalid http response {e}")));
            }
        };

        let data = rsp.json::<ResponseData>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })?;

        if let Some(errors) = data.errors {
            let message = errors.first()
                .map(|v| v.message.clone())
                .unwrap_or_else(|| "unspecified error".into());
            return Err(Error::Protocol(format!("GraphQL error: {message}")));
        }

        let Some(data) = data.data else {
            return Err(Error::Protocol("GraphQL error: missing data in the response body".into()));
        };

        Ok(data)
    }

    pub async fn fetch_contacts(&self,
        filter: &ContactFilter,
        limit: Option<usize>,
        offset: Option<usize>
    ) -> Result<Vec<Contact>> {
        #[derive(Deserialize)]
        struct ResponseData {
            contact: Vec<Contact>,
        }

        let variables = json!({
            "where":  filter.to_bool_exp(),
            "limit":  limit,
            "offset": offset,
        });

        let data = self.execute(GET_CONTACT_LIST, variables).await?;
        let data = serde_json::from_value::<ResponseData>(data)?;
        Ok(data.contact)
    }

    pub async fn fetch_contact(&self, id: ContactId) -> Result<Option<Contact>> {
        #[derive(Deserialize)]
        struct ResponseData {
            contact_by_pk: Option<Contact>,
        }

        let data = self.execute(GET_CONTACT_DETAIL, json!({ "id": id })).await?;
        let data = serde_json::from_value::<ResponseData>(data)?;
        Ok(data.contact_by_pk)
    }

    /// The equality lookup backing the uniqueness rule of the validation
    /// gate: every contact whose first and last name both match exactly.
    pub async fn fetch_similar(&self, first_name: &str, last_name: &str) -> Result<Vec<Contact>> {
        let mut filter = ContactFilter::new();
        filter.with_name_equals(first_name, last_name);
        self.fetch_contacts(&filter, None, None).await
    }

    pub async fn create_contact(&self,
        first_name: &str,
        last_name: &str,
        numbers: &[String]
    ) -> Result<Contact> {
        #[derive(Deserialize)]
        struct Inserted {
            returning: Vec<Contact>,
        }

        #[derive(Deserialize)]
        struct ResponseData {
            insert_contact: Inserted,
        }

        let phones = numbers.iter()
            .map(|number| json!({ "number": number }))
            .collect::<Vec<_>>();

        let variables = json!({
            "first_name": first_name,
            "last_name":  last_name,
            "phones":     phones,
        });

        let data = self.execute(ADD_CONTACT_WITH_PHONES, variables).await?;
        let mut data = serde_json::from_value::<ResponseData>(data)?;

        match data.insert_contact.returning.is_empty() {
            true  => Err(Error::Protocol("GraphQL error: insert returned no contact".into())),
            false => Ok(data.insert_contact.returning.swap_remove(0)),
        }
    }

    pub async fn update_contact(&self, id: ContactId, change: &ContactChange) -> Result<Contact> {
        #[derive(Deserialize)]
        struct ResponseData {
            update_contact_by_pk: Option<Contact>,
        }

        let mut set = serde_json::Map::new();
        if let Some(first) = change.first_name() {
            set.insert("first_name".into(), json!(first));
        }
        if let Some(last) = change.last_name() {
            set.insert("last_name".into(), json!(last));
        }

        let variables = json!({
            "id":   id,
            "_set": set,
        });

        let data = self.execute(EDIT_CONTACT_BY_ID, variables).await?;
        let data = serde_json::from_value::<ResponseData>(data)?;

        data.update_contact_by_pk.ok_or_else(|| {
            Error::State(format!("No contact found with id {id}"))
        })
    }

    pub async fn delete_contact(&self, id: ContactId) -> Result<ContactId> {
        #[derive(Deserialize)]
        struct Deleted {
            id: ContactId,
        }

        #[derive(Deserialize)]
        struct ResponseData {
            delete_contact_by_pk: Option<Deleted>,
        }

        let data = self.execute(DELETE_CONTACT_BY_ID, json!({ "id": id })).await?;
        let data = serde_json::from_value::<ResponseData>(data)?;

        data.delete_contact_by_pk
            .map(|v| v.id)
            .ok_or_else(|| Error::State(format!("No contact found with id {id}")))
    }
}
