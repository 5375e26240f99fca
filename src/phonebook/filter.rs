use serde_json::{json, Map, Value};

use super::contact::ContactId;

/// Builds the `contact_bool_exp` argument of the list query. Only the
/// combinations the directory actually issues are expressible: membership
/// windows on the id, a substring match on the first name, and the exact
/// name-pair equality backing the uniqueness check.
#[derive(Debug, Default, Clone)]
pub struct ContactFilter {
    id_in       : Option<Vec<ContactId>>,
    id_not_in   : Option<Vec<ContactId>>,
    name_like   : Option<String>,
    equality    : Option<(String, String)>,
}

impl ContactFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_in(&mut self, ids: Vec<ContactId>) -> &mut Self {
        self.id_in = Some(ids);
        self
    }

    pub fn with_id_not_in(&mut self, ids: Vec<ContactId>) -> &mut Self {
        self.id_not_in = Some(ids);
        self
    }

    /// Substring match on the first name. Replaces any equality clause;
    /// the two name predicates are mutually exclusive.
    pub fn with_name_like(&mut self, query: &str) -> &mut Self {
        self.name_like = Some(query.to_string());
        self.equality = None;
        self
    }

    /// Case-sensitive equality on both name columns, exactly as entered.
    /// Replaces any substring clause; the two name predicates are mutually
    /// exclusive.
    pub fn with_name_equals(&mut self, first_name: &str, last_name: &str) -> &mut Self {
        self.equality = Some((first_name.to_string(), last_name.to_string()));
        self.name_like = None;
        self
    }

    pub fn to_bool_exp(&self) -> Value {
        let mut exp = Map::new();

        let mut id_exp = Map::new();
        if let Some(ids) = self.id_in.as_ref() {
            id_exp.insert("_in".into(), json!(ids));
        }
        if let Some(ids) = self.id_not_in.as_ref() {
            id_exp.insert("_nin".into(), json!(ids));
        }
        if !id_exp.is_empty() {
            exp.insert("id".into(), Value::Object(id_exp));
        }

        if let Some(query) = self.name_like.as_ref() {
            exp.insert("first_name".into(), json!({ "_like": format!("%{}%", query) }));
        }

        if let Some((first, last)) = self.equality.as_ref() {
            exp.insert("first_name".into(), json!({ "_eq": first }));
            exp.insert("last_name".into(), json!({ "_eq": last }));
        }

        Value::Object(exp)
    }
}
