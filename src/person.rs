use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"name":"Luke Skywalker","height":"172","films":["https://swapi.dev/api/films/1/"]}"#;
        let person: PersonRecord = serde_json::from_str(body).unwrap();
        assert_eq!(person.name, "Luke Skywalker");
    }

    #[test]
    fn requires_name() {
        let err = serde_json::from_str::<PersonRecord>(r#"{"height":"172"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "{err}");
    }

    #[test]
    fn rejects_non_text_name() {
        assert!(serde_json::from_str::<PersonRecord>(r#"{"name":42}"#).is_err());
        assert!(serde_json::from_str::<PersonRecord>(r#"{"name":null}"#).is_err());
    }
}
