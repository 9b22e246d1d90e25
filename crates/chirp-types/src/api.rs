//! Request bodies. Fields are `Option` so that missing-versus-blank
//! decisions stay in the service layer, where the contract defines them;
//! the deserializer never rejects a body the services have rules for.

use serde::Deserialize;

// -- Auth --

/// Body of POST /register.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Body of POST /login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// -- Messages --

/// Body of POST /messages. `posted_at` rides along unvalidated.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub text: Option<String>,
    pub author_id: Option<i64>,
    pub posted_at: Option<i64>,
}

/// Body of PATCH /messages/{id}.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_both_deserialize_to_none() {
        let empty: CreateMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.text.is_none());
        assert!(empty.author_id.is_none());
        assert!(empty.posted_at.is_none());

        let explicit: CreateMessageRequest =
            serde_json::from_str(r#"{"text":null,"author_id":null}"#).unwrap();
        assert!(explicit.text.is_none());
        assert!(explicit.author_id.is_none());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"username":"bob","password":"pass","extra":1}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("bob"));
        assert_eq!(req.password.as_deref(), Some("pass"));
    }
}
