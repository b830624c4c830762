#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, SessionUser};
    use crate::state::session::{MemoryStorage, SessionHandle, TOKEN_KEY, USER_KEY};
    use serde_json::{json, Value};

    pub fn admin_user() -> SessionUser {
        SessionUser {
            id: Some(1),
            email: "a@x.com".into(),
            role: Role::Admin,
            extra: Default::default(),
        }
    }

    pub fn employee_user() -> SessionUser {
        SessionUser {
            id: Some(2),
            email: "e@x.com".into(),
            role: Role::Employee,
            extra: Default::default(),
        }
    }

    /// Storage pre-populated the way the login page leaves it.
    pub fn stored_session(user: &SessionUser, token: &str) -> (MemoryStorage, SessionHandle) {
        let raw = serde_json::to_string(user).expect("serialize user");
        let storage = MemoryStorage::with_items(&[(USER_KEY, raw.as_str()), (TOKEN_KEY, token)]);
        let handle = SessionHandle::new(storage.clone());
        (storage, handle)
    }

    pub fn employee_json(id: i64, first_name: &str) -> Value {
        json!({
            "id": id,
            "firstName": first_name,
            "lastName": "Doe",
            "department": "Engineering",
            "user": { "email": format!("{}@x.com", first_name.to_lowercase()) },
            "employeeSkills": [{ "id": 1 }]
        })
    }

    pub fn skill_request_json(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "status": status,
            "employee": {
                "firstName": "Jo",
                "lastName": "Doe",
                "user": { "email": "jo@x.com" }
            },
            "skill": { "name": "Rust" },
            "level": "Advanced"
        })
    }
}
