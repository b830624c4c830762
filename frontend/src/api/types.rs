use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Backend role. Roles this frontend does not act on keep their raw text so a
/// stored user serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Employee,
    Other(String),
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ADMIN" => Role::Admin,
            "EMPLOYEE" => Role::Employee,
            _ => Role::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "ADMIN".to_string(),
            Role::Employee => "EMPLOYEE".to_string(),
            Role::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub role: Role,
    /// Remaining backend fields (`employeeId`, `adminId`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: SessionUser,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEmail {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub user: Option<UserEmail>,
    #[serde(default, alias = "skills")]
    pub employee_skills: Option<Vec<Value>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        display_name(&self.first_name, self.last_name.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn skill_count(&self) -> usize {
        self.employee_skills.as_ref().map(Vec::len).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl SkillRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

/// Statuses an administrator may assign to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEmployee {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user: Option<UserEmail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequest {
    pub id: i64,
    pub status: SkillRequestStatus,
    pub employee: RequestEmployee,
    pub skill: SkillRef,
    #[serde(deserialize_with = "level_text")]
    pub level: String,
}

impl SkillRequest {
    pub fn is_pending(&self) -> bool {
        self.status == SkillRequestStatus::Pending
    }

    pub fn employee_name(&self) -> String {
        display_name(
            &self.employee.first_name,
            self.employee.last_name.as_deref(),
        )
    }

    pub fn employee_email(&self) -> Option<&str> {
        self.employee.user.as_ref().map(|u| u.email.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillStatusRequest {
    pub employee_skill_id: i64,
    pub status: SkillDecision,
}

/// Levels are free text ("Beginner" .. "Expert"); older rows may carry a number.
fn level_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Level {
        Text(String),
        Number(i64),
    }

    Ok(match Level::deserialize(deserializer)? {
        Level::Text(text) => text,
        Level::Number(n) => n.to_string(),
    })
}

fn display_name(first: &str, last: Option<&str>) -> String {
    match last.map(str::trim).filter(|l| !l.is_empty()) {
        Some(last) => format!("{} {}", first, last),
        None => first.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    #[serde(default = "ApiError::default_code")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn default_code() -> String {
        "API_ERROR".to_string()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("offline").code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_parses_backend_body_without_code() {
        let err: ApiError = serde_json::from_value(json!({ "error": "Invalid status" })).unwrap();
        assert_eq!(err.error, "Invalid status");
        assert_eq!(err.code, "API_ERROR");
        assert_eq!(err.to_string(), "Invalid status");
        let raw: String = err.into();
        assert_eq!(raw, "Invalid status");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn role_parses_admin_and_falls_back_for_unknown_roles() {
        let admin: SessionUser =
            serde_json::from_value(json!({ "id": 1, "email": "a@x.com", "role": "ADMIN" }))
                .unwrap();
        assert!(admin.is_admin());

        let employee: SessionUser =
            serde_json::from_value(json!({ "email": "e@x.com", "role": "EMPLOYEE" })).unwrap();
        assert_eq!(employee.role, Role::Employee);
        assert!(!employee.is_admin());

        let manager: SessionUser =
            serde_json::from_value(json!({ "email": "m@x.com", "role": "MANAGER" })).unwrap();
        assert_eq!(manager.role, Role::Other("MANAGER".into()));
        assert!(!manager.is_admin());
    }

    #[test]
    fn stored_user_keeps_unknown_role_and_extra_fields() {
        let raw = json!({
            "id": 4,
            "email": "hr@x.com",
            "role": "HR",
            "employeeId": 12,
            "adminId": null,
            "employeesUnderAdmin": []
        });
        let user: SessionUser = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.role, Role::Other("HR".into()));
        assert_eq!(user.extra.get("employeeId"), Some(&json!(12)));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn login_response_carries_extra_user_fields() {
        let response: LoginResponse = serde_json::from_value(json!({
            "user": {
                "id": 7,
                "email": "a@x.com",
                "role": "ADMIN",
                "employeeId": null,
                "adminId": null,
                "employeesUnderAdmin": []
            },
            "token": "t1"
        }))
        .unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.user.id, Some(7));
        assert_eq!(response.user.extra.len(), 3);
    }

    #[test]
    fn employee_tolerates_missing_optional_fields() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "firstName": "Jo",
            "lastName": null,
            "department": null,
            "user": { "email": "jo@x.com" }
        }))
        .unwrap();
        assert_eq!(employee.full_name(), "Jo");
        assert_eq!(employee.email(), Some("jo@x.com"));
        assert_eq!(employee.skill_count(), 0);
    }

    #[test]
    fn employee_counts_skills_under_either_key() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 2,
            "firstName": "Ann",
            "lastName": "Lee",
            "department": "R&D",
            "user": { "email": "ann@x.com" },
            "employeeSkills": [{ "id": 1 }, { "id": 2 }]
        }))
        .unwrap();
        assert_eq!(employee.full_name(), "Ann Lee");
        assert_eq!(employee.skill_count(), 2);

        let from_backend: Employee = serde_json::from_value(json!({
            "id": 3,
            "firstName": "Sam",
            "skills": [{ "id": 9 }]
        }))
        .unwrap();
        assert_eq!(from_backend.skill_count(), 1);
    }

    #[test]
    fn skill_request_without_employee_user_has_no_email() {
        let request: SkillRequest = serde_json::from_value(json!({
            "id": 5,
            "status": "PENDING",
            "employee": { "firstName": "Jo", "lastName": "Doe" },
            "skill": { "name": "Rust" },
            "level": "Advanced"
        }))
        .unwrap();
        assert!(request.is_pending());
        assert_eq!(request.level, "Advanced");
        assert_eq!(request.employee_name(), "Jo Doe");
        assert_eq!(request.employee_email(), None);
    }

    #[test]
    fn numeric_level_is_read_as_text() {
        let request: SkillRequest = serde_json::from_value(json!({
            "id": 6,
            "status": "APPROVED",
            "employee": { "firstName": "Jo" },
            "skill": { "name": "Go" },
            "level": 3
        }))
        .unwrap();
        assert_eq!(request.level, "3");
    }

    #[test]
    fn update_status_request_uses_backend_field_names() {
        let body = serde_json::to_value(UpdateSkillStatusRequest {
            employee_skill_id: 5,
            status: SkillDecision::Rejected,
        })
        .unwrap();
        assert_eq!(body, json!({ "employeeSkillId": 5, "status": "REJECTED" }));
    }
}
