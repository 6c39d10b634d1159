//! DTOs for the student endpoints.
//!
//! All bodies use camelCase keys on the wire (`firstName`, `isActive`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::application::services::StudentStats;
use crate::domain::entities::{NewStudent, Student, UpdateStudent};

/// Digits, spaces, `+`, `-` and parentheses; 7 to 20 characters.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\-\s]{7,20}$").unwrap());

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Body of `POST /students` and `PUT /students/{id}`.
///
/// `isActive` may be omitted and then defaults to `true`, both on create and on
/// update (an update is a full replacement).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = not_blank)
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = not_blank)
    )]
    pub last_name: String,

    #[validate(
        email(message = "must be a well-formed email address"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "must be a valid phone number"))]
    pub phone_number: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub course: Option<String>,

    pub is_active: Option<bool>,
}

impl StudentRequest {
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            address: self.address,
            course: self.course,
            is_active: self.is_active.unwrap_or(true),
        }
    }

    pub fn into_update(self) -> UpdateStudent {
        UpdateStudent {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            address: self.address,
            course: self.course,
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

/// Student as returned by every endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub course: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            phone_number: s.phone_number,
            date_of_birth: s.date_of_birth,
            address: s.address,
            course: s.course,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Query string of `GET /students/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

/// Body of a successful `DELETE /students/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Body of `GET /students/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_students: i64,
    pub active_students: i64,
    pub inactive_students: i64,
}

impl From<StudentStats> for StatsResponse {
    fn from(stats: StudentStats) -> Self {
        Self {
            total_students: stats.total,
            active_students: stats.active,
            inactive_students: stats.inactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> StudentRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_request_is_valid() {
        let req = parse(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "course": "CS"
        }));

        assert!(req.validate().is_ok());

        let new = req.into_new_student();
        assert!(new.is_active);
        assert_eq!(new.course.as_deref(), Some("CS"));
        assert!(new.phone_number.is_none());
    }

    #[test]
    fn test_explicit_inactive_is_kept() {
        let req = parse(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "isActive": false
        }));

        assert!(!req.into_update().is_active);
    }

    #[test]
    fn test_date_of_birth_parses_iso_date() {
        let req = parse(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "dateOfBirth": "2001-09-30"
        }));

        assert_eq!(req.date_of_birth, NaiveDate::from_ymd_opt(2001, 9, 30));
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let result: Result<StudentRequest, _> = serde_json::from_value(json!({
            "firstName": "Jane",
            "email": "jane@x.com"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let req = parse(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "not-an-email"
        }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let req = parse(json!({
            "firstName": "   ",
            "lastName": "",
            "email": "jane@x.com"
        }));

        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_phone_number_format() {
        let valid = parse(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "phoneNumber": "+1 (555) 010-0000"
        }));
        assert!(valid.validate().is_ok());

        let invalid = parse(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "phoneNumber": "call me"
        }));
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_stats_response_keys() {
        let body = serde_json::to_value(StatsResponse::from(StudentStats {
            total: 3,
            active: 2,
            inactive: 1,
        }))
        .unwrap();

        assert_eq!(
            body,
            json!({ "totalStudents": 3, "activeStudents": 2, "inactiveStudents": 1 })
        );
    }

    #[test]
    fn test_student_response_is_camel_case() {
        let now = Utc::now();
        let body = serde_json::to_value(StudentResponse::from(Student {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone_number: None,
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 2),
            address: None,
            course: Some("CS".to_string()),
            is_active: true,
            created_at: now,
            updated_at: now,
        }))
        .unwrap();

        assert_eq!(body["firstName"], "Jane");
        assert_eq!(body["isActive"], true);
        assert_eq!(body["dateOfBirth"], "2000-01-02");
        assert!(body["phoneNumber"].is_null());
    }
}
