// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request bodies, one per form kind.
//!
//! Required fields deserialize to `String` with a default so a missing field
//! and a blank one fail the same way. Optional fields keep `None` (absent,
//! leave unchanged) distinct from `Some("")` (explicitly cleared).
//! Required text fields are trimmed while deserializing, before any rule runs.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(
        custom(function = "crate::validation::required", message = "Name field is required"),
        length(min = 2, max = 30, message = "Name must be between 2 and 30 characters")
    )]
    pub name: String,

    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(
        custom(function = "crate::validation::required", message = "Email field is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(
        custom(function = "crate::validation::required", message = "Password field is required"),
        length(min = 6, max = 30, message = "Password must be between 6 and 30 characters")
    )]
    pub password: String,

    #[serde(default)]
    #[validate(
        custom(
            function = "crate::validation::required",
            message = "Confirm Password field is required"
        ),
        must_match(other = "password", message = "Passwords must match")
    )]
    pub password2: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(
        custom(function = "crate::validation::required", message = "Email field is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(custom(
        function = "crate::validation::required",
        message = "Password field is required"
    ))]
    pub password: String,
}

/// Body for posts and comments.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostForm {
    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(
        custom(function = "crate::validation::required", message = "Text field is required"),
        length(min = 10, max = 300, message = "Post must be between 10 and 300 characters")
    )]
    pub text: String,

    /// Display name; defaults to the caller's name
    pub name: Option<String>,

    /// Avatar URL; defaults to the caller's avatar
    #[serde(alias = "avatar")]
    pub avatar_url: Option<String>,
}

/// Create-or-update body for a profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(
        custom(function = "crate::validation::required", message = "Profile handle is required"),
        length(min = 2, max = 40, message = "Handle needs to be between 2 and 40 characters")
    )]
    pub handle: String,

    pub company: Option<String>,

    #[validate(custom(function = "crate::validation::optional_url", message = "Not a valid URL"))]
    pub website: Option<String>,

    pub location: Option<String>,

    pub bio: Option<String>,

    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(
        function = "crate::validation::required",
        message = "Status field is required"
    ))]
    pub status: String,

    pub github_username: Option<String>,

    /// Comma-separated list
    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(
        function = "crate::validation::required",
        message = "Skills field is required"
    ))]
    pub skills: String,

    #[validate(custom(function = "crate::validation::optional_url", message = "Not a valid URL"))]
    pub youtube: Option<String>,

    #[validate(custom(function = "crate::validation::optional_url", message = "Not a valid URL"))]
    pub twitter: Option<String>,

    #[validate(custom(function = "crate::validation::optional_url", message = "Not a valid URL"))]
    pub facebook: Option<String>,

    #[validate(custom(function = "crate::validation::optional_url", message = "Not a valid URL"))]
    pub linkedin: Option<String>,

    #[validate(custom(function = "crate::validation::optional_url", message = "Not a valid URL"))]
    pub instagram: Option<String>,
}

impl ProfileForm {
    /// Skills as an ordered list: comma-split, trimmed, blanks dropped.
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceForm {
    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(
        function = "crate::validation::required",
        message = "Job title field is required"
    ))]
    pub title: String,

    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(
        function = "crate::validation::required",
        message = "Company field is required"
    ))]
    pub company: String,

    pub location: Option<String>,

    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(function = "crate::validation::from_date"))]
    pub from: String,

    #[validate(custom(function = "crate::validation::date", message = "To date is invalid"))]
    pub to: Option<String>,

    #[serde(default)]
    pub current: bool,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EducationForm {
    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(
        function = "crate::validation::required",
        message = "School field is required"
    ))]
    pub school: String,

    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(
        function = "crate::validation::required",
        message = "Degree field is required"
    ))]
    pub degree: String,

    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(
        function = "crate::validation::required",
        message = "Field of study field is required"
    ))]
    pub field_of_study: String,

    #[serde(default, deserialize_with = "crate::validation::trimmed")]
    #[validate(custom(function = "crate::validation::from_date"))]
    pub from: String,

    #[validate(custom(function = "crate::validation::date", message = "To date is invalid"))]
    pub to: Option<String>,

    #[serde(default)]
    pub current: bool,

    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_form;

    fn register(name: &str, email: &str, password: &str, password2: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password2: password2.to_string(),
        }
    }

    #[test]
    fn test_register_valid() {
        let (errors, is_valid) =
            validate_form(&register("Alice", "a@x.com", "pw123456", "pw123456"));
        assert!(is_valid);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_register_empty_reports_required_messages() {
        let (errors, is_valid) = validate_form(&RegisterForm::default());
        assert!(!is_valid);
        assert_eq!(errors.get("name"), Some("Name field is required"));
        assert_eq!(errors.get("email"), Some("Email field is required"));
        assert_eq!(errors.get("password"), Some("Password field is required"));
        assert_eq!(
            errors.get("password2"),
            Some("Confirm Password field is required")
        );
    }

    #[test]
    fn test_register_field_rules() {
        let (errors, _) = validate_form(&register("A", "nope", "12345", "54321"));
        assert_eq!(
            errors.get("name"),
            Some("Name must be between 2 and 30 characters")
        );
        assert_eq!(errors.get("email"), Some("Email is invalid"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be between 6 and 30 characters")
        );
        assert_eq!(errors.get("password2"), Some("Passwords must match"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let (errors, is_valid) = validate_form(&LoginForm::default());
        assert!(!is_valid);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn test_post_text_length() {
        let form = PostForm {
            text: "too short".to_string(),
            ..Default::default()
        };
        let (errors, is_valid) = validate_form(&form);
        assert!(!is_valid);
        assert_eq!(
            errors.get("text"),
            Some("Post must be between 10 and 300 characters")
        );
    }

    #[test]
    fn test_profile_urls_may_be_blank_but_not_malformed() {
        let form = ProfileForm {
            handle: "alice".to_string(),
            status: "Developer".to_string(),
            skills: "rust, sql".to_string(),
            website: Some(String::new()),
            twitter: Some("twitter".to_string()),
            ..Default::default()
        };
        let (errors, is_valid) = validate_form(&form);
        assert!(!is_valid);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("twitter"), Some("Not a valid URL"));
    }

    #[test]
    fn test_skill_list_splits_and_trims() {
        let form = ProfileForm {
            skills: "rust, go,, sql ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.skill_list(), vec!["rust", "go", "sql"]);
    }

    #[test]
    fn test_education_errors_use_wire_names() {
        let form = EducationForm {
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            from: "someday".to_string(),
            ..Default::default()
        };
        let (errors, is_valid) = validate_form(&form);
        assert!(!is_valid);
        assert_eq!(
            errors.get("fieldOfStudy"),
            Some("Field of study field is required")
        );
        assert_eq!(errors.get("from"), Some("From date is invalid"));
    }

    #[test]
    fn test_experience_form_deserializes_missing_fields_as_blank() {
        let form: ExperienceForm = serde_json::from_str(r#"{"title": "Engineer"}"#).unwrap();
        let (errors, is_valid) = validate_form(&form);
        assert!(!is_valid);
        assert_eq!(errors.get("company"), Some("Company field is required"));
        assert_eq!(errors.get("from"), Some("From date field is required"));
        assert!(!errors.contains("title"));
    }

    #[test]
    fn test_required_fields_are_trimmed_before_rules() {
        let form: ProfileForm = serde_json::from_str(
            r#"{"handle": " a ", "status": "  ", "skills": " rust "}"#,
        )
        .unwrap();
        assert_eq!(form.handle, "a");
        assert_eq!(form.skills, "rust");

        let (errors, _) = validate_form(&form);
        assert_eq!(
            errors.get("handle"),
            Some("Handle needs to be between 2 and 40 characters")
        );
        assert_eq!(errors.get("status"), Some("Status field is required"));
    }
}
