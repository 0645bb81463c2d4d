//! REST path conventions.
//!
//! Pure string functions, relative to the API base URL. The trailing slash
//! is part of every path; the server redirects without it.

pub const ASSESSMENTS: &str = "assessments/";

pub fn assessment(id: &str) -> String {
    format!("assessments/{id}/")
}

pub fn patient(id: &str) -> String {
    format!("patients/{id}/")
}

pub const LIFESTYLES: &str = "lifestyles/";
