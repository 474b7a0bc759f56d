//! Declarative input validation.
//!
//! Each input shape has a JSON Schema under `schemas/`. Schemas are compiled
//! once on first use; a failed check reports only the first issue found.

use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::constants::NOT_A_NUMBER_MESSAGE;
use crate::domain::{Course, CourseId, CoursePatch, CourseRef};
use crate::error::{ApiError, Result};

pub struct Validator {
    name: &'static str,
    compiled: std::result::Result<JSONSchema, String>,
}

impl Validator {
    fn compile(name: &'static str, source: &'static str) -> Self {
        let compiled = serde_json::from_str::<Value>(source)
            .map_err(|e| format!("schema '{name}' is not valid JSON: {e}"))
            .and_then(|schema| {
                // jsonschema 0.17 wants a 'static schema; these live for the whole process anyway
                let schema: &'static Value = Box::leak(Box::new(schema));
                JSONSchema::options()
                    .compile(schema)
                    .map_err(|e| format!("schema '{name}' failed to compile: {e}"))
            });
        Self { name, compiled }
    }

    /// Check `instance`, returning the first issue as a validation error.
    pub fn check(&self, instance: &Value) -> Result<()> {
        let compiled = self
            .compiled
            .as_ref()
            .map_err(|e| ApiError::Internal(e.clone()))?;

        if let Err(mut errors) = compiled.validate(instance) {
            let issue = errors
                .next()
                .map(|e| e.to_string())
                .unwrap_or_else(|| format!("invalid {}", self.name));
            return Err(ApiError::Validation(issue));
        }
        Ok(())
    }

    /// Check `instance` and then deserialize it into `T`.
    pub fn parse<T: DeserializeOwned>(&self, mut instance: Value) -> Result<T> {
        self.check(&instance)?;
        integral_course_id(&mut instance);
        serde_json::from_value(instance).map_err(|e| ApiError::Validation(e.to_string()))
    }
}

/// The schemas accept `261207.0` as an integer; serde does not, so rewrite
/// an integral float `courseId` as an integer before deserializing.
fn integral_course_id(instance: &mut Value) {
    let Some(id) = instance.get_mut("courseId") else {
        return;
    };
    if !id.is_f64() {
        return;
    }
    if let Some(number) = id.as_f64() {
        if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
            *id = Value::from(number as i64);
        }
    }
}

pub static STUDENT_ID: Lazy<Validator> =
    Lazy::new(|| Validator::compile("studentId", include_str!("../schemas/student_id.json")));

pub static COURSE_ID: Lazy<Validator> =
    Lazy::new(|| Validator::compile("courseId", include_str!("../schemas/course_id.json")));

pub static COURSE_CREATE: Lazy<Validator> = Lazy::new(|| {
    Validator::compile("course create body", include_str!("../schemas/course_create.json"))
});

pub static COURSE_UPDATE: Lazy<Validator> = Lazy::new(|| {
    Validator::compile("course update body", include_str!("../schemas/course_update.json"))
});

pub static COURSE_DELETE: Lazy<Validator> = Lazy::new(|| {
    Validator::compile("course delete body", include_str!("../schemas/course_delete.json"))
});

pub fn validate_student_id(raw: &str) -> Result<()> {
    STUDENT_ID.check(&Value::String(raw.to_string()))
}

/// Parse a course id taken from a URL path.
///
/// The text is read as a number first so that `abc` and `12.5` fail with
/// different messages: the former is not a number at all, the latter is a
/// number that breaks the schema.
pub fn parse_course_id(raw: &str) -> Result<CourseId> {
    let not_a_number = || ApiError::Validation(NOT_A_NUMBER_MESSAGE.to_string());

    let number: f64 = raw.trim().parse().map_err(|_| not_a_number())?;
    if number.is_nan() {
        return Err(not_a_number());
    }

    let instance = if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        Value::from(number as i64)
    } else {
        Number::from_f64(number)
            .map(Value::Number)
            .ok_or_else(not_a_number)?
    };

    COURSE_ID.check(&instance)?;
    Ok(number as CourseId)
}

pub fn course_create_body(body: Value) -> Result<Course> {
    COURSE_CREATE.parse(body)
}

pub fn course_update_body(body: Value) -> Result<CoursePatch> {
    COURSE_UPDATE.parse(body)
}

pub fn course_delete_body(body: Value) -> Result<CourseId> {
    COURSE_DELETE.parse::<CourseRef>(body).map(|r| r.course_id)
}
