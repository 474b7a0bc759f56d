use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::{Course, Student};
use crate::error::{ApiError, Result};

/// Initial contents of the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Seed {
    /// Data the server starts with when no seed file is configured.
    pub fn builtin() -> Self {
        let course = |course_id, title: &str, instructors: &[&str]| Course {
            course_id,
            course_title: title.to_string(),
            instructors: instructors.iter().map(|s| s.to_string()).collect(),
        };
        let student = |student_id: &str, courses: &[i64]| Student {
            student_id: student_id.to_string(),
            courses: courses.to_vec(),
        };

        Self {
            students: vec![
                student("650610001", &[261207, 261497]),
                student("650610002", &[261218]),
                student("650610003", &[]),
            ],
            courses: vec![
                course(261207, "Basic Computer Engineering Lab", &["Alice Smith"]),
                course(261497, "Full Stack Development", &["Bob Lee", "Carol Tan"]),
                course(261218, "Algorithms for Computer Engineers", &["Dan Wu"]),
            ],
        }
    }

    /// Load a seed from a JSON file shaped like `{ "students": [...], "courses": [...] }`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ApiError::Config(format!("Failed to read seed file '{}': {}", path.display(), e))
        })?;
        let seed: Seed = serde_json::from_str(&content)?;
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_students_reference_known_courses() {
        let seed = Seed::builtin();
        for student in &seed.students {
            for id in &student.courses {
                assert!(seed.courses.iter().any(|c| c.course_id == *id));
            }
        }
    }

    #[test]
    fn loads_seed_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"students":[{{"studentId":"650610042"}}],"courses":[{{"courseId":261100,"courseTitle":"Intro","instructors":[]}}]}}"#
        )
        .unwrap();

        let seed = Seed::load(file.path()).unwrap();
        assert_eq!(seed.students[0].student_id, "650610042");
        assert!(seed.students[0].courses.is_empty());
        assert_eq!(seed.courses[0].course_title, "Intro");
    }

    #[test]
    fn missing_seed_file_is_a_config_error() {
        let err = Seed::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
