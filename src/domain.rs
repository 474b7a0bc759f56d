use serde::{Deserialize, Serialize};

pub type CourseId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: String,
    #[serde(default)]
    pub courses: Vec<CourseId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: CourseId,
    pub course_title: String,
    pub instructors: Vec<String>,
}

impl Course {
    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: CoursePatch) {
        if let Some(title) = patch.course_title {
            self.course_title = title;
        }
        if let Some(instructors) = patch.instructors {
            self.instructors = instructors;
        }
    }
}

/// Body of `PUT /courses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub course_id: CourseId,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub instructors: Option<Vec<String>>,
}

/// Body of `DELETE /courses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub course_id: CourseId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourse {
    pub course_id: CourseId,
    // None when the student still references a deleted course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourses {
    pub student_id: String,
    pub courses: Vec<StudentCourse>,
}

/// Static profile served from `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub section: String,
}

impl Default for StudentInfo {
    fn default() -> Self {
        Self {
            student_id: "650610001".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            program: "CPE".to_string(),
            section: "001".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_only_touches_present_fields() {
        let mut course = Course {
            course_id: 261207,
            course_title: "Lab".to_string(),
            instructors: vec!["Alice Smith".to_string()],
        };
        course.apply(CoursePatch {
            course_id: 261207,
            course_title: Some("Advanced Lab".to_string()),
            instructors: None,
        });
        assert_eq!(course.course_title, "Advanced Lab");
        assert_eq!(course.instructors, vec!["Alice Smith".to_string()]);
    }

    #[test]
    fn student_without_courses_deserializes_empty() {
        let student: Student = serde_json::from_value(json!({ "studentId": "650610009" })).unwrap();
        assert!(student.courses.is_empty());
    }

    #[test]
    fn missing_title_is_omitted_from_json() {
        let line = StudentCourse {
            course_id: 261999,
            course_title: None,
        };
        assert_eq!(serde_json::to_value(line).unwrap(), json!({ "courseId": 261999 }));
    }
}
