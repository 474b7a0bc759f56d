use crate::domain::*;
use crate::error::Result;
use async_trait::async_trait;

/// Storage trait for the student and course collections.
///
/// Lookups match on id equality and return the first hit. Mutations report
/// `ApiError::Conflict` or `ApiError::NotFound` when the id is taken or absent.
#[async_trait]
pub trait Storage: Send + Sync {
    // Student operations
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn get_student(&self, student_id: &str) -> Result<Option<Student>>;

    // Course operations
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn get_course(&self, course_id: CourseId) -> Result<Option<Course>>;
    async fn create_course(&self, course: Course) -> Result<Course>;
    async fn update_course(&self, patch: CoursePatch) -> Result<Course>;
    async fn delete_course(&self, course_id: CourseId) -> Result<Course>;

    /// Resolve a student's course ids to titles. `None` if the student is unknown.
    async fn student_courses(&self, student_id: &str) -> Result<Option<StudentCourses>> {
        let Some(student) = self.get_student(student_id).await? else {
            return Ok(None);
        };

        let mut courses = Vec::with_capacity(student.courses.len());
        for course_id in student.courses {
            let course_title = self.get_course(course_id).await?.map(|c| c.course_title);
            courses.push(StudentCourse {
                course_id,
                course_title,
            });
        }

        Ok(Some(StudentCourses {
            student_id: student.student_id,
            courses,
        }))
    }
}
