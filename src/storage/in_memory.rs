use super::traits::Storage;
use crate::constants::{COURSE_ID_CONFLICT, COURSE_ID_NOT_FOUND};
use crate::domain::*;
use crate::error::{ApiError, Result};
use crate::seed::Seed;
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Process-local storage. Both collections keep insertion order.
pub struct InMemoryStorage {
    students: RwLock<Vec<Student>>,
    courses: RwLock<Vec<Course>>,
}

impl InMemoryStorage {
    pub fn with_data(students: Vec<Student>, courses: Vec<Course>) -> Self {
        Self {
            students: RwLock::new(students),
            courses: RwLock::new(courses),
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::with_data(seed.students, seed.courses)
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| ApiError::Storage("in-memory store lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| ApiError::Storage("in-memory store lock poisoned".to_string()))
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_students(&self) -> Result<Vec<Student>> {
        Ok(read(&self.students)?.clone())
    }

    async fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        let students = read(&self.students)?;
        Ok(students.iter().find(|s| s.student_id == student_id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(read(&self.courses)?.clone())
    }

    async fn get_course(&self, course_id: CourseId) -> Result<Option<Course>> {
        let courses = read(&self.courses)?;
        Ok(courses.iter().find(|c| c.course_id == course_id).cloned())
    }

    async fn create_course(&self, course: Course) -> Result<Course> {
        let mut courses = write(&self.courses)?;
        if courses.iter().any(|c| c.course_id == course.course_id) {
            return Err(ApiError::Conflict(COURSE_ID_CONFLICT.to_string()));
        }
        courses.push(course.clone());

        debug!("Created course: {} with id {}", course.course_title, course.course_id);
        Ok(course)
    }

    async fn update_course(&self, patch: CoursePatch) -> Result<Course> {
        let mut courses = write(&self.courses)?;
        let course = courses
            .iter_mut()
            .find(|c| c.course_id == patch.course_id)
            .ok_or_else(|| ApiError::NotFound(COURSE_ID_NOT_FOUND.to_string()))?;
        course.apply(patch);

        debug!("Updated course {}", course.course_id);
        Ok(course.clone())
    }

    async fn delete_course(&self, course_id: CourseId) -> Result<Course> {
        let mut courses = write(&self.courses)?;
        let index = courses
            .iter()
            .position(|c| c.course_id == course_id)
            .ok_or_else(|| ApiError::NotFound(COURSE_ID_NOT_FOUND.to_string()))?;
        let removed = courses.remove(index);

        debug!("Deleted course {}", removed.course_id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    fn course(id: CourseId, title: &str) -> Course {
        Course {
            course_id: id,
            course_title: title.to_string(),
            instructors: vec!["Alice Smith".to_string()],
        }
    }

    fn storage() -> InMemoryStorage {
        InMemoryStorage::with_data(
            vec![Student {
                student_id: "650610001".to_string(),
                courses: vec![261207, 261999],
            }],
            vec![course(261207, "Lab"), course(261497, "Full Stack")],
        )
    }

    #[tokio::test]
    async fn create_rejects_duplicate_ids() {
        let storage = storage();
        let err = storage.create_course(course(261207, "Again")).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(storage.list_courses().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_appends_in_order() {
        let storage = storage();
        storage.create_course(course(261218, "Algorithms")).await.unwrap();
        let ids: Vec<_> = storage
            .list_courses()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.course_id)
            .collect();
        assert_eq!(ids, vec![261207, 261497, 261218]);
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let storage = storage();
        let updated = storage
            .update_course(CoursePatch {
                course_id: 261497,
                course_title: None,
                instructors: Some(vec!["Bob Lee".to_string()]),
            })
            .await
            .unwrap();
        assert_eq!(updated.course_title, "Full Stack");
        assert_eq!(updated.instructors, vec!["Bob Lee".to_string()]);
        assert_eq!(storage.get_course(261497).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_and_delete_missing_course() {
        let storage = storage();
        let patch = CoursePatch {
            course_id: 300000,
            course_title: Some("Nope".to_string()),
            instructors: None,
        };
        assert!(matches!(storage.update_course(patch).await, Err(ApiError::NotFound(_))));
        assert!(matches!(storage.delete_course(300000).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_returns_removed_course() {
        let storage = storage();
        let removed = storage.delete_course(261207).await.unwrap();
        assert_eq!(removed.course_title, "Lab");
        assert_eq!(storage.get_course(261207).await.unwrap(), None);
    }

    #[tokio::test]
    async fn poisoned_lock_is_a_storage_error() {
        let storage = Arc::new(storage());

        let poisoner = Arc::clone(&storage);
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.courses.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(storage.courses.is_poisoned());

        let err = storage.list_courses().await.unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));
        let err = storage.create_course(course(261218, "Algorithms")).await.unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Students sit behind their own lock and are unaffected.
        assert_eq!(storage.list_students().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn student_courses_resolves_titles() {
        let storage = storage();
        let listing = storage.student_courses("650610001").await.unwrap().unwrap();
        assert_eq!(listing.courses.len(), 2);
        assert_eq!(listing.courses[0].course_title.as_deref(), Some("Lab"));
        // 261999 is referenced but never existed
        assert_eq!(listing.courses[1].course_title, None);

        assert!(storage.student_courses("650610099").await.unwrap().is_none());
    }
}
