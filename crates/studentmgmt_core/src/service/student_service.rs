//! Student use-case service.

use crate::model::student::{Student, StudentId};
use crate::repo::student_repo::StudentStore;
use crate::repo::{RepoError, RepoResult};

/// Stateless mediator over a backing store of student records.
pub struct StudentService<S: StudentStore> {
    store: S,
}

impl<S: StudentStore> StudentService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every student currently in the store.
    pub fn get_all_students(&self) -> RepoResult<Vec<Student>> {
        self.store.find_all()
    }

    /// Returns the student with the given id, or `NotFound`.
    pub fn get_student_by_id(&self, id: StudentId) -> RepoResult<Student> {
        self.store.find_by_id(id)?.ok_or(RepoError::NotFound {
            entity: "student",
            id,
        })
    }

    /// Persists a student and returns it with its (possibly new) id.
    ///
    /// A dangling `department_id` reference fails with `NotFound` for the
    /// department.
    pub fn save_student(&self, student: &Student) -> RepoResult<Student> {
        self.store.save(student)
    }

    /// Removes the student with the given id; their enrollments go with
    /// them.
    pub fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.store.delete_by_id(id)
    }
}
