//! Course use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for upper layers (HTTP, CLI, ...).
//! - Delegate persistence to the injected store implementation.
//!
//! # Invariants
//! - The service holds no state of its own between calls.
//! - `get_course_by_id` fails with `NotFound` where the store surface stays
//!   optional; all other errors pass through unmodified.

use crate::model::course::{Course, CourseId};
use crate::repo::course_repo::CourseStore;
use crate::repo::{RepoError, RepoResult};

/// Stateless mediator over a backing store of course records.
pub struct CourseService<S: CourseStore> {
    store: S,
}

impl<S: CourseStore> CourseService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every course currently in the store; empty vec when none.
    pub fn get_all_courses(&self) -> RepoResult<Vec<Course>> {
        self.store.find_all()
    }

    /// Returns the course with the given id.
    ///
    /// # Errors
    /// - `NotFound` when no course with that id exists.
    pub fn get_course_by_id(&self, id: CourseId) -> RepoResult<Course> {
        self.store.find_by_id(id)?.ok_or(RepoError::NotFound {
            entity: "course",
            id,
        })
    }

    /// Persists a course and returns it with its (possibly new) id.
    ///
    /// Id absent: creates a record and assigns a fresh id. Id present:
    /// fully replaces the matching record, or fails with `NotFound`.
    pub fn save_course(&self, course: &Course) -> RepoResult<Course> {
        self.store.save(course)
    }

    /// Removes the course with the given id.
    ///
    /// # Errors
    /// - `NotFound` when no course with that id exists.
    pub fn delete_course(&self, id: CourseId) -> RepoResult<()> {
        self.store.delete_by_id(id)
    }
}
