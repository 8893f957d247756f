//! Enrollment use-case service.

use crate::model::enrollment::{Enrollment, EnrollmentId};
use crate::repo::enrollment_repo::EnrollmentStore;
use crate::repo::{RepoError, RepoResult};

/// Stateless mediator over a backing store of enrollment records.
pub struct EnrollmentService<S: EnrollmentStore> {
    store: S,
}

impl<S: EnrollmentStore> EnrollmentService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every enrollment currently in the store.
    pub fn get_all_enrollments(&self) -> RepoResult<Vec<Enrollment>> {
        self.store.find_all()
    }

    /// Returns the enrollment with the given id, or `NotFound`.
    pub fn get_enrollment_by_id(&self, id: EnrollmentId) -> RepoResult<Enrollment> {
        self.store.find_by_id(id)?.ok_or(RepoError::NotFound {
            entity: "enrollment",
            id,
        })
    }

    /// Persists an enrollment and returns it with its (possibly new) id.
    ///
    /// A missing student or course link target fails with `NotFound` naming
    /// the missing side.
    pub fn save_enrollment(&self, enrollment: &Enrollment) -> RepoResult<Enrollment> {
        self.store.save(enrollment)
    }

    /// Removes the enrollment with the given id.
    pub fn delete_enrollment(&self, id: EnrollmentId) -> RepoResult<()> {
        self.store.delete_by_id(id)
    }
}
