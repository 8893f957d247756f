//! Department use-case service.

use crate::model::department::{Department, DepartmentId};
use crate::repo::department_repo::DepartmentStore;
use crate::repo::{RepoError, RepoResult};

/// Stateless mediator over a backing store of department records.
pub struct DepartmentService<S: DepartmentStore> {
    store: S,
}

impl<S: DepartmentStore> DepartmentService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns every department currently in the store.
    pub fn get_all_departments(&self) -> RepoResult<Vec<Department>> {
        self.store.find_all()
    }

    /// Returns the department with the given id, or `NotFound`.
    pub fn get_department_by_id(&self, id: DepartmentId) -> RepoResult<Department> {
        self.store.find_by_id(id)?.ok_or(RepoError::NotFound {
            entity: "department",
            id,
        })
    }

    /// Persists a department and returns it with its (possibly new) id.
    pub fn save_department(&self, department: &Department) -> RepoResult<Department> {
        self.store.save(department)
    }

    /// Removes the department with the given id; its students are detached,
    /// not deleted.
    pub fn delete_department(&self, id: DepartmentId) -> RepoResult<()> {
        self.store.delete_by_id(id)
    }
}
