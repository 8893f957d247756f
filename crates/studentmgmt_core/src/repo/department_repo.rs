//! Department store contract and SQLite implementation.
//!
//! # Invariants
//! - Write paths call `Department::validate()` before SQL mutations.
//! - Deleting a department detaches its students (`ON DELETE SET NULL`)
//!   rather than deleting them.

use crate::model::department::{Department, DepartmentId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    location,
    phone,
    head
FROM departments";

/// Backing store capability for department records.
pub trait DepartmentStore {
    /// Returns every department in primary-key order.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
    /// Returns one department, or `None` when the id matches nothing.
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Inserts (id absent) or fully replaces (id present) one department.
    fn save(&self, department: &Department) -> RepoResult<Department>;
    /// Removes one department; fails with `NotFound` when the id matches
    /// nothing.
    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()>;
}

/// SQLite-backed department store.
pub struct SqliteDepartmentStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "departments",
            &["id", "name", "location", "phone", "head"],
        )?;
        Ok(Self { conn })
    }
}

impl DepartmentStore for SqliteDepartmentStore<'_> {
    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, department: &Department) -> RepoResult<Department> {
        department.validate()?;

        match department.id {
            None => {
                self.conn.execute(
                    "INSERT INTO departments (name, location, phone, head)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        department.name.as_str(),
                        department.location.as_deref(),
                        department.phone.as_deref(),
                        department.head.as_deref(),
                    ],
                )?;

                let mut saved = department.clone();
                saved.id = Some(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE departments
                     SET
                        name = ?1,
                        location = ?2,
                        phone = ?3,
                        head = ?4,
                        updated_at = (strftime('%s', 'now') * 1000)
                     WHERE id = ?5;",
                    params![
                        department.name.as_str(),
                        department.location.as_deref(),
                        department.phone.as_deref(),
                        department.head.as_deref(),
                        id,
                    ],
                )?;

                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: "department",
                        id,
                    });
                }

                Ok(department.clone())
            }
        }
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "department",
                id,
            });
        }

        Ok(())
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    let department = Department {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        location: row.get("location")?,
        phone: row.get("phone")?,
        head: row.get("head")?,
    };
    department.validate().map_err(|err| {
        RepoError::InvalidData(format!("departments row {:?}: {err}", department.id))
    })?;
    Ok(department)
}
