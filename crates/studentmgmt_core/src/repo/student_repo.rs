//! Student store contract and SQLite implementation.
//!
//! # Invariants
//! - Write paths call `Student::validate()` before SQL mutations.
//! - A `department_id` reference is checked against the `departments` table
//!   before every write so callers get a semantic `NotFound` instead of a
//!   raw foreign-key failure.

use crate::model::student::{Student, StudentId};
use crate::repo::{ensure_connection_ready, row_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    phone,
    date_of_birth,
    address,
    department_id
FROM students";

/// Backing store capability for student records.
pub trait StudentStore {
    /// Returns every student in primary-key order.
    fn find_all(&self) -> RepoResult<Vec<Student>>;
    /// Returns one student, or `None` when the id matches nothing.
    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>>;
    /// Inserts (id absent) or fully replaces (id present) one student.
    fn save(&self, student: &Student) -> RepoResult<Student>;
    /// Removes one student and cascades to their enrollments; fails with
    /// `NotFound` when the id matches nothing.
    fn delete_by_id(&self, id: StudentId) -> RepoResult<()>;
}

/// SQLite-backed student store.
pub struct SqliteStudentStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "students",
            &[
                "id",
                "first_name",
                "last_name",
                "email",
                "phone",
                "date_of_birth",
                "address",
                "department_id",
            ],
        )?;
        Ok(Self { conn })
    }

    fn check_department_reference(&self, student: &Student) -> RepoResult<()> {
        if let Some(department_id) = student.department_id {
            if !row_exists(self.conn, "departments", department_id)? {
                return Err(RepoError::NotFound {
                    entity: "department",
                    id: department_id,
                });
            }
        }
        Ok(())
    }
}

impl StudentStore for SqliteStudentStore<'_> {
    fn find_all(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn find_by_id(&self, id: StudentId) -> RepoResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(parse_student_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, student: &Student) -> RepoResult<Student> {
        student.validate()?;
        self.check_department_reference(student)?;

        match student.id {
            None => {
                self.conn.execute(
                    "INSERT INTO students (
                        first_name,
                        last_name,
                        email,
                        phone,
                        date_of_birth,
                        address,
                        department_id
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                    params![
                        student.first_name.as_str(),
                        student.last_name.as_str(),
                        student.email.as_str(),
                        student.phone.as_deref(),
                        student.date_of_birth.as_deref(),
                        student.address.as_deref(),
                        student.department_id,
                    ],
                )?;

                let mut saved = student.clone();
                saved.id = Some(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE students
                     SET
                        first_name = ?1,
                        last_name = ?2,
                        email = ?3,
                        phone = ?4,
                        date_of_birth = ?5,
                        address = ?6,
                        department_id = ?7,
                        updated_at = (strftime('%s', 'now') * 1000)
                     WHERE id = ?8;",
                    params![
                        student.first_name.as_str(),
                        student.last_name.as_str(),
                        student.email.as_str(),
                        student.phone.as_deref(),
                        student.date_of_birth.as_deref(),
                        student.address.as_deref(),
                        student.department_id,
                        id,
                    ],
                )?;

                if changed == 0 {
                    return Err(RepoError::NotFound {
                        entity: "student",
                        id,
                    });
                }

                Ok(student.clone())
            }
        }
    }

    fn delete_by_id(&self, id: StudentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "student",
                id,
            });
        }

        Ok(())
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let student = Student {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        date_of_birth: row.get("date_of_birth")?,
        address: row.get("address")?,
        department_id: row.get("department_id")?,
    };
    student
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("students row {:?}: {err}", student.id)))?;
    Ok(student)
}
