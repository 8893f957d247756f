//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep upper layers decoupled from storage details.
//!
//! # Invariants
//! - Services are stateless mediators: no caching, no cross-call state.
//! - Services never bypass store validation/persistence contracts.

pub mod course_service;
pub mod department_service;
pub mod enrollment_service;
pub mod student_service;
