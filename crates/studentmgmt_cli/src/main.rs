//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studentmgmt_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("studentmgmt_core ping={}", studentmgmt_core::ping());
    println!(
        "studentmgmt_core version={}",
        studentmgmt_core::core_version()
    );
}
