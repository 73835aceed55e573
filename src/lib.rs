//! Workspace-level integration tests for GradeCalc.
//!
//! The tests live under `tests/`; this crate exports nothing.
