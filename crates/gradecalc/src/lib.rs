//! GradeCalc library — application logic for the GPA/CGPA calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
