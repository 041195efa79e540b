//! Full-screen views.

pub mod jobs;
