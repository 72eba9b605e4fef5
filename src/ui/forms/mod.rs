//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `application_form`: The application form body and submit button

mod application_form;
mod field_renderer;

pub use application_form::draw as draw_application_form;
