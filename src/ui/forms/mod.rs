//! Form rendering module
//!
//! - `field_renderer`: one bordered control per field
//! - `registration_form`: sections, scrolling, submit button and dropdowns

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
