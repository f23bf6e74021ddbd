//! Form domain layer
//!
//! The registration record, its field table and the widget-side focus state.

mod field;
mod form_data;
mod form_state;

pub use field::{FieldKind, FieldName, FieldSpec, Section, FIELDS};
pub use form_data::{ChangeEvent, FormData};
pub use form_state::{Form, FormInput, RegistrationForm};
