//! Common reusable UI components shared by the auth forms

pub mod form;

pub use form::{CheckboxField, FormField, SuccessMessage};
