//! View-model DTOs shared by the services and the HTML views.

pub mod guild;
