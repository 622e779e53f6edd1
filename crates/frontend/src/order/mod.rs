//! Order submission: the modal form and the POST to the order endpoint.

pub mod api;
pub mod form;
