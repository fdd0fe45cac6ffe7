//! Quote form controller and its presentation model

pub mod controller;
pub mod view;


pub use controller::{FormController, SubmitDisposition, TRANSPORT_FAILURE_MESSAGE};
pub use view::{ErrorPlacement, FormPanel, FormView};
