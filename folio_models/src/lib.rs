pub mod contact;
pub mod email_address;
pub mod form;
pub mod submission;
