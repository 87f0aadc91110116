mod contact_email;
mod contact_form;
mod contact_message;
mod contact_name;
mod field_error;
mod theme;

pub use contact_email::ContactEmail;
pub use contact_form::*;
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use field_error::*;
pub use theme::*;
