mod get;
mod page;
mod post;

pub use get::contact_form;
pub use page::ContactPage;
pub use post::submit_contact;
