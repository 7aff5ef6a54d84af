pub mod health;
pub mod members;
pub mod request_id;
pub mod testimonials;
