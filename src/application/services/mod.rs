//! Application services

mod member_service;
mod testimony_service;

pub use member_service::MemberService;
pub use testimony_service::TestimonyService;
