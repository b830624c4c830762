pub mod employees;
pub mod skill_requests;
pub mod tabs;
