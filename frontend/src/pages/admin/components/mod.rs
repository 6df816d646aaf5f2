pub mod payments;
pub mod subscription;
pub mod support;
pub mod users;
