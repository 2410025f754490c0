pub mod role;
pub mod user;

pub use role::RoleRecord;
pub use user::UserRecord;
