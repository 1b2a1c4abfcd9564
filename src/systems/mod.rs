pub mod collision;
pub mod rigid_body;
