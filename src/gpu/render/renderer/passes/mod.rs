pub mod main_pass;
pub mod shadow;
