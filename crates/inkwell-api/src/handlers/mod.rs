pub mod media_get;
pub mod site;
