pub mod entity;

pub use entity::{domains, find_domain, find_language, languages, Domain, Language};
