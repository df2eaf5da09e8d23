/// License report core: value objects, override policy and the services that
/// filter dependencies, collect their licenses and assemble the document.
pub mod domain;
pub mod policies;
pub mod services;
