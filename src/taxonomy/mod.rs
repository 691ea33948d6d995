/// Taxonomy domain - weakness records, view trees and the services that build them
///
/// Pure business logic with no I/O dependencies.
pub mod domain;
pub mod services;
