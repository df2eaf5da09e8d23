/// Ports module defining the interfaces between the report generation core
/// and its infrastructure.
pub mod outbound;
