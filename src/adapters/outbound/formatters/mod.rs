/// Formatter adapters rendering view trees as browser artifacts
mod js_assignment_formatter;

pub use js_assignment_formatter::JsAssignmentFormatter;
