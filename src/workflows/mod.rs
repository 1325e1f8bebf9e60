pub mod grouper;
pub mod matchers;
pub mod report;
pub mod scan;
