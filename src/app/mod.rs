// Application layer: turns result sets into CLI output.

pub mod report;
