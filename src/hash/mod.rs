mod builder;
pub mod diagnostics;
pub mod params;
pub mod parser;
pub mod source;
pub mod view;

pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use params::HashParams;
pub use parser::{parse, parse_source, parse_with, try_parse};
pub use source::FragmentSource;
pub use view::ViewMode;
