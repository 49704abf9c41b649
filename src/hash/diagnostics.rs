use crate::error::FragmentError;

/// Side channel for problems found while reading a fragment. Reporting never
/// changes what the parser returns.
pub trait Diagnostics {
    fn invalid_view(&self, value: &str);
    fn parse_failed(&self, error: &FragmentError);
}

/// Reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn invalid_view(&self, value: &str) {
        tracing::warn!(value, "ignoring invalid view specifier");
    }

    fn parse_failed(&self, error: &FragmentError) {
        tracing::error!(%error, "error when loading hash fragment");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn invalid_view(&self, value: &str) {
        (**self).invalid_view(value);
    }

    fn parse_failed(&self, error: &FragmentError) {
        (**self).parse_failed(error);
    }
}
