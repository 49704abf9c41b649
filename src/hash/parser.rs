use crate::codec::{base64, percent};
use crate::error::FragmentError;

use super::diagnostics::{Diagnostics, TracingDiagnostics};
use super::params::HashParams;
use super::source::FragmentSource;
use super::view::ViewMode;

/// Parses fragment text such as `#profileURL=...&view=sandwich`, reporting
/// problems through `tracing`. Never fails; see [`parse_with`].
pub fn parse(fragment: &str) -> HashParams {
    parse_with(fragment, &TracingDiagnostics)
}

/// Parses whatever fragment `source` currently holds.
pub fn parse_source<S, D>(source: &S, diagnostics: &D) -> HashParams
where
    S: FragmentSource + ?Sized,
    D: Diagnostics + ?Sized,
{
    match source.fragment() {
        Some(fragment) => parse_with(&fragment, diagnostics),
        None => HashParams::default(),
    }
}

/// Parses `fragment`, returning an empty record when any component is
/// malformed. The failure is reported to `diagnostics` once.
pub fn parse_with<D: Diagnostics + ?Sized>(fragment: &str, diagnostics: &D) -> HashParams {
    match try_parse(fragment, diagnostics) {
        Ok(params) => params,
        Err(err) => {
            diagnostics.parse_failed(&err);
            HashParams::default()
        }
    }
}

/// Strict variant of [`parse_with`]: a malformed percent escape or non UTF-8
/// value fails the whole parse instead of yielding an empty record.
///
/// Input that does not start with `#` has no fragment and parses to an empty
/// record. Unknown keys and components without `=` are skipped; an
/// unrecognized `view` is reported and left unset.
pub fn try_parse<D: Diagnostics + ?Sized>(
    fragment: &str,
    diagnostics: &D,
) -> Result<HashParams, FragmentError> {
    let Some(body) = fragment.strip_prefix('#') else {
        return Ok(HashParams::default());
    };

    let mut params = HashParams::default();
    let mut components = 0_usize;

    for component in body.split('&') {
        components += 1;
        let Some((key, raw_value)) = component.split_once('=') else {
            continue;
        };
        let value = percent::decode_component(raw_value)?;

        match key {
            "profileURL" => params.profile_url = Some(value),
            "title" => params.title = Some(value),
            "localProfilePath" => params.local_profile_path = Some(value),
            "view" => match ViewMode::from_tag(&value) {
                Some(mode) => params.view_mode = Some(mode),
                None => diagnostics.invalid_view(&value),
            },
            "b64data" => params.b64data = Some(base64::decode(&value)),
            "customFilename" => params.custom_filename = Some(value),
            _ => {}
        }
    }

    tracing::debug!(components, "parsed hash fragment");
    Ok(params)
}
