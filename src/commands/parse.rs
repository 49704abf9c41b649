use std::borrow::Cow;

use url::Url;

use crate::cli::ParseArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::hash::{self, FragmentSource, HashParams, TracingDiagnostics};

/// A location given on the command line: bare fragment text or a full URL.
#[derive(Debug, Clone, PartialEq)]
enum Location {
    Fragment(String),
    Url(Url),
}

impl Location {
    fn resolve(input: &str) -> Self {
        if input.starts_with('#') {
            return Self::Fragment(input.to_string());
        }

        match Url::parse(input) {
            Ok(url) => Self::Url(url),
            Err(err) => {
                tracing::debug!(%err, "location is not a url, reading it as fragment text");
                Self::Fragment(input.to_string())
            }
        }
    }
}

impl FragmentSource for Location {
    fn fragment(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Fragment(text) => text.fragment(),
            Self::Url(url) => FragmentSource::fragment(url),
        }
    }
}

pub fn run(ctx: &AppContext, args: ParseArgs) -> AppResult<()> {
    let location = args.location.as_deref().map(Location::resolve);
    let params = read_params(location.as_ref(), args.strict)?;

    ctx.output.emit(&describe(&params), &params)
}

/// In strict mode a malformed fragment is an error instead of an empty record.
fn read_params(location: Option<&Location>, strict: bool) -> AppResult<HashParams> {
    let Some(location) = location else {
        return Ok(HashParams::default());
    };

    if !strict {
        return Ok(hash::parse_source(location, &TracingDiagnostics));
    }

    match location.fragment() {
        Some(fragment) => Ok(hash::try_parse(&fragment, &TracingDiagnostics)?),
        None => Ok(HashParams::default()),
    }
}

fn describe(params: &HashParams) -> Vec<String> {
    if params.is_empty() {
        return vec!["(no parameters)".to_string()];
    }

    let mut lines = Vec::new();
    if let Some(profile_url) = &params.profile_url {
        lines.push(format!("profileURL: {profile_url}"));
    }
    if let Some(title) = &params.title {
        lines.push(format!("title: {title}"));
    }
    if let Some(path) = &params.local_profile_path {
        lines.push(format!("localProfilePath: {path}"));
    }
    if let Some(mode) = params.view_mode {
        lines.push(format!("view: {mode}"));
    }
    if let Some(payload) = &params.b64data {
        lines.push(format!("b64data: {} bytes", payload.len()));
    }
    if let Some(filename) = &params.custom_filename {
        lines.push(format!("customFilename: {filename}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, FragmentError};
    use crate::hash::ViewMode;

    #[test]
    fn resolves_bare_fragment() {
        assert_eq!(
            Location::resolve("#title=x"),
            Location::Fragment("#title=x".to_string())
        );
    }

    #[test]
    fn resolves_full_url_to_its_fragment() {
        let location = Location::resolve("https://www.speedscope.app/#view=sandwich");
        assert!(matches!(location, Location::Url(_)));
        assert_eq!(location.fragment().as_deref(), Some("#view=sandwich"));
    }

    #[test]
    fn unparseable_text_has_no_hash_and_parses_empty() {
        let location = Location::resolve("view=sandwich");
        assert!(hash::parse_source(&location, &TracingDiagnostics).is_empty());
    }

    #[test]
    fn strict_mode_surfaces_malformed_escape() {
        let location = Location::resolve("#title=%");

        match read_params(Some(&location), true) {
            Err(AppError::Fragment(err)) => {
                assert_eq!(err, FragmentError::MalformedEscape { offset: 0 })
            }
            other => panic!("expected fragment error, got {other:?}"),
        }
    }

    #[test]
    fn lenient_mode_returns_empty_record_for_malformed_escape() {
        let location = Location::resolve("#title=%");
        let params = read_params(Some(&location), false).expect("lenient parse");
        assert!(params.is_empty());
    }

    #[test]
    fn strict_mode_reads_well_formed_fragment() {
        let location = Location::resolve("https://www.speedscope.app/#title=a%20b");
        let params = read_params(Some(&location), true).expect("strict parse");
        assert_eq!(params.title.as_deref(), Some("a b"));

        assert!(read_params(None, true).expect("no location").is_empty());
    }

    #[test]
    fn describes_each_present_field() {
        let params = HashParams {
            title: Some("t".to_string()),
            view_mode: Some(ViewMode::ChronoFlameChart),
            b64data: Some(vec![1, 2, 3]),
            ..HashParams::default()
        };

        assert_eq!(
            describe(&params),
            ["title: t", "view: time-ordered", "b64data: 3 bytes"]
        );
        assert_eq!(describe(&HashParams::default()), ["(no parameters)"]);
    }
}
