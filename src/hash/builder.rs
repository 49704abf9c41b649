use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::codec::percent::encode_component;

use super::params::HashParams;

impl HashParams {
    /// Renders the record as fragment text, `#` included. Fields are written
    /// in a fixed order and the payload as padded standard base64.
    pub fn to_fragment(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(profile_url) = &self.profile_url {
            pairs.push(("profileURL", encode_component(profile_url)));
        }
        if let Some(title) = &self.title {
            pairs.push(("title", encode_component(title)));
        }
        if let Some(path) = &self.local_profile_path {
            pairs.push(("localProfilePath", encode_component(path)));
        }
        if let Some(mode) = self.view_mode {
            pairs.push(("view", mode.tag().to_string()));
        }
        if let Some(payload) = &self.b64data {
            pairs.push(("b64data", encode_component(&STANDARD.encode(payload))));
        }
        if let Some(filename) = &self.custom_filename {
            pairs.push(("customFilename", encode_component(filename)));
        }

        let body = pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("#{body}")
    }
}

#[cfg(test)]
mod tests {
    use crate::hash::parser::parse;
    use crate::hash::view::ViewMode;

    use super::*;

    #[test]
    fn empty_record_is_bare_hash() {
        assert_eq!(HashParams::default().to_fragment(), "#");
        assert!(parse("#").is_empty());
    }

    #[test]
    fn escapes_values() {
        let params = HashParams {
            profile_url: Some("http://example.com/p.json".to_string()),
            custom_filename: Some("p.json".to_string()),
            ..HashParams::default()
        };

        assert_eq!(
            params.to_fragment(),
            "#profileURL=http%3A%2F%2Fexample.com%2Fp.json&customFilename=p.json"
        );
    }

    #[test]
    fn payload_is_escaped_base64() {
        let params = HashParams {
            b64data: Some(b"Hello".to_vec()),
            ..HashParams::default()
        };

        assert_eq!(params.to_fragment(), "#b64data=SGVsbG8%3D");
    }

    #[test]
    fn parses_back_to_the_same_record() {
        let params = HashParams {
            profile_url: Some("https://example.com/a b&c=d.json".to_string()),
            title: Some("Flame graph: 100% ✓".to_string()),
            local_profile_path: Some("/tmp/profile #1".to_string()),
            view_mode: Some(ViewMode::LeftHeavyFlameGraph),
            b64data: Some(vec![0, 1, 2, 0xfb, 0xff, 0x3e, 0x3f]),
            custom_filename: Some("trace.cpuprofile".to_string()),
        };

        assert_eq!(parse(&params.to_fragment()), params);
    }
}
