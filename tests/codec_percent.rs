mod error {
    pub use hashparams::error::*;
}

mod percent_under_test {
    #![allow(dead_code)]

    include!("../src/codec/percent.rs");

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(decode_component("p.json").as_deref(), Ok("p.json"));
        assert_eq!(decode_component("").as_deref(), Ok(""));
    }

    #[test]
    fn decodes_either_hex_case() {
        assert_eq!(decode_component("%2f%2F").as_deref(), Ok("//"));
        assert_eq!(decode_component("%E2%9C%93").as_deref(), Ok("✓"));
    }

    #[test]
    fn reports_offset_of_bad_escape() {
        assert_eq!(
            decode_component("abc%4"),
            Err(FragmentError::MalformedEscape { offset: 3 })
        );
        assert_eq!(
            decode_component("%41%G1"),
            Err(FragmentError::MalformedEscape { offset: 3 })
        );
    }

    #[test]
    fn rejects_partial_utf8_sequence() {
        assert_eq!(decode_component("%E2%9C"), Err(FragmentError::InvalidUtf8));
    }

    #[test]
    fn hex_digits() {
        assert_eq!(hex_value(b'0'), Some(0));
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'F'), Some(15));
        assert_eq!(hex_value(b'g'), None);
    }

    #[test]
    fn encodes_like_uri_components() {
        assert_eq!(encode_component("a b&c=d/e?"), "a%20b%26c%3Dd%2Fe%3F");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("SGVsbG8="), "SGVsbG8%3D");
        assert_eq!(encode_component("✓"), "%E2%9C%93");
    }
}
