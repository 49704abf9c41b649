use std::borrow::Cow;

use url::Url;

/// Where the fragment text comes from, usually the current navigation
/// location. Returned text includes the leading `#`.
pub trait FragmentSource {
    fn fragment(&self) -> Option<Cow<'_, str>>;
}

impl FragmentSource for str {
    fn fragment(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl FragmentSource for String {
    fn fragment(&self) -> Option<Cow<'_, str>> {
        self.as_str().fragment()
    }
}

impl FragmentSource for Url {
    fn fragment(&self) -> Option<Cow<'_, str>> {
        Url::fragment(self).map(|fragment| Cow::Owned(format!("#{fragment}")))
    }
}

impl<S: FragmentSource + ?Sized> FragmentSource for &S {
    fn fragment(&self) -> Option<Cow<'_, str>> {
        (**self).fragment()
    }
}
