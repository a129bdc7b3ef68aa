use std::fmt;
use std::sync::Arc;

/// Lazily invoked CSS producer handed to the host engine.
///
/// The text is fixed when the preset is built; calling the generator any
/// number of times always yields the same string.
#[derive(Clone)]
pub struct CssGenerator(Arc<dyn Fn() -> String + Send + Sync>);

impl CssGenerator {
    pub fn new<F>(generate: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        CssGenerator(Arc::new(generate))
    }

    pub fn from_text(css: impl Into<Arc<str>>) -> Self {
        let css: Arc<str> = css.into();
        Self::new(move || css.to_string())
    }

    pub fn get_css(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for CssGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CssGenerator(..)")
    }
}
