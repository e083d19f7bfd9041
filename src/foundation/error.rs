/// Convenience result type used across the crate.
pub type ScenaResult<T> = Result<T, ScenaError>;

/// Top-level error taxonomy used by toolkit APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScenaError {
    /// A constructor received a value that fails a required type or variant
    /// check. Construction fails fast; values are never silently coerced.
    #[error("construction error: {0}")]
    Construction(String),

    /// An operation addressed a named resource that does not exist.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Degenerate keyframe or transport data.
    #[error("animation error: {0}")]
    Animation(String),

    /// Wrapped lower-level error from collaborators (asset fetch, decoding).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScenaError {
    /// Build a [`ScenaError::Construction`] value.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Build a [`ScenaError::Lookup`] value.
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Build a [`ScenaError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        let e = ScenaError::construction("radius must be > 0");
        assert_eq!(e.to_string(), "construction error: radius must be > 0");
        let e = ScenaError::lookup("unknown asset 'hero'");
        assert!(e.to_string().contains("hero"));
    }
}
