use std::borrow::Cow;

/// Error types specific to the licensing feature.
#[derive(Debug, thiserror::Error)]
pub enum LicenseError {
    #[error("License has expired{}: {message}", format_context(.context))]
    Expired { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("License signature is invalid or tampered{}: {source}", format_context(.context))]
    InvalidSignature { source: ed25519_dalek::SignatureError, context: Option<Cow<'static, str>> },

    /// The license key or public key could not be decoded.
    #[error("Malformed key{}: {message}", format_context(.context))]
    MalformedKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown feature '{name}'")]
    UnknownFeature { name: String },

    /// Settings or license file could not be read.
    #[error("Storage I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Serde serialization error with optional context.
    #[error("Serde serialization error{}: {source}", format_context(.context))]
    SerdeSerialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Postcard serialization error with optional context.
    #[error("Postcard serialization error{}: {source}", format_context(.context))]
    PostcardSerialize { source: postcard::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal licensing error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Attaches context to licensing results, converting foreign errors on the way.
pub trait LicenseErrorExt<T> {
    /// # Errors
    /// Returns the wrapped error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LicenseError>;
}

impl<T> LicenseErrorExt<T> for Result<T, LicenseError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                LicenseError::Expired { context: c, .. }
                | LicenseError::InvalidSignature { context: c, .. }
                | LicenseError::MalformedKey { context: c, .. }
                | LicenseError::Io { context: c, .. }
                | LicenseError::SerdeSerialize { context: c, .. }
                | LicenseError::PostcardSerialize { context: c, .. }
                | LicenseError::Internal { context: c, .. } => *c = Some(context.into()),
                LicenseError::UnknownFeature { .. } => {},
            }
            e
        })
    }
}

macro_rules! source_conversions {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for LicenseError {
                fn from(source: $source) -> Self {
                    Self::$variant { source, context: None }
                }
            }

            impl<T> LicenseErrorExt<T> for Result<T, $source> {
                fn context(
                    self,
                    context: impl Into<Cow<'static, str>>,
                ) -> Result<T, LicenseError> {
                    self.map_err(|source| LicenseError::$variant {
                        source,
                        context: Some(context.into()),
                    })
                }
            }
        )*
    };
}

source_conversions! {
    ed25519_dalek::SignatureError => InvalidSignature,
    std::io::Error => Io,
    serde_json::Error => SerdeSerialize,
    postcard::Error => PostcardSerialize,
}

impl From<&'static str> for LicenseError {
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for LicenseError {
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}
