/// A possible error value when converting into a [`ParsedUri`][super::ParsedUri].
///
/// Parsing itself never fails on a non empty string, these only come from the conversion
/// traits.
#[derive(Clone, PartialEq, Eq)]
pub enum UriError {
    /// Input is empty.
    Empty,
    /// Input bytes are not valid UTF-8.
    NonUtf8,
}

// ===== Error =====

macro_rules! gen_error {
    ($($variant:pat => $msg:literal),* $(,)?) => {
        impl UriError {
            /// Returns the error message.
            pub const fn message(&self) -> &'static str {
                use UriError::*;
                match self {
                    $($variant => $msg,)*
                }
            }
        }

        impl std::fmt::Display for UriError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(self.message())
            }
        }
    };
}

gen_error! {
    Empty => "URI is empty",
    NonUtf8 => "URI is not valid UTF-8",
}

impl std::error::Error for UriError { }

impl std::fmt::Debug for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
