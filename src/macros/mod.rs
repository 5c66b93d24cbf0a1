// std::result::Result

/// This macro unwraps a parse result or records the failure and returns
/// the given output from the enclosing operation.
///
/// Every validator operation has the same early-return point on parse
/// failure; only the way the error lands in the output record differs,
/// so the caller names the error binding and the statement to run with it.
macro_rules! parsed_or_return {
    ($parsed:expr, $err:ident => $on_error:expr, $output:expr) => {{
        match $parsed {
            Ok(number) => number,
            Err($err) => {
                $on_error;
                return Ok($output);
            }
        }
    }};
}

pub(crate) use parsed_or_return;

/// Implements `serde::Serialize` for enums that already expose their
/// boundary literal through `AsRef<str>`.
#[cfg(feature = "serde")]
macro_rules! serialize_as_str {
    ($($name:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $name {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_ref())
                }
            }
        )+
    };
}

#[cfg(feature = "serde")]
pub(crate) use serialize_as_str;
