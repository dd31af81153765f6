use serde::de::DeserializeOwned;

use crate::error::{ErrorDetail, Result};
use crate::data::Source;

/// A data format CV documents can be written in.
pub trait Format: Sized {
    /// The data format's error type.
    type Error: serde::de::Error + ErrorDetail + 'static;

    /// Parses `string` as a `T` in this format.
    fn from_str<T: DeserializeOwned>(string: &str) -> Result<T, Self::Error>;

    fn read<I: Source, T: DeserializeOwned>(input: I) -> Result<T> {
        let input = input.read()?;
        Ok(Self::from_str(&input)?)
    }
}

macro_rules! impl_format {
    ($name:ident : $func:expr, $E:ty) => (
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Format for $name {
            type Error = $E;

            fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, $E> {
                $func(s)
            }
        }
    );
}

impl_format!(Toml: toml::from_str, toml::de::Error);
impl_format!(Json: serde_json::from_str, serde_json::Error);
