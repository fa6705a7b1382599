// notes-client/notes-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a string-backed identifier. The generated type serializes transparently.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Hash, Clone, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Declares a numeric (u64) identifier as used by the remote REST API for users, sites,
/// posts and comments.
#[macro_export]
macro_rules! id_number {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(u64);

        impl $t {
            #[allow(dead_code)]
            pub const fn new(value: u64) -> Self {
                $t(value)
            }

            #[allow(dead_code)]
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> $t {
                $t(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> u64 {
                value.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map($t)
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    id_string!(NoteId);
    id_number!(SiteId);

    #[test]
    fn test_id_string() {
        let id = NoteId::from("1234");
        assert_eq!(id.as_str(), "1234");
        assert_eq!(id.to_string(), "1234");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1234\"");
    }

    #[test]
    fn test_id_number() {
        assert_eq!(" 42".parse::<SiteId>().unwrap(), SiteId::new(42));
        assert!("forty-two".parse::<SiteId>().is_err());
        assert_eq!(serde_json::to_string(&SiteId::from(7)).unwrap(), "7");
        assert_eq!(u64::from(SiteId::new(9)), 9);
    }
}
