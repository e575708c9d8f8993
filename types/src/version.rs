use bincode::config::DefaultOptions;
use bincode::config::Options;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde::Serialize;

pub static VERSION: Lazy<Version> = Lazy::new(|| {
    let version_string: &str = env!("CARGO_PKG_VERSION");
    match version_string.split('.').collect::<Vec<_>>()[..] {
        [major, minor, patch] => Some(Version {
            major: major
                .parse()
                .expect("Could not parse major portion of version"),
            minor: minor
                .parse()
                .expect("Could not parse minor portion of version"),
            patch: patch
                .parse()
                .expect("Could not parse patch portion of version"),
        }),
        _ => None,
    }
    .unwrap_or_else(|| panic!("Could not parse CARGO_PKG_VERSION into Version"))
});

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Version {
    pub major: u8,
    pub minor: u16,
    pub patch: u16,
}

impl Version {
    pub fn deserialize_magic_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let config = DefaultOptions::new()
            .with_fixint_encoding()
            .with_little_endian();
        config.deserialize(bytes)
    }

    /// what versions are compatible. For now we assume that major versions
    /// being the same is enough even if minor or patch differ
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.major == other.major
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version_compatibility_ignores_minor_and_patch() {
        let version = Version {
            major: 0,
            minor: 2,
            patch: 0,
        };
        assert!(version.is_compatible(&Version {
            major: 0,
            minor: 9,
            patch: 3,
        }));
        assert!(!version.is_compatible(&Version {
            major: 1,
            minor: 2,
            patch: 0,
        }));
    }

    #[test]
    fn test_version_round_trips_through_magic_bytes() {
        let config = DefaultOptions::new()
            .with_fixint_encoding()
            .with_little_endian();
        let serialized = config.serialize(&*VERSION).unwrap();
        assert_eq!(serialized.len(), crate::bincode::VERSION_LENGTH);
        let deserialized = Version::deserialize_magic_bytes(&serialized).unwrap();
        assert_eq!(deserialized, *VERSION);
    }
}
