use std::cmp::Ordering;
use std::fmt;

/// A published artifact version with Maven-style ordering.
///
/// Versions are split into items on `.`, `-`, `_` and `+`, and on transitions
/// between digits and letters. Numeric items compare numerically; textual
/// items are ranked as qualifiers:
///
/// `alpha < beta < milestone < rc < snapshot < release < sp < other`
///
/// where `release` also covers `ga`, `final` and the empty qualifier.
/// Unknown qualifiers sort after `sp`, lexically among themselves. A
/// numeric item is newer than any qualifier at the same position, so
/// `1.0.1` is newer than `1.0-beta`. Missing trailing items count as `0`
/// or `release`, making `1.0` and `1.0.0` equal.
#[derive(Debug, Clone)]
pub struct ArtifactVersion {
    raw: String,
    items: Vec<VersionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum VersionItem {
    Number(u64),
    Qualifier(Qualifier),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Qualifier {
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Snapshot,
    Release,
    ServicePack,
    Other(String),
}

impl Qualifier {
    fn parse(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "alpha" | "a" => Qualifier::Alpha,
            "beta" | "b" => Qualifier::Beta,
            "milestone" | "m" => Qualifier::Milestone,
            "rc" | "cr" => Qualifier::ReleaseCandidate,
            "snapshot" => Qualifier::Snapshot,
            "" | "ga" | "final" | "release" => Qualifier::Release,
            "sp" => Qualifier::ServicePack,
            other => Qualifier::Other(other.to_string()),
        }
    }
}

impl VersionItem {
    fn padding(&self) -> VersionItem {
        match self {
            VersionItem::Number(_) => VersionItem::Number(0),
            VersionItem::Qualifier(_) => VersionItem::Qualifier(Qualifier::Release),
        }
    }

    fn compare(&self, other: &VersionItem) -> Ordering {
        match (self, other) {
            (VersionItem::Number(a), VersionItem::Number(b)) => a.cmp(b),
            (VersionItem::Qualifier(a), VersionItem::Qualifier(b)) => a.cmp(b),
            (VersionItem::Number(_), VersionItem::Qualifier(_)) => Ordering::Greater,
            (VersionItem::Qualifier(_), VersionItem::Number(_)) => Ordering::Less,
        }
    }
}

fn tokenize(raw: &str) -> Vec<VersionItem> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut current_is_digit = false;

    let flush = |current: &mut String, is_digit: bool, items: &mut Vec<VersionItem>| {
        if current.is_empty() {
            return;
        }
        let item = if is_digit {
            // Overlong numeric runs fall back to qualifier ordering
            match current.parse::<u64>() {
                Ok(n) => VersionItem::Number(n),
                Err(_) => VersionItem::Qualifier(Qualifier::Other(current.clone())),
            }
        } else {
            VersionItem::Qualifier(Qualifier::parse(current.as_str()))
        };
        items.push(item);
        current.clear();
    };

    for c in raw.chars() {
        if matches!(c, '.' | '-' | '_' | '+') {
            flush(&mut current, current_is_digit, &mut items);
            continue;
        }
        let is_digit = c.is_ascii_digit();
        if !current.is_empty() && is_digit != current_is_digit {
            flush(&mut current, current_is_digit, &mut items);
        }
        current_is_digit = is_digit;
        current.push(c);
    }
    flush(&mut current, current_is_digit, &mut items);

    items
}

impl ArtifactVersion {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            items: tokenize(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for ArtifactVersion {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for ArtifactVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.items.len().max(other.items.len());
        for i in 0..len {
            let ordering = match (self.items.get(i), other.items.get(i)) {
                (Some(a), Some(b)) => a.compare(b),
                (Some(a), None) => a.compare(&a.padding()),
                (None, Some(b)) => b.padding().compare(b),
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for ArtifactVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ArtifactVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ArtifactVersion {}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: &str) -> ArtifactVersion {
        ArtifactVersion::parse(raw)
    }

    #[test]
    fn test_numeric_segments_compare_numerically() {
        assert!(v("1.10") > v("1.9"));
        assert!(v("2.0") > v("1.99.99"));
        assert!(v("3.12.0") < v("3.14.0"));
    }

    #[test]
    fn test_trailing_zeroes_are_equal() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("1"), v("1.0.0-ga"));
        assert_eq!(v("1.0-final"), v("1.0"));
    }

    #[test]
    fn test_qualifier_order() {
        let ordered = [
            "1.0-alpha-1",
            "1.0-beta",
            "1.0-M1",
            "1.0-RC1",
            "1.0-SNAPSHOT",
            "1.0",
            "1.0-sp1",
        ];
        for pair in ordered.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_release_is_newer_than_prerelease() {
        assert!(v("2.0") > v("2.0-rc2"));
        assert!(v("2.0.1") > v("2.0-beta"));
    }

    #[test]
    fn test_letters_split_from_digits() {
        assert!(v("1.0rc2") > v("1.0rc1"));
        assert!(v("1.0rc1") < v("1.0"));
    }

    #[test]
    fn test_unknown_qualifier_sorts_after_service_pack() {
        assert!(v("31.1-jre") > v("31.1"));
        assert!(v("31.1-jre") > v("31.1-sp"));
        assert!(v("31.1-android") < v("31.1-jre"));
    }

    #[test]
    fn test_max_picks_greatest() {
        let versions = vec![v("1.2"), v("1.10"), v("1.10-rc1"), v("1.9.9")];
        let max = versions.into_iter().max().unwrap();
        assert_eq!(max.as_str(), "1.10");
    }

    #[test]
    fn test_display_keeps_raw_text() {
        assert_eq!(v("1.0-SNAPSHOT").to_string(), "1.0-SNAPSHOT");
    }
}
