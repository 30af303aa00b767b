//! Module declaration records.
//!
//! A configuration is an ordered sequence of lines of the form
//! `<prefix><name> -> <dest1>, <dest2>, ...` where the prefix selects the
//! module kind. Blank-line filtering is the caller's job; this parser
//! only sees candidate records.

use crate::NetworkError;

/// Name of the unique entry-point module.
pub const BROADCASTER: &str = "broadcaster";

/// The kind a declaration's prefix selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `broadcaster` (no prefix): relays every pulse unchanged.
    Broadcaster,
    /// `%name`: flip-flop with binary memory, inert on HIGH.
    FlipFlop,
    /// `&name`: conjunction remembering the last level from each input.
    Conjunction,
    /// Bare name other than `broadcaster`: no declared behavior.
    Terminal,
}

/// A parsed module declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    /// Kind implied by the declaration prefix.
    pub kind: DeclKind,
    /// Module name, with any prefix stripped.
    pub name: String,
    /// Destination names, in declared order. Order matters: it determines
    /// pulse emission order and therefore queue ordering.
    pub destinations: Vec<String>,
}

impl ModuleDecl {
    /// Parse a single declaration line.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Parse`] naming the offending line when the
    /// ` -> ` separator is missing or the declared name is empty.
    pub fn parse(line: &str) -> Result<Self, NetworkError> {
        let (lhs, rhs) = line.split_once(" -> ").ok_or_else(|| NetworkError::Parse {
            line: line.to_string(),
            reason: "missing ' -> ' separator",
        })?;

        let lhs = lhs.trim();
        let (kind, name) = match lhs.strip_prefix('%') {
            Some(rest) => (DeclKind::FlipFlop, rest),
            None => match lhs.strip_prefix('&') {
                Some(rest) => (DeclKind::Conjunction, rest),
                None if lhs == BROADCASTER => (DeclKind::Broadcaster, lhs),
                None => (DeclKind::Terminal, lhs),
            },
        };

        if name.is_empty() {
            return Err(NetworkError::Parse {
                line: line.to_string(),
                reason: "empty module name",
            });
        }

        let destinations = rhs
            .split(',')
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        Ok(Self {
            kind,
            name: name.to_string(),
            destinations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flip_flop() {
        let decl = ModuleDecl::parse("%a -> b, c").unwrap();
        assert_eq!(decl.kind, DeclKind::FlipFlop);
        assert_eq!(decl.name, "a");
        assert_eq!(decl.destinations, vec!["b", "c"]);
    }

    #[test]
    fn test_parse_conjunction() {
        let decl = ModuleDecl::parse("&inv -> a").unwrap();
        assert_eq!(decl.kind, DeclKind::Conjunction);
        assert_eq!(decl.name, "inv");
        assert_eq!(decl.destinations, vec!["a"]);
    }

    #[test]
    fn test_parse_broadcaster() {
        let decl = ModuleDecl::parse("broadcaster -> a, b, c").unwrap();
        assert_eq!(decl.kind, DeclKind::Broadcaster);
        assert_eq!(decl.name, "broadcaster");
        assert_eq!(decl.destinations.len(), 3);
    }

    #[test]
    fn test_parse_bare_name_is_terminal() {
        let decl = ModuleDecl::parse("sink -> ").unwrap();
        assert_eq!(decl.kind, DeclKind::Terminal);
        assert!(decl.destinations.is_empty());
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = ModuleDecl::parse("%a b, c").unwrap_err();
        assert!(matches!(err, NetworkError::Parse { ref line, .. } if line == "%a b, c"));
    }

    #[test]
    fn test_parse_empty_name() {
        let err = ModuleDecl::parse("% -> a").unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Parse {
                reason: "empty module name",
                ..
            }
        ));
    }
}
