use std::fmt;

/// Method tokens the guard treats as admin-only.
///
/// Tokens are matched case-insensitively against the wire method, with two
/// aliases: `CREATE` also covers `POST`, `UPDATE` also covers `PUT`.
/// Unknown tokens are kept as-is and simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedMethodSet {
    tokens: Vec<String>,
}

const ALIASES: [(&str, &str); 2] = [("CREATE", "POST"), ("UPDATE", "PUT")];

impl ProtectedMethodSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_protected(&self, method: &str) -> bool {
        self.tokens.iter().any(|token| token_matches(token, method))
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

fn token_matches(token: &str, method: &str) -> bool {
    if token.eq_ignore_ascii_case(method) {
        return true;
    }

    ALIASES.iter().any(|(alias, wire)| {
        token.eq_ignore_ascii_case(alias) && method.eq_ignore_ascii_case(wire)
    })
}

impl fmt::Display for ProtectedMethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.tokens.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for ProtectedMethodSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
