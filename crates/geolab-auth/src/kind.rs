use std::fmt;

/// Which of the two signing contexts a component is bound to.
///
/// Tokens carry no field naming their kind; the kind of a presented token
/// is established purely by which verifier successfully decodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}
