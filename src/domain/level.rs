use std::fmt;

/// How far to move the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpLevel {
    #[default]
    Patch,
    Minor,
    Major,
    /// Do not bump; report the latest version as-is.
    Current,
}

impl BumpLevel {
    /// Map a command-line token to a level.
    ///
    /// Matching is exact and case-sensitive. Returns `None` for anything else.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "patch" => Some(BumpLevel::Patch),
            "minor" => Some(BumpLevel::Minor),
            "major" => Some(BumpLevel::Major),
            "current" => Some(BumpLevel::Current),
            _ => None,
        }
    }

    /// Select the level from positional arguments. Only the first one is
    /// looked at; a missing or unrecognized token means `Patch`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args.first() {
            None => BumpLevel::default(),
            Some(token) => {
                let token = token.as_ref();
                BumpLevel::from_token(token).unwrap_or_else(|| {
                    log::warn!("unrecognized bump level '{}', using patch", token);
                    BumpLevel::default()
                })
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
            BumpLevel::Current => "current",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
