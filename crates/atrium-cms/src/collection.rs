//! CMS collections the site reads.

/// A REST collection exposed under `/api/<path>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// People shown in search results.
    TeamMembers,
    /// Client companies and their testimonials.
    Clients,
}

impl Collection {
    /// URL path segment.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::TeamMembers => "team-members",
            Self::Clients => "clients",
        }
    }
}
