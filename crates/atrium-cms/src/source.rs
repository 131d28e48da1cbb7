//! Seam between page handlers and the CMS.

use async_trait::async_trait;

use crate::client::CmsClient;
use crate::records::{CmsClientRecord, CmsTeamMember};

/// Read-only content lookups. Implementations never fail; they return empty lists.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Team members matching `query` by name, or all for `None`.
    async fn team_members(&self, query: Option<&str>) -> Vec<CmsTeamMember>;
    /// Clients matching `query` by name, or all for `None`.
    async fn clients(&self, query: Option<&str>) -> Vec<CmsClientRecord>;
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn team_members(&self, query: Option<&str>) -> Vec<CmsTeamMember> {
        self.lookup_team_members(query).await
    }

    async fn clients(&self, query: Option<&str>) -> Vec<CmsClientRecord> {
        self.lookup_clients(query).await
    }
}

/// Fixed records filtered in memory the way the CMS filters by name.
#[derive(Clone, Debug, Default)]
pub struct StaticContentSource {
    team_members: Vec<CmsTeamMember>,
    clients: Vec<CmsClientRecord>,
}

impl StaticContentSource {
    /// Source with the given records.
    #[must_use]
    pub const fn new(team_members: Vec<CmsTeamMember>, clients: Vec<CmsClientRecord>) -> Self {
        Self {
            team_members,
            clients,
        }
    }
}

fn name_matches(name: &str, query: Option<&str>) -> bool {
    query.is_none_or(|query| name.to_lowercase().contains(&query.to_lowercase()))
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn team_members(&self, query: Option<&str>) -> Vec<CmsTeamMember> {
        self.team_members
            .iter()
            .filter(|member| name_matches(&member.name, query))
            .cloned()
            .collect()
    }

    async fn clients(&self, query: Option<&str>) -> Vec<CmsClientRecord> {
        self.clients
            .iter()
            .filter(|client| name_matches(&client.name, query))
            .cloned()
            .collect()
    }
}
