//! Name search across team members and clients.

use std::sync::Arc;

use atrium_api_models::{
    ClientHit, SearchLabels, SearchQuery, SearchResponse, SocialLinkView, TeamMemberHit,
};
use atrium_cms::{CmsClientRecord, CmsTeamMember, ContentSource};
use atrium_i18n::{MessageBundle, Namespace};
use axum::{
    Extension, Json,
    extract::{Query, State},
};
use tracing::info;

use crate::i18n::RequestLocale;
use crate::state::ApiState;

const MISSING_QUERY: &str = "…";

/// Run a search. A blank query renders the page without touching the CMS.
pub(crate) async fn search(
    State(state): State<Arc<ApiState>>,
    Extension(locale): Extension<RequestLocale>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    let (team_members, clients) = if query.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        tokio::join!(
            state.content.team_members(Some(query)),
            state.content.clients(Some(query))
        )
    };
    if !query.is_empty() {
        info!(
            query,
            team_members = team_members.len(),
            clients = clients.len(),
            "search completed"
        );
    }

    let messages = state.messages(locale.locale);
    let bundle = &messages.bundle;
    let shown = if query.is_empty() { MISSING_QUERY } else { query };
    Json(SearchResponse {
        locale: locale.locale,
        dir: locale.direction(),
        query: query.to_string(),
        heading: bundle.text_with(Namespace::Search, "resultsFor", &[("query", shown)]),
        labels: labels(bundle),
        team_members: team_members.into_iter().map(team_member_hit).collect(),
        clients: clients.into_iter().map(client_hit).collect(),
    })
}

fn labels(bundle: &MessageBundle) -> SearchLabels {
    SearchLabels {
        back: bundle.text(Namespace::Search, "back"),
        placeholder: bundle.text(Namespace::Search, "placeholder"),
        submit: bundle.text(Namespace::Search, "searchBtn"),
        team_members: bundle.text(Namespace::Search, "teamMembers"),
        clients: bundle.text(Namespace::Search, "clients"),
        no_results: bundle.text(Namespace::Search, "noResults"),
        footer_note: bundle.text(Namespace::Search, "footerNote"),
    }
}

fn team_member_hit(member: CmsTeamMember) -> TeamMemberHit {
    TeamMemberHit {
        name: member.name,
        position: member.position,
        image_url: member.image_url,
        social_links: member
            .social_links
            .into_iter()
            .map(|link| SocialLinkView {
                label: link.label,
                href: link.href,
            })
            .collect(),
    }
}

fn client_hit(client: CmsClientRecord) -> ClientHit {
    ClientHit {
        name: client.name,
        company: client.company,
        message: client.message,
        image_url: client.image_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{CountingSource, request_locale, state_with, test_state};
    use atrium_i18n::Locale;

    fn query(q: Option<&str>) -> Query<SearchQuery> {
        Query(SearchQuery {
            q: q.map(ToString::to_string),
        })
    }

    #[tokio::test]
    async fn blank_query_makes_no_cms_call() -> anyhow::Result<()> {
        let source = Arc::new(CountingSource::default());
        let state = state_with(source.clone())?;
        for q in [None, Some(""), Some("   ")] {
            let Json(body) = search(
                State(Arc::clone(&state)),
                Extension(request_locale(Locale::En)),
                query(q),
            )
            .await;
            assert_eq!(body.query, "");
            assert_eq!(body.heading, "Results for “…”");
            assert!(!body.is_empty_result());
        }
        assert_eq!(source.calls(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn query_hits_both_collections() -> anyhow::Result<()> {
        let source = Arc::new(CountingSource::default());
        let state = state_with(source.clone())?;
        let Json(body) = search(
            State(state),
            Extension(request_locale(Locale::En)),
            query(Some(" zed ")),
        )
        .await;
        assert_eq!(source.calls(), 2);
        assert_eq!(body.query, "zed");
        assert!(body.is_empty_result());
        assert_eq!(body.labels.no_results, "No results found.");
        Ok(())
    }

    #[tokio::test]
    async fn matches_are_mapped_to_hits() -> anyhow::Result<()> {
        let state = test_state()?;
        let Json(body) = search(
            State(state),
            Extension(request_locale(Locale::En)),
            query(Some("omar")),
        )
        .await;
        assert_eq!(body.heading, "Results for “omar”");
        assert_eq!(body.team_members.len(), 1);
        assert_eq!(body.team_members[0].social_links[0].label, "linkedin");
        assert!(body.clients.is_empty());
        Ok(())
    }
}
