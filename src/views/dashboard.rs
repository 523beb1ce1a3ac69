use super::timestamp_from_nanos;
use crate::backend::{BackendClient, DesignId, DesignPreview, User};
use crate::design::DesignKind;

/// One design card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCard {
    pub id: DesignId,
    pub name: String,
    pub description: String,
    pub kind: DesignKind,
    /// Creation day, `YYYY-MM-DD`
    pub created: String,
    pub has_cover: bool,
    pub visible_3d_rendering: bool,
}

impl From<&DesignPreview> for PatternCard {
    fn from(design: &DesignPreview) -> Self {
        Self {
            id: design.id,
            name: design.name.clone(),
            description: design.description.clone(),
            kind: design.kind,
            created: timestamp_from_nanos(design.date_creation)
                .format("%Y-%m-%d")
                .to_string(),
            has_cover: !design.cover_image.is_empty(),
            visible_3d_rendering: design.visible_3d_rendering,
        }
    }
}

/// Summary counters shown above the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_patterns: usize,
    pub nfts_minted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub greeting: String,
    /// Present only for a registered user
    pub stats: Option<DashboardStats>,
    /// Newest first
    pub cards: Vec<PatternCard>,
}

impl DashboardView {
    /// Fetches the caller's designs. A failed fetch is logged and shows an
    /// empty list instead of an error page.
    pub async fn load(client: &BackendClient, user: Option<&User>) -> Self {
        let designs = match client.get_my_galery().await {
            Ok(designs) => designs,
            Err(err) => {
                log::error!("Error fetching designs: {}", err);
                Vec::new()
            }
        };
        Self::build(user, &designs)
    }

    pub fn build(user: Option<&User>, designs: &[DesignPreview]) -> Self {
        let greeting = match user {
            Some(user) => format!("Welcome back, {} !!!", user.name),
            None => "Welcome !!!".to_string(),
        };
        let stats = user.map(|user| DashboardStats {
            total_patterns: user.designs.len(),
            nfts_minted: 0,
        });

        let mut ordered: Vec<&DesignPreview> = designs.iter().collect();
        ordered.sort_by(|a, b| (b.date_creation, b.id).cmp(&(a.date_creation, a.id)));
        let cards = ordered.into_iter().map(PatternCard::from).collect();

        Self {
            greeting,
            stats,
            cards,
        }
    }

    /// No designs to show: the "create your first pattern" state.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
