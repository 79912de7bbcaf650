use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::{error::Error, experience::Experience, util::default_ureq_agent_builder};

pub type CatalogHandle = Arc<Catalog>;

/// Remote catalog of immersive experiences.  The shell issues at most one
/// fetch per mount; there is no retry policy.
pub struct Catalog {
    agent: ureq::Agent,
    endpoint: Url,
}

impl Catalog {
    /// `base_url` should end with a trailing slash so the endpoint joins as
    /// a path segment.
    pub fn new(base_url: &str, proxy_url: Option<&str>) -> Result<CatalogHandle, Error> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join("vr-experiences"))
            .map_err(|err| Error::TransportError(Box::new(err)))?;
        let agent = default_ureq_agent_builder(proxy_url).build().into();
        Ok(Arc::new(Self { agent, endpoint }))
    }

    pub fn fetch_experiences(&self) -> Result<Vec<Experience>, Error> {
        let mut response = self.agent.get(self.endpoint.as_str()).call()?;
        let envelope: CatalogResponse = response.body_mut().read_json()?;
        decode(envelope)
    }
}

#[derive(Deserialize)]
struct CatalogResponse {
    success: bool,
    #[serde(default)]
    data: Vec<Experience>,
}

fn decode(envelope: CatalogResponse) -> Result<Vec<Experience>, Error> {
    if !envelope.success {
        return Err(Error::CatalogUnavailable);
    }
    Ok(filter_playable(envelope.data))
}

/// Records that are private or fail validation are dropped with a warning
/// instead of failing the whole load.
fn filter_playable(records: Vec<Experience>) -> Vec<Experience> {
    records
        .into_iter()
        .filter(|exp| {
            if !exp.is_public {
                log::info!("skipping private experience {}", exp.id);
                false
            } else if !exp.is_playable() {
                log::warn!(
                    "skipping unplayable experience {}: no frames or zero duration",
                    exp.id
                );
                false
            } else {
                true
            }
        })
        .collect()
}

/// Loading state of the catalog, owned by the shell.
pub enum CatalogState {
    Empty,
    Loading,
    Ready(Arc<Vec<Experience>>),
    Failed(String),
}

impl CatalogState {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn resolve(&mut self, list: Vec<Experience>) {
        *self = Self::Ready(Arc::new(list));
    }

    pub fn reject(&mut self, reason: String) {
        *self = Self::Failed(reason);
    }

    /// Experiences to render as gallery cards.  Empty while loading and
    /// after a failed load, keeping the gallery renderable either way.
    pub fn experiences(&self) -> &[Experience] {
        match self {
            Self::Ready(list) => list,
            _ => &[],
        }
    }

    pub fn find(&self, id: &str) -> Option<Experience> {
        self.experiences().iter().find(|exp| &*exp.id == id).cloned()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::Empty
    }
}
