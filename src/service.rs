use crate::endpoint::{Endpoint, END_CAMPAIGNS, END_ENTITIES};
use crate::error::{Result, ResultExt};
use crate::payload::Payload;
use crate::response::{DataEnvelope, List, ListEnvelope};
use crate::rest::RestContext;
use crate::time::Time;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Plumbing shared by every resource service: the dispatcher plus the
/// resource's own path segment and display name.
#[derive(Debug, Clone)]
pub(crate) struct Service {
    rest: Arc<RestContext>,
    end: Endpoint,
    kind: &'static str,
}

impl Service {
    pub(crate) fn new(rest: Arc<RestContext>, end: Endpoint, kind: &'static str) -> Self {
        Service { rest, end, kind }
    }

    /// `campaigns/{camp_id}/{resource}`
    pub(crate) fn campaign(&self, camp_id: i64) -> Result<Endpoint> {
        Ok(campaign_root(camp_id)?.concat(&self.end))
    }

    /// `campaigns/{camp_id}/entities/{ent_id}/{resource}`
    pub(crate) fn entity(&self, camp_id: i64, ent_id: i64) -> Result<Endpoint> {
        let end = campaign_root(camp_id)?
            .concat(&END_ENTITIES)
            .with_id(ent_id)
            .context(|| "invalid Entity ID")?;
        Ok(end.concat(&self.end))
    }

    /// `campaigns/{camp_id}/{parent}/{parent_id}/{resource}`
    pub(crate) fn nested(
        &self,
        camp_id: i64,
        parent: &Endpoint,
        parent_kind: &str,
        parent_id: i64,
    ) -> Result<Endpoint> {
        let end = campaign_root(camp_id)?
            .concat(parent)
            .with_id(parent_id)
            .context(|| format!("invalid {} ID", parent_kind))?;
        Ok(end.concat(&self.end))
    }

    pub(crate) fn index<T>(&self, base: Result<Endpoint>, sync: Option<&Time>) -> Result<List<T>>
    where
        T: DeserializeOwned,
    {
        self.list(base, sync)
            .context(|| format!("cannot index {}", self.kind))
    }

    /// Index without the operation context, for callers adding their own
    pub(crate) fn list<T>(&self, base: Result<Endpoint>, sync: Option<&Time>) -> Result<List<T>>
    where
        T: DeserializeOwned,
    {
        let mut end = base?;
        if let Some(since) = sync {
            end = end.with_since(since);
        }
        self.rest.get::<ListEnvelope<T>>(&end)?.into_list()
    }

    pub(crate) fn get<T>(&self, base: Result<Endpoint>, id: i64) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.fetch(base, id)
            .context(|| format!("cannot get {} (ID: {})", self.kind, id))
    }

    fn fetch<T>(&self, base: Result<Endpoint>, id: i64) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let end = with_resource_id(base?, self.kind, id)?;
        self.rest.get::<DataEnvelope<T>>(&end)?.into_data()
    }

    pub(crate) fn create<T, P>(&self, base: Result<Endpoint>, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Payload,
    {
        self.create_inner(base, payload)
            .context(|| format!("cannot create {}", self.kind))
    }

    fn create_inner<T, P>(&self, base: Result<Endpoint>, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Payload,
    {
        let end = base?;
        let body = payload.to_payload()?;
        self.rest.post::<DataEnvelope<T>>(&end, body)?.into_data()
    }

    pub(crate) fn update<T, P>(&self, base: Result<Endpoint>, id: i64, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Payload,
    {
        self.update_inner(base, id, payload)
            .context(|| format!("cannot update {} (ID: {})", self.kind, id))
    }

    fn update_inner<T, P>(&self, base: Result<Endpoint>, id: i64, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Payload,
    {
        let end = with_resource_id(base?, self.kind, id)?;
        let body = payload.to_payload()?;
        self.rest.put::<DataEnvelope<T>>(&end, body)?.into_data()
    }

    pub(crate) fn delete(&self, base: Result<Endpoint>, id: i64) -> Result<()> {
        let end = base.and_then(|base| with_resource_id(base, self.kind, id));
        end.and_then(|end| self.rest.delete(&end))
            .context(|| format!("cannot delete {} (ID: {})", self.kind, id))
    }
}

/// `campaigns/{camp_id}`
pub(crate) fn campaign_root(camp_id: i64) -> Result<Endpoint> {
    END_CAMPAIGNS
        .with_id(camp_id)
        .context(|| "invalid Campaign ID")
}

fn with_resource_id(base: Endpoint, kind: &str, id: i64) -> Result<Endpoint> {
    base.with_id(id).context(|| format!("invalid {} ID", kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Config;
    use crate::endpoint::{END_CHARACTERS, END_LOCATIONS, END_MAP_POINTS};
    use crate::error::KankaError;
    use crate::rest::{HttpRequest, HttpResponse, Transport};
    use crate::token::Token;

    struct Unreachable;

    impl Transport for Unreachable {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse> {
            panic!("no request expected");
        }
    }

    fn service(end: Endpoint, kind: &'static str) -> Service {
        let rest = RestContext::new(Token::new("tok"), Config::default(), Box::new(Unreachable));
        Service::new(Arc::new(rest), end, kind)
    }

    #[test]
    fn test_campaign_path() {
        let svc = service(END_CHARACTERS, "Character");
        assert_eq!(
            svc.campaign(5272).unwrap().as_str(),
            "campaigns/5272/characters"
        );
    }

    #[test]
    fn test_entity_path() {
        let svc = service(Endpoint::from_static("attributes"), "Attribute");
        assert_eq!(
            svc.entity(1, 2).unwrap().as_str(),
            "campaigns/1/entities/2/attributes"
        );

        let err = svc.entity(1, -2).unwrap_err();
        assert!(err.to_string().starts_with("invalid Entity ID"));
    }

    #[test]
    fn test_nested_path() {
        let svc = service(END_MAP_POINTS, "Map Point");
        assert_eq!(
            svc.nested(1, &END_LOCATIONS, "Location", 9).unwrap().as_str(),
            "campaigns/1/locations/9/map_points"
        );

        let err = svc.nested(1, &END_LOCATIONS, "Location", -9).unwrap_err();
        assert!(err.to_string().starts_with("invalid Location ID"));
    }

    #[test]
    fn test_negative_ids_never_reach_transport() {
        let svc = service(END_CHARACTERS, "Character");

        let err = svc.index::<serde_json::Value>(svc.campaign(-123), None).unwrap_err();
        assert!(err.to_string().contains("invalid Campaign ID"));
        assert!(matches!(err.root(), KankaError::InvalidId { id: -123 }));

        let err = svc.get::<serde_json::Value>(svc.campaign(1), -5).unwrap_err();
        assert!(err.to_string().contains("invalid Character ID"));

        let err = svc.delete(svc.campaign(1), -5).unwrap_err();
        assert!(err.to_string().starts_with("cannot delete Character (ID: -5)"));
    }
}
