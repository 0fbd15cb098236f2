use crate::{
    error::Result,
    models::{
        alert::{InputAlert, InputBulkUpdateAlert, InputUpdateAlert, OutputAlert},
        case::OutputCase,
        observable::{InputObservable, OutputObservable},
    },
    query::{FilterExpr, Paginate, QueryExpr, SortExpr, build_subquery},
    session::Session,
};
use reqwest::Method;
use serde_json::json;

/// Alert operations of the TheHive v5 API.
///
/// Every method maps to one HTTP call; the shared [`Session`] does the
/// actual request construction and error surfacing.
pub struct AlertEndpoint<'a> {
    session: &'a Session,
}

impl<'a> AlertEndpoint<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Create an alert
    #[tracing::instrument(skip(self, alert))]
    pub async fn create(&self, alert: &InputAlert) -> Result<OutputAlert> {
        self.session
            .make_request(
                Method::POST,
                "/api/v1/alert",
                None,
                Some(serde_json::to_value(alert)?),
            )
            .await
    }

    /// Get an alert by id
    pub async fn get(&self, alert_id: &str) -> Result<OutputAlert> {
        self.session
            .make_request(Method::GET, &format!("/api/v1/alert/{alert_id}"), None, None)
            .await
    }

    /// Update fields of an existing alert
    pub async fn update(&self, alert_id: &str, fields: &InputUpdateAlert) -> Result<()> {
        self.session
            .make_request_empty(
                Method::PATCH,
                &format!("/api/v1/alert/{alert_id}"),
                None,
                Some(serde_json::to_value(fields)?),
            )
            .await
    }

    /// Delete an alert
    pub async fn delete(&self, alert_id: &str) -> Result<()> {
        self.session
            .make_request_empty(
                Method::DELETE,
                &format!("/api/v1/alert/{alert_id}"),
                None,
                None,
            )
            .await
    }

    /// Apply the same field updates to several alerts
    pub async fn bulk_update(&self, fields: &InputBulkUpdateAlert) -> Result<()> {
        self.session
            .make_request_empty(
                Method::PATCH,
                "/api/v1/alert/_bulk",
                None,
                Some(serde_json::to_value(fields)?),
            )
            .await
    }

    /// Delete several alerts at once
    pub async fn bulk_delete(&self, ids: &[&str]) -> Result<()> {
        self.session
            .make_request_empty(
                Method::POST,
                "/api/v1/alert/delete/_bulk",
                None,
                Some(json!({ "ids": ids })),
            )
            .await
    }

    /// Subscribe to updates of an alert
    pub async fn follow(&self, alert_id: &str) -> Result<()> {
        self.session
            .make_request_empty(
                Method::POST,
                &format!("/api/v1/alert/{alert_id}/follow"),
                None,
                None,
            )
            .await
    }

    /// Unsubscribe from updates of an alert
    pub async fn unfollow(&self, alert_id: &str) -> Result<()> {
        self.session
            .make_request_empty(
                Method::POST,
                &format!("/api/v1/alert/{alert_id}/unfollow"),
                None,
                None,
            )
            .await
    }

    /// Promote an alert into a new case
    #[tracing::instrument(skip(self))]
    pub async fn promote_to_case(&self, alert_id: &str) -> Result<OutputCase> {
        self.session
            .make_request(
                Method::POST,
                &format!("/api/v1/alert/{alert_id}/case"),
                None,
                Some(json!({})),
            )
            .await
    }

    /// Attach an observable to an alert
    pub async fn create_observable(
        &self,
        alert_id: &str,
        observable: &InputObservable,
    ) -> Result<Vec<OutputObservable>> {
        self.session
            .make_request(
                Method::POST,
                &format!("/api/v1/alert/{alert_id}/artifact"),
                None,
                Some(serde_json::to_value(observable)?),
            )
            .await
    }

    /// Merge an alert into an existing case
    #[tracing::instrument(skip(self))]
    pub async fn merge_into_case(&self, alert_id: &str, case_id: &str) -> Result<OutputCase> {
        self.session
            .make_request(
                Method::POST,
                &format!("/api/v1/alert/{alert_id}/merge/{case_id}"),
                None,
                None,
            )
            .await
    }

    /// Merge several alerts into an existing case
    #[tracing::instrument(skip(self, alert_ids))]
    pub async fn bulk_merge_into_case(
        &self,
        case_id: &str,
        alert_ids: &[&str],
    ) -> Result<OutputCase> {
        self.session
            .make_request(
                Method::POST,
                "/api/v1/alert/merge/_bulk",
                None,
                Some(json!({ "caseId": case_id, "alertIds": alert_ids })),
            )
            .await
    }

    /// Find alerts matching the given filter, sort and pagination
    #[tracing::instrument(skip_all)]
    pub async fn find(
        &self,
        filters: Option<&FilterExpr>,
        sortby: Option<&SortExpr>,
        paginate: Option<&Paginate>,
    ) -> Result<Vec<OutputAlert>> {
        let mut query: QueryExpr = vec![json!({ "_name": "listAlert" })];
        query.extend(build_subquery(filters, sortby, paginate));

        self.session
            .make_request(
                Method::POST,
                "/api/v1/query",
                Some(&[("name", "alerts")]),
                Some(json!({ "query": query })),
            )
            .await
    }

    /// Count alerts matching the given filter
    #[tracing::instrument(skip_all)]
    pub async fn count(&self, filters: Option<&FilterExpr>) -> Result<u64> {
        let mut query: QueryExpr = vec![json!({ "_name": "listAlert" })];
        query.extend(build_subquery(filters, None, None));
        query.push(json!({ "_name": "count" }));

        self.session
            .make_request(
                Method::POST,
                "/api/v1/query",
                Some(&[("name", "alerts.count")]),
                Some(json!({ "query": query })),
            )
            .await
    }

    /// Find observables attached to an alert
    #[tracing::instrument(skip(self, filters, sortby, paginate))]
    pub async fn find_observables(
        &self,
        alert_id: &str,
        filters: Option<&FilterExpr>,
        sortby: Option<&SortExpr>,
        paginate: Option<&Paginate>,
    ) -> Result<Vec<OutputObservable>> {
        let mut query: QueryExpr = vec![
            json!({ "_name": "getAlert", "idOrName": alert_id }),
            json!({ "_name": "observables" }),
        ];
        query.extend(build_subquery(filters, sortby, paginate));

        self.session
            .make_request(
                Method::POST,
                "/api/v1/query",
                Some(&[("name", "alert-observables")]),
                Some(json!({ "query": query })),
            )
            .await
    }
}
