use std::fmt;

/// Fully-qualified identifier of one Pub/Sub subscription, resolved once at
/// construction and immutable for the lifetime of the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPath {
    project_id: String,
    subscription_id: String,
    path: String,
}

impl SubscriptionPath {
    pub fn new(project_id: &str, subscription_id: &str) -> Self {
        Self {
            project_id: project_id.to_owned(),
            subscription_id: subscription_id.to_owned(),
            path: format!("projects/{project_id}/subscriptions/{subscription_id}"),
        }
    }

    /// The fully-qualified path, `projects/{project}/subscriptions/{sub}`.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Route-facing name, `{project}/{sub}`.
    pub fn route_name(&self) -> String {
        format!("{}/{}", self.project_id, self.subscription_id)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }
}

impl fmt::Display for SubscriptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
