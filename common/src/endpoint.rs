use crate::configuration::ClientConfiguration;

/// Discovery resources exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverResource {
    Schema,
    Table,
    Refs,
    Blockchains,
    Views,
}

impl DiscoverResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoverResource::Schema => "schema",
            DiscoverResource::Table => "table",
            DiscoverResource::Refs => "refs",
            DiscoverResource::Blockchains => "blockchains",
            DiscoverResource::Views => "views",
        }
    }
}

impl ClientConfiguration {
    /// Base URL for the given discovery resource.
    pub fn discover_endpoint(&self, resource: DiscoverResource) -> String {
        format!("{}/v1/discover/{}", self.base_url(), resource.as_str())
    }

    /// URL of the DDL endpoint.
    pub fn ddl_endpoint(&self) -> String {
        format!("{}/v1/sql/ddl", self.base_url())
    }

    fn base_url(&self) -> String {
        let url = self.api_url.to_string();
        url.trim_end_matches('/').to_string()
    }
}
