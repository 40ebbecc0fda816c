use chaintable_common::{
    check_upper_case, ClientConfiguration, ClientError, ClientErrorResultExt, DiscoverResource,
};
use error_stack::Result;
use reqwest::Client;
use tracing::{debug, instrument};

/// Client for the read-only metadata/listing endpoints.
///
/// Holds a single pooled [`reqwest::Client`] reused across calls. All
/// methods attach `Authorization: Bearer <token>` from the client
/// configuration and return the raw response body.
///
/// The discovery endpoints do not branch on the HTTP status code: any
/// readable response body is returned as-is, including error bodies from
/// non-2xx responses. Callers inspect the body.
#[derive(Clone)]
pub struct DiscoveryClient {
    client: Client,
    configuration: ClientConfiguration,
}

impl DiscoveryClient {
    pub fn new(configuration: ClientConfiguration) -> Self {
        Self {
            client: Client::new(),
            configuration,
        }
    }

    /// List available namespaces based on scope and an optional search pattern.
    pub async fn list_schemas(
        &self,
        scope: &str,
        search_pattern: Option<&str>,
    ) -> Result<String, ClientError> {
        let mut params = vec![("scope", scope.to_string())];
        if let Some(search_pattern) = search_pattern {
            params.push(("searchPattern", search_pattern.to_string()));
        }

        let endpoint = self.configuration.discover_endpoint(DiscoverResource::Schema);
        self.execute(&endpoint, &params).await
    }

    /// List tables, optionally restricted to a schema.
    pub async fn list_tables(
        &self,
        schema: Option<&str>,
        scope: &str,
        search_pattern: Option<&str>,
    ) -> Result<String, ClientError> {
        if let Some(schema) = schema {
            check_upper_case(schema)?;
        }

        let mut params = vec![("scope", scope.to_string())];
        if let Some(schema) = schema {
            params.push(("schema", schema.to_string()));
        }
        if let Some(search_pattern) = search_pattern {
            params.push(("searchPattern", search_pattern.to_string()));
        }

        let endpoint = self.configuration.discover_endpoint(DiscoverResource::Table);
        self.execute(&endpoint, &params).await
    }

    /// List columns in the given schema and table.
    pub async fn list_columns(&self, schema: &str, table: &str) -> Result<String, ClientError> {
        self.list_table_info("column", schema, table).await
    }

    /// List indexes in the given schema and table.
    pub async fn list_table_index(&self, schema: &str, table: &str) -> Result<String, ClientError> {
        self.list_table_info("index", schema, table).await
    }

    /// List primary keys in the given schema and table.
    pub async fn list_table_primary_key(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<String, ClientError> {
        self.list_table_info("primarykey", schema, table).await
    }

    /// List table relationships for a schema and scope.
    pub async fn list_table_relations(
        &self,
        schema: &str,
        scope: &str,
    ) -> Result<String, ClientError> {
        check_upper_case(schema)?;

        let endpoint = format!(
            "{}/relations",
            self.configuration.discover_endpoint(DiscoverResource::Table)
        );
        let params = [
            ("schema", schema.to_string()),
            ("scope", scope.to_string()),
        ];
        self.execute(&endpoint, &params).await
    }

    /// List primary key references for a schema, table, and column.
    pub async fn list_primary_key_references(
        &self,
        schema: &str,
        table: &str,
        column: &str,
    ) -> Result<String, ClientError> {
        self.list_key_references("primarykey", schema, table, column)
            .await
    }

    /// List foreign key references for a schema, table, and column.
    pub async fn list_foreign_key_references(
        &self,
        schema: &str,
        table: &str,
        column: &str,
    ) -> Result<String, ClientError> {
        self.list_key_references("foreignkey", schema, table, column)
            .await
    }

    /// List all blockchains known to the service.
    pub async fn list_blockchains(&self) -> Result<String, ClientError> {
        let endpoint = self
            .configuration
            .discover_endpoint(DiscoverResource::Blockchains);
        self.execute(&endpoint, &[]).await
    }

    /// List schemas for a specific blockchain.
    pub async fn list_blockchain_schemas(&self, chain_id: &str) -> Result<String, ClientError> {
        self.list_blockchain_info(chain_id, "schemas").await
    }

    /// Metadata for a specific blockchain.
    pub async fn list_blockchain_information(
        &self,
        chain_id: &str,
    ) -> Result<String, ClientError> {
        self.list_blockchain_info(chain_id, "meta").await
    }

    /// List views, optionally filtered by name and ownership.
    pub async fn list_views(
        &self,
        name: Option<&str>,
        owned: Option<bool>,
    ) -> Result<String, ClientError> {
        let mut params = Vec::new();
        if let Some(name) = name {
            params.push(("name", name.to_string()));
        }
        if let Some(owned) = owned {
            params.push(("owned", owned.to_string()));
        }

        let endpoint = self.configuration.discover_endpoint(DiscoverResource::Views);
        self.execute(&endpoint, &params).await
    }

    async fn list_table_info(
        &self,
        info_type: &str,
        schema: &str,
        table: &str,
    ) -> Result<String, ClientError> {
        check_upper_case(schema)?;
        check_upper_case(table)?;

        let endpoint = format!(
            "{}/{}",
            self.configuration.discover_endpoint(DiscoverResource::Table),
            info_type
        );
        let params = [
            ("schema", schema.to_string()),
            ("table", table.to_string()),
        ];
        self.execute(&endpoint, &params).await
    }

    async fn list_key_references(
        &self,
        key_type: &str,
        schema: &str,
        table: &str,
        column: &str,
    ) -> Result<String, ClientError> {
        for identifier in [schema, table, column] {
            check_upper_case(identifier)?;
        }

        let endpoint = format!(
            "{}/{}",
            self.configuration.discover_endpoint(DiscoverResource::Refs),
            key_type
        );
        let params = [
            ("schema", schema.to_string()),
            ("table", table.to_string()),
            ("column", column.to_string()),
        ];
        self.execute(&endpoint, &params).await
    }

    async fn list_blockchain_info(
        &self,
        chain_id: &str,
        info_type: &str,
    ) -> Result<String, ClientError> {
        let endpoint = format!(
            "{}/{}/{}",
            self.configuration
                .discover_endpoint(DiscoverResource::Blockchains),
            chain_id,
            info_type
        );
        self.execute(&endpoint, &[]).await
    }

    #[instrument(skip(self, params), err(Debug))]
    async fn execute(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, ClientError> {
        let response = self
            .client
            .get(endpoint)
            .query(params)
            .bearer_auth(&self.configuration.access_token)
            .send()
            .await
            .request_error("failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx bodies are passed through as data on this path.
            debug!(status = %status, "non-success status on discovery request");
        }

        let body = response
            .text()
            .await
            .request_error("failed to read response body")?;

        debug!(endpoint = %endpoint, "discovery call success");
        Ok(body)
    }
}
