use chaintable_common::{ClientConfiguration, ClientError, ClientErrorResultExt};
use error_stack::Result;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::request::{AccessType, DdlRequest};

/// Client for the DDL endpoint.
///
/// Statements are authorized by the biscuits carried in the request body;
/// no bearer token is attached on this path. Unlike the discovery client,
/// the DDL client treats any status other than 200 as a failure.
#[derive(Clone)]
pub struct DdlClient {
    client: Client,
    configuration: ClientConfiguration,
}

impl DdlClient {
    pub fn new(configuration: ClientConfiguration) -> Self {
        Self {
            client: Client::new(),
            configuration,
        }
    }

    /// Create a new table with the given access policy.
    ///
    /// Appends the `WITH "public_key=<hex>,access_type=<type>"` configuration
    /// clause to the statement before submitting it.
    pub async fn create_table(
        &self,
        sql_text: &str,
        access_type: AccessType,
        public_key: &[u8],
        biscuits: &[String],
    ) -> Result<(), ClientError> {
        let sql_text = format!(
            "{} WITH \"public_key={},access_type={}\"",
            sql_text,
            hex::encode(public_key),
            access_type
        );
        self.ddl(&sql_text, biscuits).await
    }

    /// Create a new schema. Same request shape as [`DdlClient::ddl`].
    pub async fn create_schema(
        &self,
        sql_text: &str,
        biscuits: &[String],
    ) -> Result<(), ClientError> {
        self.ddl(sql_text, biscuits).await
    }

    /// Submit a DDL statement (CREATE, ALTER, DROP).
    #[instrument(skip(self, sql_text, biscuits), err(Debug))]
    pub async fn ddl(&self, sql_text: &str, biscuits: &[String]) -> Result<(), ClientError> {
        let body = DdlRequest {
            biscuits: biscuits.to_vec(),
            sql_text: sql_text.to_string(),
        };

        let mut request = self
            .client
            .post(self.configuration.ddl_endpoint())
            .json(&body);
        if let Some(origin_app) = &self.configuration.origin_app {
            request = request.header("X-Origin-App", origin_app);
        }

        let response = request
            .send()
            .await
            .request_error("failed to send request")?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .request_error("failed to read response body")?;

        if status != StatusCode::OK {
            warn!(status = %status, "ddl request rejected");
            return Err(ClientError::server_error(&format!(
                "request failed with status {}: {}",
                status.as_u16(),
                response_body
            )));
        }

        debug!("ddl call success");
        Ok(())
    }
}
