//! List and describe operations.

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{DataSourceId, IndexId, PageToken};
use super::pagination::{PageRequest, Paginated};
use super::records::{
    DataSourceSummary, DataSourceSyncJob, FaqSummary, IndexConfigurationSummary, IndexStatistics,
};
use super::vocabulary::{DataSourceSyncJobStatus, IndexEdition, IndexStatus};
use super::wire::{ServiceRequest, Timestamp};
use crate::config::PagingConfig;
use crate::{ModelError, ModelResult};

fn check_max_results(value: u32, max: u32) -> ModelResult<u32> {
    if value == 0 || value > max {
        return Err(ModelError::OutOfRange {
            field: "max results",
            min: 1,
            max: i64::from(max),
            value: i64::from(value),
        });
    }
    Ok(value)
}

const LIST_MAX_RESULTS: u32 = 100;
const SYNC_JOBS_MAX_RESULTS: u32 = 10;

fn deserialize_max_results<'de, D: Deserializer<'de>>(
    deserializer: D,
    max: u32,
) -> Result<Option<u32>, D::Error> {
    Option::<u32>::deserialize(deserializer)?
        .map(|value| check_max_results(value, max))
        .transpose()
        .map_err(serde::de::Error::custom)
}

fn deserialize_list_max_results<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    deserialize_max_results(deserializer, LIST_MAX_RESULTS)
}

fn deserialize_sync_jobs_max_results<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    deserialize_max_results(deserializer, SYNC_JOBS_MAX_RESULTS)
}

/// Shared plumbing for list requests: token and page size accessors, and
/// the response's page view.
macro_rules! list_operation {
    ($request:ident => $response:ident, $operation:literal, $items:ident: $item:ty, max = $max:expr) => {
        impl $request {
            /// Largest page size the operation accepts.
            pub const MAX_RESULTS: u32 = $max;

            pub fn with_next_token(mut self, token: PageToken) -> Self {
                self.next_token = Some(token);
                self
            }

            pub fn with_max_results(mut self, max_results: u32) -> ModelResult<Self> {
                self.max_results = Some(check_max_results(max_results, Self::MAX_RESULTS)?);
                Ok(self)
            }

            /// Fill in the page size from config when none was set.
            pub fn with_paging_defaults(mut self, paging: &PagingConfig) -> Self {
                if self.max_results.is_none() {
                    self.max_results = Some(paging.max_results_for(Self::MAX_RESULTS));
                }
                self
            }

            pub fn max_results(&self) -> Option<u32> {
                self.max_results
            }
        }

        impl PageRequest for $request {
            fn page_token(&self) -> Option<&PageToken> {
                self.next_token.as_ref()
            }

            fn set_page_token(&mut self, token: Option<PageToken>) {
                self.next_token = token;
            }
        }

        impl ServiceRequest for $request {
            const OPERATION: &'static str = $operation;
            type Response = $response;
        }

        impl Paginated for $response {
            type Item = $item;

            fn items(&self) -> &[$item] {
                &self.$items
            }

            fn next_token(&self) -> Option<&PageToken> {
                self.next_token.as_ref()
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIndicesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_list_max_results"
    )]
    max_results: Option<u32>,
}

impl ListIndicesRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIndicesResponse {
    #[serde(default)]
    pub index_configuration_summary_items: Vec<IndexConfigurationSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
}

list_operation!(
    ListIndicesRequest => ListIndicesResponse,
    "ListIndices",
    index_configuration_summary_items: IndexConfigurationSummary,
    max = LIST_MAX_RESULTS
);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourcesRequest {
    pub index_id: IndexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_list_max_results"
    )]
    max_results: Option<u32>,
}

impl ListDataSourcesRequest {
    pub fn new(index_id: IndexId) -> Self {
        Self {
            index_id,
            next_token: None,
            max_results: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourcesResponse {
    #[serde(default)]
    pub summary_items: Vec<DataSourceSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
}

list_operation!(
    ListDataSourcesRequest => ListDataSourcesResponse,
    "ListDataSources",
    summary_items: DataSourceSummary,
    max = LIST_MAX_RESULTS
);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFaqsRequest {
    pub index_id: IndexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_list_max_results"
    )]
    max_results: Option<u32>,
}

impl ListFaqsRequest {
    pub fn new(index_id: IndexId) -> Self {
        Self {
            index_id,
            next_token: None,
            max_results: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFaqsResponse {
    #[serde(default)]
    pub faq_summary_items: Vec<FaqSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
}

list_operation!(
    ListFaqsRequest => ListFaqsResponse,
    "ListFaqs",
    faq_summary_items: FaqSummary,
    max = LIST_MAX_RESULTS
);

/// Synchronization history of one data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourceSyncJobsRequest {
    pub id: DataSourceId,
    pub index_id: IndexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_sync_jobs_max_results"
    )]
    max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<DataSourceSyncJobStatus>,
}

impl ListDataSourceSyncJobsRequest {
    pub fn new(id: DataSourceId, index_id: IndexId) -> Self {
        Self {
            id,
            index_id,
            next_token: None,
            max_results: None,
            status_filter: None,
        }
    }

    pub fn with_status_filter(mut self, status: DataSourceSyncJobStatus) -> Self {
        self.status_filter = Some(status);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataSourceSyncJobsResponse {
    #[serde(default)]
    pub history: Vec<DataSourceSyncJob>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<PageToken>,
}

list_operation!(
    ListDataSourceSyncJobsRequest => ListDataSourceSyncJobsResponse,
    "ListDataSourceSyncJobs",
    history: DataSourceSyncJob,
    max = SYNC_JOBS_MAX_RESULTS
);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIndexRequest {
    pub id: IndexId,
}

impl DescribeIndexRequest {
    pub fn new(id: IndexId) -> Self {
        Self { id }
    }
}

impl ServiceRequest for DescribeIndexRequest {
    const OPERATION: &'static str = "DescribeIndex";
    type Response = DescribeIndexResponse;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeIndexResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<IndexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<IndexEdition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IndexStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_statistics: Option<IndexStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
