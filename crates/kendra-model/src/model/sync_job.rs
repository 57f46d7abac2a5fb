//! Starting and stopping data source synchronization.

use serde::{Deserialize, Serialize};

use super::ids::{DataSourceId, ExecutionId, IndexId};
use super::records::SyncJobTarget;
use super::wire::{EmptyResponse, ServiceRequest};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDataSourceSyncJobRequest {
    pub id: DataSourceId,
    pub index_id: IndexId,
}

impl StartDataSourceSyncJobRequest {
    pub fn new(id: DataSourceId, index_id: IndexId) -> Self {
        Self { id, index_id }
    }
}

impl ServiceRequest for StartDataSourceSyncJobRequest {
    const OPERATION: &'static str = "StartDataSourceSyncJob";
    type Response = StartDataSourceSyncJobResponse;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDataSourceSyncJobResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<ExecutionId>,
}

impl StartDataSourceSyncJobResponse {
    /// The job this response started, addressed by data source and execution id.
    pub fn target(&self, request: &StartDataSourceSyncJobRequest) -> Option<SyncJobTarget> {
        self.execution_id
            .clone()
            .map(|execution_id| SyncJobTarget::new(request.id.clone(), execution_id))
    }
}

/// Stops the running job of a data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopDataSourceSyncJobRequest {
    pub id: DataSourceId,
    pub index_id: IndexId,
}

impl StopDataSourceSyncJobRequest {
    pub fn new(id: DataSourceId, index_id: IndexId) -> Self {
        Self { id, index_id }
    }

    pub fn for_target(target: &SyncJobTarget, index_id: IndexId) -> Self {
        Self::new(target.data_source_id.clone(), index_id)
    }
}

impl ServiceRequest for StopDataSourceSyncJobRequest {
    const OPERATION: &'static str = "StopDataSourceSyncJob";
    type Response = EmptyResponse;
}
