//! Read-only records returned by describe, list and query operations.

use serde::{Deserialize, Serialize};

use super::attribute::DocumentAttribute;
use super::ids::{DataSourceId, ExecutionId, FaqId, IndexId, ResultId};
use super::vocabulary::{
    AdditionalResultAttributeValueType, DataSourceStatus, DataSourceSyncJobStatus,
    DataSourceType, FaqStatus, IndexEdition, IndexStatus, QueryResultType,
    SalesforceStandardObjectName, ScoreConfidence,
};
use super::wire::Timestamp;
use crate::{ModelError, ModelResult};

/// Document and FAQ counts for an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexStatistics {
    pub faq_statistics: FaqStatistics,
    pub text_document_statistics: TextDocumentStatistics,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaqStatistics {
    pub indexed_question_answers_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextDocumentStatistics {
    pub indexed_text_documents_count: u64,
    pub indexed_text_bytes: u64,
}

/// Character range of a match inside a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "WireHighlight")]
pub struct Highlight {
    begin_offset: u32,
    end_offset: u32,
    #[serde(default)]
    pub top_answer: bool,
}

impl Highlight {
    /// Build a highlight covering `begin..end`.
    pub fn new(begin_offset: u32, end_offset: u32) -> ModelResult<Self> {
        if end_offset < begin_offset {
            return Err(ModelError::OutOfRange {
                field: "highlight end offset",
                min: i64::from(begin_offset),
                max: i64::from(u32::MAX),
                value: i64::from(end_offset),
            });
        }
        Ok(Self {
            begin_offset,
            end_offset,
            top_answer: false,
        })
    }

    pub fn with_top_answer(mut self, top_answer: bool) -> Self {
        self.top_answer = top_answer;
        self
    }

    pub fn begin_offset(&self) -> u32 {
        self.begin_offset
    }

    pub fn end_offset(&self) -> u32 {
        self.end_offset
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireHighlight {
    begin_offset: u32,
    end_offset: u32,
    #[serde(default)]
    top_answer: bool,
}

impl TryFrom<WireHighlight> for Highlight {
    type Error = ModelError;

    fn try_from(wire: WireHighlight) -> Result<Self, Self::Error> {
        Ok(Highlight::new(wire.begin_offset, wire.end_offset)?.with_top_answer(wire.top_answer))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextWithHighlights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Highlight>,
}

impl TextWithHighlights {
    /// Highlighted substrings, in highlight order. Offsets count characters;
    /// ranges falling outside the text are skipped.
    pub fn highlighted_fragments(&self) -> Vec<String> {
        let Some(text) = self.text.as_deref() else {
            return Vec::new();
        };
        let chars: Vec<char> = text.chars().collect();
        self.highlights
            .iter()
            .filter_map(|h| {
                let (begin, end) = (h.begin_offset as usize, h.end_offset as usize);
                chars.get(begin..end).map(|slice| slice.iter().collect())
            })
            .collect()
    }
}

/// Identifies one running synchronization job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncJobTarget {
    pub data_source_id: DataSourceId,
    pub execution_id: ExecutionId,
}

impl SyncJobTarget {
    pub fn new(data_source_id: DataSourceId, execution_id: ExecutionId) -> Self {
        Self {
            data_source_id,
            execution_id,
        }
    }
}

/// One entry of a data source's synchronization history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceSyncJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<ExecutionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DataSourceSyncJobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_error_code: Option<String>,
}

impl DataSourceSyncJob {
    /// Target for this job, if the history entry carries its execution id.
    pub fn target(&self, data_source_id: &DataSourceId) -> Option<SyncJobTarget> {
        self.execution_id
            .clone()
            .map(|execution_id| SyncJobTarget::new(data_source_id.clone(), execution_id))
    }

    pub fn is_running(&self) -> bool {
        self.status.is_some_and(|status| !status.is_terminal())
    }
}

/// Maps a field of the source repository onto an index field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceToIndexFieldMapping {
    pub data_source_field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_field_format: Option<String>,
    pub index_field_name: String,
}

/// Which standard Salesforce object to index and how its fields map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesforceStandardObjectConfiguration {
    pub name: SalesforceStandardObjectName,
    pub document_data_field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<DataSourceToIndexFieldMapping>,
}

impl SalesforceStandardObjectConfiguration {
    pub fn new(name: SalesforceStandardObjectName, document_data_field_name: impl Into<String>) -> Self {
        Self {
            name,
            document_data_field_name: document_data_field_name.into(),
            document_title_field_name: None,
            field_mappings: Vec::new(),
        }
    }

    pub fn with_title_field(mut self, field: impl Into<String>) -> Self {
        self.document_title_field_name = Some(field.into());
        self
    }

    pub fn with_field_mapping(mut self, mapping: DataSourceToIndexFieldMapping) -> Self {
        self.field_mappings.push(mapping);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DataSourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<DataSourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DataSourceStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexConfigurationSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<IndexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<IndexEdition>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub status: IndexStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaqSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FaqId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FaqStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Extra attribute attached to a query result, e.g. an answer passage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalResultAttribute {
    pub key: String,
    pub value_type: AdditionalResultAttributeValueType,
    pub value: AdditionalResultAttributeValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalResultAttributeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_with_highlights_value: Option<TextWithHighlights>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreAttributes {
    pub score_confidence: ScoreConfidence,
}

/// One result of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResultId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<QueryResultType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_attributes: Vec<AdditionalResultAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<TextWithHighlights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_excerpt: Option<TextWithHighlights>,
    #[serde(rename = "DocumentURI", default, skip_serializing_if = "Option::is_none")]
    pub document_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_attributes: Vec<DocumentAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_attributes: Option<ScoreAttributes>,
}

impl QueryResultItem {
    /// Look up a document attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&DocumentAttribute> {
        self.document_attributes
            .iter()
            .find(|attribute| attribute.key().as_str() == key)
    }
}
