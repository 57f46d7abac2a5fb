//! Query and feedback operations.

use serde::{Deserialize, Deserializer, Serialize};

use super::attribute::{Facet, FacetResult};
use super::ids::{AttributeKey, IndexId, QueryId, ResultId};
use super::records::QueryResultItem;
use super::vocabulary::{QueryResultType, RelevanceType};
use super::wire::{EmptyResponse, ServiceRequest, Timestamp};
use crate::config::PagingConfig;
use crate::{ModelError, ModelResult};

const QUERY_TEXT_MAX_CHARS: usize = 1000;
const MAX_PAGE_SIZE: u32 = 100;

fn check_query_text(text: &str) -> ModelResult<()> {
    let actual = text.chars().count();
    if actual == 0 || actual > QUERY_TEXT_MAX_CHARS {
        return Err(ModelError::InvalidLength {
            field: "query text",
            min: 1,
            max: QUERY_TEXT_MAX_CHARS,
            actual,
        });
    }
    Ok(())
}

fn check_page_number(page_number: u32) -> ModelResult<u32> {
    if page_number == 0 {
        return Err(ModelError::OutOfRange {
            field: "page number",
            min: 1,
            max: i64::from(u32::MAX),
            value: 0,
        });
    }
    Ok(page_number)
}

fn check_page_size(page_size: u32) -> ModelResult<u32> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ModelError::OutOfRange {
            field: "page size",
            min: 1,
            max: i64::from(MAX_PAGE_SIZE),
            value: i64::from(page_size),
        });
    }
    Ok(page_size)
}

fn deserialize_query_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let text = String::deserialize(deserializer)?;
    check_query_text(&text).map_err(serde::de::Error::custom)?;
    Ok(text)
}

fn deserialize_page_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    Option::<u32>::deserialize(deserializer)?
        .map(check_page_number)
        .transpose()
        .map_err(serde::de::Error::custom)
}

fn deserialize_page_size<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    Option::<u32>::deserialize(deserializer)?
        .map(check_page_size)
        .transpose()
        .map_err(serde::de::Error::custom)
}

/// Search request against an active index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryRequest {
    pub index_id: IndexId,
    #[serde(deserialize_with = "deserialize_query_text")]
    query_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<Facet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requested_document_attributes: Vec<AttributeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_result_type_filter: Option<QueryResultType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_page_number"
    )]
    page_number: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_page_size"
    )]
    page_size: Option<u32>,
}

impl QueryRequest {
    pub fn new(index_id: IndexId, query_text: impl Into<String>) -> ModelResult<Self> {
        let query_text = query_text.into();
        check_query_text(&query_text)?;
        Ok(Self {
            index_id,
            query_text,
            facets: Vec::new(),
            requested_document_attributes: Vec::new(),
            query_result_type_filter: None,
            page_number: None,
            page_size: None,
        })
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn page_number(&self) -> Option<u32> {
        self.page_number
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn with_facet(mut self, facet: Facet) -> Self {
        self.facets.push(facet);
        self
    }

    pub fn with_requested_attribute(mut self, key: AttributeKey) -> Self {
        self.requested_document_attributes.push(key);
        self
    }

    pub fn with_result_type_filter(mut self, result_type: QueryResultType) -> Self {
        self.query_result_type_filter = Some(result_type);
        self
    }

    /// Select a 1-based result page.
    pub fn with_page_number(mut self, page_number: u32) -> ModelResult<Self> {
        self.page_number = Some(check_page_number(page_number)?);
        Ok(self)
    }

    pub fn with_page_size(mut self, page_size: u32) -> ModelResult<Self> {
        self.page_size = Some(check_page_size(page_size)?);
        Ok(self)
    }

    /// Fill in the page size from config when none was set.
    pub fn with_paging_defaults(mut self, paging: &PagingConfig) -> Self {
        if self.page_size.is_none() {
            self.page_size = Some(paging.query_page_size.clamp(1, MAX_PAGE_SIZE));
        }
        self
    }
}

impl ServiceRequest for QueryRequest {
    const OPERATION: &'static str = "Query";
    type Response = QueryResponse;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<QueryId>,
    #[serde(default)]
    pub result_items: Vec<QueryResultItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facet_results: Vec<FacetResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_number_of_results: Option<u64>,
}

impl QueryResponse {
    /// Facet result for an attribute key.
    pub fn facet(&self, key: &str) -> Option<&FacetResult> {
        self.facet_results
            .iter()
            .find(|facet| facet.document_attribute_key.as_str() == key)
    }

    /// Results of one kind, in server order.
    pub fn results_of_type(
        &self,
        result_type: QueryResultType,
    ) -> impl Iterator<Item = &QueryResultItem> + '_ {
        self.result_items
            .iter()
            .filter(move |item| item.r#type == Some(result_type))
    }
}

/// A result the user clicked, and when.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClickFeedback {
    pub result_id: ResultId,
    pub click_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelevanceFeedback {
    pub result_id: ResultId,
    pub relevance_value: RelevanceType,
}

/// Feedback on the results of a previous query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitFeedbackRequest {
    pub index_id: IndexId,
    pub query_id: QueryId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub click_feedback_items: Vec<ClickFeedback>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevance_feedback_items: Vec<RelevanceFeedback>,
}

impl SubmitFeedbackRequest {
    pub fn new(index_id: IndexId, query_id: QueryId) -> Self {
        Self {
            index_id,
            query_id,
            click_feedback_items: Vec::new(),
            relevance_feedback_items: Vec::new(),
        }
    }

    /// Record a click. Sub-second parts of the click time are dropped.
    pub fn with_click(mut self, result_id: ResultId, click_time: impl Into<Timestamp>) -> Self {
        self.click_feedback_items.push(ClickFeedback {
            result_id,
            click_time: click_time.into(),
        });
        self
    }

    pub fn with_relevance(mut self, result_id: ResultId, relevance_value: RelevanceType) -> Self {
        self.relevance_feedback_items.push(RelevanceFeedback {
            result_id,
            relevance_value,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.click_feedback_items.is_empty() && self.relevance_feedback_items.is_empty()
    }
}

impl ServiceRequest for SubmitFeedbackRequest {
    const OPERATION: &'static str = "SubmitFeedback";
    type Response = EmptyResponse;
}
