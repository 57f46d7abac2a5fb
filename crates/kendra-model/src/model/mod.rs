//! Kendra Model Module
//!
//! Request, response and value records for the search-index service.
//!
//! ## Contents
//!
//! - Closed vocabularies for categorical fields (data source types, statuses, relevance)
//! - Typed document attribute values and facet counts
//! - Index statistics, highlights, query results and sync job records
//! - Continuation-token pagination over list operations
//! - Operation catalogue binding each request to its response
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kendra_model::model::{DocumentAttribute, DocumentAttributeValue};
//!
//! let dept = DocumentAttribute::new("dept", DocumentAttributeValue::string("HR"))?;
//! assert_eq!(dept.value().as_string()?, "HR");
//! ```

mod attribute;
mod ids;
mod operations;
mod pagination;
mod query;
mod records;
mod sync_job;
mod vocabulary;
mod wire;


pub use attribute::{
    DocumentAttribute, DocumentAttributeValue, DocumentAttributeValueCountPair, Facet, FacetResult,
};
pub use ids::{
    AttributeKey, DataSourceId, ExecutionId, FaqId, IndexId, PageToken, QueryId, ResultId,
};
pub use operations::*;
pub use pagination::{next_page, PageRequest, PageState, Paginated, Paginator};
pub use query::*;
pub use records::*;
pub use sync_job::*;
pub use vocabulary::*;
pub use wire::{EmptyResponse, ServiceRequest, Timestamp};
