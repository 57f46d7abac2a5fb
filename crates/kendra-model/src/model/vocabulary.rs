//! Closed vocabularies for categorical wire fields.
//!
//! Every vocabulary parses case-exactly and renders back to the same token.
//! Tokens outside the set are rejected rather than carried as raw strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ModelError, ModelResult};

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire token for this member.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            /// Parse a wire token. Matching is exact: no trimming, no case folding.
            pub fn parse(token: &str) -> ModelResult<Self> {
                match token {
                    $($token => Ok($name::$variant),)+
                    _ => Err(ModelError::InvalidEnumValue {
                        vocabulary: $label,
                        token: token.to_string(),
                    }),
                }
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Repository kind a data source connector crawls.
    DataSourceType, "data source type" {
        S3 => "S3",
        SharePoint => "SHAREPOINT",
        Database => "DATABASE",
        Salesforce => "SALESFORCE",
        OneDrive => "ONEDRIVE",
        ServiceNow => "SERVICENOW",
        Custom => "CUSTOM",
    }
}

vocabulary! {
    /// Which kind a document attribute value carries.
    DocumentAttributeValueType, "document attribute value type" {
        StringValue => "STRING_VALUE",
        StringListValue => "STRING_LIST_VALUE",
        LongValue => "LONG_VALUE",
        DateValue => "DATE_VALUE",
    }
}

vocabulary! {
    /// Relevance judgment submitted as query feedback.
    RelevanceType, "relevance type" {
        Relevant => "RELEVANT",
        NotRelevant => "NOT_RELEVANT",
    }
}

vocabulary! {
    /// Standard Salesforce objects a connector can index.
    SalesforceStandardObjectName, "Salesforce standard object name" {
        Account => "ACCOUNT",
        Campaign => "CAMPAIGN",
        Case => "CASE",
        Contact => "CONTACT",
        Contract => "CONTRACT",
        Document => "DOCUMENT",
        Group => "GROUP",
        Idea => "IDEA",
        Lead => "LEAD",
        Opportunity => "OPPORTUNITY",
        Partner => "PARTNER",
        Pricebook => "PRICEBOOK",
        Product => "PRODUCT",
        Profile => "PROFILE",
        Solution => "SOLUTION",
        Task => "TASK",
        User => "USER",
    }
}

vocabulary! {
    IndexStatus, "index status" {
        Creating => "CREATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
        Updating => "UPDATING",
        SystemUpdating => "SYSTEM_UPDATING",
    }
}

vocabulary! {
    IndexEdition, "index edition" {
        DeveloperEdition => "DEVELOPER_EDITION",
        EnterpriseEdition => "ENTERPRISE_EDITION",
    }
}

vocabulary! {
    DataSourceStatus, "data source status" {
        Creating => "CREATING",
        Deleting => "DELETING",
        Failed => "FAILED",
        Updating => "UPDATING",
        Active => "ACTIVE",
    }
}

vocabulary! {
    /// Lifecycle state of one data source synchronization run.
    DataSourceSyncJobStatus, "data source sync job status" {
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Syncing => "SYNCING",
        Incomplete => "INCOMPLETE",
        Stopping => "STOPPING",
        Aborted => "ABORTED",
        SyncingIndexing => "SYNCING_INDEXING",
    }
}

vocabulary! {
    FaqStatus, "FAQ status" {
        Creating => "CREATING",
        Updating => "UPDATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
    }
}

vocabulary! {
    /// Kind of a single query result item.
    QueryResultType, "query result type" {
        Document => "DOCUMENT",
        QuestionAnswer => "QUESTION_ANSWER",
        Answer => "ANSWER",
    }
}

vocabulary! {
    ScoreConfidence, "score confidence" {
        VeryHigh => "VERY_HIGH",
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
    }
}

vocabulary! {
    AdditionalResultAttributeValueType, "additional result attribute value type" {
        TextWithHighlightsValue => "TEXT_WITH_HIGHLIGHTS_VALUE",
    }
}

impl DataSourceSyncJobStatus {
    /// Whether the job has stopped and will not change state again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DataSourceSyncJobStatus::Failed
                | DataSourceSyncJobStatus::Succeeded
                | DataSourceSyncJobStatus::Incomplete
                | DataSourceSyncJobStatus::Aborted
        )
    }
}
