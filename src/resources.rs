use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::{
    corpus::{Corpus, Document},
    error::Result,
    reference::MIME_TYPE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    User,
    Assistant,
}

/// Every document is meant for both sides of a conversation.
pub const AUDIENCE: [Audience; 2] = [Audience::User, Audience::Assistant];

/// The externally visible identity of a document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: &'static str,
    pub audience: Vec<Audience>,
    pub priority: f32,
    #[serde(serialize_with = "rfc3339_millis")]
    pub last_modified: DateTime<Utc>,
}

impl From<&Document> for ResourceDescriptor {
    fn from(doc: &Document) -> Self {
        Self {
            uri: doc.uri(),
            name: doc.title(),
            description: doc.description(),
            mime_type: MIME_TYPE,
            audience: AUDIENCE.to_vec(),
            priority: doc.category().priority(),
            last_modified: doc.modified,
        }
    }
}

/// Contents returned when a single document is read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
    #[serde(serialize_with = "rfc3339_millis")]
    pub last_modified: DateTime<Utc>,
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn rfc3339_millis<S: Serializer>(
    ts: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(ts))
}

/// Describe every document, highest priority first, then by name
/// ignoring case.
pub fn list(corpus: &Corpus) -> Vec<ResourceDescriptor> {
    let mut descriptors: Vec<ResourceDescriptor> = corpus
        .load_all()
        .iter()
        .map(ResourceDescriptor::from)
        .collect();

    descriptors.sort_by(|a, b| {
        b.priority
            .total_cmp(&a.priority)
            .then_with(|| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            })
    });
    descriptors
}

/// Read one document by reference.
pub fn read(corpus: &Corpus, reference: &str) -> Result<ResourceContent> {
    let doc = corpus.read_reference(reference)?;
    Ok(ResourceContent {
        uri: doc.uri(),
        mime_type: MIME_TYPE,
        text: doc.text,
        last_modified: doc.modified,
    })
}
