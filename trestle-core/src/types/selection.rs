use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    PhoneValidation,
    RealContact,
}

impl Resource {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "phoneValidation" => Some(Self::PhoneValidation),
            "realContact" => Some(Self::RealContact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhoneValidation => "phoneValidation",
            Self::RealContact => "realContact",
        }
    }

    /// Operation used when the config names a resource but no operation.
    pub fn default_operation(&self) -> Operation {
        match self {
            Self::PhoneValidation => Operation::Validate,
            Self::RealContact => Operation::Verify,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Validate,
    BatchValidate,
    Verify,
}

impl Operation {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "validate" => Some(Self::Validate),
            "batchValidate" => Some(Self::BatchValidate),
            "verify" => Some(Self::Verify),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::BatchValidate => "batchValidate",
            Self::Verify => "verify",
        }
    }
}

/// Which request, if any, an item turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    PhoneIntel,
    RealContact,
    /// No request exists for this pair; the item produces no output.
    Skip,
}

impl Selection {
    pub fn from_pair(resource: Option<Resource>, operation: Option<Operation>) -> Self {
        match (resource, operation) {
            (Some(Resource::PhoneValidation), Some(Operation::Validate)) => Self::PhoneIntel,
            (Some(Resource::RealContact), Some(Operation::Verify)) => Self::RealContact,
            // batchValidate has a name but no endpoint.
            (Some(Resource::PhoneValidation), Some(Operation::BatchValidate)) => Self::Skip,
            _ => Self::Skip,
        }
    }

    pub fn from_names(resource: &str, operation: &str) -> Self {
        Self::from_pair(Resource::parse(resource), Operation::parse(operation))
    }
}
