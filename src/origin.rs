use crate::constants::DISALLOWED_ORIGIN;

/// Outcome of matching the request origin against the configured allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision<'a> {
    /// No allow-list configured; every origin gets `*`.
    Any,
    /// The request origin is on the allow-list and is echoed back.
    Mirror(&'a str),
    /// An allow-list is configured and the origin is missing or not listed.
    Disallow,
}

impl<'a> OriginDecision<'a> {
    /// Matches by exact string comparison; no case folding or normalization.
    pub fn resolve(allowed: Option<&[String]>, request_origin: Option<&'a str>) -> Self {
        let Some(allowed) = allowed else {
            return OriginDecision::Any;
        };

        match request_origin {
            Some(origin) if allowed.iter().any(|candidate| candidate == origin) => {
                OriginDecision::Mirror(origin)
            }
            _ => OriginDecision::Disallow,
        }
    }

    pub fn header_value(&self) -> &'a str {
        match self {
            OriginDecision::Any => "*",
            OriginDecision::Mirror(origin) => *origin,
            OriginDecision::Disallow => DISALLOWED_ORIGIN,
        }
    }

    pub fn is_allowed(&self) -> bool {
        !matches!(self, OriginDecision::Disallow)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
