use std::fmt;

/// HTTP method of an inbound request, closed over the methods the router serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Put,
    Delete,
    /// Any method without a matching operation, kept verbatim for the reply.
    Other(String),
}

impl RequestMethod {
    /// Returns the method name as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Other(method) => method,
        }
    }
}

impl From<&str> for RequestMethod {
    /// Method names are case-sensitive, as in HTTP.
    fn from(method: &str) -> Self {
        match method {
            "GET" => RequestMethod::Get,
            "PUT" => RequestMethod::Put,
            "DELETE" => RequestMethod::Delete,
            other => RequestMethod::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
