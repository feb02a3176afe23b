#[derive(Debug)]
pub enum MapsServiceError {
    /// The request could not be sent or the server answered with a failure status.
    Network(String),
    /// The body could not be decoded as the expected JSON shape.
    Malformed(String),
    /// A well-formed response without usable data.
    EmptyResult,
}

impl std::fmt::Display for MapsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MapsServiceError::Network(e) => write!(f, "Network failure: {}", e),
            MapsServiceError::Malformed(e) => write!(f, "Malformed response: {}", e),
            MapsServiceError::EmptyResult => write!(f, "Response contained no result"),
        }
    }
}
