#[derive(Debug)]
pub enum HistoryStoreError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
    #[cfg(test)]
    Unavailable(String),
}

impl std::fmt::Display for HistoryStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HistoryStoreError::Io(e) => write!(f, "Storage I/O failure: {}", e),
            HistoryStoreError::Serialization(e) => write!(f, "Stored history is invalid: {}", e),
            #[cfg(test)]
            HistoryStoreError::Unavailable(e) => write!(f, "Storage unavailable: {}", e),
        }
    }
}

impl From<std::io::Error> for HistoryStoreError {
    fn from(e: std::io::Error) -> Self {
        HistoryStoreError::Io(e)
    }
}

impl From<serde_json::Error> for HistoryStoreError {
    fn from(e: serde_json::Error) -> Self {
        HistoryStoreError::Serialization(e)
    }
}
