//! Configuration of the connection to the shared store.

/// Where the store is found, and the names used within the store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// The host of the store.
    pub host: String,

    /// The port of the store.
    pub port: u16,

    /// The logical database within the store.
    pub database: i64,

    /// The prefix of keys written on export, as `prefix:id`.
    ///
    /// Distinct instances writing to the same store should be given distinct prefixes.
    pub export_prefix: String,

    /// The list popped on import.
    pub inbox: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            host: "127.0.0.1".to_string(),
            port: 6379,
            database: 0,
            export_prefix: "from_minisat".to_string(),
            inbox: "to_minisat".to_string(),
        }
    }
}

impl StoreConfig {
    /// The url of the store.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.database)
    }

    /// The key of an exported record.
    pub fn record_key(&self, id: u32) -> String {
        format!("{}:{id}", self.export_prefix)
    }
}
