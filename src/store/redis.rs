//! A client of a store speaking the Redis protocol, through the [redis](https://docs.rs/redis) crate.

use ::redis::{Client, Connection, Value};

use crate::{
    config::store::StoreConfig,
    misc::log::targets::{self},
    store::{StoreClient, StoreConnection},
    types::err::{self},
};

/// A client of a Redis server.
pub struct RedisStore {
    client: Client,
    url: String,
}

impl RedisStore {
    /// A client of the store described by `config`.
    ///
    /// No connection is made until [connect](StoreClient::connect) is called.
    pub fn new(config: &StoreConfig) -> Result<Self, err::StoreError> {
        let url = config.url();
        match Client::open(url.as_str()) {
            Ok(client) => Ok(RedisStore { client, url }),
            Err(e) => {
                log::error!(target: targets::STORE, "Invalid store url {url}: {e}");
                Err(err::StoreError::Connection(e.to_string()))
            }
        }
    }
}

impl StoreClient for RedisStore {
    type Connection = RedisConnection;

    fn connect(&self) -> Result<Self::Connection, err::StoreError> {
        match self.client.get_connection() {
            Ok(connection) => {
                log::trace!(target: targets::STORE, "Connected to {}", self.url);
                Ok(RedisConnection { connection })
            }
            Err(e) => {
                log::error!(target: targets::STORE, "Error during connection to {}: {e}", self.url);
                Err(err::StoreError::Connection(e.to_string()))
            }
        }
    }
}

/// A connection to a Redis server, closed on drop.
pub struct RedisConnection {
    connection: Connection,
}

fn command_error(e: ::redis::RedisError) -> err::StoreError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
        err::StoreError::Connection(e.to_string())
    } else {
        err::StoreError::Command(e.to_string())
    }
}

impl StoreConnection for RedisConnection {
    fn set_pipelined(&mut self, writes: &[(String, String)]) -> Result<(), err::StoreError> {
        let mut pipe = ::redis::pipe();
        for (key, value) in writes {
            pipe.cmd("SET").arg(key).arg(value);
        }

        let replies: Vec<Value> = pipe.query(&mut self.connection).map_err(|e| {
            log::error!(target: targets::STORE, "Error during pipelined write: {e}");
            command_error(e)
        })?;

        if replies.len() != writes.len() {
            log::error!(target: targets::STORE, "Expected {} replies, received {}", writes.len(), replies.len());
            return Err(err::StoreError::MissingReply {
                requested: writes.len(),
                received: replies.len(),
            });
        }

        for reply in replies {
            match reply {
                Value::Okay => {}
                Value::SimpleString(status) if status == "OK" => {}
                other => {
                    log::error!(target: targets::STORE, "Unexpected reply to SET: {other:?}");
                    return Err(err::StoreError::UnexpectedReply(format!("{other:?}")));
                }
            }
        }

        log::trace!(target: targets::STORE, "Pipelined {} writes", writes.len());
        Ok(())
    }

    fn list_len(&mut self, key: &str) -> Result<usize, err::StoreError> {
        ::redis::cmd("LLEN")
            .arg(key)
            .query::<usize>(&mut self.connection)
            .map_err(|e| {
                log::error!(target: targets::STORE, "Error executing LLEN command: {e}");
                command_error(e)
            })
    }

    fn pop_batch(&mut self, key: &str, count: usize) -> Result<Vec<String>, err::StoreError> {
        let reply = ::redis::cmd("RPOP")
            .arg(key)
            .arg(count)
            .query::<Option<Vec<Value>>>(&mut self.connection)
            .map_err(|e| {
                log::error!(target: targets::STORE, "Error executing RPOP command: {e}");
                command_error(e)
            })?;

        let Some(elements) = reply else {
            return Ok(Vec::default());
        };

        let mut records = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                Value::BulkString(bytes) => match String::from_utf8(bytes) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        log::error!(target: targets::STORE, "Record is not utf8: {e}");
                        return Err(err::StoreError::UnexpectedReply(e.to_string()));
                    }
                },

                Value::SimpleString(record) => records.push(record),

                other => {
                    log::error!(target: targets::STORE, "Unexpected element in RPOP reply: {other:?}");
                    return Err(err::StoreError::UnexpectedReply(format!("{other:?}")));
                }
            }
        }
        Ok(records)
    }

    fn push(&mut self, key: &str, values: &[String]) -> Result<usize, err::StoreError> {
        ::redis::cmd("LPUSH")
            .arg(key)
            .arg(values)
            .query::<usize>(&mut self.connection)
            .map_err(|e| {
                log::error!(target: targets::STORE, "Error executing LPUSH command: {e}");
                command_error(e)
            })
    }

    fn flush_db(&mut self) -> Result<(), err::StoreError> {
        ::redis::cmd("FLUSHDB")
            .query::<()>(&mut self.connection)
            .map_err(|e| {
                log::error!(target: targets::STORE, "Error in FLUSHDB command: {e}");
                err::StoreError::Flush(e.to_string())
            })
    }
}
