//! Connection
//!
//! Buffered line streams over a single TCP socket.

use std::io::{BufReader, BufWriter};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::{DictError, Result};
use crate::protocol::{write_command, Command};

/// An open socket to a DICT server
pub struct Connection {
    /// TCP stream reader (buffered for line reads)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered, flushed per command)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Resolve and connect to the configured server, applying timeouts
    pub fn open(config: &Config) -> Result<Self> {
        let stream = connect_stream(config)?;
        let connection = Self::new(stream)?;
        connection.set_timeouts(config)?;
        Ok(connection)
    }

    /// Wrap an already connected stream
    pub fn new(stream: TcpStream) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Commands are tiny and latency bound
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Configure socket timeouts (0 leaves the socket blocking)
    pub fn set_timeouts(&self, config: &Config) -> Result<()> {
        self.reader.get_ref().set_read_timeout(config.read_timeout())?;
        self.writer.get_ref().set_write_timeout(config.write_timeout())?;
        Ok(())
    }

    /// Send one command line
    pub fn send(&mut self, command: &Command) -> Result<()> {
        tracing::debug!(peer = %self.peer_addr, command = ?command.command_type(), "Sending command");
        write_command(&mut self.writer, command)
    }

    /// Buffered reader for parsing replies
    pub fn reader(&mut self) -> &mut BufReader<TcpStream> {
        &mut self.reader
    }

    /// Another handle to the same socket
    pub fn try_clone_stream(&self) -> Result<TcpStream> {
        Ok(self.reader.get_ref().try_clone()?)
    }

    /// Shut the socket down in both directions
    pub fn shutdown(&self) -> std::io::Result<()> {
        self.reader.get_ref().shutdown(Shutdown::Both)
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

fn connect_stream(config: &Config) -> Result<TcpStream> {
    let addr = config.addr();
    let connect_err = |e: std::io::Error| DictError::Connection {
        message: format!("cannot connect to {}: {}", addr, e),
        source: Some(e),
    };

    let Some(timeout) = config.connect_timeout() else {
        return TcpStream::connect(addr.as_str()).map_err(connect_err);
    };

    // connect_timeout takes a single address, so try each resolved one
    let mut last_err = None;
    for socket_addr in addr.to_socket_addrs().map_err(connect_err)? {
        match TcpStream::connect_timeout(&socket_addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(match last_err {
        Some(e) => connect_err(e),
        None => DictError::connection(format!("{} did not resolve to any address", addr)),
    })
}
