// Copyright (C) 2017-2018 Red Hat, Inc.
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.
//
// Author: Gris Ge <fge@redhat.com>

use std::env;
use std::fs::read_dir;
use std::io::prelude::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::str;

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use super::error::*;

const IPC_HDR_LEN: usize = 10; // length of u32 max string.
const IPC_JSON_ID: u8 = 100;
static UDS_PATH_DEFAULT: &str = "/var/run/lsm/ipc";
static UDS_PATH_VAR_NAME: &str = "LSM_UDS_PATH";
static DEBUG_VAR_NAME: &str = "LSM_RUST_DEBUG";

/// One length-framed JSON channel over a Unix domain socket. Used from both
/// sides: the client drives `invoke()`, the plugin runtime drives
/// `recv_request()`/`send_response()`/`send_error()`.
pub(crate) struct TransPort {
    so: UnixStream,
    debug: bool,
}

/// A decoded request envelope, as seen by the plugin runtime.
#[derive(Deserialize, Debug)]
pub(crate) struct Request {
    #[serde(default = "default_request_id")]
    pub(crate) id: u64,
    pub(crate) method: String,
    #[serde(default)]
    pub(crate) params: Map<String, Value>,
}

fn default_request_id() -> u64 {
    u64::from(IPC_JSON_ID)
}

impl TransPort {
    /// Connect to the plugin socket. With `check_errors` the connection
    /// failure is classified: socket directory dead means the daemon is not
    /// running, directory healthy but this socket dead means the plugin does
    /// not exist.
    pub(crate) fn new(
        plugin_uds_path: &str,
        check_errors: bool,
    ) -> Result<TransPort> {
        let so = match UnixStream::connect(plugin_uds_path) {
            Ok(s) => s,
            Err(e) => {
                if check_errors {
                    if check_daemon_exists() {
                        return Err(LsmError::PluginNotExist(format!(
                            "Plugin '{}' not found",
                            plugin_uds_path
                        )));
                    }
                    return Err(LsmError::DaemonNotRunning(format!(
                        "The libstoragemgmt daemon is not running for \
                         socket folder: '{}'",
                        uds_path()
                    )));
                }
                return Err(LsmError::TransportCommunication(format!(
                    "Failed to connect '{}': {}",
                    plugin_uds_path, e
                )));
            }
        };
        Ok(TransPort {
            so,
            debug: debug_enabled(),
        })
    }

    /// Wrap an already connected socket. Used by the plugin runtime, the
    /// daemon hands the connected descriptor over at spawn time.
    pub(crate) fn from_stream(so: UnixStream) -> TransPort {
        TransPort {
            so,
            debug: debug_enabled(),
        }
    }

    fn send_msg(&mut self, msg: &str) -> Result<()> {
        if self.debug {
            eprintln!("send: {}", msg);
        }
        let msg =
            format!("{:0padding$}{}", msg.len(), msg, padding = IPC_HDR_LEN);
        self.so.write_all(msg.as_bytes())?;
        Ok(())
    }

    fn recv_msg(&mut self) -> Result<String> {
        let mut hdr_buff = [0u8; IPC_HDR_LEN];
        self.so.read_exact(&mut hdr_buff)?;
        let hdr = str::from_utf8(&hdr_buff).map_err(|_| {
            LsmError::TransportCommunication(format!(
                "Invalid message header: {:?}",
                hdr_buff
            ))
        })?;
        // Header is a zero padded ASCII decimal no larger than u32 max.
        let msg_len = hdr.parse::<u32>().map_err(|_| {
            LsmError::TransportCommunication(format!(
                "Invalid message header: '{}'",
                hdr
            ))
        })? as usize;
        let mut msg = vec![0u8; msg_len];
        let mut got: usize = 0;
        while got < msg_len {
            let cur_got = self.so.read(&mut msg[got..])?;
            if cur_got == 0 {
                return Err(LsmError::TransportCommunication(format!(
                    "Connection closed with {} of {} bytes outstanding",
                    msg_len - got,
                    msg_len
                )));
            }
            got += cur_got;
        }
        let msg = String::from_utf8(msg)?;
        if self.debug {
            eprintln!("recv: {}", msg);
        }
        Ok(msg)
    }

    /// Perform one synchronous request/response exchange. A reported error
    /// propagates verbatim, a `null` result is allowed and yields
    /// `Value::Null`.
    pub(crate) fn invoke(
        &mut self,
        cmd: &str,
        args: Option<Map<String, Value>>,
    ) -> Result<Value> {
        let mut msg = Map::new();
        msg.insert("method".to_string(), Value::String(cmd.to_string()));
        msg.insert("id".to_string(), Value::Number(Number::from(IPC_JSON_ID)));
        let mut args = args.unwrap_or_default();
        args.insert("flags".to_string(), Value::Number(Number::from(0u8)));
        msg.insert("params".to_string(), Value::Object(args));
        // Historical duplication, plugins may read either copy.
        msg.insert("flags".to_string(), Value::Number(Number::from(0u8)));
        let msg = &serde_json::to_string(&msg)?;
        self.send_msg(msg)?;
        let reply = self.recv_msg()?;
        let val: Value = serde_json::from_str(&reply).map_err(|_| {
            LsmError::PluginBug(format!(
                "Invalid reply from plugin: {}",
                reply
            ))
        })?;
        let obj = match val.as_object() {
            Some(o) => o,
            None => {
                return Err(LsmError::PluginBug(format!(
                    "Invalid reply from plugin: {}",
                    reply
                )))
            }
        };
        if let Some(e) = obj.get("error") {
            let lsm_err_ipc: LsmErrorIpc = serde_json::from_value(e.clone())
                .map_err(|_| {
                    LsmError::PluginBug(format!(
                        "Invalid error object from plugin: {}",
                        e
                    ))
                })?;
            return Err(From::from(lsm_err_ipc));
        };
        match obj.get("result") {
            Some(r) => Ok(r.clone()),
            None => Err(LsmError::PluginBug(format!(
                "Got no result from plugin: {}",
                reply
            ))),
        }
    }

    /// Read the next request envelope. I/O failures are
    /// `TransportCommunication`, an unparseable envelope is
    /// `TransportInvalidArg` so the caller can keep serving.
    pub(crate) fn recv_request(&mut self) -> Result<Request> {
        let msg = self.recv_msg()?;
        serde_json::from_str(&msg).map_err(|e| {
            LsmError::TransportInvalidArg(format!(
                "Unparseable request: {}",
                e
            ))
        })
    }

    pub(crate) fn send_response(
        &mut self,
        id: u64,
        result: Value,
    ) -> Result<()> {
        let mut msg = Map::new();
        msg.insert("id".to_string(), Value::Number(Number::from(id)));
        msg.insert("result".to_string(), result);
        self.send_msg(&serde_json::to_string(&msg)?)
    }

    pub(crate) fn send_error(
        &mut self,
        id: u64,
        error: &LsmError,
    ) -> Result<()> {
        let mut msg = Map::new();
        msg.insert("id".to_string(), Value::Number(Number::from(id)));
        msg.insert(
            "error".to_string(),
            serde_json::to_value(LsmErrorIpc::from(error))?,
        );
        self.send_msg(&serde_json::to_string(&msg)?)
    }
}

pub(crate) fn uds_path() -> String {
    match env::var(UDS_PATH_VAR_NAME) {
        Ok(v) => v,
        Err(_) => UDS_PATH_DEFAULT.to_string(),
    }
}

fn debug_enabled() -> bool {
    match env::var(DEBUG_VAR_NAME) {
        Ok(v) => !v.is_empty(),
        Err(_) => false,
    }
}

/// Best effort probe: the daemon counts as running when its socket folder
/// exists and the first plugin socket found accepts a connection.
pub(crate) fn check_daemon_exists() -> bool {
    let uds_dir = uds_path();
    if !Path::new(&uds_dir).is_dir() {
        return false;
    }
    let entries = match read_dir(&uds_dir) {
        Ok(e) => e,
        Err(_) => return false,
    };
    for entry in entries {
        if let Ok(entry) = entry {
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            return UnixStream::connect(&path).is_ok();
        }
    }
    false
}
