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

use std::fs::read_dir;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::data::*;
use super::error::*;
use super::ipc::{uds_path, TransPort};
use super::misc::{
    verify_init_id_str, verify_nfs_access, verify_raid_disk_count,
    verify_read_cache_pct, verify_search, verify_snapshot_restore_files,
};

const DEFAULT_TIMEOUT: u32 = 30_000;
const JOB_POLL_INTERVAL_MS: u64 = 250;
const DISCOVERY_RETRY_MAX: u32 = 10;
const DISCOVERY_RETRY_INTERVAL_MS: u64 = 200;

const JOB_STATUS_INPROGRESS: u32 = 1;
const JOB_STATUS_COMPLETE: u32 = 2;
const JOB_STATUS_ERROR: u32 = 3;
const POOL_MEMBER_TYPE_DISK: u32 = 2;
const POOL_MEMBER_TYPE_POOL: u32 = 3;

/// Represent the connection to a plugin.
pub struct Client {
    tp: TransPort,
    plugin_name: String,
    unregistered: bool,
}

trait OkOrPlugBug<T> {
    fn ok_or_plugin_bug(self, val: &Value) -> Result<T>;
}

impl<T> OkOrPlugBug<T> for Option<T> {
    fn ok_or_plugin_bug(self, val: &Value) -> Result<T> {
        match self {
            Some(i) => Ok(i),
            None => Err(LsmError::PluginBug(format!(
                "Plugin returned unexpected data: {:?}",
                val
            ))),
        }
    }
}

/// Represent a plugin information
#[derive(Debug)]
pub struct PluginInfo {
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Plugin name.
    pub name: String,
}

/// Query all available plugins from the libstoragemgmt daemon.
///
/// # Errors
///
///  * [`LsmError::DaemonNotRunning`][1]
///
/// [1]: enum.LsmError.html#variant.DaemonNotRunning
pub fn available_plugins() -> Result<Vec<PluginInfo>> {
    let uds_dir = uds_path();
    if !Path::new(&uds_dir).is_dir() {
        return Err(LsmError::DaemonNotRunning(format!(
            "The libstoragemgmt daemon is not running for \
             socket folder: '{}'",
            uds_dir
        )));
    }
    let mut ret = Vec::new();
    for (plugin_name, plugin_ipc_path) in list_plugin_sockets(&uds_dir)? {
        // We cannot use Client::plugin_info() here, as we need to bypass the
        // plugin_register() and plugin_unregister().
        let mut tp = TransPort::new(&plugin_ipc_path, true)?;
        let val = tp.invoke("plugin_info", None)?;
        let data: Vec<String> = serde_json::from_value(val.clone())?;
        let desc = data.get(0).ok_or_plugin_bug(&val)?;
        let version = data.get(1).ok_or_plugin_bug(&val)?;
        ret.push(PluginInfo {
            version: version.to_string(),
            description: desc.to_string(),
            name: plugin_name,
        });
    }

    Ok(ret)
}

// Walk the socket folder collecting plugin sockets. The daemon might be
// half way through its start up, in which case reading an entry can fail and
// the walk only sees a subset of the plugins. Retry the whole walk a bounded
// number of times before surrendering.
fn list_plugin_sockets(uds_dir: &str) -> Result<Vec<(String, String)>> {
    let mut last_error =
        LsmError::DaemonNotRunning(format!(
            "The libstoragemgmt daemon is not running for \
             socket folder: '{}'",
            uds_dir
        ));
    for attempt in 0..DISCOVERY_RETRY_MAX {
        match try_list_plugin_sockets(uds_dir) {
            Ok(socks) => return Ok(socks),
            Err(e) => {
                debug!(
                    "plugin socket walk attempt {} failed: {}",
                    attempt, e
                );
                last_error = e;
                sleep(Duration::from_millis(DISCOVERY_RETRY_INTERVAL_MS));
            }
        }
    }
    Err(last_error)
}

fn try_list_plugin_sockets(uds_dir: &str) -> Result<Vec<(String, String)>> {
    let mut ret = Vec::new();
    for entry in read_dir(uds_dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            continue;
        }
        let plugin_name = match entry.file_name().into_string() {
            Ok(i) => i,
            Err(_) => continue,
        };
        let plugin_ipc_path = get_plugin_ipc_path(uds_dir, &plugin_name);
        ret.push((plugin_name, plugin_ipc_path));
    }
    Ok(ret)
}

fn get_plugin_ipc_path(uds_dir: &str, plugin_name: &str) -> String {
    format!("{}/{}", uds_dir, plugin_name)
}

impl Client {
    /// Create a connection to plugin.
    /// Please refer to [libstoragemgmt user guide][1] for how to choose the
    /// URI and password.
    ///
    /// The `timeout` argument is in milliseconds.
    ///
    /// [1]: https://libstorage.github.io/libstoragemgmt-doc/doc/user_guide.html
    pub fn new(
        uri: &str,
        password: Option<&str>,
        timeout: Option<u32>,
    ) -> Result<Client> {
        let p = match url::Url::parse(uri) {
            Ok(p) => p,
            Err(e) => {
                return Err(LsmError::InvalidArgument(format!(
                    "Failed to parse URI: {}",
                    e
                )))
            }
        };
        let plugin_name = p.scheme().to_string();
        let plugin_ipc_path = get_plugin_ipc_path(&uds_path(), &plugin_name);
        let mut tp = TransPort::new(&plugin_ipc_path, true)?;
        let mut args = Map::new();
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        args.insert("password".to_string(), serde_json::to_value(password)?);
        args.insert("uri".to_string(), serde_json::to_value(uri)?);
        args.insert("timeout".to_string(), serde_json::to_value(timeout)?);
        tp.invoke("plugin_register", Some(args))?;

        Ok(Client {
            tp,
            plugin_name,
            unregistered: false,
        })
    }

    /// Close the connection, telling the plugin to unregister and release
    /// its resources. Dropping the client does the same on a best effort
    /// basis.
    pub fn close(mut self) -> Result<()> {
        self.unregistered = true;
        self.tp.invoke("plugin_unregister", None)?;
        Ok(())
    }

    /// Gets a list of systems on this connection.
    pub fn systems(&mut self) -> Result<Vec<System>> {
        Ok(serde_json::from_value(self.tp.invoke("systems", None)?)?)
    }

    /// Gets a list of volumes on this connection.
    ///
    /// The `search` argument is either empty or a
    /// `["search_key", "search_value"]` pair.
    pub fn volumes(&mut self, search: &[&str]) -> Result<Vec<Volume>> {
        let args = search_args(search)?;
        Ok(serde_json::from_value(self.tp
            .invoke("volumes", Some(args))?)?)
    }

    /// Gets a list of pools on this connection.
    ///
    /// The `search` argument is either empty or a
    /// `["search_key", "search_value"]` pair.
    pub fn pools(&mut self, search: &[&str]) -> Result<Vec<Pool>> {
        let args = search_args(search)?;
        Ok(serde_json::from_value(self.tp
            .invoke("pools", Some(args))?)?)
    }

    /// Gets a list of disks on this connection.
    pub fn disks(&mut self) -> Result<Vec<Disk>> {
        Ok(serde_json::from_value(self.tp.invoke("disks", None)?)?)
    }

    /// Gets a list of file systems on this connection.
    pub fn fs(&mut self) -> Result<Vec<FileSystem>> {
        Ok(serde_json::from_value(self.tp.invoke("fs", None)?)?)
    }

    /// Gets a list of NFS exports on this connection.
    ///
    /// The `search` argument is either empty or a
    /// `["search_key", "search_value"]` pair.
    pub fn nfs_exports(&mut self, search: &[&str]) -> Result<Vec<NfsExport>> {
        let args = search_args(search)?;
        Ok(serde_json::from_value(self.tp
            .invoke("exports", Some(args))?)?)
    }

    /// Gets a list of access group on this connection.
    pub fn access_groups(&mut self) -> Result<Vec<AccessGroup>> {
        Ok(serde_json::from_value(self.tp
            .invoke("access_groups", None)?)?)
    }

    /// Gets a list of target ports on this connection.
    pub fn target_ports(&mut self) -> Result<Vec<TargetPort>> {
        Ok(serde_json::from_value(self.tp
            .invoke("target_ports", None)?)?)
    }

    /// Gets a list of batteries on this connection.
    pub fn batteries(&mut self) -> Result<Vec<Battery>> {
        Ok(serde_json::from_value(self.tp.invoke("batteries", None)?)?)
    }

    /// Free a plugin-side job. Only call this for jobs driven manually via
    /// [`Client::job_status()`][1], [`Client::job_wait()`][2] frees the job
    /// itself.
    ///
    /// [1]: #method.job_status
    /// [2]: #method.job_wait
    pub fn job_free(&mut self, job_id: &str) -> Result<()> {
        let mut args = Map::new();
        args.insert("job_id".to_string(), serde_json::to_value(job_id)?);
        self.tp.invoke("job_free", Some(args))?;
        Ok(())
    }

    /// Query the status of a plugin-side job.
    ///
    /// Returns `(status, percent, result)`. The result is only present once
    /// `status` is [`JobStatus::Complete`][1] and the job produced an
    /// artifact. A failed job is reported as the error the plugin recorded
    /// for it.
    ///
    /// [1]: enum.JobStatus.html
    pub fn job_status<T: DeserializeOwned>(
        &mut self,
        job_id: &str,
    ) -> Result<(JobStatus, u8, Option<T>)> {
        let mut args = Map::new();
        args.insert("job_id".to_string(), serde_json::to_value(job_id)?);
        let ret = self.tp.invoke("job_status", Some(args))?;
        let ret_array = ret.as_array().ok_or_plugin_bug(&ret)?;
        if ret_array.len() != 3 {
            return Err(LsmError::PluginBug(format!(
                "job_status() is expecting 3 members from plugin, \
                 but got '{:?}'",
                ret
            )));
        }
        let status: u32 = serde_json::from_value(ret_array[0].clone())
            .map_err(|_| {
                LsmError::PluginBug(format!(
                    "Got invalid job status: {:?}",
                    ret_array[0]
                ))
            })?;
        let percent: u8 = serde_json::from_value(ret_array[1].clone())
            .map_err(|_| {
                LsmError::PluginBug(format!(
                    "Got invalid job percent: {:?}",
                    ret_array[1]
                ))
            })?;
        let payload = &ret_array[2];
        match status {
            JOB_STATUS_INPROGRESS => {
                Ok((JobStatus::InProgress, percent, None))
            }
            JOB_STATUS_COMPLETE => {
                if payload.is_null() {
                    Ok((JobStatus::Complete, percent, None))
                } else {
                    let data: T = serde_json::from_value(payload.clone())
                        .map_err(|_| {
                            LsmError::PluginBug(format!(
                                "Got unexpected job result: {:?}",
                                payload
                            ))
                        })?;
                    Ok((JobStatus::Complete, percent, Some(data)))
                }
            }
            JOB_STATUS_ERROR => {
                let ipc_err: LsmErrorIpc =
                    serde_json::from_value(payload.clone()).map_err(|_| {
                        LsmError::PluginBug(
                            "Got no error detail for failed job".to_string(),
                        )
                    })?;
                Err(From::from(ipc_err))
            }
            _ => Err(LsmError::PluginBug(format!(
                "Got invalid job status {}",
                status
            ))),
        }
    }

    /// Block until the job reaches a terminal state, polling every 250
    /// milliseconds. On completion the job is freed plugin side, a failure
    /// to free is reported as [`LsmError::PluginBug`][1].
    ///
    /// [1]: enum.LsmError.html#variant.PluginBug
    pub fn job_wait<T: DeserializeOwned>(
        &mut self,
        job_id: &str,
    ) -> Result<Option<T>> {
        loop {
            match self.job_status::<T>(job_id)? {
                (JobStatus::InProgress, _, _) => {
                    sleep(Duration::from_millis(JOB_POLL_INTERVAL_MS));
                }
                (JobStatus::Complete, _, data) => {
                    self.job_free(job_id).map_err(|e| {
                        LsmError::PluginBug(format!(
                            "Failed to free completed job '{}': {}",
                            job_id, e
                        ))
                    })?;
                    return Ok(data);
                }
                // A failed job is reported as an error by job_status().
                (JobStatus::Error, _, _) => {
                    return Err(LsmError::PluginBug(
                        "Got no error detail for failed job".to_string(),
                    ))
                }
            }
        }
    }

    fn invoke_job_or_result<T: DeserializeOwned>(
        &mut self,
        method: &str,
        args: Map<String, Value>,
    ) -> Result<Outcome<T>> {
        let ret = self.tp.invoke(method, Some(args))?;
        let ret_array = ret.as_array().ok_or_plugin_bug(&ret)?;
        if ret_array.len() != 2 {
            return Err(LsmError::PluginBug(format!(
                "Plugin returned unexpected data: {:?}",
                ret
            )));
        }
        let job_id = &ret_array[0];
        let item = &ret_array[1];
        match (job_id.is_null(), item.is_null()) {
            (false, true) => Ok(Outcome::Job(
                job_id.as_str().ok_or_plugin_bug(&ret)?.to_string(),
            )),
            (true, false) => {
                Ok(Outcome::Ready(serde_json::from_value(item.clone())
                    .map_err(|_| {
                        LsmError::PluginBug(format!(
                            "Plugin returned unexpected data: {:?}",
                            ret
                        ))
                    })?))
            }
            _ => Err(LsmError::PluginBug(format!(
                "Exactly one of job id and result should be set, got: {:?}",
                ret
            ))),
        }
    }

    fn invoke_job_or_none(
        &mut self,
        method: &str,
        args: Map<String, Value>,
    ) -> Result<Outcome<()>> {
        let ret = self.tp.invoke(method, Some(args))?;
        if ret.is_null() {
            return Ok(Outcome::Ready(()));
        }
        Ok(Outcome::Job(ret.as_str()
            .ok_or_plugin_bug(&ret)?
            .to_string()))
    }

    fn wait_outcome<T: DeserializeOwned>(
        &mut self,
        outcome: Outcome<T>,
    ) -> Result<T> {
        match outcome {
            Outcome::Ready(item) => Ok(item),
            Outcome::Job(job_id) => {
                match self.job_wait(&job_id)? {
                    Some(item) => Ok(item),
                    None => Err(LsmError::PluginBug(format!(
                        "Job '{}' completed without the expected result",
                        job_id
                    ))),
                }
            }
        }
    }

    fn wait_outcome_none(&mut self, outcome: Outcome<()>) -> Result<()> {
        match outcome {
            Outcome::Ready(()) => Ok(()),
            Outcome::Job(job_id) => {
                self.job_wait::<Value>(&job_id)?;
                Ok(())
            }
        }
    }

    /// Create new volume, blocking until an asynchronous plugin finishes the
    /// job. Use [`Client::volume_create_async()`][1] to drive the job
    /// yourself.
    ///
    ///  * `pool` -- The pool where new volume should be allocated from.
    ///  * `name` -- The name of new volume. It might be altered or
    ///    ignored.
    ///  * `size_bytes` -- Size in bytes of new volume. You may use function
    ///    [`size_human_2_size_bytes()`][2] to convert string like '1.1 GiB'
    ///    to integer size bytes.
    ///  * `thinp` -- Whether to create thin provisioning volume.
    ///    Check [VolumeProvisioning][3].
    ///
    /// [1]: #method.volume_create_async
    /// [2]: fn.size_human_2_size_bytes.html
    /// [3]: enum.VolumeProvisioning.html
    pub fn volume_create(
        &mut self,
        pool: &Pool,
        name: &str,
        size_bytes: u64,
        thinp: VolumeProvisioning,
    ) -> Result<Volume> {
        let ret = self.volume_create_async(pool, name, size_bytes, thinp)?;
        self.wait_outcome(ret)
    }

    /// Non-blocking form of [`Client::volume_create()`][1]: returns the job
    /// handle when the plugin goes asynchronous.
    ///
    /// [1]: #method.volume_create
    pub fn volume_create_async(
        &mut self,
        pool: &Pool,
        name: &str,
        size_bytes: u64,
        thinp: VolumeProvisioning,
    ) -> Result<Outcome<Volume>> {
        let mut args = Map::new();
        args.insert(
            "provisioning".to_string(),
            serde_json::to_value(thinp as i32)?,
        );
        args.insert(
            "size_bytes".to_string(),
            serde_json::to_value(size_bytes)?,
        );
        args.insert("volume_name".to_string(), serde_json::to_value(name)?);
        args.insert("pool".to_string(), serde_json::to_value(pool)?);
        self.invoke_job_or_result("volume_create", args)
    }

    /// Delete a volume.
    ///
    /// # Errors
    ///
    ///  * [`LsmError::HasChildDependency`][1]: volume has child dependency,
    ///    e.g. specified volume is a replication source. Please use
    ///    [`Client::vol_child_dep_rm()`][2] to eliminate child dependency.
    ///
    /// [1]: enum.LsmError.html#variant.HasChildDependency
    /// [2]: #method.vol_child_dep_rm
    pub fn volume_delete(&mut self, vol: &Volume) -> Result<()> {
        let ret = self.volume_delete_async(vol)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::volume_delete()`][1].
    ///
    /// [1]: #method.volume_delete
    pub fn volume_delete_async(
        &mut self,
        vol: &Volume,
    ) -> Result<Outcome<()>> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        self.invoke_job_or_none("volume_delete", args)
    }

    /// Set connection timeout value in milliseconds.
    pub fn time_out_set(&mut self, ms: u32) -> Result<()> {
        let mut args = Map::new();
        args.insert("ms".to_string(), serde_json::to_value(ms)?);
        self.tp.invoke("time_out_set", Some(args))?;
        Ok(())
    }

    /// Get connection timeout value.
    pub fn time_out_get(&mut self) -> Result<u32> {
        Ok(serde_json::from_value(self.tp
            .invoke("time_out_get", None)?)?)
    }

    /// Get system's capabilities.
    ///
    /// Capability is used to indicate whether certain functionality is
    /// supported by specified storage system. Please check desired function
    /// for required capability. To verify capability is supported, use
    /// [`Capabilities::is_supported()`][1]. If the functionality is not
    /// listed in the enumerated [`Capability`][2] type then that
    /// functionality is mandatory and required to exist.
    ///
    /// [1]: struct.Capabilities.html#method.is_supported
    /// [2]: enum.Capability.html
    pub fn capabilities(&mut self, sys: &System) -> Result<Capabilities> {
        let mut args = Map::new();
        args.insert("system".to_string(), serde_json::to_value(sys)?);
        Ok(serde_json::from_value(self.tp
            .invoke("capabilities", Some(args))?)?)
    }

    /// Get plugin information.
    pub fn plugin_info(&mut self) -> Result<PluginInfo> {
        let val = self.tp.invoke("plugin_info", None)?;
        let data: Vec<String> = serde_json::from_value(val.clone())?;
        let desc = data.get(0).ok_or_plugin_bug(&val)?;
        let version = data.get(1).ok_or_plugin_bug(&val)?;
        Ok(PluginInfo {
            version: version.to_string(),
            description: desc.to_string(),
            name: self.plugin_name.clone(),
        })
    }

    /// Changes the read cache percentage for the specified system.
    ///
    /// # Errors
    ///
    ///  * [`LsmError::InvalidArgument`][1]: `read_pct` is larger than 100.
    ///
    /// [1]: enum.LsmError.html#variant.InvalidArgument
    pub fn sys_read_cache_pct_set(
        &mut self,
        sys: &System,
        read_pct: u32,
    ) -> Result<()> {
        verify_read_cache_pct(read_pct)?;
        let mut args = Map::new();
        args.insert("system".to_string(), serde_json::to_value(sys)?);
        args.insert("read_pct".to_string(), serde_json::to_value(read_pct)?);
        self.tp
            .invoke("system_read_cache_pct_update", Some(args))?;
        Ok(())
    }

    /// Set(override) iSCSI CHAP authentication.
    ///
    ///  * `init_id` -- Initiator ID.
    ///  * `in_user` -- The inbound authentication username. The inbound
    ///    authentication means the iSCSI initiator authenticates the iSCSI
    ///    target using CHAP.
    ///  * `in_pass` -- The inbound authentication password.
    ///  * `out_user` -- The outbound authentication username. The outbound
    ///    authentication means the iSCSI target authenticates the iSCSI
    ///    initiator using CHAP.
    ///  * `out_pass` -- The outbound authentication password.
    pub fn iscsi_chap_auth_set(
        &mut self,
        init_id: &str,
        in_user: Option<&str>,
        in_pass: Option<&str>,
        out_user: Option<&str>,
        out_pass: Option<&str>,
    ) -> Result<()> {
        let mut args = Map::new();
        args.insert("init_id".to_string(), serde_json::to_value(init_id)?);
        args.insert("in_user".to_string(), serde_json::to_value(in_user)?);
        args.insert(
            "in_password".to_string(),
            serde_json::to_value(in_pass)?,
        );
        args.insert("out_user".to_string(), serde_json::to_value(out_user)?);
        args.insert(
            "out_password".to_string(),
            serde_json::to_value(out_pass)?,
        );
        self.tp.invoke("iscsi_chap_auth", Some(args))?;
        Ok(())
    }

    /// Resize a volume, blocking until an asynchronous plugin finishes the
    /// job.
    ///
    /// Please check whether pool allows volume resize via
    /// [`Pool.unsupported_actions`][1].
    ///
    /// [1]: struct.Pool.html#structfield.unsupported_actions
    pub fn volume_resize(
        &mut self,
        vol: &Volume,
        new_size_bytes: u64,
    ) -> Result<Volume> {
        let ret = self.volume_resize_async(vol, new_size_bytes)?;
        self.wait_outcome(ret)
    }

    /// Non-blocking form of [`Client::volume_resize()`][1].
    ///
    /// [1]: #method.volume_resize
    pub fn volume_resize_async(
        &mut self,
        vol: &Volume,
        new_size_bytes: u64,
    ) -> Result<Outcome<Volume>> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        args.insert(
            "new_size_bytes".to_string(),
            serde_json::to_value(new_size_bytes)?,
        );
        self.invoke_job_or_result("volume_resize", args)
    }

    /// Replicate a volume, blocking until an asynchronous plugin finishes
    /// the job.
    ///
    ///  * `pool` -- The pool where new replication target volume should be
    ///    allocated from. For `None`, will use the same pool of source
    ///    volume.
    ///  * `rep_type` -- Replication type.
    ///  * `src_vol` -- Replication source volume.
    ///  * `name` -- Name for replication target volume. Might be altered or
    ///    ignored.
    pub fn volume_replicate(
        &mut self,
        pool: Option<&Pool>,
        rep_type: VolumeReplicateType,
        src_vol: &Volume,
        name: &str,
    ) -> Result<Volume> {
        let ret = self.volume_replicate_async(pool, rep_type, src_vol, name)?;
        self.wait_outcome(ret)
    }

    /// Non-blocking form of [`Client::volume_replicate()`][1].
    ///
    /// [1]: #method.volume_replicate
    pub fn volume_replicate_async(
        &mut self,
        pool: Option<&Pool>,
        rep_type: VolumeReplicateType,
        src_vol: &Volume,
        name: &str,
    ) -> Result<Outcome<Volume>> {
        let mut args = Map::new();
        args.insert("pool".to_string(), serde_json::to_value(pool)?);
        args.insert("volume_src".to_string(), serde_json::to_value(src_vol)?);
        args.insert(
            "rep_type".to_string(),
            serde_json::to_value(rep_type as i32)?,
        );
        args.insert("name".to_string(), serde_json::to_value(name)?);
        self.invoke_job_or_result("volume_replicate", args)
    }

    /// Block size for the [`Client::volume_replicate_range()`][1].
    ///
    /// [1]: #method.volume_replicate_range
    pub fn volume_rep_range_blk_size(&mut self, sys: &System) -> Result<i32> {
        let mut args = Map::new();
        args.insert("system".to_string(), serde_json::to_value(sys)?);
        Ok(serde_json::from_value(self.tp
            .invoke("volume_replicate_range_block_size", Some(args))?)?)
    }

    /// Replicates a portion of a volume to a volume, blocking until an
    /// asynchronous plugin finishes the job.
    ///
    /// * `rep_type` -- Replication type.
    /// * `src_vol` -- Replication source volume.
    /// * `dst_vol` -- Replication target volume.
    /// * `ranges` -- Replication block ranges.
    pub fn volume_replicate_range(
        &mut self,
        rep_type: VolumeReplicateType,
        src_vol: &Volume,
        dst_vol: &Volume,
        ranges: &[BlockRange],
    ) -> Result<()> {
        let ret =
            self.volume_replicate_range_async(rep_type, src_vol, dst_vol,
                                              ranges)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::volume_replicate_range()`][1].
    ///
    /// [1]: #method.volume_replicate_range
    pub fn volume_replicate_range_async(
        &mut self,
        rep_type: VolumeReplicateType,
        src_vol: &Volume,
        dst_vol: &Volume,
        ranges: &[BlockRange],
    ) -> Result<Outcome<()>> {
        let mut args = Map::new();
        args.insert(
            "rep_type".to_string(),
            serde_json::to_value(rep_type as i32)?,
        );
        args.insert("ranges".to_string(), serde_json::to_value(ranges)?);
        args.insert("volume_src".to_string(), serde_json::to_value(src_vol)?);
        args.insert(
            "volume_dest".to_string(),
            serde_json::to_value(dst_vol)?,
        );
        self.invoke_job_or_none("volume_replicate_range", args)
    }

    /// Set a volume to online.
    ///
    /// Enable the specified volume when that volume is disabled by
    /// administrator or via [`Client::volume_disable()`][1]
    ///
    /// [1]: #method.volume_disable
    pub fn volume_enable(&mut self, vol: &Volume) -> Result<()> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        self.tp.invoke("volume_enable", Some(args))?;
        Ok(())
    }

    /// Disable the read and write access to the specified volume.
    pub fn volume_disable(&mut self, vol: &Volume) -> Result<()> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        self.tp.invoke("volume_disable", Some(args))?;
        Ok(())
    }

    /// Grant access to a volume for the specified group, also known as LUN
    /// masking or mapping.
    ///
    /// # Errors
    ///
    ///  * [`LsmError::EmptyAccessGroup`][1]: Cannot mask volume to empty
    ///    access group.
    ///
    /// [1]: enum.LsmError.html#variant.EmptyAccessGroup
    pub fn volume_mask(
        &mut self,
        vol: &Volume,
        ag: &AccessGroup,
    ) -> Result<()> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        args.insert("access_group".to_string(), serde_json::to_value(ag)?);
        self.tp.invoke("volume_mask", Some(args))?;
        Ok(())
    }

    /// Revokes access to a volume for the specified group
    pub fn volume_unmask(
        &mut self,
        vol: &Volume,
        ag: &AccessGroup,
    ) -> Result<()> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        args.insert("access_group".to_string(), serde_json::to_value(ag)?);
        self.tp.invoke("volume_unmask", Some(args))?;
        Ok(())
    }

    /// Create an access group.
    ///
    /// Creates a new access group with one initiator in it. You may expand
    /// the access group by adding more initiators via
    /// [`Client::access_group_init_add()`][1]
    ///
    /// # Errors
    ///
    ///  * [`LsmError::ExistsInitiator`][2]: Specified initiator is used by
    ///    other access group.
    ///
    /// [1]: #method.access_group_init_add
    /// [2]: enum.LsmError.html#variant.ExistsInitiator
    pub fn access_group_create(
        &mut self,
        name: &str,
        init_id: &str,
        init_type: InitiatorType,
        sys: &System,
    ) -> Result<AccessGroup> {
        verify_init_id_str(init_id, init_type)?;
        let mut args = Map::new();
        args.insert("name".to_string(), serde_json::to_value(name)?);
        args.insert("init_id".to_string(), serde_json::to_value(init_id)?);
        args.insert(
            "init_type".to_string(),
            serde_json::to_value(init_type as i32)?,
        );
        args.insert("system".to_string(), serde_json::to_value(sys)?);
        Ok(serde_json::from_value(self.tp
            .invoke("access_group_create", Some(args))?)?)
    }

    /// Delete an access group. Only access group with no volume masked can
    /// be deleted. The call returns no artifact, any wire payload is
    /// discarded.
    ///
    /// # Errors
    ///
    ///  * [`LsmError::IsMasked`][1]: Access group has volume masked to.
    ///
    /// [1]: enum.LsmError.html#variant.IsMasked
    pub fn access_group_delete(&mut self, ag: &AccessGroup) -> Result<()> {
        let mut args = Map::new();
        args.insert("access_group".to_string(), serde_json::to_value(ag)?);
        self.tp.invoke("access_group_delete", Some(args))?;
        Ok(())
    }

    /// Add an initiator to the access group.
    ///
    /// # Errors
    ///
    ///  * [`LsmError::ExistsInitiator`][1]: Specified initiator is used by
    ///    other access group.
    ///
    /// [1]: enum.LsmError.html#variant.ExistsInitiator
    pub fn access_group_init_add(
        &mut self,
        ag: &AccessGroup,
        init_id: &str,
        init_type: InitiatorType,
    ) -> Result<AccessGroup> {
        verify_init_id_str(init_id, init_type)?;
        let mut args = Map::new();
        args.insert("access_group".to_string(), serde_json::to_value(ag)?);
        args.insert("init_id".to_string(), serde_json::to_value(init_id)?);
        args.insert(
            "init_type".to_string(),
            serde_json::to_value(init_type as i32)?,
        );
        Ok(serde_json::from_value(self.tp
            .invoke("access_group_initiator_add", Some(args))?)?)
    }

    /// Delete an initiator from an access group.
    ///
    /// # Errors
    ///
    ///  * [`LsmError::LastInitInAccessGroup`][1]: Specified initiator is the
    ///  last initiator of access group. Use
    ///  [`Client::access_group_delete()`][2] instead.
    ///
    /// [1]: enum.LsmError.html#variant.LastInitInAccessGroup
    /// [2]: #method.access_group_delete
    pub fn access_group_init_del(
        &mut self,
        ag: &AccessGroup,
        init_id: &str,
        init_type: InitiatorType,
    ) -> Result<AccessGroup> {
        verify_init_id_str(init_id, init_type)?;
        let mut args = Map::new();
        args.insert("access_group".to_string(), serde_json::to_value(ag)?);
        args.insert("init_id".to_string(), serde_json::to_value(init_id)?);
        args.insert(
            "init_type".to_string(),
            serde_json::to_value(init_type as i32)?,
        );
        Ok(serde_json::from_value(self.tp
            .invoke("access_group_initiator_delete", Some(args))?)?)
    }

    /// Query volumes that the specified access group has access to.
    pub fn vols_masked_to_ag(
        &mut self,
        ag: &AccessGroup,
    ) -> Result<Vec<Volume>> {
        let mut args = Map::new();
        args.insert("access_group".to_string(), serde_json::to_value(ag)?);
        Ok(serde_json::from_value(self.tp.invoke(
            "volumes_accessible_by_access_group",
            Some(args),
        )?)?)
    }

    /// Retrieves the access groups that have access to the specified volume.
    pub fn ags_granted_to_vol(
        &mut self,
        vol: &Volume,
    ) -> Result<Vec<AccessGroup>> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        Ok(serde_json::from_value(self.tp
            .invoke("access_groups_granted_to_volume", Some(args))?)?)
    }

    /// Check whether volume has child dependencies.
    pub fn vol_has_child_dep(&mut self, vol: &Volume) -> Result<bool> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        Ok(serde_json::from_value(self.tp
            .invoke("volume_child_dependency", Some(args))?)?)
    }

    /// Delete all child dependencies of the specified volume, blocking until
    /// an asynchronous plugin finishes the job.
    ///
    /// Instruct storage system to remove all child dependencies of the
    /// specified volume by duplicating the required storage before breaking
    /// replication relationship. This function might take a long time(days
    /// or even weeks), you might want to use
    /// [`Client::vol_child_dep_rm_async()`][1] instead.
    ///
    /// [1]: #method.vol_child_dep_rm_async
    pub fn vol_child_dep_rm(&mut self, vol: &Volume) -> Result<()> {
        let ret = self.vol_child_dep_rm_async(vol)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::vol_child_dep_rm()`][1].
    ///
    /// [1]: #method.vol_child_dep_rm
    pub fn vol_child_dep_rm_async(
        &mut self,
        vol: &Volume,
    ) -> Result<Outcome<()>> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        self.invoke_job_or_none("volume_child_dependency_rm", args)
    }

    /// Create a new file system, blocking until an asynchronous plugin
    /// finishes the job.
    ///
    ///  * `pool` -- The pool where new file system should be allocated from.
    ///  * `name` -- The name of new file system. It might be altered or
    ///    ignored.
    ///  * `size_bytes` -- Size in bytes of new file system. You may use
    ///    function [`size_human_2_size_bytes()`][1] to convert string like
    ///    '1.1 GiB' to integer size bytes.
    ///
    /// [1]: fn.size_human_2_size_bytes.html
    pub fn fs_create(
        &mut self,
        pool: &Pool,
        name: &str,
        size_bytes: u64,
    ) -> Result<FileSystem> {
        let ret = self.fs_create_async(pool, name, size_bytes)?;
        self.wait_outcome(ret)
    }

    /// Non-blocking form of [`Client::fs_create()`][1].
    ///
    /// [1]: #method.fs_create
    pub fn fs_create_async(
        &mut self,
        pool: &Pool,
        name: &str,
        size_bytes: u64,
    ) -> Result<Outcome<FileSystem>> {
        let mut args = Map::new();
        args.insert(
            "size_bytes".to_string(),
            serde_json::to_value(size_bytes)?,
        );
        args.insert("name".to_string(), serde_json::to_value(name)?);
        args.insert("pool".to_string(), serde_json::to_value(pool)?);
        self.invoke_job_or_result("fs_create", args)
    }

    /// Resize a file system, blocking until an asynchronous plugin finishes
    /// the job.
    pub fn fs_resize(
        &mut self,
        fs: &FileSystem,
        new_size_bytes: u64,
    ) -> Result<FileSystem> {
        let ret = self.fs_resize_async(fs, new_size_bytes)?;
        self.wait_outcome(ret)
    }

    /// Non-blocking form of [`Client::fs_resize()`][1].
    ///
    /// [1]: #method.fs_resize
    pub fn fs_resize_async(
        &mut self,
        fs: &FileSystem,
        new_size_bytes: u64,
    ) -> Result<Outcome<FileSystem>> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        args.insert(
            "new_size_bytes".to_string(),
            serde_json::to_value(new_size_bytes)?,
        );
        self.invoke_job_or_result("fs_resize", args)
    }

    /// Delete a file system, blocking until an asynchronous plugin finishes
    /// the job.
    ///
    /// When file system has snapshot attached, all its snapshots will be
    /// deleted also. When file system is exported, all its exports will be
    /// deleted also. If specified file system has child dependency, it
    /// cannot be deleted, please use [`Client::fs_has_child_dep()`][1] and
    /// [`Client::fs_child_dep_rm()`][2].
    ///
    /// [1]: #method.fs_has_child_dep
    /// [2]: #method.fs_child_dep_rm
    pub fn fs_delete(&mut self, fs: &FileSystem) -> Result<()> {
        let ret = self.fs_delete_async(fs)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::fs_delete()`][1].
    ///
    /// [1]: #method.fs_delete
    pub fn fs_delete_async(
        &mut self,
        fs: &FileSystem,
    ) -> Result<Outcome<()>> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        self.invoke_job_or_none("fs_delete", args)
    }

    /// Clone an existing file system, blocking until an asynchronous plugin
    /// finishes the job.
    ///
    /// Create a point in time read writeable space efficient copy of
    /// specified file system, also known as read writeable snapshot. The new
    /// file system will reside in the same pool of specified file system.
    ///
    /// Optionally, new file system could be based on a snapshot specified by
    /// `snapshot` argument.
    pub fn fs_clone(
        &mut self,
        src_fs: &FileSystem,
        dst_fs_name: &str,
        snapshot: Option<&FileSystemSnapShot>,
    ) -> Result<FileSystem> {
        let ret = self.fs_clone_async(src_fs, dst_fs_name, snapshot)?;
        self.wait_outcome(ret)
    }

    /// Non-blocking form of [`Client::fs_clone()`][1].
    ///
    /// [1]: #method.fs_clone
    pub fn fs_clone_async(
        &mut self,
        src_fs: &FileSystem,
        dst_fs_name: &str,
        snapshot: Option<&FileSystemSnapShot>,
    ) -> Result<Outcome<FileSystem>> {
        let mut args = Map::new();
        args.insert("src_fs".to_string(), serde_json::to_value(src_fs)?);
        args.insert(
            "dest_fs_name".to_string(),
            serde_json::to_value(dst_fs_name)?,
        );
        args.insert("snapshot".to_string(), serde_json::to_value(snapshot)?);
        self.invoke_job_or_result("fs_clone", args)
    }

    /// Clone a file on a file system, blocking until an asynchronous plugin
    /// finishes the job.
    ///
    /// Optionally, file contents could be based on a snapshot specified by
    /// `snapshot` argument.
    pub fn fs_file_clone(
        &mut self,
        fs: &FileSystem,
        src_file_name: &str,
        dst_file_name: &str,
        snapshot: Option<&FileSystemSnapShot>,
    ) -> Result<()> {
        let ret = self.fs_file_clone_async(fs, src_file_name, dst_file_name,
                                           snapshot)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::fs_file_clone()`][1].
    ///
    /// [1]: #method.fs_file_clone
    pub fn fs_file_clone_async(
        &mut self,
        fs: &FileSystem,
        src_file_name: &str,
        dst_file_name: &str,
        snapshot: Option<&FileSystemSnapShot>,
    ) -> Result<Outcome<()>> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        args.insert(
            "src_file_name".to_string(),
            serde_json::to_value(src_file_name)?,
        );
        args.insert(
            "dest_file_name".to_string(),
            serde_json::to_value(dst_file_name)?,
        );
        args.insert("snapshot".to_string(), serde_json::to_value(snapshot)?);
        self.invoke_job_or_none("fs_file_clone", args)
    }

    /// Get a list of snapshots of specified file system.
    pub fn fs_snapshots(
        &mut self,
        fs: &FileSystem,
    ) -> Result<Vec<FileSystemSnapShot>> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        Ok(serde_json::from_value(self.tp
            .invoke("fs_snapshots", Some(args))?)?)
    }

    /// Create a file system snapshot, blocking until an asynchronous plugin
    /// finishes the job.
    pub fn fs_snapshot_create(
        &mut self,
        fs: &FileSystem,
        name: &str,
    ) -> Result<FileSystemSnapShot> {
        let ret = self.fs_snapshot_create_async(fs, name)?;
        self.wait_outcome(ret)
    }

    /// Non-blocking form of [`Client::fs_snapshot_create()`][1].
    ///
    /// [1]: #method.fs_snapshot_create
    pub fn fs_snapshot_create_async(
        &mut self,
        fs: &FileSystem,
        name: &str,
    ) -> Result<Outcome<FileSystemSnapShot>> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        args.insert("snapshot_name".to_string(), serde_json::to_value(name)?);
        self.invoke_job_or_result("fs_snapshot_create", args)
    }

    /// Delete a file system snapshot, blocking until an asynchronous plugin
    /// finishes the job.
    pub fn fs_snapshot_delete(
        &mut self,
        fs: &FileSystem,
        snapshot: &FileSystemSnapShot,
    ) -> Result<()> {
        let ret = self.fs_snapshot_delete_async(fs, snapshot)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::fs_snapshot_delete()`][1].
    ///
    /// [1]: #method.fs_snapshot_delete
    pub fn fs_snapshot_delete_async(
        &mut self,
        fs: &FileSystem,
        snapshot: &FileSystemSnapShot,
    ) -> Result<Outcome<()>> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        args.insert("snapshot".to_string(), serde_json::to_value(snapshot)?);
        self.invoke_job_or_none("fs_snapshot_delete", args)
    }

    /// Restore a file system based on specified snapshot, blocking until an
    /// asynchronous plugin finishes the job.
    ///
    ///  * `fs` -- File system to restore.
    ///  * `snapshot` -- Snapshot to use.
    ///  * `all_files` -- `true` for restore all files. `false` for restore
    ///    specified files only.
    ///  * `files` -- Only restore specified files. Ignored if `all_files` is
    ///    `true`.
    ///  * `restore_files` -- If not empty, rename restored files to defined
    ///    file paths and names.
    pub fn fs_snapshot_restore(
        &mut self,
        fs: &FileSystem,
        snapshot: &FileSystemSnapShot,
        all_files: bool,
        files: &[&str],
        restore_files: &[&str],
    ) -> Result<()> {
        let ret = self.fs_snapshot_restore_async(fs, snapshot, all_files,
                                                 files, restore_files)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::fs_snapshot_restore()`][1].
    ///
    /// [1]: #method.fs_snapshot_restore
    pub fn fs_snapshot_restore_async(
        &mut self,
        fs: &FileSystem,
        snapshot: &FileSystemSnapShot,
        all_files: bool,
        files: &[&str],
        restore_files: &[&str],
    ) -> Result<Outcome<()>> {
        verify_snapshot_restore_files(all_files, files, restore_files)?;
        let mut args = Map::new();
        if all_files {
            let empty: [&str; 0] = [];
            args.insert("files".to_string(), serde_json::to_value(empty)?);
            args.insert(
                "restore_files".to_string(),
                serde_json::to_value(empty)?,
            );
        } else {
            args.insert("files".to_string(), serde_json::to_value(files)?);
            args.insert(
                "restore_files".to_string(),
                serde_json::to_value(restore_files)?,
            );
        }
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        args.insert("snapshot".to_string(), serde_json::to_value(snapshot)?);
        args.insert(
            "all_files".to_string(),
            serde_json::to_value(all_files)?,
        );
        self.invoke_job_or_none("fs_snapshot_restore", args)
    }

    /// Check whether file system has a child dependency.
    pub fn fs_has_child_dep(
        &mut self,
        fs: &FileSystem,
        files: Option<Vec<&str>>,
    ) -> Result<bool> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        let files: Vec<&str> = files.unwrap_or_default();
        args.insert("files".to_string(), serde_json::to_value(files)?);
        Ok(serde_json::from_value(self.tp
            .invoke("fs_child_dependency", Some(args))?)?)
    }

    /// Delete all child dependencies of the specified file system, blocking
    /// until an asynchronous plugin finishes the job.
    ///
    /// Instruct storage system to remove all child dependencies of the
    /// specified file system by duplicating the required storage before
    /// breaking replication relationship. This function might take a long
    /// time(days or even weeks), you might want to use
    /// [`Client::fs_child_dep_rm_async()`][1] instead.
    ///
    /// [1]: #method.fs_child_dep_rm_async
    pub fn fs_child_dep_rm(
        &mut self,
        fs: &FileSystem,
        files: Option<Vec<&str>>,
    ) -> Result<()> {
        let ret = self.fs_child_dep_rm_async(fs, files)?;
        self.wait_outcome_none(ret)
    }

    /// Non-blocking form of [`Client::fs_child_dep_rm()`][1].
    ///
    /// [1]: #method.fs_child_dep_rm
    pub fn fs_child_dep_rm_async(
        &mut self,
        fs: &FileSystem,
        files: Option<Vec<&str>>,
    ) -> Result<Outcome<()>> {
        let mut args = Map::new();
        args.insert("fs".to_string(), serde_json::to_value(fs)?);
        let files: Vec<&str> = files.unwrap_or_default();
        args.insert("files".to_string(), serde_json::to_value(files)?);
        self.invoke_job_or_none("fs_child_dependency_rm", args)
    }

    /// Get supported NFS client authentication types.
    pub fn nfs_exp_auth_type_list(&mut self) -> Result<Vec<String>> {
        Ok(serde_json::from_value(self.tp
            .invoke("export_auth", None)?)?)
    }

    /// Create or modify an NFS export.
    ///
    /// * `fs` -- File system to export.
    /// * `export_path` -- Export path. If already exists, will modify
    ///   existing NFS export. If `None`, will let storage system generate
    ///   one.
    /// * `access` -- NFS access details.
    /// * `auth_type` -- NFS client authentication type. Get from
    ///   [`Client::nfs_exp_auth_type_list()`][1].
    /// * `options` -- Extra NFS options.
    ///
    /// [1]: #method.nfs_exp_auth_type_list
    pub fn fs_export(
        &mut self,
        fs: &FileSystem,
        export_path: Option<&str>,
        access: &NfsAccess,
        auth_type: Option<&str>,
        options: Option<&str>,
    ) -> Result<NfsExport> {
        verify_nfs_access(access)?;

        let mut args = Map::new();
        args.insert("fs_id".to_string(), serde_json::to_value(&fs.id)?);
        args.insert(
            "export_path".to_string(),
            serde_json::to_value(export_path)?,
        );
        args.insert(
            "root_list".to_string(),
            serde_json::to_value(access.root_list)?,
        );
        args.insert(
            "rw_list".to_string(),
            serde_json::to_value(access.rw_list)?,
        );
        args.insert(
            "ro_list".to_string(),
            serde_json::to_value(access.ro_list)?,
        );

        let anon_uid = access.anon_uid.unwrap_or(NfsExport::ANON_UID_GID_NA);
        let anon_gid = access.anon_gid.unwrap_or(NfsExport::ANON_UID_GID_NA);
        args.insert("anon_uid".to_string(), serde_json::to_value(anon_uid)?);
        args.insert("anon_gid".to_string(), serde_json::to_value(anon_gid)?);
        args.insert(
            "auth_type".to_string(),
            serde_json::to_value(auth_type)?,
        );
        args.insert("options".to_string(), serde_json::to_value(options)?);
        Ok(serde_json::from_value(self.tp
            .invoke("export_fs", Some(args))?)?)
    }

    /// Unexport specified NFS export.
    pub fn fs_unexport(&mut self, exp: &NfsExport) -> Result<()> {
        let mut args = Map::new();
        args.insert("export".to_string(), serde_json::to_value(exp)?);
        self.tp.invoke("export_remove", Some(args))?;
        Ok(())
    }

    /// Get volume RAID information.
    pub fn vol_raid_info(&mut self, vol: &Volume) -> Result<VolumeRaidInfo> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        let ret = self.tp.invoke("volume_raid_info", Some(args))?;
        let data: Vec<i32> =
            serde_json::from_value(ret.clone()).map_err(|_| {
                LsmError::PluginBug(format!(
                    "vol_raid_info() is expecting 5 integers from plugin, \
                     but got '{:?}'",
                    ret
                ))
            })?;
        if data.len() != 5 {
            return Err(LsmError::PluginBug(format!(
                "vol_raid_info() is expecting 5 integers from plugin, \
                 but got '{:?}'",
                ret
            )));
        }
        Ok(VolumeRaidInfo {
            raid_type: From::from(data[0]),
            strip_size: data[1] as u32,
            disk_count: data[2] as u32,
            min_io_size: data[3] as u32,
            opt_io_size: data[4] as u32,
        })
    }

    /// Get pool member information.
    pub fn pool_member_info(&mut self, pool: &Pool) -> Result<PoolMemberInfo> {
        let mut args = Map::new();
        args.insert("pool".to_string(), serde_json::to_value(pool)?);
        let ret = self.tp.invoke("pool_member_info", Some(args))?;
        let ret_array = ret.as_array().ok_or_plugin_bug(&ret)?;
        if ret_array.len() != 3 {
            return Err(LsmError::PluginBug(format!(
                "Plugin returned unexpected data: {:?}",
                ret
            )));
        }
        let raid_type: i32 = serde_json::from_value(ret_array[0].clone())
            .map_err(|_| {
                LsmError::PluginBug(format!(
                    "Plugin returned unexpected data: {:?}",
                    ret
                ))
            })?;
        let raid_type: RaidType = From::from(raid_type);
        let member_type: u32 = serde_json::from_value(ret_array[1].clone())
            .map_err(|_| {
                LsmError::PluginBug(format!(
                    "Plugin returned unexpected data: {:?}",
                    ret
                ))
            })?;
        let member_ids: Vec<String> =
            serde_json::from_value(ret_array[2].clone()).map_err(|_| {
                LsmError::PluginBug(format!(
                    "Plugin returned unexpected data: {:?}",
                    ret
                ))
            })?;
        let mut members: Vec<PoolMember> = Vec::new();
        match member_type {
            POOL_MEMBER_TYPE_DISK => for disk in self.disks()? {
                if member_ids.contains(&disk.id) {
                    members.push(PoolMember::Disk(disk));
                }
            },
            POOL_MEMBER_TYPE_POOL => for pool in self.pools(&[])? {
                if member_ids.contains(&pool.id) {
                    members.push(PoolMember::Pool(pool));
                }
            },
            _ => (),
        };
        Ok(PoolMemberInfo { raid_type, members })
    }

    /// Get system capability on creating RAIDed volume. For hardware RAID
    /// only.
    ///
    /// Returns supported RAID types and strip sizes.
    pub fn vol_raid_create_cap_get(
        &mut self,
        sys: &System,
    ) -> Result<(Vec<RaidType>, Vec<u32>)> {
        let mut args = Map::new();
        args.insert("system".to_string(), serde_json::to_value(sys)?);
        let ret = self.tp.invoke("volume_raid_create_cap_get", Some(args))?;
        let ret_array = ret.as_array().ok_or_plugin_bug(&ret)?;
        if ret_array.len() != 2 {
            return Err(LsmError::PluginBug(format!(
                "vol_raid_create_cap_get() is expecting array with \
                 2 members from plugin, but got '{:?}'",
                ret
            )));
        }
        let raid_types: Vec<i32> =
            serde_json::from_value(ret_array[0].clone()).map_err(|_| {
                LsmError::PluginBug(format!(
                    "Plugin returned unexpected data: {:?}",
                    ret
                ))
            })?;
        let strip_sizes: Vec<u32> =
            serde_json::from_value(ret_array[1].clone()).map_err(|_| {
                LsmError::PluginBug(format!(
                    "Plugin returned unexpected data: {:?}",
                    ret
                ))
            })?;
        let mut new_raid_types: Vec<RaidType> = Vec::new();
        for raid_type in raid_types {
            new_raid_types.push(From::from(raid_type));
        }
        Ok((new_raid_types, strip_sizes))
    }

    /// Create RAIDed volume directly from disks. Only for hardware RAID.
    pub fn vol_raid_create(
        &mut self,
        name: &str,
        raid_type: RaidType,
        disks: &[Disk],
        strip_size: Option<u32>,
    ) -> Result<Volume> {
        verify_raid_disk_count(raid_type, disks.len())?;
        let mut args = Map::new();
        args.insert("name".to_string(), serde_json::to_value(name)?);
        args.insert(
            "raid_type".to_string(),
            serde_json::to_value(raid_type as i32)?,
        );
        args.insert("disks".to_string(), serde_json::to_value(disks)?);
        let strip_size = strip_size.unwrap_or(0u32);
        args.insert(
            "strip_size".to_string(),
            serde_json::to_value(strip_size)?,
        );
        Ok(serde_json::from_value(self.tp
            .invoke("volume_raid_create", Some(args))?)?)
    }

    /// Turn on the identification LED for the specified volume.
    ///
    /// All its member disks' identification LED will be turned on.
    pub fn vol_ident_led_on(&mut self, vol: &Volume) -> Result<()> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        self.tp.invoke("volume_ident_led_on", Some(args))?;
        Ok(())
    }

    /// Turn off the identification LED for the specified volume.
    ///
    /// All its member disks' identification LED will be turned off.
    pub fn vol_ident_led_off(&mut self, vol: &Volume) -> Result<()> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        self.tp.invoke("volume_ident_led_off", Some(args))?;
        Ok(())
    }

    /// Get cache information on specified volume.
    pub fn vol_cache_info(&mut self, vol: &Volume) -> Result<VolumeCacheInfo> {
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        let ret = self.tp.invoke("volume_cache_info", Some(args))?;
        let data: Vec<u8> =
            serde_json::from_value(ret.clone()).map_err(|_| {
                LsmError::PluginBug(format!(
                    "vol_cache_info() is expecting 5 integers from plugin, \
                     but got '{:?}'",
                    ret
                ))
            })?;
        if data.len() != 5 {
            return Err(LsmError::PluginBug(format!(
                "vol_cache_info() is expecting 5 integers from plugin, \
                 but got '{:?}'",
                ret
            )));
        }
        Ok(VolumeCacheInfo {
            write_cache_setting: match data[0] {
                WRITE_CACHE_POLICY_WRITE_BACK => CachePolicy::Enabled,
                WRITE_CACHE_POLICY_WRITE_THROUGH => CachePolicy::Disabled,
                WRITE_CACHE_POLICY_AUTO => CachePolicy::Auto,
                _ => CachePolicy::Unknown,
            },
            write_cache_status: match data[1] {
                WRITE_CACHE_STATUS_WRITE_BACK => CachePolicy::Enabled,
                WRITE_CACHE_STATUS_WRITE_THROUGH => CachePolicy::Disabled,
                _ => CachePolicy::Unknown,
            },
            read_cache_setting: match data[2] {
                READ_CACHE_POLICY_ENABLED => CachePolicy::Enabled,
                READ_CACHE_POLICY_DISABLED => CachePolicy::Disabled,
                _ => CachePolicy::Unknown,
            },
            read_cache_status: match data[3] {
                READ_CACHE_STATUS_ENABLED => CachePolicy::Enabled,
                READ_CACHE_STATUS_DISABLED => CachePolicy::Disabled,
                _ => CachePolicy::Unknown,
            },
            physical_disk_cache_status: match data[4] {
                PHYSICAL_DISK_CACHE_ENABLED => CachePolicy::Enabled,
                PHYSICAL_DISK_CACHE_DISABLED => CachePolicy::Disabled,
                PHYSICAL_DISK_CACHE_USE_DISK_SETTING => {
                    CachePolicy::UseDiskSetting
                }
                _ => CachePolicy::Unknown,
            },
        })
    }

    /// Set volume physical disk cache policy.
    pub fn vol_phy_disk_cache_set(
        &mut self,
        vol: &Volume,
        pdc: CachePolicy,
    ) -> Result<()> {
        let pdc: u8 = match pdc {
            CachePolicy::Enabled => PHYSICAL_DISK_CACHE_ENABLED,
            CachePolicy::Disabled => PHYSICAL_DISK_CACHE_DISABLED,
            CachePolicy::UseDiskSetting => {
                PHYSICAL_DISK_CACHE_USE_DISK_SETTING
            }
            _ => {
                return Err(LsmError::InvalidArgument(format!(
                    "Invalid pdc argument {:?}",
                    pdc
                )))
            }
        };
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        args.insert("pdc".to_string(), serde_json::to_value(pdc)?);
        self.tp
            .invoke("volume_physical_disk_cache_update", Some(args))?;
        Ok(())
    }

    /// Set volume write cache policy.
    pub fn vol_write_cache_set(
        &mut self,
        vol: &Volume,
        wcp: CachePolicy,
    ) -> Result<()> {
        let wcp: u8 = match wcp {
            CachePolicy::Enabled => WRITE_CACHE_POLICY_WRITE_BACK,
            CachePolicy::Disabled => WRITE_CACHE_POLICY_WRITE_THROUGH,
            CachePolicy::Auto => WRITE_CACHE_POLICY_AUTO,
            _ => {
                return Err(LsmError::InvalidArgument(format!(
                    "Invalid wcp argument {:?}",
                    wcp
                )))
            }
        };
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        args.insert("wcp".to_string(), serde_json::to_value(wcp)?);
        self.tp
            .invoke("volume_write_cache_policy_update", Some(args))?;
        Ok(())
    }

    /// Set volume read cache policy.
    pub fn vol_read_cache_set(
        &mut self,
        vol: &Volume,
        rcp: CachePolicy,
    ) -> Result<()> {
        let rcp: u8 = match rcp {
            CachePolicy::Enabled => READ_CACHE_POLICY_ENABLED,
            CachePolicy::Disabled => READ_CACHE_POLICY_DISABLED,
            _ => {
                return Err(LsmError::InvalidArgument(format!(
                    "Invalid rcp argument {:?}",
                    rcp
                )))
            }
        };
        let mut args = Map::new();
        args.insert("volume".to_string(), serde_json::to_value(vol)?);
        args.insert("rcp".to_string(), serde_json::to_value(rcp)?);
        self.tp
            .invoke("volume_read_cache_policy_update", Some(args))?;
        Ok(())
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        if !self.unregistered {
            if self.tp.invoke("plugin_unregister", None).is_ok() {}
        }
    }
}

fn search_args(search: &[&str]) -> Result<Map<String, Value>> {
    verify_search(search)?;
    let mut args = Map::new();
    if search.len() == 2 {
        args.insert(
            "search_key".to_string(),
            serde_json::to_value(search[0])?,
        );
        args.insert(
            "search_value".to_string(),
            serde_json::to_value(search[1])?,
        );
    }
    Ok(args)
}
