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

//! Server half of the plugin IPC protocol.
//!
//! A plugin process is spawned by the libstoragemgmt daemon with the
//! connected client socket passed as the last command line argument (the
//! decimal file descriptor number). The plugin wraps the descriptor, builds
//! a [`Plugin`](struct.Plugin.html) from its callback bundles and enters
//! [`Plugin::run()`](struct.Plugin.html#method.run):
//!
//! ```rust,no_run
//! use std::env;
//!
//! use lsm::{Plugin, PluginCallbacks, RequiredCallbacks};
//!
//! fn required_callbacks() -> RequiredCallbacks {
//!     // plugin_register, systems, pools and friends of your back-end.
//!     unimplemented!();
//! }
//!
//! fn main() {
//!     let args: Vec<String> = env::args().collect();
//!     let cb = PluginCallbacks {
//!         required: required_callbacks(),
//!         san: Default::default(),
//!         fs: Default::default(),
//!         nfs: Default::default(),
//!     };
//!     let mut plugin =
//!         Plugin::new("My array plugin", "1.0.0", cb, &args).unwrap();
//!     plugin.run().unwrap();
//! }
//! ```
//!
//! Every optional callback slot left vacant makes the runtime answer the
//! matching method with a `NoSupport` error.

use std::os::unix::io::{FromRawFd, RawFd};
use std::os::unix::net::UnixStream;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use tracing::{debug, error, warn};

use super::data::*;
use super::error::*;
use super::ipc::TransPort;

pub type PluginRegisterCb = Box<dyn FnMut(&PluginRegister) -> Result<()>>;
pub type PluginUnregisterCb = Box<dyn FnMut() -> Result<()>>;
pub type TmoSetCb = Box<dyn FnMut(u32) -> Result<()>>;
pub type TmoGetCb = Box<dyn FnMut() -> Result<u32>>;
pub type CapabilitiesCb = Box<dyn FnMut(&System) -> Result<Capabilities>>;
/// Report the `(status, percent, payload)` triple of the job. The payload is
/// only read when status is [`JobStatus::Complete`](enum.JobStatus.html):
/// `None` for operations without artifact, the serialised artifact
/// otherwise.
pub type JobStatusCb =
    Box<dyn FnMut(&str) -> Result<(JobStatus, u8, Option<Value>)>>;
pub type JobFreeCb = Box<dyn FnMut(&str) -> Result<()>>;
pub type SystemsCb = Box<dyn FnMut() -> Result<Vec<System>>>;
pub type PoolsCb =
    Box<dyn FnMut(Option<(&str, &str)>) -> Result<Vec<Pool>>>;

pub type VolumesCb =
    Box<dyn FnMut(Option<(&str, &str)>) -> Result<Vec<Volume>>>;
pub type DisksCb = Box<dyn FnMut() -> Result<Vec<Disk>>>;
pub type VolumeCreateCb = Box<
    dyn FnMut(&Pool, &str, u64, VolumeProvisioning)
        -> Result<Outcome<Volume>>,
>;
pub type VolumeDeleteCb = Box<dyn FnMut(&Volume) -> Result<Outcome<()>>>;
pub type VolumeResizeCb =
    Box<dyn FnMut(&Volume, u64) -> Result<Outcome<Volume>>>;
pub type VolumeReplicateCb = Box<
    dyn FnMut(Option<&Pool>, VolumeReplicateType, &Volume, &str)
        -> Result<Outcome<Volume>>,
>;
pub type VolumeReplicateRangeCb = Box<
    dyn FnMut(VolumeReplicateType, &Volume, &Volume, &[BlockRange])
        -> Result<Outcome<()>>,
>;
pub type VolumeRepRangeBlkSizeCb = Box<dyn FnMut(&System) -> Result<i32>>;
pub type VolumeEnableCb = Box<dyn FnMut(&Volume) -> Result<()>>;
pub type VolumeDisableCb = Box<dyn FnMut(&Volume) -> Result<()>>;
pub type VolumeMaskCb =
    Box<dyn FnMut(&Volume, &AccessGroup) -> Result<()>>;
pub type VolumeUnmaskCb =
    Box<dyn FnMut(&Volume, &AccessGroup) -> Result<()>>;
pub type VolsMaskedToAgCb =
    Box<dyn FnMut(&AccessGroup) -> Result<Vec<Volume>>>;
pub type AccessGroupsCb = Box<dyn FnMut() -> Result<Vec<AccessGroup>>>;
pub type AccessGroupCreateCb = Box<
    dyn FnMut(&str, &str, InitiatorType, &System) -> Result<AccessGroup>,
>;
pub type AccessGroupDeleteCb = Box<dyn FnMut(&AccessGroup) -> Result<()>>;
pub type AccessGroupInitAddCb =
    Box<dyn FnMut(&AccessGroup, &str, InitiatorType) -> Result<AccessGroup>>;
pub type AccessGroupInitDelCb =
    Box<dyn FnMut(&AccessGroup, &str, InitiatorType) -> Result<AccessGroup>>;
pub type AgsGrantedToVolCb =
    Box<dyn FnMut(&Volume) -> Result<Vec<AccessGroup>>>;
pub type IscsiChapAuthCb = Box<
    dyn FnMut(&str, Option<&str>, Option<&str>, Option<&str>, Option<&str>)
        -> Result<()>,
>;
pub type SysReadCachePctSetCb = Box<dyn FnMut(&System, u32) -> Result<()>>;
pub type TargetPortsCb = Box<dyn FnMut() -> Result<Vec<TargetPort>>>;
pub type BatteriesCb = Box<dyn FnMut() -> Result<Vec<Battery>>>;
pub type VolHasChildDepCb = Box<dyn FnMut(&Volume) -> Result<bool>>;
pub type VolChildDepRmCb = Box<dyn FnMut(&Volume) -> Result<Outcome<()>>>;
pub type VolRaidInfoCb = Box<dyn FnMut(&Volume) -> Result<VolumeRaidInfo>>;
/// Report `(raid_type, member_kind, member_ids)` of the pool.
pub type PoolMemberInfoCb = Box<
    dyn FnMut(&Pool) -> Result<(RaidType, PoolMemberKind, Vec<String>)>,
>;
pub type VolRaidCreateCb =
    Box<dyn FnMut(&str, RaidType, &[Disk], u32) -> Result<Volume>>;
/// Report supported RAID types and strip sizes for RAID volume creation.
pub type VolRaidCreateCapGetCb =
    Box<dyn FnMut(&System) -> Result<(Vec<RaidType>, Vec<u32>)>>;
pub type VolIdentLedOnCb = Box<dyn FnMut(&Volume) -> Result<()>>;
pub type VolIdentLedOffCb = Box<dyn FnMut(&Volume) -> Result<()>>;
pub type VolCacheInfoCb =
    Box<dyn FnMut(&Volume) -> Result<VolumeCacheInfo>>;
pub type VolPhyDiskCacheSetCb =
    Box<dyn FnMut(&Volume, CachePolicy) -> Result<()>>;
pub type VolWriteCacheSetCb =
    Box<dyn FnMut(&Volume, CachePolicy) -> Result<()>>;
pub type VolReadCacheSetCb =
    Box<dyn FnMut(&Volume, CachePolicy) -> Result<()>>;

pub type FileSystemsCb = Box<dyn FnMut() -> Result<Vec<FileSystem>>>;
pub type FsCreateCb =
    Box<dyn FnMut(&Pool, &str, u64) -> Result<Outcome<FileSystem>>>;
pub type FsDeleteCb = Box<dyn FnMut(&FileSystem) -> Result<Outcome<()>>>;
pub type FsResizeCb =
    Box<dyn FnMut(&FileSystem, u64) -> Result<Outcome<FileSystem>>>;
pub type FsCloneCb = Box<
    dyn FnMut(&FileSystem, &str, Option<&FileSystemSnapShot>)
        -> Result<Outcome<FileSystem>>,
>;
pub type FsFileCloneCb = Box<
    dyn FnMut(&FileSystem, &str, &str, Option<&FileSystemSnapShot>)
        -> Result<Outcome<()>>,
>;
pub type FsSnapshotsCb =
    Box<dyn FnMut(&FileSystem) -> Result<Vec<FileSystemSnapShot>>>;
pub type FsSnapshotCreateCb = Box<
    dyn FnMut(&FileSystem, &str) -> Result<Outcome<FileSystemSnapShot>>,
>;
pub type FsSnapshotDeleteCb =
    Box<dyn FnMut(&FileSystem, &FileSystemSnapShot) -> Result<Outcome<()>>>;
pub type FsSnapshotRestoreCb = Box<
    dyn FnMut(&FileSystem, &FileSystemSnapShot, bool, &[String], &[String])
        -> Result<Outcome<()>>,
>;
pub type FsHasChildDepCb =
    Box<dyn FnMut(&FileSystem, &[String]) -> Result<bool>>;
pub type FsChildDepRmCb =
    Box<dyn FnMut(&FileSystem, &[String]) -> Result<Outcome<()>>>;

pub type NfsExportsCb =
    Box<dyn FnMut(Option<(&str, &str)>) -> Result<Vec<NfsExport>>>;
pub type NfsExportAuthTypesCb = Box<dyn FnMut() -> Result<Vec<String>>>;
pub type FsExportCb = Box<dyn FnMut(&FsExportRequest) -> Result<NfsExport>>;
pub type FsUnexportCb = Box<dyn FnMut(&NfsExport) -> Result<()>>;

/// Decoded arguments of the `export_fs` method.
#[derive(Deserialize, Debug, Clone)]
pub struct FsExportRequest {
    /// Identifier of the file system to export.
    pub fs_id: String,
    /// Requested export path, `None` lets the back-end pick one.
    pub export_path: Option<String>,
    /// Host list with root access.
    pub root_list: Vec<String>,
    /// Host list with read and write access.
    pub rw_list: Vec<String>,
    /// Host list with read only access.
    pub ro_list: Vec<String>,
    /// User ID for anonymous access.
    pub anon_uid: i64,
    /// Group ID for anonymous access.
    pub anon_gid: i64,
    /// NFS client authentication type.
    pub auth_type: Option<String>,
    /// Extra NFS options.
    pub options: Option<String>,
}

/// Callbacks every plugin must implement.
pub struct RequiredCallbacks {
    pub plugin_register: PluginRegisterCb,
    pub plugin_unregister: PluginUnregisterCb,
    pub time_out_set: TmoSetCb,
    pub time_out_get: TmoGetCb,
    pub capabilities: CapabilitiesCb,
    pub job_status: JobStatusCb,
    pub job_free: JobFreeCb,
    pub systems: SystemsCb,
    pub pools: PoolsCb,
}

/// Block SAN callbacks. Every vacant slot makes the matching method answer
/// `NoSupport`.
#[derive(Default)]
pub struct SanCallbacks {
    pub volumes: Option<VolumesCb>,
    pub disks: Option<DisksCb>,
    pub volume_create: Option<VolumeCreateCb>,
    pub volume_delete: Option<VolumeDeleteCb>,
    pub volume_resize: Option<VolumeResizeCb>,
    pub volume_replicate: Option<VolumeReplicateCb>,
    pub volume_replicate_range: Option<VolumeReplicateRangeCb>,
    pub volume_rep_range_blk_size: Option<VolumeRepRangeBlkSizeCb>,
    pub volume_enable: Option<VolumeEnableCb>,
    pub volume_disable: Option<VolumeDisableCb>,
    pub volume_mask: Option<VolumeMaskCb>,
    pub volume_unmask: Option<VolumeUnmaskCb>,
    pub vols_masked_to_ag: Option<VolsMaskedToAgCb>,
    pub access_groups: Option<AccessGroupsCb>,
    pub access_group_create: Option<AccessGroupCreateCb>,
    pub access_group_delete: Option<AccessGroupDeleteCb>,
    pub access_group_init_add: Option<AccessGroupInitAddCb>,
    pub access_group_init_del: Option<AccessGroupInitDelCb>,
    pub ags_granted_to_vol: Option<AgsGrantedToVolCb>,
    pub iscsi_chap_auth_set: Option<IscsiChapAuthCb>,
    pub sys_read_cache_pct_set: Option<SysReadCachePctSetCb>,
    pub target_ports: Option<TargetPortsCb>,
    pub batteries: Option<BatteriesCb>,
    pub vol_has_child_dep: Option<VolHasChildDepCb>,
    pub vol_child_dep_rm: Option<VolChildDepRmCb>,
    pub vol_raid_info: Option<VolRaidInfoCb>,
    pub pool_member_info: Option<PoolMemberInfoCb>,
    pub vol_raid_create: Option<VolRaidCreateCb>,
    pub vol_raid_create_cap_get: Option<VolRaidCreateCapGetCb>,
    pub vol_ident_led_on: Option<VolIdentLedOnCb>,
    pub vol_ident_led_off: Option<VolIdentLedOffCb>,
    pub vol_cache_info: Option<VolCacheInfoCb>,
    pub vol_phy_disk_cache_set: Option<VolPhyDiskCacheSetCb>,
    pub vol_write_cache_set: Option<VolWriteCacheSetCb>,
    pub vol_read_cache_set: Option<VolReadCacheSetCb>,
}

/// File system callbacks. Every vacant slot makes the matching method answer
/// `NoSupport`.
#[derive(Default)]
pub struct FsCallbacks {
    pub fs: Option<FileSystemsCb>,
    pub fs_create: Option<FsCreateCb>,
    pub fs_delete: Option<FsDeleteCb>,
    pub fs_resize: Option<FsResizeCb>,
    pub fs_clone: Option<FsCloneCb>,
    pub fs_file_clone: Option<FsFileCloneCb>,
    pub fs_snapshots: Option<FsSnapshotsCb>,
    pub fs_snapshot_create: Option<FsSnapshotCreateCb>,
    pub fs_snapshot_delete: Option<FsSnapshotDeleteCb>,
    pub fs_snapshot_restore: Option<FsSnapshotRestoreCb>,
    pub fs_has_child_dep: Option<FsHasChildDepCb>,
    pub fs_child_dep_rm: Option<FsChildDepRmCb>,
}

/// NFS export callbacks. Every vacant slot makes the matching method answer
/// `NoSupport`.
#[derive(Default)]
pub struct NfsCallbacks {
    pub exports: Option<NfsExportsCb>,
    pub export_auth_types: Option<NfsExportAuthTypesCb>,
    pub fs_export: Option<FsExportCb>,
    pub fs_unexport: Option<FsUnexportCb>,
}

/// Callback bundles grouped by capability class.
pub struct PluginCallbacks {
    pub required: RequiredCallbacks,
    pub san: SanCallbacks,
    pub fs: FsCallbacks,
    pub nfs: NfsCallbacks,
}

/// The plugin runtime: request loop and method dispatch.
pub struct Plugin {
    tp: TransPort,
    desc: String,
    version: String,
    cb: PluginCallbacks,
}

fn no_support(method: &str) -> LsmError {
    LsmError::NoSupport(format!(
        "Method '{}' is not supported by this plugin",
        method
    ))
}

fn decode_args<T: DeserializeOwned>(
    method: &str,
    params: &Map<String, Value>,
) -> Result<T> {
    serde_json::from_value(Value::Object(params.clone())).map_err(|e| {
        LsmError::TransportInvalidArg(format!(
            "{}: invalid argument(s): {}",
            method, e
        ))
    })
}

fn job_or_result<T: serde::Serialize>(outcome: Outcome<T>) -> Result<Value> {
    let ret = match outcome {
        Outcome::Job(job_id) => vec![Value::String(job_id), Value::Null],
        Outcome::Ready(item) => {
            vec![Value::Null, serde_json::to_value(item)?]
        }
    };
    Ok(Value::Array(ret))
}

fn job_or_none(outcome: Outcome<()>) -> Result<Value> {
    Ok(match outcome {
        Outcome::Job(job_id) => Value::String(job_id),
        Outcome::Ready(()) => Value::Null,
    })
}

macro_rules! cb_or_no_support {
    ($slot:expr, $method:expr) => {
        match $slot {
            Some(ref mut cb) => cb,
            None => return Err(no_support($method)),
        }
    };
}

#[derive(Deserialize)]
struct SearchArgs {
    #[serde(default)]
    search_key: Option<String>,
    #[serde(default)]
    search_value: Option<String>,
}

impl SearchArgs {
    fn as_pair(&self) -> Option<(&str, &str)> {
        match (self.search_key.as_ref(), self.search_value.as_ref()) {
            (Some(k), Some(v)) => Some((k.as_str(), v.as_str())),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct TmoSetArgs {
    ms: u32,
}

#[derive(Deserialize)]
struct SystemArgs {
    system: System,
}

#[derive(Deserialize)]
struct JobArgs {
    job_id: String,
}

#[derive(Deserialize)]
struct VolumeArgs {
    volume: Volume,
}

#[derive(Deserialize)]
struct PoolArgs {
    pool: Pool,
}

#[derive(Deserialize)]
struct FsArgs {
    fs: FileSystem,
}

#[derive(Deserialize)]
struct VolumeCreateArgs {
    pool: Pool,
    volume_name: String,
    size_bytes: u64,
    provisioning: i32,
}

#[derive(Deserialize)]
struct VolumeResizeArgs {
    volume: Volume,
    new_size_bytes: u64,
}

#[derive(Deserialize)]
struct VolumeReplicateArgs {
    pool: Option<Pool>,
    rep_type: i32,
    volume_src: Volume,
    name: String,
}

#[derive(Deserialize)]
struct VolumeReplicateRangeArgs {
    rep_type: i32,
    ranges: Vec<BlockRange>,
    volume_src: Volume,
    volume_dest: Volume,
}

#[derive(Deserialize)]
struct MaskArgs {
    volume: Volume,
    access_group: AccessGroup,
}

#[derive(Deserialize)]
struct AgArgs {
    access_group: AccessGroup,
}

#[derive(Deserialize)]
struct AgCreateArgs {
    name: String,
    init_id: String,
    init_type: i32,
    system: System,
}

#[derive(Deserialize)]
struct AgInitArgs {
    access_group: AccessGroup,
    init_id: String,
    init_type: i32,
}

#[derive(Deserialize)]
struct IscsiChapArgs {
    init_id: String,
    in_user: Option<String>,
    in_password: Option<String>,
    out_user: Option<String>,
    out_password: Option<String>,
}

#[derive(Deserialize)]
struct ReadCachePctArgs {
    system: System,
    read_pct: u32,
}

#[derive(Deserialize)]
struct VolRaidCreateArgs {
    name: String,
    raid_type: i32,
    disks: Vec<Disk>,
    strip_size: u32,
}

#[derive(Deserialize)]
struct PdcArgs {
    volume: Volume,
    pdc: u8,
}

#[derive(Deserialize)]
struct WcpArgs {
    volume: Volume,
    wcp: u8,
}

#[derive(Deserialize)]
struct RcpArgs {
    volume: Volume,
    rcp: u8,
}

#[derive(Deserialize)]
struct FsCreateArgs {
    pool: Pool,
    name: String,
    size_bytes: u64,
}

#[derive(Deserialize)]
struct FsResizeArgs {
    fs: FileSystem,
    new_size_bytes: u64,
}

#[derive(Deserialize)]
struct FsCloneArgs {
    src_fs: FileSystem,
    dest_fs_name: String,
    snapshot: Option<FileSystemSnapShot>,
}

#[derive(Deserialize)]
struct FsFileCloneArgs {
    fs: FileSystem,
    src_file_name: String,
    dest_file_name: String,
    snapshot: Option<FileSystemSnapShot>,
}

#[derive(Deserialize)]
struct FsSnapCreateArgs {
    fs: FileSystem,
    snapshot_name: String,
}

#[derive(Deserialize)]
struct FsSnapArgs {
    fs: FileSystem,
    snapshot: FileSystemSnapShot,
}

#[derive(Deserialize)]
struct FsSnapRestoreArgs {
    fs: FileSystem,
    snapshot: FileSystemSnapShot,
    all_files: bool,
    #[serde(default)]
    files: Vec<String>,
    #[serde(default)]
    restore_files: Vec<String>,
}

#[derive(Deserialize)]
struct FsFilesArgs {
    fs: FileSystem,
    #[serde(default)]
    files: Vec<String>,
}

#[derive(Deserialize)]
struct ExportRemoveArgs {
    export: NfsExport,
}

impl Plugin {
    /// Build the plugin runtime from the daemon's command line. The last
    /// argument is the decimal file descriptor of the connected client
    /// socket, anything else is a `LibBug`.
    pub fn new(
        desc: &str,
        version: &str,
        cb: PluginCallbacks,
        cmdline_args: &[String],
    ) -> Result<Plugin> {
        let fd_str = match cmdline_args.last() {
            Some(f) => f,
            None => {
                return Err(LsmError::LibBug(
                    "Plugin invoked without the socket fd argument"
                        .to_string(),
                ))
            }
        };
        let fd = fd_str.parse::<RawFd>().map_err(|_| {
            LsmError::LibBug(format!(
                "Plugin invoked with invalid socket fd argument '{}'",
                fd_str
            ))
        })?;
        let so = unsafe { UnixStream::from_raw_fd(fd) };
        Ok(Plugin::from_stream(desc, version, cb, so))
    }

    /// Build the plugin runtime on an already connected socket. Useful for
    /// daemons handing over a connected stream and for testing plugins
    /// without a daemon.
    pub fn from_stream(
        desc: &str,
        version: &str,
        cb: PluginCallbacks,
        so: UnixStream,
    ) -> Plugin {
        Plugin {
            tp: TransPort::from_stream(so),
            desc: desc.to_string(),
            version: version.to_string(),
            cb,
        }
    }

    /// Serve requests until `plugin_unregister` or a transport failure.
    ///
    /// Unparseable requests are answered with a `TransportInvalidArg` error
    /// and the loop keeps going. A transport failure terminates the loop
    /// with the error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let request = match self.tp.recv_request() {
                Ok(r) => r,
                Err(LsmError::TransportInvalidArg(msg)) => {
                    warn!("dropping unparseable request: {}", msg);
                    self.tp.send_error(
                        0,
                        &LsmError::TransportInvalidArg(msg),
                    )?;
                    continue;
                }
                Err(e) => {
                    error!("transport failure, exiting: {}", e);
                    return Err(e);
                }
            };
            debug!("executing {}", request.method);
            let done = request.method == "plugin_unregister";
            match self.dispatch(&request.method, &request.params) {
                Ok(result) => self.tp.send_response(request.id, result)?,
                Err(e) => self.tp.send_error(request.id, &e)?,
            }
            if done {
                return Ok(());
            }
        }
    }

    fn dispatch(
        &mut self,
        method: &str,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        match method {
            "plugin_info" => self.handle_plugin_info(),
            "plugin_register" => self.handle_plugin_register(params),
            "plugin_unregister" => self.handle_plugin_unregister(),
            "time_out_set" => self.handle_time_out_set(params),
            "time_out_get" => self.handle_time_out_get(),
            "capabilities" => self.handle_capabilities(params),
            "job_status" => self.handle_job_status(params),
            "job_free" => self.handle_job_free(params),
            "systems" => self.handle_systems(),
            "pools" => self.handle_pools(params),
            "volumes" => self.handle_volumes(params),
            "disks" => self.handle_disks(),
            "volume_create" => self.handle_volume_create(params),
            "volume_delete" => self.handle_volume_delete(params),
            "volume_resize" => self.handle_volume_resize(params),
            "volume_replicate" => self.handle_volume_replicate(params),
            "volume_replicate_range" => {
                self.handle_volume_replicate_range(params)
            }
            "volume_replicate_range_block_size" => {
                self.handle_volume_rep_range_blk_size(params)
            }
            "volume_enable" => self.handle_volume_enable(params),
            "volume_disable" => self.handle_volume_disable(params),
            "volume_mask" => self.handle_volume_mask(params),
            "volume_unmask" => self.handle_volume_unmask(params),
            "volumes_accessible_by_access_group" => {
                self.handle_vols_masked_to_ag(params)
            }
            "access_groups" => self.handle_access_groups(),
            "access_group_create" => self.handle_access_group_create(params),
            "access_group_delete" => self.handle_access_group_delete(params),
            "access_group_initiator_add" => {
                self.handle_access_group_init_add(params)
            }
            "access_group_initiator_delete" => {
                self.handle_access_group_init_del(params)
            }
            "access_groups_granted_to_volume" => {
                self.handle_ags_granted_to_vol(params)
            }
            "iscsi_chap_auth" => self.handle_iscsi_chap_auth(params),
            "system_read_cache_pct_update" => {
                self.handle_sys_read_cache_pct(params)
            }
            "target_ports" => self.handle_target_ports(),
            "batteries" => self.handle_batteries(),
            "volume_child_dependency" => {
                self.handle_vol_has_child_dep(params)
            }
            "volume_child_dependency_rm" => {
                self.handle_vol_child_dep_rm(params)
            }
            "volume_raid_info" => self.handle_vol_raid_info(params),
            "pool_member_info" => self.handle_pool_member_info(params),
            "volume_raid_create" => self.handle_vol_raid_create(params),
            "volume_raid_create_cap_get" => {
                self.handle_vol_raid_create_cap_get(params)
            }
            "volume_ident_led_on" => self.handle_vol_ident_led_on(params),
            "volume_ident_led_off" => self.handle_vol_ident_led_off(params),
            "volume_cache_info" => self.handle_vol_cache_info(params),
            "volume_physical_disk_cache_update" => {
                self.handle_vol_phy_disk_cache_set(params)
            }
            "volume_write_cache_policy_update" => {
                self.handle_vol_write_cache_set(params)
            }
            "volume_read_cache_policy_update" => {
                self.handle_vol_read_cache_set(params)
            }
            "fs" => self.handle_fs(),
            "fs_create" => self.handle_fs_create(params),
            "fs_delete" => self.handle_fs_delete(params),
            "fs_resize" => self.handle_fs_resize(params),
            "fs_clone" => self.handle_fs_clone(params),
            "fs_file_clone" => self.handle_fs_file_clone(params),
            "fs_snapshots" => self.handle_fs_snapshots(params),
            "fs_snapshot_create" => self.handle_fs_snapshot_create(params),
            "fs_snapshot_delete" => self.handle_fs_snapshot_delete(params),
            "fs_snapshot_restore" => self.handle_fs_snapshot_restore(params),
            "fs_child_dependency" => self.handle_fs_has_child_dep(params),
            "fs_child_dependency_rm" => self.handle_fs_child_dep_rm(params),
            "exports" => self.handle_exports(params),
            "export_auth" => self.handle_export_auth(),
            "export_fs" => self.handle_export_fs(params),
            "export_remove" => self.handle_export_remove(params),
            _ => Err(no_support(method)),
        }
    }

    fn handle_plugin_info(&mut self) -> Result<Value> {
        Ok(Value::Array(vec![
            Value::String(self.desc.clone()),
            Value::String(self.version.clone()),
        ]))
    }

    fn handle_plugin_register(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let register: PluginRegister =
            decode_args("plugin_register", params)?;
        (self.cb.required.plugin_register)(&register)?;
        Ok(Value::Null)
    }

    fn handle_plugin_unregister(&mut self) -> Result<Value> {
        (self.cb.required.plugin_unregister)()?;
        Ok(Value::Null)
    }

    fn handle_time_out_set(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let args: TmoSetArgs = decode_args("time_out_set", params)?;
        (self.cb.required.time_out_set)(args.ms)?;
        Ok(Value::Null)
    }

    fn handle_time_out_get(&mut self) -> Result<Value> {
        let ms = (self.cb.required.time_out_get)()?;
        Ok(Value::Number(Number::from(ms)))
    }

    fn handle_capabilities(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let args: SystemArgs = decode_args("capabilities", params)?;
        let cap = (self.cb.required.capabilities)(&args.system)?;
        Ok(serde_json::to_value(cap)?)
    }

    fn handle_job_status(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let args: JobArgs = decode_args("job_status", params)?;
        let (status, percent, payload) =
            (self.cb.required.job_status)(&args.job_id)?;
        Ok(Value::Array(vec![
            Value::Number(Number::from(status as u32)),
            Value::Number(Number::from(percent)),
            payload.unwrap_or(Value::Null),
        ]))
    }

    fn handle_job_free(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let args: JobArgs = decode_args("job_free", params)?;
        (self.cb.required.job_free)(&args.job_id)?;
        Ok(Value::Null)
    }

    fn handle_systems(&mut self) -> Result<Value> {
        let systems = (self.cb.required.systems)()?;
        Ok(serde_json::to_value(systems)?)
    }

    fn handle_pools(&mut self, params: &Map<String, Value>) -> Result<Value> {
        let search: SearchArgs = decode_args("pools", params)?;
        let pools = (self.cb.required.pools)(search.as_pair())?;
        Ok(serde_json::to_value(pools)?)
    }

    fn handle_volumes(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.volumes, "volumes");
        let search: SearchArgs = decode_args("volumes", params)?;
        let vols = cb(search.as_pair())?;
        Ok(serde_json::to_value(vols)?)
    }

    fn handle_disks(&mut self) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.disks, "disks");
        let disks = cb()?;
        Ok(serde_json::to_value(disks)?)
    }

    fn handle_volume_create(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.volume_create, "volume_create");
        let args: VolumeCreateArgs = decode_args("volume_create", params)?;
        let ret = cb(
            &args.pool,
            &args.volume_name,
            args.size_bytes,
            VolumeProvisioning::from(args.provisioning),
        )?;
        job_or_result(ret)
    }

    fn handle_volume_delete(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.volume_delete, "volume_delete");
        let args: VolumeArgs = decode_args("volume_delete", params)?;
        job_or_none(cb(&args.volume)?)
    }

    fn handle_volume_resize(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.volume_resize, "volume_resize");
        let args: VolumeResizeArgs = decode_args("volume_resize", params)?;
        job_or_result(cb(&args.volume, args.new_size_bytes)?)
    }

    fn handle_volume_replicate(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb =
            cb_or_no_support!(self.cb.san.volume_replicate, "volume_replicate");
        let args: VolumeReplicateArgs =
            decode_args("volume_replicate", params)?;
        let ret = cb(
            args.pool.as_ref(),
            VolumeReplicateType::from(args.rep_type),
            &args.volume_src,
            &args.name,
        )?;
        job_or_result(ret)
    }

    fn handle_volume_replicate_range(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.volume_replicate_range,
            "volume_replicate_range"
        );
        let args: VolumeReplicateRangeArgs =
            decode_args("volume_replicate_range", params)?;
        let ret = cb(
            VolumeReplicateType::from(args.rep_type),
            &args.volume_src,
            &args.volume_dest,
            &args.ranges,
        )?;
        job_or_none(ret)
    }

    fn handle_volume_rep_range_blk_size(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.volume_rep_range_blk_size,
            "volume_replicate_range_block_size"
        );
        let args: SystemArgs =
            decode_args("volume_replicate_range_block_size", params)?;
        let size = cb(&args.system)?;
        Ok(Value::Number(Number::from(size)))
    }

    fn handle_volume_enable(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.volume_enable, "volume_enable");
        let args: VolumeArgs = decode_args("volume_enable", params)?;
        cb(&args.volume)?;
        Ok(Value::Null)
    }

    fn handle_volume_disable(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb =
            cb_or_no_support!(self.cb.san.volume_disable, "volume_disable");
        let args: VolumeArgs = decode_args("volume_disable", params)?;
        cb(&args.volume)?;
        Ok(Value::Null)
    }

    fn handle_volume_mask(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.volume_mask, "volume_mask");
        let args: MaskArgs = decode_args("volume_mask", params)?;
        cb(&args.volume, &args.access_group)?;
        Ok(Value::Null)
    }

    fn handle_volume_unmask(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.volume_unmask, "volume_unmask");
        let args: MaskArgs = decode_args("volume_unmask", params)?;
        cb(&args.volume, &args.access_group)?;
        Ok(Value::Null)
    }

    fn handle_vols_masked_to_ag(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vols_masked_to_ag,
            "volumes_accessible_by_access_group"
        );
        let args: AgArgs =
            decode_args("volumes_accessible_by_access_group", params)?;
        let vols = cb(&args.access_group)?;
        Ok(serde_json::to_value(vols)?)
    }

    fn handle_access_groups(&mut self) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.access_groups, "access_groups");
        let ags = cb()?;
        Ok(serde_json::to_value(ags)?)
    }

    fn handle_access_group_create(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.access_group_create,
            "access_group_create"
        );
        let args: AgCreateArgs = decode_args("access_group_create", params)?;
        let init_type = InitiatorType::from(args.init_type);
        let ag = cb(&args.name, &args.init_id, init_type, &args.system)?;
        Ok(serde_json::to_value(ag)?)
    }

    fn handle_access_group_delete(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.access_group_delete,
            "access_group_delete"
        );
        let args: AgArgs = decode_args("access_group_delete", params)?;
        cb(&args.access_group)?;
        Ok(Value::Null)
    }

    fn handle_access_group_init_add(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.access_group_init_add,
            "access_group_initiator_add"
        );
        let args: AgInitArgs =
            decode_args("access_group_initiator_add", params)?;
        let init_type = InitiatorType::from(args.init_type);
        let ag = cb(&args.access_group, &args.init_id, init_type)?;
        Ok(serde_json::to_value(ag)?)
    }

    fn handle_access_group_init_del(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.access_group_init_del,
            "access_group_initiator_delete"
        );
        let args: AgInitArgs =
            decode_args("access_group_initiator_delete", params)?;
        let init_type = InitiatorType::from(args.init_type);
        let ag = cb(&args.access_group, &args.init_id, init_type)?;
        Ok(serde_json::to_value(ag)?)
    }

    fn handle_ags_granted_to_vol(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.ags_granted_to_vol,
            "access_groups_granted_to_volume"
        );
        let args: VolumeArgs =
            decode_args("access_groups_granted_to_volume", params)?;
        let ags = cb(&args.volume)?;
        Ok(serde_json::to_value(ags)?)
    }

    fn handle_iscsi_chap_auth(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.iscsi_chap_auth_set,
            "iscsi_chap_auth"
        );
        let args: IscsiChapArgs = decode_args("iscsi_chap_auth", params)?;
        cb(
            &args.init_id,
            args.in_user.as_ref().map(|s| s.as_str()),
            args.in_password.as_ref().map(|s| s.as_str()),
            args.out_user.as_ref().map(|s| s.as_str()),
            args.out_password.as_ref().map(|s| s.as_str()),
        )?;
        Ok(Value::Null)
    }

    fn handle_sys_read_cache_pct(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.sys_read_cache_pct_set,
            "system_read_cache_pct_update"
        );
        let args: ReadCachePctArgs =
            decode_args("system_read_cache_pct_update", params)?;
        cb(&args.system, args.read_pct)?;
        Ok(Value::Null)
    }

    fn handle_target_ports(&mut self) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.target_ports, "target_ports");
        let tps = cb()?;
        Ok(serde_json::to_value(tps)?)
    }

    fn handle_batteries(&mut self) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.san.batteries, "batteries");
        let bs = cb()?;
        Ok(serde_json::to_value(bs)?)
    }

    fn handle_vol_has_child_dep(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_has_child_dep,
            "volume_child_dependency"
        );
        let args: VolumeArgs = decode_args("volume_child_dependency", params)?;
        let dep = cb(&args.volume)?;
        Ok(Value::Bool(dep))
    }

    fn handle_vol_child_dep_rm(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_child_dep_rm,
            "volume_child_dependency_rm"
        );
        let args: VolumeArgs =
            decode_args("volume_child_dependency_rm", params)?;
        job_or_none(cb(&args.volume)?)
    }

    fn handle_vol_raid_info(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb =
            cb_or_no_support!(self.cb.san.vol_raid_info, "volume_raid_info");
        let args: VolumeArgs = decode_args("volume_raid_info", params)?;
        let info = cb(&args.volume)?;
        Ok(Value::Array(vec![
            Value::Number(Number::from(info.raid_type as i32)),
            Value::Number(Number::from(info.strip_size)),
            Value::Number(Number::from(info.disk_count)),
            Value::Number(Number::from(info.min_io_size)),
            Value::Number(Number::from(info.opt_io_size)),
        ]))
    }

    fn handle_pool_member_info(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.pool_member_info,
            "pool_member_info"
        );
        let args: PoolArgs = decode_args("pool_member_info", params)?;
        let (raid_type, member_kind, member_ids) = cb(&args.pool)?;
        Ok(Value::Array(vec![
            Value::Number(Number::from(raid_type as i32)),
            Value::Number(Number::from(member_kind as u32)),
            serde_json::to_value(member_ids)?,
        ]))
    }

    fn handle_vol_raid_create(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_raid_create,
            "volume_raid_create"
        );
        let args: VolRaidCreateArgs =
            decode_args("volume_raid_create", params)?;
        let vol = cb(
            &args.name,
            RaidType::from(args.raid_type),
            &args.disks,
            args.strip_size,
        )?;
        Ok(serde_json::to_value(vol)?)
    }

    fn handle_vol_raid_create_cap_get(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_raid_create_cap_get,
            "volume_raid_create_cap_get"
        );
        let args: SystemArgs =
            decode_args("volume_raid_create_cap_get", params)?;
        let (raid_types, strip_sizes) = cb(&args.system)?;
        let raid_types: Vec<i32> =
            raid_types.iter().map(|t| *t as i32).collect();
        Ok(Value::Array(vec![
            serde_json::to_value(raid_types)?,
            serde_json::to_value(strip_sizes)?,
        ]))
    }

    fn handle_vol_ident_led_on(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_ident_led_on,
            "volume_ident_led_on"
        );
        let args: VolumeArgs = decode_args("volume_ident_led_on", params)?;
        cb(&args.volume)?;
        Ok(Value::Null)
    }

    fn handle_vol_ident_led_off(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_ident_led_off,
            "volume_ident_led_off"
        );
        let args: VolumeArgs = decode_args("volume_ident_led_off", params)?;
        cb(&args.volume)?;
        Ok(Value::Null)
    }

    fn handle_vol_cache_info(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb =
            cb_or_no_support!(self.cb.san.vol_cache_info, "volume_cache_info");
        let args: VolumeArgs = decode_args("volume_cache_info", params)?;
        let info = cb(&args.volume)?;
        let wire: Vec<u8> = vec![
            match info.write_cache_setting {
                CachePolicy::Enabled => WRITE_CACHE_POLICY_WRITE_BACK,
                CachePolicy::Disabled => WRITE_CACHE_POLICY_WRITE_THROUGH,
                CachePolicy::Auto => WRITE_CACHE_POLICY_AUTO,
                _ => WRITE_CACHE_POLICY_UNKNOWN,
            },
            match info.write_cache_status {
                CachePolicy::Enabled => WRITE_CACHE_STATUS_WRITE_BACK,
                CachePolicy::Disabled => WRITE_CACHE_STATUS_WRITE_THROUGH,
                _ => WRITE_CACHE_STATUS_UNKNOWN,
            },
            match info.read_cache_setting {
                CachePolicy::Enabled => READ_CACHE_POLICY_ENABLED,
                CachePolicy::Disabled => READ_CACHE_POLICY_DISABLED,
                _ => READ_CACHE_POLICY_UNKNOWN,
            },
            match info.read_cache_status {
                CachePolicy::Enabled => READ_CACHE_STATUS_ENABLED,
                CachePolicy::Disabled => READ_CACHE_STATUS_DISABLED,
                _ => READ_CACHE_STATUS_UNKNOWN,
            },
            match info.physical_disk_cache_status {
                CachePolicy::Enabled => PHYSICAL_DISK_CACHE_ENABLED,
                CachePolicy::Disabled => PHYSICAL_DISK_CACHE_DISABLED,
                CachePolicy::UseDiskSetting => {
                    PHYSICAL_DISK_CACHE_USE_DISK_SETTING
                }
                _ => PHYSICAL_DISK_CACHE_UNKNOWN,
            },
        ];
        Ok(serde_json::to_value(wire)?)
    }

    fn handle_vol_phy_disk_cache_set(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_phy_disk_cache_set,
            "volume_physical_disk_cache_update"
        );
        let args: PdcArgs =
            decode_args("volume_physical_disk_cache_update", params)?;
        let pdc = match args.pdc {
            PHYSICAL_DISK_CACHE_ENABLED => CachePolicy::Enabled,
            PHYSICAL_DISK_CACHE_DISABLED => CachePolicy::Disabled,
            PHYSICAL_DISK_CACHE_USE_DISK_SETTING => {
                CachePolicy::UseDiskSetting
            }
            _ => {
                return Err(LsmError::InvalidArgument(format!(
                    "Invalid pdc argument {}",
                    args.pdc
                )))
            }
        };
        cb(&args.volume, pdc)?;
        Ok(Value::Null)
    }

    fn handle_vol_write_cache_set(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_write_cache_set,
            "volume_write_cache_policy_update"
        );
        let args: WcpArgs =
            decode_args("volume_write_cache_policy_update", params)?;
        let wcp = match args.wcp {
            WRITE_CACHE_POLICY_WRITE_BACK => CachePolicy::Enabled,
            WRITE_CACHE_POLICY_WRITE_THROUGH => CachePolicy::Disabled,
            WRITE_CACHE_POLICY_AUTO => CachePolicy::Auto,
            _ => {
                return Err(LsmError::InvalidArgument(format!(
                    "Invalid wcp argument {}",
                    args.wcp
                )))
            }
        };
        cb(&args.volume, wcp)?;
        Ok(Value::Null)
    }

    fn handle_vol_read_cache_set(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.san.vol_read_cache_set,
            "volume_read_cache_policy_update"
        );
        let args: RcpArgs =
            decode_args("volume_read_cache_policy_update", params)?;
        let rcp = match args.rcp {
            READ_CACHE_POLICY_ENABLED => CachePolicy::Enabled,
            READ_CACHE_POLICY_DISABLED => CachePolicy::Disabled,
            _ => {
                return Err(LsmError::InvalidArgument(format!(
                    "Invalid rcp argument {}",
                    args.rcp
                )))
            }
        };
        cb(&args.volume, rcp)?;
        Ok(Value::Null)
    }

    fn handle_fs(&mut self) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.fs.fs, "fs");
        let fss = cb()?;
        Ok(serde_json::to_value(fss)?)
    }

    fn handle_fs_create(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.fs.fs_create, "fs_create");
        let args: FsCreateArgs = decode_args("fs_create", params)?;
        job_or_result(cb(&args.pool, &args.name, args.size_bytes)?)
    }

    fn handle_fs_delete(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.fs.fs_delete, "fs_delete");
        let args: FsArgs = decode_args("fs_delete", params)?;
        job_or_none(cb(&args.fs)?)
    }

    fn handle_fs_resize(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.fs.fs_resize, "fs_resize");
        let args: FsResizeArgs = decode_args("fs_resize", params)?;
        job_or_result(cb(&args.fs, args.new_size_bytes)?)
    }

    fn handle_fs_clone(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.fs.fs_clone, "fs_clone");
        let args: FsCloneArgs = decode_args("fs_clone", params)?;
        let ret =
            cb(&args.src_fs, &args.dest_fs_name, args.snapshot.as_ref())?;
        job_or_result(ret)
    }

    fn handle_fs_file_clone(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.fs.fs_file_clone, "fs_file_clone");
        let args: FsFileCloneArgs = decode_args("fs_file_clone", params)?;
        let ret = cb(
            &args.fs,
            &args.src_file_name,
            &args.dest_file_name,
            args.snapshot.as_ref(),
        )?;
        job_or_none(ret)
    }

    fn handle_fs_snapshots(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.fs.fs_snapshots, "fs_snapshots");
        let args: FsArgs = decode_args("fs_snapshots", params)?;
        let snaps = cb(&args.fs)?;
        Ok(serde_json::to_value(snaps)?)
    }

    fn handle_fs_snapshot_create(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.fs.fs_snapshot_create,
            "fs_snapshot_create"
        );
        let args: FsSnapCreateArgs =
            decode_args("fs_snapshot_create", params)?;
        job_or_result(cb(&args.fs, &args.snapshot_name)?)
    }

    fn handle_fs_snapshot_delete(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.fs.fs_snapshot_delete,
            "fs_snapshot_delete"
        );
        let args: FsSnapArgs = decode_args("fs_snapshot_delete", params)?;
        job_or_none(cb(&args.fs, &args.snapshot)?)
    }

    fn handle_fs_snapshot_restore(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.fs.fs_snapshot_restore,
            "fs_snapshot_restore"
        );
        let args: FsSnapRestoreArgs =
            decode_args("fs_snapshot_restore", params)?;
        let ret = cb(
            &args.fs,
            &args.snapshot,
            args.all_files,
            &args.files,
            &args.restore_files,
        )?;
        job_or_none(ret)
    }

    fn handle_fs_has_child_dep(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.fs.fs_has_child_dep,
            "fs_child_dependency"
        );
        let args: FsFilesArgs = decode_args("fs_child_dependency", params)?;
        let dep = cb(&args.fs, &args.files)?;
        Ok(Value::Bool(dep))
    }

    fn handle_fs_child_dep_rm(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(
            self.cb.fs.fs_child_dep_rm,
            "fs_child_dependency_rm"
        );
        let args: FsFilesArgs =
            decode_args("fs_child_dependency_rm", params)?;
        job_or_none(cb(&args.fs, &args.files)?)
    }

    fn handle_exports(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.nfs.exports, "exports");
        let search: SearchArgs = decode_args("exports", params)?;
        let exports = cb(search.as_pair())?;
        Ok(serde_json::to_value(exports)?)
    }

    fn handle_export_auth(&mut self) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.nfs.export_auth_types, "export_auth");
        let auth_types = cb()?;
        Ok(serde_json::to_value(auth_types)?)
    }

    fn handle_export_fs(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.nfs.fs_export, "export_fs");
        let request: FsExportRequest = decode_args("export_fs", params)?;
        let export = cb(&request)?;
        Ok(serde_json::to_value(export)?)
    }

    fn handle_export_remove(
        &mut self,
        params: &Map<String, Value>,
    ) -> Result<Value> {
        let cb = cb_or_no_support!(self.cb.nfs.fs_unexport, "export_remove");
        let args: ExportRemoveArgs = decode_args("export_remove", params)?;
        cb(&args.export)?;
        Ok(Value::Null)
    }
}
