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

use std::mem::transmute;
use std::ops::BitOr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

fn gen_system_class_string() -> String {
    "System".to_string()
}

fn gen_pool_class_string() -> String {
    "Pool".to_string()
}

fn gen_vol_class_string() -> String {
    "Volume".to_string()
}

fn gen_ag_class_string() -> String {
    "AccessGroup".to_string()
}

fn gen_fs_class_string() -> String {
    "FileSystem".to_string()
}

fn gen_fs_snap_class_string() -> String {
    "FsSnapshot".to_string()
}

fn gen_exp_class_string() -> String {
    "NfsExport".to_string()
}

fn gen_disk_class_string() -> String {
    "Disk".to_string()
}

fn gen_tgt_class_string() -> String {
    "TargetPort".to_string()
}

fn gen_battery_class_string() -> String {
    "Battery".to_string()
}

fn gen_cap_class_string() -> String {
    "Capabilities".to_string()
}

fn gen_block_range_class_string() -> String {
    "BlockRange".to_string()
}

/// The wire boolean of the IPC protocol: JSON string `"1"` for true,
/// `"0"` for false. Any other JSON value decodes to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsmBool(pub bool);

impl Serialize for LsmBool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> ::std::result::Result<S::Ok, S::Error> {
        if self.0 {
            serializer.serialize_str("1")
        } else {
            serializer.serialize_str("0")
        }
    }
}

impl<'de> Deserialize<'de> for LsmBool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> ::std::result::Result<LsmBool, D::Error> {
        let val = Value::deserialize(deserializer)?;
        match val {
            Value::String(ref s) if s == "1" => Ok(LsmBool(true)),
            _ => Ok(LsmBool(false)),
        }
    }
}

impl From<bool> for LsmBool {
    fn from(b: bool) -> LsmBool {
        LsmBool(b)
    }
}

impl From<LsmBool> for bool {
    fn from(b: LsmBool) -> bool {
        b.0
    }
}

/// Result of an operation which may complete asynchronously: either the
/// plugin-side job handle to poll, or the finished artifact. Operations which
/// produce no artifact use `Outcome<()>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Operation runs asynchronously, poll with
    /// [`Client::job_status()`](struct.Client.html#method.job_status) or
    /// block with [`Client::job_wait()`](struct.Client.html#method.job_wait).
    Job(String),
    /// Operation completed synchronously.
    Ready(T),
}

impl<T> Outcome<T> {
    pub fn is_job(&self) -> bool {
        match *self {
            Outcome::Job(_) => true,
            Outcome::Ready(_) => false,
        }
    }

    /// The job handle, if the operation went asynchronous.
    pub fn job_id(&self) -> Option<&str> {
        match *self {
            Outcome::Job(ref id) => Some(id),
            Outcome::Ready(_) => None,
        }
    }
}

/// Job states reported by `job_status`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    InProgress = 1,
    Complete = 2,
    Error = 3,
}

/// Registration data handed to a plugin on `plugin_register`.
#[derive(Deserialize, Debug, Clone)]
pub struct PluginRegister {
    /// URI the administrative application connected with.
    pub uri: String,
    /// Optional plugin password.
    pub password: Option<String>,
    /// Timeout in milliseconds for back-end operations.
    pub timeout: u32,
    #[serde(default)]
    pub flags: u64,
}

/// System status bits. Stored as a bitmap, unknown bits are preserved on
/// round-trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct SystemStatus(u32);

impl SystemStatus {
    /// Plugin failed to query system status.
    pub const UNKNOWN: SystemStatus = SystemStatus(1);
    /// System is up and healthy.
    pub const OK: SystemStatus = SystemStatus(1 << 1);
    /// System is in error state.
    pub const ERROR: SystemStatus = SystemStatus(1 << 2);
    /// System is degraded.
    pub const DEGRADED: SystemStatus = SystemStatus(1 << 3);
    /// System has potential failure.
    pub const PREDICTIVE_FAILURE: SystemStatus = SystemStatus(1 << 4);
    /// Vendor specific status.
    pub const OTHER: SystemStatus = SystemStatus(1 << 5);

    pub fn new(bits: u32) -> SystemStatus {
        SystemStatus(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// All bits of `flag` are set.
    pub fn contains(self, flag: SystemStatus) -> bool {
        self.0 & flag.0 == flag.0
    }

    /// At least one bit of `mask` is set.
    pub fn any_of(self, mask: SystemStatus) -> bool {
        self.0 & mask.0 != 0
    }

    /// Every bit of `mask` is set.
    pub fn all_of(self, mask: SystemStatus) -> bool {
        self.0 & mask.0 == mask.0
    }
}

impl BitOr for SystemStatus {
    type Output = SystemStatus;
    fn bitor(self, rhs: SystemStatus) -> SystemStatus {
        SystemStatus(self.0 | rhs.0)
    }
}

/// Represent a storage system. Examples:
///
///  * A hardware RAID card, LSI `MegaRAID`
///
///  * A storage area network (SAN), e.g. `EMC` VNX, `NetApp` Filer
///
///  * A software solution running on commodity hardware, targetd, Nexenta
///
///  * A Linux system running NFS service
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct System {
    #[serde(default = "gen_system_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Human friendly name.
    pub name: String,
    /// System status bitmap, check against the [`SystemStatus`][1]
    /// constants:
    ///
    /// ```rust,no_run
    /// use lsm::{Client, SystemStatus};
    ///
    /// let mut c = Client::new("sim://", None, None).unwrap();
    /// for s in c.systems().unwrap() {
    ///     if !s.status.contains(SystemStatus::OK) {
    ///         println!("System {} is not healthy", s.id);
    ///     }
    /// }
    /// ```
    /// [1]: struct.SystemStatus.html
    pub status: SystemStatus,
    /// Additional message for status.
    pub status_info: String,
    plugin_data: Option<String>,
    /// Firmware version.
    pub fw_version: String,
    /// Read cache percentage of the system. Valid values are:
    ///
    /// * `>0 and < 100` means only a part of whole cache is used for read.
    /// * `0` means no read cache.
    /// * `100` means all cache is used for read.
    /// * [`System::READ_CACHE_PCT_NO_SUPPORT`][1] means no support.
    /// * [`System::READ_CACHE_PCT_UNKNOWN`][2] means plugin failed to
    ///   detect this value.
    ///
    /// [1]: #associatedconstant.READ_CACHE_PCT_NO_SUPPORT
    /// [2]: #associatedconstant.READ_CACHE_PCT_UNKNOWN
    pub read_cache_pct: i8,
    #[serde(deserialize_with = "int_to_sys_mod")]
    #[serde(serialize_with = "sys_mod_to_int")]
    /// System mode, currently only supports hardware RAID cards.
    pub mode: SystemMode,
}

impl System {
    /// Plugin does not support querying read cache percentage.
    pub const READ_CACHE_PCT_NO_SUPPORT: i8 = -2;
    /// Plugin failed to query read cache percentage.
    pub const READ_CACHE_PCT_UNKNOWN: i8 = -1;

    /// Create a system record. Intended for plugin implementations, the
    /// client side only receives systems from the plugin.
    pub fn new(
        id: &str,
        name: &str,
        status: SystemStatus,
        status_info: &str,
        fw_version: &str,
        read_cache_pct: i8,
        mode: SystemMode,
    ) -> System {
        System {
            class: gen_system_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            status,
            status_info: status_info.to_string(),
            plugin_data: None,
            fw_version: fw_version.to_string(),
            read_cache_pct,
            mode,
        }
    }
}

#[repr(i8)]
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum SystemMode {
    /// Plugin failed to query system mode.
    Unknown = -2,
    /// Plugin does not support querying system mode.
    NoSupport = -1,
    /// The storage system is a hardware RAID card(like HP SmartArray and LSI
    /// MegaRAID) and could expose the logical volume(aka, RAIDed virtual disk)
    /// to OS while hardware RAID card is handling the RAID algorithm. In this
    /// mode, storage system cannot expose physical disk directly to OS.
    HardwareRaid = 0,
    /// The physical disks can be exposed to OS directly without any
    /// configurations. SCSI enclosure service might be exposed to OS also.
    Hba = 1,
}

fn int_to_sys_mod<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> ::std::result::Result<SystemMode, D::Error> {
    let i: i8 = Deserialize::deserialize(deserializer)?;
    match i {
        -1..=1 => unsafe { Ok(transmute(i)) },
        _ => Ok(SystemMode::Unknown),
    }
}

fn sys_mod_to_int<S: Serializer>(
    m: &SystemMode,
    serializer: S,
) -> ::std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i8(*m as i8)
}

/// Represent a storage volume. Also known as LUN(Logical Unit Number) or
/// Storage Volume or Virtual Disk. The host OS treats it as block devices (one
/// volume can be exposed as many disks when [multipath I/O][1] is enabled).
///
/// [1]: https://en.wikipedia.org/wiki/Multipath_I/O
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Volume {
    #[serde(default = "gen_vol_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Human friendly name.
    pub name: String,
    #[serde(rename = "admin_state")]
    /// Whether volume is online or offline(I/O access disabled by
    /// administrator).
    pub enabled: LsmBool,
    /// Block size.
    pub block_size: u64,
    /// Number of blocks.
    pub num_of_blocks: u64,
    plugin_data: Option<String>,
    /// SCSI VPD 0x83 NAA type identifier.
    /// Udev treat it as `ID_WWN_WITH_EXTENSION`
    pub vpd83: String,
    /// Identifier of owner system.
    pub system_id: String,
    /// Identifier of owner pool.
    pub pool_id: String,
}

impl Volume {
    /// Retrieve the usable size of volume in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.block_size * self.num_of_blocks
    }

    /// Create a volume record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        name: &str,
        enabled: bool,
        block_size: u64,
        num_of_blocks: u64,
        vpd83: &str,
        system_id: &str,
        pool_id: &str,
    ) -> Volume {
        Volume {
            class: gen_vol_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            enabled: LsmBool(enabled),
            block_size,
            num_of_blocks,
            plugin_data: None,
            vpd83: vpd83.to_string(),
            system_id: system_id.to_string(),
            pool_id: pool_id.to_string(),
        }
    }
}

/// Represent a volume replication type.
#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum VolumeReplicateType {
    /// Plugin failed to detect volume replication type.
    Unknown = -1,
    /// Point in time read writeable space efficient copy of data. Also known
    /// as read writeable snapshot.
    Clone = 2,
    /// Full bitwise copy of the data (occupies full space).
    Copy = 3,
    /// I/O will be blocked until I/O reached both source and target storage
    /// systems. There will be no data difference between source and target
    /// storage systems.
    MirrorSync = 4,
    /// I/O will be blocked until I/O reached source storage systems. The
    /// source storage system will copy the changed data to target system in a
    /// predefined interval. There will be a small data difference between
    /// source and target.
    MirrorAsync = 5,
}

impl From<i32> for VolumeReplicateType {
    fn from(i: i32) -> VolumeReplicateType {
        match i {
            2..=5 => unsafe { transmute(i) },
            _ => VolumeReplicateType::Unknown,
        }
    }
}

/// Provisioning strategy for new volumes.
#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum VolumeProvisioning {
    Unknown = -1,
    /// Create thin provisioning volume.
    Thin = 1,
    /// Create fully allocated volume.
    Full = 2,
    /// Let the storage array decide the volume provisioning type.
    Default = 3,
}

impl From<i32> for VolumeProvisioning {
    fn from(i: i32) -> VolumeProvisioning {
        match i {
            1..=3 => unsafe { transmute(i) },
            _ => VolumeProvisioning::Unknown,
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
/// Represent a RAID type.
pub enum RaidType {
    /// Plugin failed to detect RAID type.
    Unknown = -1,
    /// [RAID 0](https://en.wikipedia.org/wiki/Standard_RAID_levels#RAID_0)
    Raid0 = 0,
    /// Two disk mirror.
    Raid1 = 1,
    /// Byte-level striping with dedicated parity.
    Raid3 = 3,
    /// Block-level striping with dedicated parity.
    Raid4 = 4,
    /// Block-level striping with distributed parity.
    Raid5 = 5,
    /// Block-level striping with two distributed parities. Also known as
    /// RAID-DP.
    Raid6 = 6,
    /// Stripe of mirrors.
    Raid10 = 10,
    /// Parity of mirrors.
    Raid15 = 15,
    /// Dual parity of mirrors.
    Raid16 = 16,
    /// Stripe of parities.
    Raid50 = 50,
    /// Stripe of dual parities.
    Raid60 = 60,
    /// Mirror of parities.
    Raid51 = 51,
    /// Mirror of dual parities.
    Raid61 = 61,
    /// Just bunch of disks, no parity, no striping.
    Jbod = 20,
    /// This volume contains multiple RAID settings.
    Mixed = 21,
    /// Vendor specific RAID type
    Other = 22,
}

impl From<i32> for RaidType {
    fn from(i: i32) -> RaidType {
        match i {
            0..=1 | 3..=6 | 10 | 15 | 16 | 50 | 60 | 51 | 61 | 20..=22 => unsafe {
                transmute(i)
            },
            _ => RaidType::Unknown,
        }
    }
}

/// Kinds of pool members reported by `pool_member_info`.
#[repr(u32)]
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum PoolMemberKind {
    Unknown = 0,
    Other = 1,
    /// Pool is created from disks.
    Disk = 2,
    /// Pool is allocated from another pool.
    Pool = 3,
}

impl From<u32> for PoolMemberKind {
    fn from(i: u32) -> PoolMemberKind {
        match i {
            1..=3 => unsafe { transmute(i) },
            _ => PoolMemberKind::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
/// Represent a Pool member.
pub enum PoolMember {
    /// Pool is created from disks.
    Disk(Disk),
    /// Pool is allocated from other pool.
    Pool(Pool),
}

#[derive(Debug, Clone)]
/// Represent pool membership information.
pub struct PoolMemberInfo {
    /// RAID type
    pub raid_type: RaidType,
    /// Pool members.
    pub members: Vec<PoolMember>,
}

#[derive(Debug, Clone)]
/// Represent volume RAID information.
pub struct VolumeRaidInfo {
    /// RAID type
    pub raid_type: RaidType,
    /// The size of strip on each disk or other storage extent.
    /// For RAID1/JBOD, it should be set as block size. If plugin failed to
    /// detect strip size, it should be set as 0.
    pub strip_size: u32,
    /// The count of disks used for assembling the RAID group(s) where this
    /// volume allocated from. For any RAID system using the slice of disk,
    /// this value indicate how many disk slices are used for the RAID. If
    /// the plugin failed to detect disk_count, it should be set as 0.
    pub disk_count: u32,
    /// The minimum I/O size, device preferred I/O size for random I/O. Any
    /// I/O size not equal to a multiple of this value may get significant
    /// speed penalty. Normally it refers to strip size of each disk(extent).
    /// If plugin failed to detect min_io_size, it should try these values in
    /// the sequence of: logical sector size -> physical sector size -> 0
    pub min_io_size: u32,
    /// The optimal I/O size, device preferred I/O size for sequential I/O.
    /// Normally it refers to RAID group stripe size. If plugin failed to
    /// detect opt_io_size, it should be set to 0.
    pub opt_io_size: u32,
}

/// Pool element-type bits: what this pool can create. Stored as a bitmap,
/// unknown bits are preserved on round-trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct PoolElementType(u64);

impl PoolElementType {
    /// This pool could allocate space for sub-pool.
    pub const POOL: PoolElementType = PoolElementType(1 << 1);
    /// This pool could create volume.
    pub const VOLUME: PoolElementType = PoolElementType(1 << 2);
    /// This pool could create file system.
    pub const FS: PoolElementType = PoolElementType(1 << 3);
    /// This pool could hold delta data for snapshots.
    pub const DELTA: PoolElementType = PoolElementType(1 << 4);
    /// This pool could create fully allocated volume.
    pub const VOLUME_FULL: PoolElementType = PoolElementType(1 << 5);
    /// This pool could create thin provisioned volume.
    pub const VOLUME_THIN: PoolElementType = PoolElementType(1 << 6);
    /// This pool is reserved for system internal use.
    pub const SYS_RESERVED: PoolElementType = PoolElementType(1 << 10);

    pub fn new(bits: u64) -> PoolElementType {
        PoolElementType(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn contains(self, flag: PoolElementType) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn any_of(self, mask: PoolElementType) -> bool {
        self.0 & mask.0 != 0
    }

    pub fn all_of(self, mask: PoolElementType) -> bool {
        self.0 & mask.0 == mask.0
    }
}

impl BitOr for PoolElementType {
    type Output = PoolElementType;
    fn bitor(self, rhs: PoolElementType) -> PoolElementType {
        PoolElementType(self.0 | rhs.0)
    }
}

/// Actions a pool does not support. Stored as a bitmap.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct PoolUnsupportedActions(u64);

impl PoolUnsupportedActions {
    /// This pool cannot grow size of its volume.
    pub const VOLUME_GROW: PoolUnsupportedActions = PoolUnsupportedActions(1);
    /// This pool cannot shrink size of its volume.
    pub const VOLUME_SHRINK: PoolUnsupportedActions =
        PoolUnsupportedActions(1 << 1);

    pub fn new(bits: u64) -> PoolUnsupportedActions {
        PoolUnsupportedActions(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn contains(self, flag: PoolUnsupportedActions) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn any_of(self, mask: PoolUnsupportedActions) -> bool {
        self.0 & mask.0 != 0
    }

    pub fn all_of(self, mask: PoolUnsupportedActions) -> bool {
        self.0 & mask.0 == mask.0
    }
}

impl BitOr for PoolUnsupportedActions {
    type Output = PoolUnsupportedActions;
    fn bitor(self, rhs: PoolUnsupportedActions) -> PoolUnsupportedActions {
        PoolUnsupportedActions(self.0 | rhs.0)
    }
}

/// Pool status bits. Stored as a bitmap, unknown bits are preserved on
/// round-trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct PoolStatus(u64);

impl PoolStatus {
    /// Plugin failed to query pool status.
    pub const UNKNOWN: PoolStatus = PoolStatus(1);
    /// The data of this pool is accessible with no data loss. But it might
    /// come along with `PoolStatus::DEGRADED` to indicate redundancy loss.
    pub const OK: PoolStatus = PoolStatus(1 << 1);
    /// Vendor specific status. The `Pool.status_info` property will explain
    /// the detail.
    pub const OTHER: PoolStatus = PoolStatus(1 << 2);
    /// Pool lost data redundancy due to I/O error or offline of one or more
    /// RAID members. Often comes with `PoolStatus::OK` to indicate data is
    /// still accessible with no data loss. Example:
    ///
    ///  * RAID 6 pool lost access to 1 disk or 2 disks.
    ///
    ///  * RAID 5 pool lost access to 1 disk.
    pub const DEGRADED: PoolStatus = PoolStatus(1 << 4);
    /// Pool data is not accessible due to some members offline. Example:
    ///
    ///  * RAID 5 pool lost access to 2 disks.
    ///
    ///  * RAID 0 pool lost access to 1 disk.
    pub const ERROR: PoolStatus = PoolStatus(1 << 5);
    /// Pool is stopped by administrator. Pool data is not accessible.
    pub const STOPPED: PoolStatus = PoolStatus(1 << 9);
    /// Pool is reviving from STOPPED status. Pool data is not accessible yet.
    pub const STARTING: PoolStatus = PoolStatus(1 << 10);
    /// Pool is reconstructing the hash data or mirror data. Mostly happen
    /// when disk revives from offline or disk is replaced. `Pool.status_info`
    /// may contain progress of this reconstruction job.
    pub const RECONSTRUCTING: PoolStatus = PoolStatus(1 << 12);
    /// Array is running integrity check on data of current pool. It might be
    /// started by administrator or array itself. The I/O performance will be
    /// impacted.
    pub const VERIFYING: PoolStatus = PoolStatus(1 << 13);
    /// Pool is not accessible and performing initializing task. Often happen
    /// on newly created pool.
    pub const INITIALIZING: PoolStatus = PoolStatus(1 << 14);
    /// Pool is growing its size and doing internal jobs. `Pool.status_info`
    /// can contain progress of this growing job.
    pub const GROWING: PoolStatus = PoolStatus(1 << 15);

    pub fn new(bits: u64) -> PoolStatus {
        PoolStatus(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn contains(self, flag: PoolStatus) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn any_of(self, mask: PoolStatus) -> bool {
        self.0 & mask.0 != 0
    }

    pub fn all_of(self, mask: PoolStatus) -> bool {
        self.0 & mask.0 == mask.0
    }
}

impl BitOr for PoolStatus {
    type Output = PoolStatus;
    fn bitor(self, rhs: PoolStatus) -> PoolStatus {
        PoolStatus(self.0 | rhs.0)
    }
}

/// The unit of storage where volumes and file systems are created from.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pool {
    #[serde(default = "gen_pool_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Human friendly name.
    pub name: String,
    /// The type of elements this pool could create, check against the
    /// [`PoolElementType`](struct.PoolElementType.html) constants.
    pub element_type: PoolElementType,
    /// The actions not supported by this pool, check against the
    /// [`PoolUnsupportedActions`](struct.PoolUnsupportedActions.html)
    /// constants.
    pub unsupported_actions: PoolUnsupportedActions,
    /// Total space in bytes.
    pub total_space: u64,
    /// Free space in bytes.
    pub free_space: u64,
    /// Pool status bitmap, check against the
    /// [`PoolStatus`](struct.PoolStatus.html) constants:
    ///
    /// ```rust,no_run
    /// use lsm::{Client, PoolStatus};
    ///
    /// let mut c = Client::new("sim://", None, None).unwrap();
    /// for p in c.pools(&[]).unwrap() {
    ///     if !p.status.contains(PoolStatus::OK) {
    ///         println!("Pool {} is not healthy", p.name);
    ///     }
    /// }
    /// ```
    pub status: PoolStatus,
    /// Additional message for status.
    pub status_info: Option<String>,
    plugin_data: Option<String>,
    /// Identifier of owner system.
    pub system_id: String,
}

impl Pool {
    /// Create a pool record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        name: &str,
        element_type: PoolElementType,
        unsupported_actions: PoolUnsupportedActions,
        total_space: u64,
        free_space: u64,
        status: PoolStatus,
        status_info: Option<&str>,
        system_id: &str,
    ) -> Pool {
        Pool {
            class: gen_pool_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            element_type,
            unsupported_actions,
            total_space,
            free_space,
            status,
            status_info: status_info.map(|s| s.to_string()),
            plugin_data: None,
            system_id: system_id.to_string(),
        }
    }
}

/// Disk status bits. Stored as a bitmap, unknown bits are preserved on
/// round-trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct DiskStatus(u64);

impl DiskStatus {
    /// Plugin failed to query out the status of disk.
    pub const UNKNOWN: DiskStatus = DiskStatus(1);
    /// Disk is up and healthy.
    pub const OK: DiskStatus = DiskStatus(1 << 1);
    /// Vendor specific status.
    pub const OTHER: DiskStatus = DiskStatus(1 << 2);
    /// Disk is still functional but will fail soon.
    pub const PREDICTIVE_FAILURE: DiskStatus = DiskStatus(1 << 3);
    /// Error makes disk not functional.
    pub const ERROR: DiskStatus = DiskStatus(1 << 4);
    /// Disk was removed by administrator.
    pub const REMOVED: DiskStatus = DiskStatus(1 << 5);
    /// Disk is starting up.
    pub const STARTING: DiskStatus = DiskStatus(1 << 6);
    /// Disk is shutting down.
    pub const STOPPING: DiskStatus = DiskStatus(1 << 7);
    /// Disk is stopped by administrator.
    pub const STOPPED: DiskStatus = DiskStatus(1 << 8);
    /// Disk is not functional yet, internal storage system is initializing
    /// this disk. It could be initialising a new disk, zeroing a disk or
    /// scrubbing disk data.
    pub const INITIALIZING: DiskStatus = DiskStatus(1 << 9);
    /// In maintenance for bad sector scan, integrity check and etc. It might
    /// be combined with `DiskStatus::OK` or `DiskStatus::STOPPED` for online
    /// maintenance or offline maintenance.
    pub const MAINTENANCE_MODE: DiskStatus = DiskStatus(1 << 10);
    /// Disk is configured as spare disk.
    pub const SPARE_DISK: DiskStatus = DiskStatus(1 << 11);
    /// Disk is reconstructing its data.
    pub const RECONSTRUCT: DiskStatus = DiskStatus(1 << 12);
    /// The whole disk is not holding any data or acting as a dedicated spare
    /// disk. This disk could be assigned as a dedicated spare disk or used
    /// for creating pool.
    pub const FREE: DiskStatus = DiskStatus(1 << 13);

    pub fn new(bits: u64) -> DiskStatus {
        DiskStatus(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn contains(self, flag: DiskStatus) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn any_of(self, mask: DiskStatus) -> bool {
        self.0 & mask.0 != 0
    }

    pub fn all_of(self, mask: DiskStatus) -> bool {
        self.0 & mask.0 == mask.0
    }
}

impl BitOr for DiskStatus {
    type Output = DiskStatus;
    fn bitor(self, rhs: DiskStatus) -> DiskStatus {
        DiskStatus(self.0 | rhs.0)
    }
}

/// Represent a physical disk of a storage system.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Disk {
    #[serde(default = "gen_disk_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Human friendly name.
    pub name: String,
    #[serde(deserialize_with = "int_to_disk_type")]
    #[serde(serialize_with = "disk_type_to_int")]
    /// Disk type.
    pub disk_type: DiskType,
    /// Block size in bytes.
    pub block_size: u64,
    /// Count of blocks.
    pub num_of_blocks: u64,
    /// Disk status bitmap, check against the
    /// [`DiskStatus`](struct.DiskStatus.html) constants.
    pub status: DiskStatus,
    plugin_data: Option<String>,
    /// Identifier of owner system.
    pub system_id: String,
    /// Disk location in storage topology.
    pub location: Option<String>,
    /// Disk rotation speed - revolutions per minute(RPM):
    ///
    ///  * `-1` -- Unknown RPM speed.
    ///
    ///  * `0` -- Non-rotating medium (e.g., SSD).
    ///
    ///  * `1` -- Rotational disk with unknown speed.
    ///
    ///  * `> 1` -- Normal rotational disk (e.g., HDD).
    pub rpm: Option<i32>,
    #[serde(deserialize_with = "int_to_disk_link_type")]
    #[serde(serialize_with = "disk_link_type_to_int")]
    /// Disk data link type.
    pub link_type: Option<DiskLinkType>,
    /// SCSI VPD 0x83 NAA type identifier.
    /// Udev treat it as `ID_WWN_WITH_EXTENSION`
    pub vpd83: Option<String>,
}

impl Disk {
    /// Create a disk record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        name: &str,
        disk_type: DiskType,
        block_size: u64,
        num_of_blocks: u64,
        status: DiskStatus,
        system_id: &str,
        location: Option<&str>,
        rpm: Option<i32>,
        link_type: Option<DiskLinkType>,
        vpd83: Option<&str>,
    ) -> Disk {
        Disk {
            class: gen_disk_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            disk_type,
            block_size,
            num_of_blocks,
            status,
            plugin_data: None,
            system_id: system_id.to_string(),
            location: location.map(|s| s.to_string()),
            rpm,
            link_type,
            vpd83: vpd83.map(|s| s.to_string()),
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
/// Represent disk type.
pub enum DiskType {
    /// Plugin failed to query disk type.
    Unknown = 0,
    /// Vendor specific disk type.
    Other = 1,
    /// IDE disk.
    Ata = 3,
    /// SATA disk.
    Sata = 4,
    /// SAS disk.
    Sas = 5,
    /// FC disk.
    Fc = 6,
    /// SCSI over PCI-Express.
    Sop = 7,
    /// SCSI disk.
    Scsi = 8,
    /// Remote LUN from SAN array.
    Lun = 9,
    /// Near-Line SAS, just SATA disk + SAS port.
    NlSas = 51,
    /// Normal HDD, fall back value if failed to detect HDD type(SAS/SATA/etc).
    Hdd = 52,
    /// Solid State Drive.
    Ssd = 53,
    /// Hybrid disk uses a combination of HDD and SSD.
    Hybrid = 54,
}

fn int_to_disk_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> ::std::result::Result<DiskType, D::Error> {
    let i: i32 = Deserialize::deserialize(deserializer)?;
    match i {
        0 | 1 | 3..=9 | 51..=54 => unsafe { Ok(transmute(i)) },
        _ => Ok(DiskType::Unknown),
    }
}

fn disk_type_to_int<S: Serializer>(
    t: &DiskType,
    serializer: S,
) -> ::std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i32(*t as i32)
}

#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
/// Represent disk data link type.
pub enum DiskLinkType {
    /// Plugin does not support querying disk link type.
    NoSupport = -2,
    /// Plugin failed to query disk link type.
    Unknown = -1,
    /// Fibre Channel.
    Fc = 0,
    /// Serial Storage Architecture, Old IBM tech.
    Ssa = 2,
    /// Serial Bus Protocol, used by IEEE 1394.
    Sbp = 3,
    /// SCSI RDMA Protocol.
    Srp = 4,
    /// Internet Small Computer System Interface
    Iscsi = 5,
    /// Serial Attached SCSI.
    Sas = 6,
    /// Automation/Drive Interface Transport. Often used by tape.
    Adt = 7,
    /// PATA/IDE or SATA.
    Ata = 8,
    /// USB
    Usb = 9,
    /// SCSI over PCI-E.
    Sop = 10,
    /// PCI-E, e.g. NVMe.
    PciE = 11,
}

fn int_to_disk_link_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> ::std::result::Result<Option<DiskLinkType>, D::Error> {
    let i: i32 = Deserialize::deserialize(deserializer)?;
    match i {
        -2..=0 | 2..=11 => unsafe { Ok(Some(transmute(i))) },
        _ => Ok(Some(DiskLinkType::Unknown)),
    }
}

fn disk_link_type_to_int<S: Serializer>(
    t: &Option<DiskLinkType>,
    serializer: S,
) -> ::std::result::Result<S::Ok, S::Error> {
    match *t {
        Some(i) => serializer.serialize_i32(i as i32),
        None => serializer.serialize_i32(DiskLinkType::Unknown as i32),
    }
}

/// Represent a file system.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileSystem {
    #[serde(default = "gen_fs_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Human friendly name.
    pub name: String,
    /// Total space in bytes.
    pub total_space: u64,
    /// Free space in bytes.
    pub free_space: u64,
    plugin_data: Option<String>,
    /// Identifier of owner system.
    pub system_id: String,
    /// Identifier of owner pool.
    pub pool_id: String,
}

impl FileSystem {
    /// Create a file system record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        name: &str,
        total_space: u64,
        free_space: u64,
        system_id: &str,
        pool_id: &str,
    ) -> FileSystem {
        FileSystem {
            class: gen_fs_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            total_space,
            free_space,
            plugin_data: None,
            system_id: system_id.to_string(),
            pool_id: pool_id.to_string(),
        }
    }
}

/// A point in time image of a file system.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileSystemSnapShot {
    #[serde(default = "gen_fs_snap_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Human friendly name.
    pub name: String,
    /// POSIX time(epoch time) on creation.
    pub ts: u64,
    plugin_data: Option<String>,
}

impl FileSystemSnapShot {
    /// Create a snapshot record. Intended for plugin implementations.
    pub fn new(id: &str, name: &str, ts: u64) -> FileSystemSnapShot {
        FileSystemSnapShot {
            class: gen_fs_snap_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            ts,
            plugin_data: None,
        }
    }
}

/// A file system exported over NFS.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NfsExport {
    #[serde(default = "gen_exp_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Identifier of file system.
    pub fs_id: String,
    /// NFS export path.
    pub export_path: String,
    /// NFS authentication type.
    pub auth: String,
    /// Host list with root access.
    pub root: Vec<String>,
    /// Host list with read and write access.
    pub rw: Vec<String>,
    /// Host list with read only access.
    pub ro: Vec<String>,
    #[serde(rename = "anonuid")]
    /// User ID for anonymous access.
    pub anon_uid: i64,
    #[serde(rename = "anongid")]
    /// Group ID for anonymous access.
    pub anon_gid: i64,
    /// NFS extra options.
    pub options: String,
    plugin_data: Option<String>,
}

impl NfsExport {
    /// Default user and group ID for anonymous access.
    pub const ANON_UID_GID_NA: i64 = -1;

    /// Create an NFS export record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        fs_id: &str,
        export_path: &str,
        auth: &str,
        root: Vec<String>,
        rw: Vec<String>,
        ro: Vec<String>,
        anon_uid: i64,
        anon_gid: i64,
        options: &str,
    ) -> NfsExport {
        NfsExport {
            class: gen_exp_class_string(),
            id: id.to_string(),
            fs_id: fs_id.to_string(),
            export_path: export_path.to_string(),
            auth: auth.to_string(),
            root,
            rw,
            ro,
            anon_uid,
            anon_gid,
            options: options.to_string(),
            plugin_data: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
/// Access group is also known as host group on some storage system, it
/// defines a group of initiators sharing the same access to the volume.
pub struct AccessGroup {
    #[serde(default = "gen_ag_class_string")]
    class: String,
    /// Identifier
    pub id: String,
    /// Human friendly name.
    pub name: String,
    /// Initiator list.
    pub init_ids: Vec<String>,
    #[serde(deserialize_with = "int_to_init_type")]
    #[serde(serialize_with = "init_type_to_int")]
    /// Initiator type.
    pub init_type: InitiatorType,
    plugin_data: Option<String>,
    /// Identifier of owner system.
    pub system_id: String,
}

impl AccessGroup {
    /// Create an access group record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        name: &str,
        init_ids: Vec<String>,
        init_type: InitiatorType,
        system_id: &str,
    ) -> AccessGroup {
        AccessGroup {
            class: gen_ag_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            init_ids,
            init_type,
            plugin_data: None,
            system_id: system_id.to_string(),
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum InitiatorType {
    /// Plugin failed to query initiator type.
    Unknown = 0,
    /// Vendor specific initiator type.
    Other = 1,
    /// FC or FCoE WWPN
    Wwpn = 2,
    /// iSCSI IQN
    IscsiIqn = 5,
    /// This access group contains more than 1 type of initiator.
    Mixed = 7,
}

impl From<i32> for InitiatorType {
    fn from(i: i32) -> InitiatorType {
        match i {
            0 | 1 | 2 | 5 | 7 => unsafe { transmute(i) },
            _ => InitiatorType::Unknown,
        }
    }
}

fn int_to_init_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> ::std::result::Result<InitiatorType, D::Error> {
    let i: i32 = Deserialize::deserialize(deserializer)?;
    match i {
        0 | 1 | 2 | 5 | 7 => unsafe { Ok(transmute(i)) },
        _ => Ok(InitiatorType::Unknown),
    }
}

fn init_type_to_int<S: Serializer>(
    i: &InitiatorType,
    serializer: S,
) -> ::std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i32(*i as i32)
}

#[derive(Serialize, Deserialize, Debug, Clone)]
/// Represent a target port which is the front-end port of storage system
/// which storage user/client connect to and get storage service from.
pub struct TargetPort {
    #[serde(default = "gen_tgt_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    #[serde(deserialize_with = "int_to_port_type")]
    #[serde(serialize_with = "port_type_to_int")]
    /// Type of port.
    pub port_type: PortType,
    /// The address used by upper layer like FC and iSCSI:
    ///
    ///  * FC and FCoE:    WWPN
    ///
    ///  * iSCSI:          IQN
    /// The string is in lower case, split with `:` every two digits if WWPN.
    pub service_address: String,
    /// The address used by network layer like FC and TCP/IP:
    ///
    ///  * FC/FCoE:        WWPN
    ///
    ///  * iSCSI:          `IPv4:Port` or `[IPv6]:Port`
    /// The string is in lower case, split with `:` every two digits if WWPN.
    pub network_address: String,
    /// The address used by physical layer like FC-0 and MAC:
    ///
    ///  * FC and FCoE :   WWPN
    ///
    ///  * iSCSI:          MAC
    /// The string is in lower case, split with `:` every two digits.
    pub physical_address: String,
    /// The name of physical port. Administrator could use this name to locate
    /// the port on storage system. E.g. 'eth0'
    pub physical_name: String,
    plugin_data: Option<String>,
    /// Identifier of owner system.
    pub system_id: String,
}

impl TargetPort {
    /// Create a target port record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        port_type: PortType,
        service_address: &str,
        network_address: &str,
        physical_address: &str,
        physical_name: &str,
        system_id: &str,
    ) -> TargetPort {
        TargetPort {
            class: gen_tgt_class_string(),
            id: id.to_string(),
            port_type,
            service_address: service_address.to_string(),
            network_address: network_address.to_string(),
            physical_address: physical_address.to_string(),
            physical_name: physical_name.to_string(),
            plugin_data: None,
            system_id: system_id.to_string(),
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum PortType {
    /// Vendor specific port type.
    Other = 1,
    /// FC port
    Fc = 2,
    /// FCoE port
    FCoE = 3,
    /// iSCSI port
    Iscsi = 4,
}

fn int_to_port_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> ::std::result::Result<PortType, D::Error> {
    let i: i32 = Deserialize::deserialize(deserializer)?;
    match i {
        1..=4 => unsafe { Ok(transmute(i)) },
        _ => Ok(PortType::Other),
    }
}

fn port_type_to_int<S: Serializer>(
    t: &PortType,
    serializer: S,
) -> ::std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i32(*t as i32)
}

/// Battery status bits. Stored as a bitmap, unknown bits are preserved on
/// round-trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct BatteryStatus(u64);

impl BatteryStatus {
    /// Plugin failed to query battery status.
    pub const UNKNOWN: BatteryStatus = BatteryStatus(1);
    /// Vendor specific status.
    pub const OTHER: BatteryStatus = BatteryStatus(1 << 1);
    /// Battery is healthy and charged.
    pub const OK: BatteryStatus = BatteryStatus(1 << 2);
    /// Battery is disconnected from power source and discharging.
    pub const DISCHARGING: BatteryStatus = BatteryStatus(1 << 3);
    /// Battery is not fully charged and charging.
    pub const CHARGING: BatteryStatus = BatteryStatus(1 << 4);
    /// System is trying to discharge and recharge the battery to learn its
    /// capability.
    pub const LEARNING: BatteryStatus = BatteryStatus(1 << 5);
    /// Battery is degraded and should be checked or replaced.
    pub const DEGRADED: BatteryStatus = BatteryStatus(1 << 6);
    /// Battery is dead and should be replaced.
    pub const ERROR: BatteryStatus = BatteryStatus(1 << 7);

    pub fn new(bits: u64) -> BatteryStatus {
        BatteryStatus(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn contains(self, flag: BatteryStatus) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn any_of(self, mask: BatteryStatus) -> bool {
        self.0 & mask.0 != 0
    }

    pub fn all_of(self, mask: BatteryStatus) -> bool {
        self.0 & mask.0 == mask.0
    }
}

impl BitOr for BatteryStatus {
    type Output = BatteryStatus;
    fn bitor(self, rhs: BatteryStatus) -> BatteryStatus {
        BatteryStatus(self.0 | rhs.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
/// Represent a battery.
pub struct Battery {
    #[serde(default = "gen_battery_class_string")]
    class: String,
    /// Identifier.
    pub id: String,
    /// Human friendly name.
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "int_to_battery_type")]
    #[serde(serialize_with = "battery_type_to_int")]
    /// Battery type.
    pub battery_type: BatteryType,
    /// Battery status bitmap, check against the
    /// [`BatteryStatus`](struct.BatteryStatus.html) constants.
    pub status: BatteryStatus,
    plugin_data: Option<String>,
    /// Identifier of owner system.
    pub system_id: String,
}

impl Battery {
    /// Create a battery record. Intended for plugin implementations.
    pub fn new(
        id: &str,
        name: &str,
        battery_type: BatteryType,
        status: BatteryStatus,
        system_id: &str,
    ) -> Battery {
        Battery {
            class: gen_battery_class_string(),
            id: id.to_string(),
            name: name.to_string(),
            battery_type,
            status,
            plugin_data: None,
            system_id: system_id.to_string(),
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum BatteryType {
    /// Plugin failed to detect battery type.
    Unknown = 1,
    /// Vendor specific battery type.
    Other = 2,
    /// Chemical battery, e.g. Li-ion battery.
    Chemical = 3,
    /// Super capacitor.
    Capacitor = 4,
}

fn int_to_battery_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> ::std::result::Result<BatteryType, D::Error> {
    let i: i32 = Deserialize::deserialize(deserializer)?;
    match i {
        1..=4 => unsafe { Ok(transmute(i)) },
        _ => Ok(BatteryType::Unknown),
    }
}

fn battery_type_to_int<S: Serializer>(
    t: &BatteryType,
    serializer: S,
) -> ::std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i32(*t as i32)
}

// Capability slots reserved on the packed string built by plugins.
const CAP_SLOT_COUNT: usize = 256;

#[derive(Serialize, Deserialize, Debug, Clone)]
/// Represent capabilities supported by a specific system. The capability set
/// is packed into a string of ASCII `"00"`/`"01"` pairs indexed by
/// capability number.
pub struct Capabilities {
    #[serde(default = "gen_cap_class_string")]
    class: String,
    cap: String,
}

impl Capabilities {
    /// Build a capability set with the listed capabilities marked supported.
    /// Intended for plugin implementations.
    pub fn with_supported(caps: &[Capability]) -> Capabilities {
        let mut packed = vec![b'0'; CAP_SLOT_COUNT * 2];
        for cap in caps {
            let idx = (*cap as usize) * 2;
            if idx + 1 < packed.len() {
                packed[idx + 1] = b'1';
            }
        }
        Capabilities {
            class: gen_cap_class_string(),
            cap: String::from_utf8(packed).unwrap_or_default(),
        }
    }

    /// Check whether certain [`Capability`][1] is supported or not.
    /// Out of range capability numbers are reported as not supported.
    ///
    /// [1]: enum.Capability.html
    pub fn is_supported(&self, cap: Capability) -> bool {
        let start = (cap as usize) * 2;
        match self.cap.get(start..start + 2) {
            Some("01") => true,
            _ => false,
        }
    }

    /// Check whether every capability of the set is supported.
    pub fn is_supported_set(&self, caps: &[Capability]) -> bool {
        !caps.is_empty() && caps.iter().all(|cap| self.is_supported(*cap))
    }
}

#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// Represent a capability supported by specific system.
pub enum Capability {
    /// Support `Client::volumes()`.
    Volumes = 20,
    /// Support `Client::volume_create()`.
    VolumeCreate = 21,
    /// Support `Client::volume_resize()`.
    VolumeResize = 22,
    /// Support `Client::volume_replicate()`.
    VolumeReplicate = 23,
    /// Support `Client::volume_replicate()` with
    /// `VolumeReplicateType::Clone`.
    VolumeReplicateClone = 24,
    /// Support `Client::volume_replicate()` with
    /// `VolumeReplicateType::Copy`.
    VolumeReplicateCopy = 25,
    /// Support `Client::volume_replicate()` with
    /// `VolumeReplicateType::MirrorAsync`.
    VolumeReplicateMirrorAsync = 26,
    /// Support `Client::volume_replicate()` with
    /// `VolumeReplicateType::MirrorSync`.
    VolumeReplicateMirrorSync = 27,
    /// Support `Client::volume_rep_range_blk_size()`.
    VolumeRepRangeBlockSize = 28,
    /// Support `Client::volume_replicate_range()`.
    VolumeRepRange = 29,
    /// Support `Client::volume_replicate_range()` with
    /// `VolumeReplicateType::Clone`.
    VolumeRepRangeClone = 30,
    /// Support `Client::volume_replicate_range()` with
    /// `VolumeReplicateType::Copy`.
    VolumeRepRangeCopy = 31,
    /// Support `Client::volume_delete()`.
    VolumeDelete = 33,
    /// Support `Client::volume_enable()`.
    VolumeEnable = 34,
    /// Support `Client::volume_disable()`.
    VolumeDisable = 35,
    /// Support `Client::volume_mask()`.
    VolumeMask = 36,
    /// Support `Client::volume_unmask()`.
    VolumeUnmask = 37,
    /// Support `Client::access_groups()`.
    AccessGroups = 38,
    /// Support `Client::access_group_create()` with `InitiatorType::Wwpn`.
    AccessGroupCreateWwpn = 39,
    /// Support `Client::access_group_delete()`.
    AccessGroupDelete = 40,
    /// Support `Client::access_group_init_add()` with `InitiatorType::Wwpn`.
    AccessGroupInitAddWwpn = 41,
    /// Support `Client::access_group_init_del()`.
    AccessGroupInitDel = 42,
    /// Support `Client::vols_masked_to_ag()`.
    VolsMaskedToAg = 43,
    /// Support `Client::ags_granted_to_vol()`.
    AgsGrantedToVol = 44,
    /// Support `Client::vol_has_child_dep()`.
    VolHasChildDep = 45,
    /// Support `Client::vol_child_dep_rm()`.
    VolChildDepRm = 46,
    /// Support `Client::access_group_create()` with `InitiatorType::IscsiIqn`.
    AccessGroupCreateIscsiIqn = 47,
    /// Support `Client::access_group_init_add()` with
    /// `InitiatorType::IscsiIqn`.
    AccessGroupInitAddIscsiIqn = 48,
    /// Support `Client::iscsi_chap_auth_set()`.
    IscsiChapAuthSet = 53,
    /// Support `Client::vol_raid_info()`.
    VolRaidInfo = 54,
    /// Support `Client::volume_create()` with
    /// `thinp=VolumeProvisioning::Thin` argument.
    VolumeThin = 55,
    /// Support `Client::batteries()`.
    Batteries = 56,
    /// Support `Client::vol_cache_info()`.
    VolCacheInfo = 57,
    /// Support `Client::vol_phy_disk_cache_set().`
    VolPhyDiskCacheSet = 58,
    /// Indicate the `Client::vol_phy_disk_cache_set()` will change system
    /// settings which are effective on all volumes in this storage system.
    /// For example, on HPE SmartArray, the physical disk cache setting is a
    /// controller level setting.
    VolPhysicalDiskCacheSetSystemLevel = 59,
    /// Support `Client::vol_write_cache_set()` with
    /// `wcp=CachePolicy::Enabled`.
    VolWriteCacheSetEnable = 60,
    /// Support `Client::vol_write_cache_set()` with
    /// `wcp=CachePolicy::Auto`.
    VolWriteCacheSetAuto = 61,
    /// Support `Client::vol_write_cache_set()` with
    /// `wcp=CachePolicy::Disabled`.
    VolWriteCacheSetDisabled = 62,
    /// Indicate the `Client::vol_write_cache_set()` might also impact read
    /// cache policy.
    VolWriteCacheSetImpactRead = 63,
    /// Indicate the `Client::vol_write_cache_set()` with
    /// `wcp=CachePolicy::Enabled` might impact other volumes in the same
    /// system.
    VolWriteCacheSetWbImpactOther = 64,
    /// Support `Client::vol_read_cache_set()`.
    VolReadCacheSet = 65,
    /// Indicate the `Client::vol_read_cache_set()` might also impact write
    /// cache policy.
    VolReadCacheSetImpactWrite = 66,
    /// Support `Client::fs()`.
    Fs = 100,
    /// Support `Client::fs_delete()`.
    FsDelete = 101,
    /// Support `Client::fs_resize()`.
    FsResize = 102,
    /// Support `Client::fs_create()`.
    FsCreate = 103,
    /// Support `Client::fs_clone()`.
    FsClone = 104,
    /// Support `Client::fs_file_clone()`.
    FsFileClone = 105,
    /// Support `Client::fs_snapshots()`.
    FsSnapshots = 106,
    /// Support `Client::fs_snapshot_create()`.
    FsSnapshotCreate = 107,
    /// Support `Client::fs_snapshot_delete()`.
    FsSnapshotDelete = 109,
    /// Support `Client::fs_snapshot_restore()`.
    FsSnapshotRestore = 110,
    /// Support `Client::fs_snapshot_restore()` with `files` argument.
    FsSnapshotRestoreSpecificFiles = 111,
    /// Support `Client::fs_has_child_dep()`.
    FsHasChildDep = 112,
    /// Support `Client::fs_child_dep_rm()`.
    FsChildDepRm = 113,
    /// Support `Client::fs_child_dep_rm()` with `files` argument.
    FsChildDepRmSpecificFiles = 114,
    /// Support `Client::nfs_exp_auth_type_list()`.
    NfsExportAuthTypeList = 120,
    /// Support `Client::nfs_exports()`.
    NfsExports = 121,
    /// Support `Client::fs_export()`.
    FsExport = 122,
    /// Support `Client::fs_unexport()`.
    FsUnexport = 123,
    /// Support `Client::fs_export()` with `export_path` argument.
    FsExportCustomPath = 124,
    /// Support `Client::sys_read_cache_pct_set()`
    SysReadCachePctSet = 158,
    /// Support `Client::systems()` with valid `read_cache_pct` property.
    SysReadCachePctGet = 159,
    /// Support `Client::systems()` with valid `fw_version` property.
    SysFwVersionGet = 160,
    /// Support `Client::systems()` with valid `mode` property.
    SysModeGet = 161,
    /// Support `Client::disks()` with valid `location` property.
    DiskLocation = 163,
    /// Support `Client::disks()` with valid `rpm` property.
    DiskRpm = 164,
    /// Support `Client::disks()` with valid `link_type` property.
    DiskLinkType = 165,
    /// Support `Client::vol_ident_led_on()` and `Client::vol_ident_led_off()`.
    VolumeLed = 171,
    /// Support `Client::target_ports()`.
    TargetPorts = 216,
    /// Support `Client::disks()`.
    Disks = 220,
    /// Support `Client::pool_member_info()`.
    PoolMemberInfo = 221,
    /// Support `Client::vol_raid_create_cap_get()` and
    /// `Client::vol_raid_create()`.
    VolumeRaidCreate = 222,
    /// Support `Client::disks()` with valid `vpd83` property.
    DiskVpd83Get = 223,
}

/// Represent a block range used by `Client::volume_replicate_range()`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlockRange {
    #[serde(default = "gen_block_range_class_string")]
    class: String,
    src_blk_addr: u64,
    dst_blk_addr: u64,
    blk_count: u64,
}

impl BlockRange {
    /// Create a block range.
    pub fn new(
        src_blk_addr: u64,
        dst_blk_addr: u64,
        blk_count: u64,
    ) -> BlockRange {
        BlockRange {
            class: gen_block_range_class_string(),
            src_blk_addr,
            dst_blk_addr,
            blk_count,
        }
    }

    pub fn src_blk_addr(&self) -> u64 {
        self.src_blk_addr
    }

    pub fn dst_blk_addr(&self) -> u64 {
        self.dst_blk_addr
    }

    pub fn blk_count(&self) -> u64 {
        self.blk_count
    }
}

pub(crate) const WRITE_CACHE_POLICY_UNKNOWN: u8 = 1;
pub(crate) const WRITE_CACHE_POLICY_WRITE_BACK: u8 = 2;
pub(crate) const WRITE_CACHE_POLICY_AUTO: u8 = 3;
pub(crate) const WRITE_CACHE_POLICY_WRITE_THROUGH: u8 = 4;

pub(crate) const WRITE_CACHE_STATUS_UNKNOWN: u8 = 1;
pub(crate) const WRITE_CACHE_STATUS_WRITE_BACK: u8 = 2;
pub(crate) const WRITE_CACHE_STATUS_WRITE_THROUGH: u8 = 3;

pub(crate) const READ_CACHE_POLICY_UNKNOWN: u8 = 1;
pub(crate) const READ_CACHE_POLICY_ENABLED: u8 = 2;
pub(crate) const READ_CACHE_POLICY_DISABLED: u8 = 3;

pub(crate) const READ_CACHE_STATUS_UNKNOWN: u8 = 1;
pub(crate) const READ_CACHE_STATUS_ENABLED: u8 = 2;
pub(crate) const READ_CACHE_STATUS_DISABLED: u8 = 3;

pub(crate) const PHYSICAL_DISK_CACHE_UNKNOWN: u8 = 1;
pub(crate) const PHYSICAL_DISK_CACHE_ENABLED: u8 = 2;
pub(crate) const PHYSICAL_DISK_CACHE_DISABLED: u8 = 3;
pub(crate) const PHYSICAL_DISK_CACHE_USE_DISK_SETTING: u8 = 4;

#[derive(Debug, Clone, PartialEq, Copy)]
/// Represent a volume cache policy.
pub enum CachePolicy {
    /// Cache is enabled.
    Enabled,
    /// Storage system will determine whether to use cache based on
    /// battery/capacitor health.
    Auto, // Only for write cache
    /// Cache is disabled.
    Disabled,
    /// Plugin failed to query cache setting.
    Unknown,
    /// Physical disk cache is determined by the disk vendor via physical
    /// disks' SCSI caching mode page(`0x08` page).
    UseDiskSetting, // Only for physical disk cache
}

#[derive(Debug, Clone)]
/// Represent volume cache information.
pub struct VolumeCacheInfo {
    /// Write cache setting.
    pub write_cache_setting: CachePolicy,
    /// Write cache status.
    pub write_cache_status: CachePolicy,
    /// Read cache setting.
    pub read_cache_setting: CachePolicy,
    /// Read cache status
    pub read_cache_status: CachePolicy,
    /// Physical disk cache status.
    pub physical_disk_cache_status: CachePolicy,
}

#[derive(Debug, Clone)]
/// Represent NFS access control information.
pub struct NfsAccess<'a> {
    /// List of hosts with root access.
    pub root_list: &'a [&'a str],
    /// List of hosts with read and write access.
    pub rw_list: &'a [&'a str],
    /// List of hosts with read only access.
    pub ro_list: &'a [&'a str],
    /// UID to map to anonymous
    pub anon_uid: Option<i64>,
    /// GID to map to anonymous
    pub anon_gid: Option<i64>,
}
