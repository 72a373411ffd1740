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

// End to end tests: a Client driving a simulator Plugin served in-process
// over real Unix domain sockets, no external daemon needed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::prelude::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::process;
use std::rc::Rc;
use std::str;
use std::sync::Once;
use std::thread;

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde_json::Value;

use lsm::plugin::{FsCallbacks, NfsCallbacks, RequiredCallbacks,
                  SanCallbacks};
use lsm::{AccessGroup, Battery, BatteryStatus, BatteryType, BlockRange,
          CachePolicy, Capabilities, Capability, Client, Disk,
          DiskLinkType, DiskStatus, DiskType, FileSystem,
          FileSystemSnapShot, JobStatus, LsmBool, LsmError, NfsAccess,
          NfsExport, Outcome, Plugin, PluginCallbacks, Pool,
          PoolElementType, PoolMemberKind, PoolStatus, PortType, RaidType,
          System, SystemMode, SystemStatus, TargetPort,
          VolumeProvisioning, VolumeReplicateType, Volume};

static SIM_SYS_ID: &str = "sim-01";
static SIM_DESC: &str = "Rust sim plugin";
static SIM_VERSION: &str = "1.0.0";

struct SimJob {
    polls: u32,
    payload: Value,
}

struct SimArray {
    sys: System,
    pools: Vec<Pool>,
    disks: Vec<Disk>,
    volumes: Vec<Volume>,
    fss: Vec<FileSystem>,
    snaps: HashMap<String, Vec<FileSystemSnapShot>>,
    exports: Vec<NfsExport>,
    ags: Vec<AccessGroup>,
    masks: Vec<(String, String)>,
    vol_deps: HashSet<String>,
    fs_deps: HashSet<String>,
    jobs: HashMap<String, SimJob>,
    tmo: u32,
    write_cache: CachePolicy,
    read_cache: CachePolicy,
    phy_cache: CachePolicy,
    seq: u64,
}

impl SimArray {
    fn new() -> SimArray {
        let sys = System::new(
            SIM_SYS_ID,
            "Rust sim array",
            SystemStatus::OK,
            "",
            "1.0",
            10,
            SystemMode::NoSupport,
        );
        let pools = (1..=4)
            .map(|i| {
                Pool::new(
                    &format!("POOL_{}", i),
                    &format!("pool{}", i),
                    PoolElementType::VOLUME
                        | PoolElementType::FS
                        | PoolElementType::VOLUME_FULL
                        | PoolElementType::VOLUME_THIN,
                    lsm::PoolUnsupportedActions::new(0),
                    1 << 40,
                    1 << 39,
                    PoolStatus::OK,
                    None,
                    SIM_SYS_ID,
                )
            })
            .collect();
        let disks = (1..=6)
            .map(|i| {
                Disk::new(
                    &format!("DISK_{}", i),
                    &format!("disk{}", i),
                    DiskType::Ssd,
                    512,
                    1 << 31,
                    DiskStatus::FREE | DiskStatus::OK,
                    SIM_SYS_ID,
                    Some(&format!("slot-{}", i)),
                    Some(0),
                    Some(DiskLinkType::Sas),
                    Some(&format!("600140512345{:03}", i)),
                )
            })
            .collect();
        SimArray {
            sys,
            pools,
            disks,
            volumes: Vec::new(),
            fss: Vec::new(),
            snaps: HashMap::new(),
            exports: Vec::new(),
            ags: Vec::new(),
            masks: Vec::new(),
            vol_deps: HashSet::new(),
            fs_deps: HashSet::new(),
            jobs: HashMap::new(),
            tmo: 30_000,
            write_cache: CachePolicy::Auto,
            read_cache: CachePolicy::Enabled,
            phy_cache: CachePolicy::UseDiskSetting,
            seq: 0,
        }
    }

    fn alloc_id(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format!("{}_{:04}", prefix, self.seq)
    }

    fn new_volume(&mut self, name: &str, size_bytes: u64, pool_id: &str)
                  -> Volume {
        let id = self.alloc_id("VOL");
        let block_size = 512u64;
        let blocks = (size_bytes + block_size - 1) / block_size;
        let vpd83 = format!("60014055sim{:05x}", self.seq);
        let vol = Volume::new(&id, name, true, block_size, blocks, &vpd83,
                              SIM_SYS_ID, pool_id);
        self.volumes.push(vol.clone());
        vol
    }
}

fn sim_caps() -> Vec<Capability> {
    vec![
        Capability::Volumes,
        Capability::VolumeCreate,
        Capability::VolumeResize,
        Capability::VolumeReplicate,
        Capability::VolumeReplicateClone,
        Capability::VolumeRepRangeBlockSize,
        Capability::VolumeDelete,
        Capability::VolumeEnable,
        Capability::VolumeDisable,
        Capability::VolumeMask,
        Capability::VolumeUnmask,
        Capability::AccessGroups,
        Capability::AccessGroupCreateWwpn,
        Capability::AccessGroupDelete,
        Capability::AccessGroupInitAddWwpn,
        Capability::AccessGroupInitDel,
        Capability::VolsMaskedToAg,
        Capability::AgsGrantedToVol,
        Capability::VolHasChildDep,
        Capability::VolChildDepRm,
        Capability::AccessGroupCreateIscsiIqn,
        Capability::AccessGroupInitAddIscsiIqn,
        Capability::IscsiChapAuthSet,
        Capability::VolRaidInfo,
        Capability::VolumeThin,
        Capability::Batteries,
        Capability::VolCacheInfo,
        Capability::VolPhyDiskCacheSet,
        Capability::VolWriteCacheSetEnable,
        Capability::VolWriteCacheSetAuto,
        Capability::VolWriteCacheSetDisabled,
        Capability::VolReadCacheSet,
        Capability::Fs,
        Capability::FsDelete,
        Capability::FsResize,
        Capability::FsCreate,
        Capability::FsClone,
        Capability::FsFileClone,
        Capability::FsSnapshots,
        Capability::FsSnapshotCreate,
        Capability::FsSnapshotDelete,
        Capability::FsSnapshotRestore,
        Capability::FsHasChildDep,
        Capability::FsChildDepRm,
        Capability::NfsExportAuthTypeList,
        Capability::NfsExports,
        Capability::FsExport,
        Capability::FsUnexport,
        Capability::FsExportCustomPath,
        Capability::SysReadCachePctSet,
        Capability::TargetPorts,
        Capability::Disks,
        Capability::PoolMemberInfo,
        Capability::VolumeRaidCreate,
        Capability::DiskVpd83Get,
        Capability::VolumeLed,
    ]
}

fn new_sim_plugin(so: UnixStream) -> Plugin {
    let arr = Rc::new(RefCell::new(SimArray::new()));

    let required = RequiredCallbacks {
        plugin_register: Box::new(|_register| Ok(())),
        plugin_unregister: Box::new(|| Ok(())),
        time_out_set: {
            let st = Rc::clone(&arr);
            Box::new(move |ms| {
                st.borrow_mut().tmo = ms;
                Ok(())
            })
        },
        time_out_get: {
            let st = Rc::clone(&arr);
            Box::new(move || Ok(st.borrow().tmo))
        },
        capabilities: {
            Box::new(move |_sys| Ok(Capabilities::with_supported(&sim_caps())))
        },
        job_status: {
            let st = Rc::clone(&arr);
            Box::new(move |job_id| {
                let mut s = st.borrow_mut();
                let job = match s.jobs.get_mut(job_id) {
                    Some(j) => j,
                    None => {
                        return Err(LsmError::NotFoundJob(format!(
                            "Job '{}' not found",
                            job_id
                        )))
                    }
                };
                job.polls += 1;
                if job.polls >= 3 {
                    Ok((JobStatus::Complete, 100, Some(job.payload.clone())))
                } else {
                    Ok((JobStatus::InProgress, (job.polls * 30) as u8, None))
                }
            })
        },
        job_free: {
            let st = Rc::clone(&arr);
            Box::new(move |job_id| {
                match st.borrow_mut().jobs.remove(job_id) {
                    Some(_) => Ok(()),
                    None => Err(LsmError::NotFoundJob(format!(
                        "Job '{}' not found",
                        job_id
                    ))),
                }
            })
        },
        systems: {
            let st = Rc::clone(&arr);
            Box::new(move || Ok(vec![st.borrow().sys.clone()]))
        },
        pools: {
            let st = Rc::clone(&arr);
            Box::new(move |search: Option<(&str, &str)>| {
                let s = st.borrow();
                Ok(match search {
                    Some(("id", val)) => s.pools
                        .iter()
                        .filter(|p| p.id == val)
                        .cloned()
                        .collect(),
                    Some((key, _)) => {
                        return Err(LsmError::UnSupportedSearchKey(format!(
                            "Unsupported search key '{}'",
                            key
                        )))
                    }
                    None => s.pools.clone(),
                })
            })
        },
    };

    let san = SanCallbacks {
        volumes: Some({
            let st = Rc::clone(&arr);
            Box::new(move |search: Option<(&str, &str)>| {
                let s = st.borrow();
                Ok(match search {
                    Some(("id", val)) => s.volumes
                        .iter()
                        .filter(|v| v.id == val)
                        .cloned()
                        .collect(),
                    Some(("system_id", val)) => s.volumes
                        .iter()
                        .filter(|v| v.system_id == val)
                        .cloned()
                        .collect(),
                    Some((key, _)) => {
                        return Err(LsmError::UnSupportedSearchKey(format!(
                            "Unsupported search key '{}'",
                            key
                        )))
                    }
                    None => s.volumes.clone(),
                })
            })
        }),
        disks: Some({
            let st = Rc::clone(&arr);
            Box::new(move || Ok(st.borrow().disks.clone()))
        }),
        volume_create: Some({
            let st = Rc::clone(&arr);
            Box::new(move |pool: &Pool, name: &str, size: u64, _thinp| {
                let mut s = st.borrow_mut();
                let vol = s.new_volume(name, size, &pool.id);
                if name.starts_with("job_") {
                    let job_id = s.alloc_id("JOB");
                    s.jobs.insert(
                        job_id.clone(),
                        SimJob {
                            polls: 0,
                            payload: serde_json::to_value(&vol).unwrap(),
                        },
                    );
                    Ok(Outcome::Job(job_id))
                } else {
                    Ok(Outcome::Ready(vol))
                }
            })
        }),
        volume_delete: Some({
            let st = Rc::clone(&arr);
            Box::new(move |vol: &Volume| {
                let mut s = st.borrow_mut();
                s.volumes.retain(|v| v.id != vol.id);
                let vol_id = vol.id.clone();
                s.masks.retain(|(v, _)| *v != vol_id);
                s.vol_deps.remove(&vol_id);
                Ok(Outcome::Ready(()))
            })
        }),
        volume_resize: Some({
            let st = Rc::clone(&arr);
            Box::new(move |vol: &Volume, new_size: u64| {
                let mut s = st.borrow_mut();
                for v in s.volumes.iter_mut() {
                    if v.id == vol.id {
                        v.num_of_blocks = (new_size + 511) / 512;
                        return Ok(Outcome::Ready(v.clone()));
                    }
                }
                Err(LsmError::NotFoundVolume(format!(
                    "Volume '{}' not found",
                    vol.id
                )))
            })
        }),
        volume_replicate: Some({
            let st = Rc::clone(&arr);
            Box::new(move |pool: Option<&Pool>,
                           _rep_type,
                           src_vol: &Volume,
                           name: &str| {
                let mut s = st.borrow_mut();
                let pool_id = match pool {
                    Some(p) => p.id.clone(),
                    None => src_vol.pool_id.clone(),
                };
                let size = src_vol.block_size * src_vol.num_of_blocks;
                let dst = s.new_volume(name, size, &pool_id);
                s.vol_deps.insert(src_vol.id.clone());
                Ok(Outcome::Ready(dst))
            })
        }),
        volume_replicate_range: None,
        volume_rep_range_blk_size: Some(Box::new(move |_sys| Ok(512))),
        volume_enable: Some(Box::new(move |_vol| Ok(()))),
        volume_disable: Some(Box::new(move |_vol| Ok(()))),
        volume_mask: Some({
            let st = Rc::clone(&arr);
            Box::new(move |vol: &Volume, ag: &AccessGroup| {
                st.borrow_mut()
                    .masks
                    .push((vol.id.clone(), ag.id.clone()));
                Ok(())
            })
        }),
        volume_unmask: Some({
            let st = Rc::clone(&arr);
            Box::new(move |vol: &Volume, ag: &AccessGroup| {
                let vol_id = vol.id.clone();
                let ag_id = ag.id.clone();
                st.borrow_mut()
                    .masks
                    .retain(|(v, a)| !(*v == vol_id && *a == ag_id));
                Ok(())
            })
        }),
        vols_masked_to_ag: Some({
            let st = Rc::clone(&arr);
            Box::new(move |ag: &AccessGroup| {
                let s = st.borrow();
                let vol_ids: Vec<&String> = s.masks
                    .iter()
                    .filter(|(_, a)| *a == ag.id)
                    .map(|(v, _)| v)
                    .collect();
                Ok(s.volumes
                    .iter()
                    .filter(|v| vol_ids.contains(&&v.id))
                    .cloned()
                    .collect())
            })
        }),
        access_groups: Some({
            let st = Rc::clone(&arr);
            Box::new(move || Ok(st.borrow().ags.clone()))
        }),
        access_group_create: Some({
            let st = Rc::clone(&arr);
            Box::new(move |name: &str,
                           init_id: &str,
                           init_type,
                           _sys: &System| {
                let mut s = st.borrow_mut();
                if s.ags
                    .iter()
                    .any(|ag| ag.init_ids.iter().any(|i| i == init_id))
                {
                    return Err(LsmError::ExistsInitiator(format!(
                        "Initiator '{}' is used by another access group",
                        init_id
                    )));
                }
                let id = s.alloc_id("AG");
                let ag = AccessGroup::new(
                    &id,
                    name,
                    vec![init_id.to_string()],
                    init_type,
                    SIM_SYS_ID,
                );
                s.ags.push(ag.clone());
                Ok(ag)
            })
        }),
        access_group_delete: Some({
            let st = Rc::clone(&arr);
            Box::new(move |ag: &AccessGroup| {
                let mut s = st.borrow_mut();
                if s.masks.iter().any(|(_, a)| *a == ag.id) {
                    return Err(LsmError::IsMasked(format!(
                        "Access group '{}' has volumes masked to it",
                        ag.id
                    )));
                }
                s.ags.retain(|a| a.id != ag.id);
                Ok(())
            })
        }),
        access_group_init_add: Some({
            let st = Rc::clone(&arr);
            Box::new(move |ag: &AccessGroup, init_id: &str, _init_type| {
                let mut s = st.borrow_mut();
                for a in s.ags.iter_mut() {
                    if a.id == ag.id {
                        if !a.init_ids.iter().any(|i| i == init_id) {
                            a.init_ids.push(init_id.to_string());
                        }
                        return Ok(a.clone());
                    }
                }
                Err(LsmError::NotFoundAccessGroup(format!(
                    "Access group '{}' not found",
                    ag.id
                )))
            })
        }),
        access_group_init_del: Some({
            let st = Rc::clone(&arr);
            Box::new(move |ag: &AccessGroup, init_id: &str, _init_type| {
                let mut s = st.borrow_mut();
                for a in s.ags.iter_mut() {
                    if a.id == ag.id {
                        if a.init_ids.len() == 1 {
                            return Err(LsmError::LastInitInAccessGroup(
                                "Refusing to remove the last initiator"
                                    .to_string(),
                            ));
                        }
                        a.init_ids.retain(|i| i != init_id);
                        return Ok(a.clone());
                    }
                }
                Err(LsmError::NotFoundAccessGroup(format!(
                    "Access group '{}' not found",
                    ag.id
                )))
            })
        }),
        ags_granted_to_vol: Some({
            let st = Rc::clone(&arr);
            Box::new(move |vol: &Volume| {
                let s = st.borrow();
                let ag_ids: Vec<&String> = s.masks
                    .iter()
                    .filter(|(v, _)| *v == vol.id)
                    .map(|(_, a)| a)
                    .collect();
                Ok(s.ags
                    .iter()
                    .filter(|a| ag_ids.contains(&&a.id))
                    .cloned()
                    .collect())
            })
        }),
        iscsi_chap_auth_set: Some(Box::new(
            move |_init_id, _in_user, _in_pass, _out_user, _out_pass| Ok(()),
        )),
        sys_read_cache_pct_set: Some({
            let st = Rc::clone(&arr);
            Box::new(move |_sys: &System, pct: u32| {
                st.borrow_mut().sys.read_cache_pct = pct as i8;
                Ok(())
            })
        }),
        target_ports: Some({
            Box::new(move || {
                Ok(vec![
                    TargetPort::new(
                        "TGT_1",
                        PortType::Iscsi,
                        "iqn.2000-04.com.example:sim-tgt-1",
                        "192.168.1.1:3260",
                        "52:54:00:12:34:56",
                        "eth0",
                        SIM_SYS_ID,
                    ),
                    TargetPort::new(
                        "TGT_2",
                        PortType::Fc,
                        "50:0a:09:86:99:4b:8d:c5",
                        "50:0a:09:86:99:4b:8d:c5",
                        "50:0a:09:86:99:4b:8d:c5",
                        "FC_a_0b",
                        SIM_SYS_ID,
                    ),
                ])
            })
        }),
        batteries: Some({
            Box::new(move || {
                Ok(vec![
                    Battery::new(
                        "BAT_1",
                        "Battery SIMB01",
                        BatteryType::Chemical,
                        BatteryStatus::OK,
                        SIM_SYS_ID,
                    ),
                    Battery::new(
                        "BAT_2",
                        "Capacitor SIMC01",
                        BatteryType::Capacitor,
                        BatteryStatus::OK,
                        SIM_SYS_ID,
                    ),
                ])
            })
        }),
        vol_has_child_dep: Some({
            let st = Rc::clone(&arr);
            Box::new(move |vol: &Volume| {
                Ok(st.borrow().vol_deps.contains(&vol.id))
            })
        }),
        vol_child_dep_rm: Some({
            let st = Rc::clone(&arr);
            Box::new(move |vol: &Volume| {
                st.borrow_mut().vol_deps.remove(&vol.id);
                Ok(Outcome::Ready(()))
            })
        }),
        vol_raid_info: Some({
            Box::new(move |_vol: &Volume| {
                Ok(lsm::VolumeRaidInfo {
                    raid_type: RaidType::Raid1,
                    strip_size: 512,
                    disk_count: 2,
                    min_io_size: 512,
                    opt_io_size: 1024,
                })
            })
        }),
        pool_member_info: Some({
            let st = Rc::clone(&arr);
            Box::new(move |_pool: &Pool| {
                let s = st.borrow();
                let member_ids: Vec<String> = s.disks
                    .iter()
                    .take(2)
                    .map(|d| d.id.clone())
                    .collect();
                Ok((RaidType::Raid0, PoolMemberKind::Disk, member_ids))
            })
        }),
        vol_raid_create: Some({
            let st = Rc::clone(&arr);
            Box::new(move |name: &str,
                           _raid_type,
                           disks: &[Disk],
                           _strip_size: u32| {
                let mut s = st.borrow_mut();
                let size: u64 = disks
                    .iter()
                    .map(|d| d.block_size * d.num_of_blocks)
                    .min()
                    .unwrap_or(0);
                let vol = s.new_volume(name, size, "POOL_1");
                Ok(vol)
            })
        }),
        vol_raid_create_cap_get: Some(Box::new(move |_sys| {
            Ok((
                vec![RaidType::Raid0, RaidType::Raid1, RaidType::Raid5],
                vec![32_768, 65_536, 131_072],
            ))
        })),
        vol_ident_led_on: Some(Box::new(move |_vol| Ok(()))),
        vol_ident_led_off: Some(Box::new(move |_vol| Ok(()))),
        vol_cache_info: Some({
            let st = Rc::clone(&arr);
            Box::new(move |_vol: &Volume| {
                let s = st.borrow();
                let write_status = match s.write_cache {
                    CachePolicy::Disabled => CachePolicy::Disabled,
                    _ => CachePolicy::Enabled,
                };
                Ok(lsm::VolumeCacheInfo {
                    write_cache_setting: s.write_cache,
                    write_cache_status: write_status,
                    read_cache_setting: s.read_cache,
                    read_cache_status: s.read_cache,
                    physical_disk_cache_status: s.phy_cache,
                })
            })
        }),
        vol_phy_disk_cache_set: Some({
            let st = Rc::clone(&arr);
            Box::new(move |_vol: &Volume, pdc| {
                st.borrow_mut().phy_cache = pdc;
                Ok(())
            })
        }),
        vol_write_cache_set: Some({
            let st = Rc::clone(&arr);
            Box::new(move |_vol: &Volume, wcp| {
                st.borrow_mut().write_cache = wcp;
                Ok(())
            })
        }),
        vol_read_cache_set: Some({
            let st = Rc::clone(&arr);
            Box::new(move |_vol: &Volume, rcp| {
                st.borrow_mut().read_cache = rcp;
                Ok(())
            })
        }),
    };

    let fs_cb = FsCallbacks {
        fs: Some({
            let st = Rc::clone(&arr);
            Box::new(move || Ok(st.borrow().fss.clone()))
        }),
        fs_create: Some({
            let st = Rc::clone(&arr);
            Box::new(move |pool: &Pool, name: &str, size: u64| {
                let mut s = st.borrow_mut();
                let id = s.alloc_id("FS");
                let fs =
                    FileSystem::new(&id, name, size, size, SIM_SYS_ID,
                                    &pool.id);
                s.fss.push(fs.clone());
                Ok(Outcome::Ready(fs))
            })
        }),
        fs_delete: Some({
            let st = Rc::clone(&arr);
            Box::new(move |fs: &FileSystem| {
                let mut s = st.borrow_mut();
                s.fss.retain(|f| f.id != fs.id);
                s.snaps.remove(&fs.id);
                let fs_id = fs.id.clone();
                s.exports.retain(|e| e.fs_id != fs_id);
                s.fs_deps.remove(&fs_id);
                Ok(Outcome::Ready(()))
            })
        }),
        fs_resize: Some({
            let st = Rc::clone(&arr);
            Box::new(move |fs: &FileSystem, new_size: u64| {
                let mut s = st.borrow_mut();
                for f in s.fss.iter_mut() {
                    if f.id == fs.id {
                        let updated =
                            FileSystem::new(&f.id, &f.name, new_size,
                                            new_size, &f.system_id,
                                            &f.pool_id);
                        *f = updated;
                        return Ok(Outcome::Ready(f.clone()));
                    }
                }
                Err(LsmError::NotFoundFs(format!(
                    "File system '{}' not found",
                    fs.id
                )))
            })
        }),
        fs_clone: Some({
            let st = Rc::clone(&arr);
            Box::new(move |src_fs: &FileSystem, name: &str, _snapshot| {
                let mut s = st.borrow_mut();
                let id = s.alloc_id("FS");
                let fs = FileSystem::new(&id, name, src_fs.total_space,
                                         src_fs.free_space, SIM_SYS_ID,
                                         &src_fs.pool_id);
                s.fss.push(fs.clone());
                s.fs_deps.insert(src_fs.id.clone());
                Ok(Outcome::Ready(fs))
            })
        }),
        fs_file_clone: Some(Box::new(move |_fs, _src, _dst, _snapshot| {
            Ok(Outcome::Ready(()))
        })),
        fs_snapshots: Some({
            let st = Rc::clone(&arr);
            Box::new(move |fs: &FileSystem| {
                Ok(st.borrow()
                    .snaps
                    .get(&fs.id)
                    .cloned()
                    .unwrap_or_default())
            })
        }),
        fs_snapshot_create: Some({
            let st = Rc::clone(&arr);
            Box::new(move |fs: &FileSystem, name: &str| {
                let mut s = st.borrow_mut();
                let id = s.alloc_id("SNAP");
                let ts = 1_700_000_000 + s.seq;
                let snap = FileSystemSnapShot::new(&id, name, ts);
                s.snaps
                    .entry(fs.id.clone())
                    .or_insert_with(Vec::new)
                    .push(snap.clone());
                Ok(Outcome::Ready(snap))
            })
        }),
        fs_snapshot_delete: Some({
            let st = Rc::clone(&arr);
            Box::new(move |fs: &FileSystem, snap: &FileSystemSnapShot| {
                let mut s = st.borrow_mut();
                if let Some(snaps) = s.snaps.get_mut(&fs.id) {
                    snaps.retain(|ss| ss.id != snap.id);
                }
                Ok(Outcome::Ready(()))
            })
        }),
        fs_snapshot_restore: Some(Box::new(
            move |_fs, _snap, _all_files, _files: &[String], _restore: &[String]| {
                Ok(Outcome::Ready(()))
            },
        )),
        fs_has_child_dep: Some({
            let st = Rc::clone(&arr);
            Box::new(move |fs: &FileSystem, _files: &[String]| {
                Ok(st.borrow().fs_deps.contains(&fs.id))
            })
        }),
        fs_child_dep_rm: Some({
            let st = Rc::clone(&arr);
            Box::new(move |fs: &FileSystem, _files: &[String]| {
                st.borrow_mut().fs_deps.remove(&fs.id);
                Ok(Outcome::Ready(()))
            })
        }),
    };

    let nfs = NfsCallbacks {
        exports: Some({
            let st = Rc::clone(&arr);
            Box::new(move |_search: Option<(&str, &str)>| {
                Ok(st.borrow().exports.clone())
            })
        }),
        export_auth_types: Some(Box::new(move || {
            Ok(vec!["standard".to_string()])
        })),
        fs_export: Some({
            let st = Rc::clone(&arr);
            Box::new(move |request: &lsm::FsExportRequest| {
                let mut s = st.borrow_mut();
                let id = s.alloc_id("EXP");
                let export_path = match request.export_path {
                    Some(ref p) => p.clone(),
                    None => format!("/exports/{}", request.fs_id),
                };
                let export = NfsExport::new(
                    &id,
                    &request.fs_id,
                    &export_path,
                    request.auth_type.as_ref().map(|s| s.as_str())
                        .unwrap_or("standard"),
                    request.root_list.clone(),
                    request.rw_list.clone(),
                    request.ro_list.clone(),
                    request.anon_uid,
                    request.anon_gid,
                    request.options.as_ref().map(|s| s.as_str())
                        .unwrap_or(""),
                );
                s.exports.push(export.clone());
                Ok(export)
            })
        }),
        fs_unexport: Some({
            let st = Rc::clone(&arr);
            Box::new(move |export: &NfsExport| {
                st.borrow_mut().exports.retain(|e| e.id != export.id);
                Ok(())
            })
        }),
    };

    let cb = PluginCallbacks {
        required,
        san,
        fs: fs_cb,
        nfs,
    };
    Plugin::from_stream(SIM_DESC, SIM_VERSION, cb, so)
}

static SETUP: Once = Once::new();

fn setup() {
    SETUP.call_once(|| {
        let dir =
            env::temp_dir().join(format!("lsm-rust-test-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let sock_path = dir.join("sim");
        let _ = fs::remove_file(&sock_path);
        env::set_var("LSM_UDS_PATH", &dir);
        let listener = UnixListener::bind(&sock_path).unwrap();
        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => {
                        thread::spawn(move || {
                            let mut plugin = new_sim_plugin(stream);
                            let _ = plugin.run();
                        });
                    }
                    Err(_) => break,
                }
            }
        });
    });
}

fn make_connection() -> Client {
    setup();
    Client::new("sim://", None, None).unwrap()
}

fn random_string(prefix: &str) -> String {
    let rand_str: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(5)
        .map(char::from)
        .collect();
    format!("{}{}", prefix, rand_str)
}

fn random_iqn() -> String {
    random_string("iqn.2017-11.com.example:rust-test-")
}

fn get_sys(c: &mut Client) -> System {
    let syss = c.systems().unwrap();
    assert_eq!(1, syss.len());
    syss[0].clone()
}

fn get_pool(c: &mut Client) -> Pool {
    let ps = c.pools(&[]).unwrap();
    (&ps[1]).clone()
}

fn create_vol(c: &mut Client, pool: &Pool, name: &str) -> Volume {
    c.volume_create(
        pool,
        name,
        lsm::size_human_2_size_bytes("1GiB"),
        VolumeProvisioning::Default,
    ).unwrap()
}

#[test]
fn avail_plugins() {
    setup();
    let pis = lsm::available_plugins().unwrap();
    assert!(!pis.is_empty());
    let sim = pis.iter().find(|pi| pi.name == "sim").unwrap();
    assert_eq!(SIM_DESC, sim.description);
    assert_eq!(SIM_VERSION, sim.version);
}

#[test]
fn sys() {
    let mut c = make_connection();
    let syss = c.systems().unwrap();
    assert_eq!(1, syss.len());
    assert_eq!(SIM_SYS_ID, syss[0].id);
    assert!(syss[0].status.contains(SystemStatus::OK));
    let pct = syss[0].read_cache_pct;
    assert!(pct == -2 || pct == -1 || (pct >= 0 && pct <= 100));
    c.close().unwrap();
}

#[test]
fn plugin_info() {
    let mut c = make_connection();
    let pi = c.plugin_info().unwrap();
    assert_eq!(SIM_DESC, pi.description);
    assert_eq!(SIM_VERSION, pi.version);
    assert_eq!("sim", pi.name);
}

#[test]
fn tmo() {
    let mut c = make_connection();
    c.time_out_set(10_000).unwrap();
    assert_eq!(10_000, c.time_out_get().unwrap());
}

#[test]
fn cap() {
    let mut c = make_connection();
    let sys = get_sys(&mut c);
    let cap = c.capabilities(&sys).unwrap();
    assert!(cap.is_supported(Capability::Volumes));
    assert!(cap.is_supported(Capability::DiskVpd83Get));
    assert!(!cap.is_supported(Capability::VolumeRepRange));
    assert!(cap.is_supported_set(&[
        Capability::Volumes,
        Capability::VolumeCreate,
        Capability::VolumeResize,
    ]));
    assert!(!cap.is_supported_set(&[
        Capability::Volumes,
        Capability::VolumeRepRange,
    ]));
}

#[test]
fn pools() {
    let mut c = make_connection();
    let ps = c.pools(&[]).unwrap();
    assert_eq!(4, ps.len());
    for p in &ps {
        assert!(p.free_space <= p.total_space);
        assert!(p.status.contains(PoolStatus::OK));
        assert!(p.element_type.contains(PoolElementType::VOLUME));
    }
    let one = c.pools(&["id", &ps[0].id]).unwrap();
    assert_eq!(1, one.len());
}

#[test]
fn disks() {
    let mut c = make_connection();
    let ds = c.disks().unwrap();
    assert_eq!(6, ds.len());
    for d in &ds {
        assert!(d.status.contains(DiskStatus::FREE));
        assert!(d.vpd83.is_some());
    }
}

#[test]
fn vol() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let name = random_string("vol_");
    let new_vol = create_vol(&mut c, &pool, &name);
    assert_eq!(name, new_vol.name);
    assert_eq!(pool.id, new_vol.pool_id);
    assert!(new_vol.size_bytes() >= lsm::size_human_2_size_bytes("1GiB"));
    assert!(bool::from(new_vol.enabled));

    let new_size = lsm::size_human_2_size_bytes("2GiB");
    let updated_vol = c.volume_resize(&new_vol, new_size).unwrap();
    assert!(updated_vol.size_bytes() >= new_size);

    let dst_vol = c.volume_replicate(
        None,
        VolumeReplicateType::Clone,
        &updated_vol,
        &random_string("vol_rep_dst_"),
    ).unwrap();
    assert_eq!(updated_vol.pool_id, dst_vol.pool_id);

    let sys = get_sys(&mut c);
    assert_eq!(512, c.volume_rep_range_blk_size(&sys).unwrap());

    c.volume_disable(&dst_vol).unwrap();
    c.volume_enable(&dst_vol).unwrap();

    let vols = c.volumes(&[]).unwrap();
    assert!(vols.len() >= 2);

    c.volume_delete(&dst_vol).unwrap();
    c.vol_child_dep_rm(&updated_vol).unwrap();
    c.volume_delete(&updated_vol).unwrap();
}

#[test]
fn vol_async_job_wait() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let name = random_string("job_vol_");
    let outcome = c.volume_create_async(
        &pool,
        &name,
        104_857_600,
        VolumeProvisioning::Default,
    ).unwrap();
    let job_id = match outcome {
        Outcome::Job(ref id) => {
            assert!(!id.is_empty());
            id.clone()
        }
        Outcome::Ready(_) => panic!("expected a job handle"),
    };
    let vol: Volume = c.job_wait(&job_id).unwrap().unwrap();
    assert_eq!(name, vol.name);
    // job_wait() already freed the job.
    match c.job_free(&job_id) {
        Err(LsmError::NotFoundJob(_)) => (),
        other => panic!("expected NotFoundJob, got {:?}", other),
    }
}

#[test]
fn vol_async_job_poll() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let name = random_string("job_vol_");
    let outcome = c.volume_create_async(
        &pool,
        &name,
        104_857_600,
        VolumeProvisioning::Default,
    ).unwrap();
    let job_id = outcome.job_id().unwrap().to_string();

    let mut last_percent = 0u8;
    let vol: Volume = loop {
        let (status, percent, data) =
            c.job_status::<Volume>(&job_id).unwrap();
        assert!(percent >= last_percent);
        last_percent = percent;
        match status {
            JobStatus::InProgress => continue,
            JobStatus::Complete => {
                assert_eq!(100, percent);
                break data.unwrap();
            }
            JobStatus::Error => panic!("sim job should not fail"),
        }
    };
    assert_eq!(name, vol.name);
    c.job_free(&job_id).unwrap();
    match c.job_free(&job_id) {
        Err(LsmError::NotFoundJob(_)) => (),
        other => panic!("expected NotFoundJob, got {:?}", other),
    }

    // Bogus job ids are plugin-side errors, not panics.
    match c.job_status::<Volume>("bogus") {
        Err(LsmError::NotFoundJob(_)) => (),
        other => panic!("expected NotFoundJob, got {:?}", other),
    }
}

#[test]
fn capability_gating() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let vol_a = create_vol(&mut c, &pool, &random_string("vol_"));
    let vol_b = create_vol(&mut c, &pool, &random_string("vol_"));
    let ranges = [
        BlockRange::new(10u64, 50u64, 10u64),
        BlockRange::new(100u64, 150u64, 10u64),
    ];
    match c.volume_replicate_range(
        VolumeReplicateType::Clone,
        &vol_a,
        &vol_b,
        &ranges,
    ) {
        Err(LsmError::NoSupport(_)) => (),
        other => panic!("expected NoSupport, got {:?}", other),
    }
}

#[test]
fn search_arity() {
    let mut c = make_connection();
    match c.volumes(&["only-one-arg"]) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    let pool = get_pool(&mut c);
    let vol = create_vol(&mut c, &pool, &random_string("vol_"));
    let found = c.volumes(&["id", &vol.id]).unwrap();
    assert_eq!(1, found.len());
    assert_eq!(vol.id, found[0].id);
    let all = c.volumes(&["system_id", SIM_SYS_ID]).unwrap();
    assert!(!all.is_empty());
    c.volume_delete(&vol).unwrap();
}

#[test]
fn ag() {
    let mut c = make_connection();
    let sys = get_sys(&mut c);
    let ag = c.access_group_create(
        &random_string("ag_"),
        &random_iqn(),
        lsm::InitiatorType::IscsiIqn,
        &sys,
    ).unwrap();

    let ags = c.access_groups().unwrap();
    assert!(!ags.is_empty());

    let tmp_init = random_iqn();
    let ag = c.access_group_init_add(
        &ag,
        &tmp_init,
        lsm::InitiatorType::IscsiIqn,
    ).unwrap();
    assert_eq!(2, ag.init_ids.len());
    let ag = c.access_group_init_add(
        &ag,
        "0x20:00:00:81:23:45:ac:01",
        lsm::InitiatorType::Wwpn,
    ).unwrap();
    let ag = c.access_group_init_del(
        &ag,
        &tmp_init,
        lsm::InitiatorType::IscsiIqn,
    ).unwrap();
    assert_eq!(2, ag.init_ids.len());
    c.access_group_delete(&ag).unwrap();

    // Initiator strings are validated before any wire traffic.
    match c.access_group_create(
        "bad",
        "not-a-wwpn",
        lsm::InitiatorType::Wwpn,
        &sys,
    ) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    match c.access_group_create(
        "bad",
        "whatever",
        lsm::InitiatorType::Unknown,
        &sys,
    ) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn vol_mask() {
    let mut c = make_connection();
    let sys = get_sys(&mut c);
    let ag = c.access_group_create(
        &random_string("ag_"),
        &random_iqn(),
        lsm::InitiatorType::IscsiIqn,
        &sys,
    ).unwrap();
    let pool = get_pool(&mut c);
    let vol = create_vol(&mut c, &pool, &random_string("vol_"));
    c.volume_mask(&vol, &ag).unwrap();
    let query_vols = c.vols_masked_to_ag(&ag).unwrap();
    assert_eq!(1, query_vols.len());
    let query_ags = c.ags_granted_to_vol(&vol).unwrap();
    assert_eq!(1, query_ags.len());
    // Access group with masked volume cannot be deleted.
    match c.access_group_delete(&ag) {
        Err(LsmError::IsMasked(_)) => (),
        other => panic!("expected IsMasked, got {:?}", other),
    }
    c.volume_unmask(&vol, &ag).unwrap();
    c.volume_delete(&vol).unwrap();
    c.access_group_delete(&ag).unwrap();
}

#[test]
fn vol_child_dep() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let vol = create_vol(&mut c, &pool, &random_string("vol_"));
    let dst_vol = c.volume_replicate(
        None,
        VolumeReplicateType::Clone,
        &vol,
        &random_string("vol_rep_dst_"),
    ).unwrap();
    assert_eq!(true, c.vol_has_child_dep(&vol).unwrap());
    c.vol_child_dep_rm(&vol).unwrap();
    assert_eq!(false, c.vol_has_child_dep(&vol).unwrap());
    c.volume_delete(&vol).unwrap();
    c.volume_delete(&dst_vol).unwrap();
}

#[test]
fn file_system() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let size_1gib = lsm::size_human_2_size_bytes("1GiB");
    let fs = c.fs_create(&pool, &random_string("fs_"), size_1gib).unwrap();
    let fs = c.fs_resize(&fs, size_1gib * 2).unwrap();
    assert!(fs.total_space >= size_1gib * 2);
    let fss = c.fs().unwrap();
    assert!(fss.len() >= 1);

    let snap =
        c.fs_snapshot_create(&fs, &random_string("fs_snap_")).unwrap();
    let snaps = c.fs_snapshots(&fs).unwrap();
    assert_eq!(1, snaps.len());
    assert_eq!(snap.id, snaps[0].id);

    let dst_fs =
        c.fs_clone(&fs, &random_string("fs_clone_dst_"), Some(&snap))
            .unwrap();

    c.fs_file_clone(&fs, "/root/foo", "/root/foe", Some(&snap))
        .unwrap();

    c.fs_snapshot_restore(&fs, &snap, true, &[], &[]).unwrap();
    c.fs_snapshot_delete(&fs, &snap).unwrap();
    assert!(c.fs_snapshots(&fs).unwrap().is_empty());
    c.fs_delete(&dst_fs).unwrap();
    c.fs_delete(&fs).unwrap();
}

#[test]
fn fs_child_dep() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let fs = c.fs_create(
        &pool,
        &random_string("fs_"),
        lsm::size_human_2_size_bytes("1GiB"),
    ).unwrap();
    let dst_fs =
        c.fs_clone(&fs, &random_string("fs_clone_dst_"), None).unwrap();
    assert_eq!(true, c.fs_has_child_dep(&fs, None).unwrap());
    c.fs_child_dep_rm(&fs, None).unwrap();
    assert_eq!(false, c.fs_has_child_dep(&fs, None).unwrap());
    c.fs_delete(&fs).unwrap();
    c.fs_delete(&dst_fs).unwrap();
}

#[test]
fn snapshot_restore_validation() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let fs = c.fs_create(
        &pool,
        &random_string("fs_"),
        lsm::size_human_2_size_bytes("1GiB"),
    ).unwrap();
    let snap =
        c.fs_snapshot_create(&fs, &random_string("fs_snap_")).unwrap();

    match c.fs_snapshot_restore(&fs, &snap, false, &[], &[]) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    match c.fs_snapshot_restore(
        &fs,
        &snap,
        false,
        &["/a", "/b"],
        &["/c"],
    ) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    c.fs_snapshot_restore(&fs, &snap, false, &["/a", "/b"], &["/c", "/d"])
        .unwrap();
    c.fs_snapshot_delete(&fs, &snap).unwrap();
    c.fs_delete(&fs).unwrap();
}

#[test]
fn nfs_export() {
    let mut c = make_connection();
    assert_eq!(
        vec!["standard".to_string()],
        c.nfs_exp_auth_type_list().unwrap()
    );
    let pool = get_pool(&mut c);
    let fs = c.fs_create(
        &pool,
        &random_string("fs_"),
        lsm::size_human_2_size_bytes("1GiB"),
    ).unwrap();

    // No read or write host at all.
    let empty_access = NfsAccess {
        root_list: &[],
        rw_list: &[],
        ro_list: &[],
        anon_uid: None,
        anon_gid: None,
    };
    match c.fs_export(&fs, Some("/x"), &empty_access, None, None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }

    // Same host in both rw and ro.
    let conflicting_access = NfsAccess {
        root_list: &[],
        rw_list: &["h1.example.com"],
        ro_list: &["h1.example.com"],
        anon_uid: None,
        anon_gid: None,
    };
    match c.fs_export(&fs, Some("/x"), &conflicting_access, None, None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }

    // Root host missing from rw and ro.
    let rootless_access = NfsAccess {
        root_list: &["h2.example.com"],
        rw_list: &["h1.example.com"],
        ro_list: &[],
        anon_uid: None,
        anon_gid: None,
    };
    match c.fs_export(&fs, Some("/x"), &rootless_access, None, None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }

    let access = NfsAccess {
        root_list: &["localhost"],
        rw_list: &["abc.com", "localhost"],
        ro_list: &["b.com"],
        anon_uid: None,
        anon_gid: None,
    };
    let exp = c.fs_export(&fs, Some("/sim/export1"), &access, None, None)
        .unwrap();
    assert_eq!("/sim/export1", exp.export_path);
    assert_eq!(NfsExport::ANON_UID_GID_NA, exp.anon_uid);
    let eps = c.nfs_exports(&[]).unwrap();
    assert!(!eps.is_empty());
    c.fs_unexport(&exp).unwrap();
    assert!(c.nfs_exports(&[]).unwrap().is_empty());
    c.fs_delete(&fs).unwrap();
}

#[test]
fn target_ports() {
    let mut c = make_connection();
    let tps = c.target_ports().unwrap();
    assert_eq!(2, tps.len());
    assert_eq!(PortType::Iscsi, tps[0].port_type);
    assert_eq!(PortType::Fc, tps[1].port_type);
}

#[test]
fn batteries() {
    let mut c = make_connection();
    let bs = c.batteries().unwrap();
    assert_eq!(2, bs.len());
    for b in &bs {
        assert!(b.status.contains(BatteryStatus::OK));
    }
    assert_eq!(BatteryType::Chemical, bs[0].battery_type);
    assert_eq!(BatteryType::Capacitor, bs[1].battery_type);
}

#[test]
fn sys_read_cache_pct() {
    let mut c = make_connection();
    let sys = get_sys(&mut c);
    c.sys_read_cache_pct_set(&sys, 99).unwrap();
    let sys = get_sys(&mut c);
    assert_eq!(99, sys.read_cache_pct);
    match c.sys_read_cache_pct_set(&sys, 101) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn iscsi_auth() {
    let mut c = make_connection();
    c.iscsi_chap_auth_set(&random_iqn(), None, None, None, None)
        .unwrap();
}

#[test]
fn vol_raid_info() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let vol = create_vol(&mut c, &pool, &random_string("vol_"));
    let info = c.vol_raid_info(&vol).unwrap();
    assert_eq!(RaidType::Raid1, info.raid_type);
    assert_eq!(2, info.disk_count);
    c.volume_delete(&vol).unwrap();
}

#[test]
fn pool_member_info() {
    let mut c = make_connection();
    let pools = c.pools(&[]).unwrap();
    for pool in pools {
        let pmi = c.pool_member_info(&pool).unwrap();
        assert_eq!(RaidType::Raid0, pmi.raid_type);
        assert_eq!(2, pmi.members.len());
    }
}

#[test]
fn vrc() {
    let mut c = make_connection();
    let sys = get_sys(&mut c);
    let (raid_types, strip_sizes) =
        c.vol_raid_create_cap_get(&sys).unwrap();
    assert!(raid_types.contains(&RaidType::Raid1));
    assert!(!strip_sizes.is_empty());

    let disks = c.disks().unwrap();
    let mut chose_disks: Vec<Disk> = Vec::new();
    for disk in disks {
        if disk.status.contains(DiskStatus::FREE) && chose_disks.len() < 2 {
            chose_disks.push(disk.clone());
        }
    }
    assert_eq!(2, chose_disks.len());
    let vol = c.vol_raid_create(
        &random_string("vrc_"),
        RaidType::Raid1,
        &chose_disks,
        None,
    ).unwrap();
    let info = c.vol_raid_info(&vol).unwrap();
    assert_eq!(RaidType::Raid1, info.raid_type);
    c.volume_delete(&vol).unwrap();
}

#[test]
fn vrc_disk_count_validation() {
    let mut c = make_connection();
    let disks = c.disks().unwrap();

    // RAID 1 needs exactly two disks.
    match c.vol_raid_create("bad", RaidType::Raid1, &disks[..1], None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    match c.vol_raid_create("bad", RaidType::Raid1, &disks[..3], None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    // RAID 5 needs three or more.
    match c.vol_raid_create("bad", RaidType::Raid5, &disks[..2], None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    // RAID 6 needs four or more.
    match c.vol_raid_create("bad", RaidType::Raid6, &disks[..3], None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    // RAID 10 needs an even count of four or more.
    match c.vol_raid_create("bad", RaidType::Raid10, &disks[..5], None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    // Empty disk list is never accepted.
    match c.vol_raid_create("bad", RaidType::Raid0, &[], None) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn vci() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let vol = create_vol(&mut c, &pool, &random_string("vol_"));
    c.vol_phy_disk_cache_set(&vol, CachePolicy::Disabled).unwrap();
    c.vol_write_cache_set(&vol, CachePolicy::Disabled).unwrap();
    c.vol_read_cache_set(&vol, CachePolicy::Disabled).unwrap();
    let info = c.vol_cache_info(&vol).unwrap();
    assert_eq!(CachePolicy::Disabled, info.write_cache_setting);
    assert_eq!(CachePolicy::Disabled, info.write_cache_status);
    assert_eq!(CachePolicy::Disabled, info.read_cache_setting);
    assert_eq!(CachePolicy::Disabled, info.read_cache_status);
    assert_eq!(CachePolicy::Disabled, info.physical_disk_cache_status);

    // Auto is a write cache policy only.
    match c.vol_read_cache_set(&vol, CachePolicy::Auto) {
        Err(LsmError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    c.volume_delete(&vol).unwrap();
}

#[test]
fn ident_led() {
    let mut c = make_connection();
    let pool = get_pool(&mut c);
    let vol = create_vol(&mut c, &pool, &random_string("vol_"));
    c.vol_ident_led_on(&vol).unwrap();
    c.vol_ident_led_off(&vol).unwrap();
    c.volume_delete(&vol).unwrap();
}

#[test]
fn framing() {
    setup();
    let uds_dir = env::var("LSM_UDS_PATH").unwrap();
    let mut so = UnixStream::connect(format!("{}/sim", uds_dir)).unwrap();

    let body =
        r#"{"method": "plugin_info", "id": 100, "params": {"flags": 0}, "flags": 0}"#;
    so.write_all(format!("{:010}{}", body.len(), body).as_bytes())
        .unwrap();
    let reply = read_frame(&mut so);
    assert_eq!(reply["result"][0], SIM_DESC);
    assert_eq!(reply["result"][1], SIM_VERSION);
    assert_eq!(reply["id"], 100);

    // An unparseable request draws a TransportInvalidArg error response and
    // the connection keeps serving.
    let garbage = "certainly not json";
    so.write_all(format!("{:010}{}", garbage.len(), garbage).as_bytes())
        .unwrap();
    let reply = read_frame(&mut so);
    assert_eq!(reply["error"]["code"], 402);

    so.write_all(format!("{:010}{}", body.len(), body).as_bytes())
        .unwrap();
    let reply = read_frame(&mut so);
    assert_eq!(reply["result"][0], SIM_DESC);
}

fn read_frame(so: &mut UnixStream) -> Value {
    let mut hdr = [0u8; 10];
    so.read_exact(&mut hdr).unwrap();
    assert!(hdr.iter().all(|b| b.is_ascii_digit()));
    let body_len: usize =
        str::from_utf8(&hdr).unwrap().parse().unwrap();
    let mut body = vec![0u8; body_len];
    so.read_exact(&mut body).unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[test]
fn wire_boolean() {
    let b: LsmBool = serde_json::from_str("\"1\"").unwrap();
    assert!(b.0);
    let b: LsmBool = serde_json::from_str("\"0\"").unwrap();
    assert!(!b.0);
    // Anything else decodes to false.
    let b: LsmBool = serde_json::from_str("1").unwrap();
    assert!(!b.0);
    let b: LsmBool = serde_json::from_str("true").unwrap();
    assert!(!b.0);
    let b: LsmBool = serde_json::from_str("\"yes\"").unwrap();
    assert!(!b.0);

    assert_eq!("\"1\"", serde_json::to_string(&LsmBool(true)).unwrap());
    assert_eq!("\"0\"", serde_json::to_string(&LsmBool(false)).unwrap());
}

#[test]
fn volume_round_trip() {
    let vol = Volume::new(
        "VOL_1",
        "vol1",
        true,
        512,
        2048,
        "600140512345678",
        SIM_SYS_ID,
        "POOL_1",
    );
    let val = serde_json::to_value(&vol).unwrap();
    assert_eq!(val["class"], "Volume");
    assert_eq!(val["admin_state"], "1");
    let back: Volume = serde_json::from_value(val).unwrap();
    assert_eq!(vol.id, back.id);
    assert_eq!(vol.name, back.name);
    assert_eq!(vol.block_size, back.block_size);
    assert_eq!(vol.num_of_blocks, back.num_of_blocks);
    assert_eq!(vol.vpd83, back.vpd83);
    assert_eq!(vol.system_id, back.system_id);
    assert_eq!(vol.pool_id, back.pool_id);
    assert_eq!(vol.enabled, back.enabled);

    let vol = Volume::new("VOL_2", "vol2", false, 512, 2048, "", SIM_SYS_ID,
                          "POOL_1");
    let val = serde_json::to_value(&vol).unwrap();
    assert_eq!(val["admin_state"], "0");
    let back: Volume = serde_json::from_value(val).unwrap();
    assert!(!bool::from(back.enabled));
}

#[test]
fn block_range_round_trip() {
    let range = BlockRange::new(10, 50, 10);
    let val = serde_json::to_value(&range).unwrap();
    assert_eq!(val["class"], "BlockRange");
    assert_eq!(val["src_blk_addr"], 10);
    assert_eq!(val["dst_blk_addr"], 50);
    assert_eq!(val["blk_count"], 10);
    let back: BlockRange = serde_json::from_value(val).unwrap();
    assert_eq!(range, back);
    assert_eq!(10, back.src_blk_addr());
    assert_eq!(50, back.dst_blk_addr());
    assert_eq!(10, back.blk_count());
}

#[test]
fn bitfield_unknown_bits() {
    // Bits this version does not know about survive a round-trip.
    let raw = SystemStatus::OK.bits() | SystemStatus::DEGRADED.bits()
        | (1u32 << 30);
    let status: SystemStatus =
        serde_json::from_value(Value::from(raw)).unwrap();
    assert!(status.contains(SystemStatus::OK));
    assert!(status.contains(SystemStatus::DEGRADED));
    assert!(!status.contains(SystemStatus::ERROR));
    assert!(status.any_of(SystemStatus::OK | SystemStatus::ERROR));
    assert!(!status.any_of(SystemStatus::ERROR | SystemStatus::OTHER));
    assert!(status.all_of(SystemStatus::OK | SystemStatus::DEGRADED));
    assert!(!status.all_of(SystemStatus::OK | SystemStatus::ERROR));
    assert_eq!(raw, status.bits());
    assert_eq!(
        Value::from(raw),
        serde_json::to_value(status).unwrap()
    );
}

#[test]
fn capabilities_packing() {
    let cap = Capabilities::with_supported(&[
        Capability::Volumes,
        Capability::VolumeCreate,
    ]);
    assert!(cap.is_supported(Capability::Volumes));
    assert!(cap.is_supported(Capability::VolumeCreate));
    assert!(!cap.is_supported(Capability::DiskVpd83Get));
    assert!(cap.is_supported_set(&[
        Capability::Volumes,
        Capability::VolumeCreate,
    ]));
    assert!(!cap.is_supported_set(&[
        Capability::Volumes,
        Capability::Fs,
    ]));
    assert!(!cap.is_supported_set(&[]));
}

#[test]
fn test_size_human() {
    assert_eq!(lsm::size_human_2_size_bytes("1.9GB"), 1_900_000_000u64);
    assert_eq!(lsm::size_human_2_size_bytes("1KiB"), 1024u64);
    assert_eq!(lsm::size_human_2_size_bytes("1 KiB"), 1024u64);
    assert_eq!(lsm::size_human_2_size_bytes("1 B"), 1u64);
    assert_eq!(lsm::size_human_2_size_bytes("2 K"), 2048u64);
    assert_eq!(lsm::size_human_2_size_bytes("2 k"), 2048u64);
    assert_eq!(lsm::size_human_2_size_bytes("2 KB"), 2000u64);
    assert_eq!(lsm::size_bytes_2_size_human(2 * 1024 * 1024 * 1024),
               "2.00GiB");
}
