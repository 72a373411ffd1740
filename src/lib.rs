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

//! # `LibStorageMgmt`
//!
//! `LibStorageMgmt` provides a set of API for programmatically managing
//! storage hardware in a vendor neutral way supporting these actions:
//!
//!  * List storage pools, volumes, access groups, or file systems.
//!
//!  * Create and delete volumes, access groups, file systems, or NFS
//!    exports.
//!
//!  * Grant and remove access to volumes, access groups, or initiators.
//!
//!  * Replicate volumes with snapshots, clones, and copies.
//!
//! This crate covers both halves of the plugin IPC protocol: the client side
//! used by administrative applications ([`Client`][2]) and the plugin
//! runtime used by back-end implementations ([`Plugin`][4]).
//!
//! To use the client side, you need:
//!
//!  * Start the libstoragemgmt daemon(`lsmd`)
//!
//!  * Choose a URI after reading the [`LibStorageMgmt` user guide][1]
//!
//!  * Make a connection to plugin via [`Client`][2].
//!
//!  * Check whether a required [`Capability`][3] is supported.
//!
//!  * Invoke the required method of [`Client`][2].
//!
//! # Example code using simulator plugin
//!
//! ```rust,no_run
//! use lsm::{Client, Capability, LsmError};
//!
//! fn main() {
//!     let mut c: Client = match Client::new("sim://", None, None) {
//!         Ok(i) => i,
//!         Err(LsmError::DaemonNotRunning(_)) => {
//!             panic!("Please start the libstoragemgmt daemon")
//!         }
//!         Err(e) => panic!("{}", e),
//!     };
//!     let syss = c.systems().unwrap();
//!     for s in syss {
//!         let cap = c.capabilities(&s).unwrap();
//!         if cap.is_supported(Capability::Volumes) {
//!             for vol in c.volumes(&[]).unwrap() {
//!                 println!("Got volume: {} {}", vol.name, vol.id);
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! For the plugin side, see the [`plugin` module][4] documentation.
//!
//! Set the environment variable `LSM_RUST_DEBUG` to any non-empty string to
//! dump every framed IPC message to stderr.
//!
//! [1]: https://libstorage.github.io/libstoragemgmt-doc/doc/user_guide.html
//! [2]: struct.Client.html
//! [3]: enum.Capability.html
//! [4]: plugin/index.html

pub use self::client::{available_plugins, Client, PluginInfo};
pub use self::data::*;
pub use self::error::{LsmError, Result};
pub use self::misc::{size_bytes_2_size_human, size_human_2_size_bytes};
pub use self::plugin::{
    FsCallbacks, FsExportRequest, NfsCallbacks, Plugin, PluginCallbacks,
    RequiredCallbacks, SanCallbacks,
};

mod client;
mod data;
mod error;
mod ipc;
mod misc;
pub mod plugin;
