//! Filesystem operations split into focused modules.

mod browse;
mod upload;
