// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod query;
pub mod render;
pub mod sinks;

#[cfg(test)]
pub mod test_utils;
